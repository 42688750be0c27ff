//! Reference criteria for cultural exhibitions, aligned with the ADEME /
//! ISO 14001 / ISO 26000 evaluation grid. Prompts are kept in French, the
//! working language of the questionnaire.

use super::{
    CategoryDefinition, CriterionDefinition, CriterionKind, ImpactLevel, SubcategoryDefinition,
};

const NUMERIC_MIN: Option<f64> = Some(0.0);
const NUMERIC_MAX: Option<f64> = Some(1_000_000.0);

const fn numeric() -> CriterionKind {
    CriterionKind::Numeric {
        min: NUMERIC_MIN,
        max: NUMERIC_MAX,
    }
}

const fn scale_10(labels: &'static [(i64, &'static str)]) -> CriterionKind {
    CriterionKind::Scale {
        min: 1,
        max: 10,
        labels,
    }
}

const fn scale_5(labels: &'static [(i64, &'static str)]) -> CriterionKind {
    CriterionKind::Scale {
        min: 1,
        max: 5,
        labels,
    }
}

pub(super) fn standard_categories() -> Vec<CategoryDefinition> {
    vec![
        CategoryDefinition {
            id: "impacts_environnementaux_directs",
            title: "1. Impacts Environnementaux Directs",
            description: "Évaluation des impacts directs de l'exposition sur l'environnement",
            weight: 0.30,
            subcategories: vec![
                SubcategoryDefinition {
                    id: "materiaux_ressources",
                    title: "Matériaux et Ressources",
                    criteria: vec![
                        CriterionDefinition {
                            id: "empreinte_carbone_materiaux",
                            prompt: "Quelle est l'empreinte carbone estimée des matériaux utilisés ?",
                            kind: numeric(),
                            unit: Some("kg CO₂eq"),
                            help: Some(
                                "Inclure extraction, transformation et transport des matériaux",
                            ),
                            required: true,
                            impact: ImpactLevel::High,
                        },
                        CriterionDefinition {
                            id: "consommation_eau_production",
                            prompt: "Consommation d'eau lors de la production des matériaux",
                            kind: numeric(),
                            unit: Some("litres"),
                            help: None,
                            required: false,
                            impact: ImpactLevel::Medium,
                        },
                        CriterionDefinition {
                            id: "materiaux_recycles",
                            prompt: "Pourcentage de matériaux recyclés utilisés",
                            kind: CriterionKind::Percentage,
                            unit: None,
                            help: Some("% de matériaux issus du recyclage"),
                            required: true,
                            impact: ImpactLevel::High,
                        },
                        CriterionDefinition {
                            id: "materiaux_biosources",
                            prompt: "Pourcentage de matériaux biosourcés",
                            kind: CriterionKind::Percentage,
                            unit: None,
                            help: None,
                            required: false,
                            impact: ImpactLevel::Medium,
                        },
                        CriterionDefinition {
                            id: "toxicite_materiaux",
                            prompt: "Les matériaux utilisés présentent-ils une toxicité (COV, formaldéhyde, métaux lourds) ?",
                            kind: CriterionKind::SingleChoice {
                                options: &[
                                    "Aucune toxicité",
                                    "Toxicité faible",
                                    "Toxicité modérée",
                                    "Toxicité élevée",
                                ],
                            },
                            unit: None,
                            help: None,
                            required: true,
                            impact: ImpactLevel::High,
                        },
                        CriterionDefinition {
                            id: "reutilisation_apres_exposition",
                            prompt: "Capacité de réutilisation des matériaux après exposition",
                            kind: scale_10(&[(1, "Aucune réutilisation"), (10, "Réutilisation totale")]),
                            unit: None,
                            help: None,
                            required: true,
                            impact: ImpactLevel::High,
                        },
                    ],
                },
                SubcategoryDefinition {
                    id: "energie_climat",
                    title: "Énergie et Climat",
                    criteria: vec![
                        CriterionDefinition {
                            id: "consommation_eclairage",
                            prompt: "Consommation énergétique pour l'éclairage",
                            kind: numeric(),
                            unit: Some("kWh"),
                            help: None,
                            required: true,
                            impact: ImpactLevel::High,
                        },
                        CriterionDefinition {
                            id: "consommation_climatisation",
                            prompt: "Consommation énergétique pour climatisation/chauffage",
                            kind: numeric(),
                            unit: Some("kWh"),
                            help: None,
                            required: true,
                            impact: ImpactLevel::High,
                        },
                        CriterionDefinition {
                            id: "energies_renouvelables",
                            prompt: "Pourcentage d'énergies renouvelables utilisées",
                            kind: CriterionKind::Percentage,
                            unit: None,
                            help: None,
                            required: true,
                            impact: ImpactLevel::High,
                        },
                        CriterionDefinition {
                            id: "efficacite_energetique",
                            prompt: "Niveau d'efficacité énergétique des équipements",
                            kind: CriterionKind::SingleChoice {
                                options: &[
                                    "Classe A+++",
                                    "Classe A++",
                                    "Classe A+",
                                    "Classe A",
                                    "Classe B ou inférieure",
                                ],
                            },
                            unit: None,
                            help: None,
                            required: false,
                            impact: ImpactLevel::Medium,
                        },
                    ],
                },
                SubcategoryDefinition {
                    id: "transport_logistique",
                    title: "Transport et Logistique",
                    criteria: vec![
                        CriterionDefinition {
                            id: "distance_transport_materiaux",
                            prompt: "Distance moyenne de transport des matériaux",
                            kind: numeric(),
                            unit: Some("km"),
                            help: None,
                            required: true,
                            impact: ImpactLevel::High,
                        },
                        CriterionDefinition {
                            id: "mode_transport",
                            prompt: "Principal mode de transport utilisé",
                            kind: CriterionKind::SingleChoice {
                                options: &[
                                    "Train",
                                    "Camion",
                                    "Bateau",
                                    "Avion",
                                    "Transport multimodal",
                                ],
                            },
                            unit: None,
                            help: None,
                            required: true,
                            impact: ImpactLevel::High,
                        },
                        CriterionDefinition {
                            id: "optimisation_livraisons",
                            prompt: "Niveau d'optimisation des livraisons",
                            kind: scale_5(&[(1, "Aucune optimisation"), (5, "Optimisation maximale")]),
                            unit: None,
                            help: None,
                            required: false,
                            impact: ImpactLevel::Medium,
                        },
                    ],
                },
                SubcategoryDefinition {
                    id: "dechets_pollution",
                    title: "Déchets et Pollution",
                    criteria: vec![
                        CriterionDefinition {
                            id: "volume_dechets_construction",
                            prompt: "Volume de déchets générés pendant la construction",
                            kind: numeric(),
                            unit: Some("kg"),
                            help: None,
                            required: true,
                            impact: ImpactLevel::High,
                        },
                        CriterionDefinition {
                            id: "taux_recyclage",
                            prompt: "Taux de recyclage des déchets d'exposition",
                            kind: CriterionKind::Percentage,
                            unit: None,
                            help: None,
                            required: true,
                            impact: ImpactLevel::High,
                        },
                        CriterionDefinition {
                            id: "dechets_dangereux",
                            prompt: "Production de déchets dangereux ou toxiques",
                            kind: CriterionKind::Boolean,
                            unit: None,
                            help: None,
                            required: true,
                            impact: ImpactLevel::High,
                        },
                        CriterionDefinition {
                            id: "pollution_air_interieur",
                            prompt: "Mesures prises contre la pollution de l'air intérieur",
                            kind: CriterionKind::SingleChoice {
                                options: &[
                                    "Aucune mesure",
                                    "Ventilation basique",
                                    "Filtration avancée",
                                    "Matériaux faibles émissions",
                                    "Contrôle complet COV",
                                ],
                            },
                            unit: None,
                            help: None,
                            required: false,
                            impact: ImpactLevel::Medium,
                        },
                    ],
                },
            ],
        },
        CategoryDefinition {
            id: "impacts_environnementaux_indirects",
            title: "2. Impacts Environnementaux Indirects",
            description: "Évaluation des impacts indirects et du cycle de vie",
            weight: 0.15,
            subcategories: vec![
                SubcategoryDefinition {
                    id: "cycle_de_vie",
                    title: "Cycle de Vie",
                    criteria: vec![
                        CriterionDefinition {
                            id: "fin_de_vie_materiaux",
                            prompt: "Impact de la fin de vie des matériaux",
                            kind: CriterionKind::SingleChoice {
                                options: &[
                                    "Réutilisation totale",
                                    "Recyclage majoritaire",
                                    "Incinération valorisation",
                                    "Enfouissement partiel",
                                    "Enfouissement total",
                                ],
                            },
                            unit: None,
                            help: None,
                            required: true,
                            impact: ImpactLevel::High,
                        },
                        CriterionDefinition {
                            id: "circularite",
                            prompt: "Potentiel de circularité des éléments d'exposition",
                            kind: scale_10(&[(1, "Linéaire"), (10, "Totalement circulaire")]),
                            unit: None,
                            help: None,
                            required: true,
                            impact: ImpactLevel::Medium,
                        },
                    ],
                },
                SubcategoryDefinition {
                    id: "effets_systemiques",
                    title: "Effets Systémiques",
                    criteria: vec![CriterionDefinition {
                        id: "ilot_chaleur_urbain",
                        prompt: "Contribution à l'îlot de chaleur urbain",
                        kind: scale_5(&[(1, "Aucune contribution"), (5, "Contribution majeure")]),
                        unit: None,
                        help: None,
                        required: false,
                        impact: ImpactLevel::Low,
                    }],
                },
            ],
        },
        CategoryDefinition {
            id: "impacts_eco_sociaux",
            title: "3. Impacts Éco-Sociaux",
            description: "Évaluation de la justice sociale, équité et impact local",
            weight: 0.30,
            subcategories: vec![
                SubcategoryDefinition {
                    id: "justice_sociale",
                    title: "Justice Sociale et Équité",
                    criteria: vec![
                        CriterionDefinition {
                            id: "conditions_travail",
                            prompt: "Évaluation des conditions de travail dans la chaîne d'approvisionnement",
                            kind: scale_10(&[(1, "Conditions précaires"), (10, "Conditions excellentes")]),
                            unit: None,
                            help: None,
                            required: true,
                            impact: ImpactLevel::High,
                        },
                        CriterionDefinition {
                            id: "respect_droits_humains",
                            prompt: "Respect des droits humains (travail des enfants, sécurité)",
                            kind: CriterionKind::Boolean,
                            unit: None,
                            help: None,
                            required: true,
                            impact: ImpactLevel::High,
                        },
                        CriterionDefinition {
                            id: "egalite_homme_femme",
                            prompt: "Égalité homme-femme dans les métiers sollicités",
                            kind: scale_10(&[]),
                            unit: None,
                            help: None,
                            required: false,
                            impact: ImpactLevel::Medium,
                        },
                        CriterionDefinition {
                            id: "accessibilite_mobilite_reduite",
                            prompt: "Accessibilité aux personnes à mobilité réduite",
                            kind: CriterionKind::SingleChoice {
                                options: &[
                                    "Non accessible",
                                    "Partiellement accessible",
                                    "Accessible avec aide",
                                    "Totalement accessible",
                                ],
                            },
                            unit: None,
                            help: None,
                            required: true,
                            impact: ImpactLevel::High,
                        },
                        CriterionDefinition {
                            id: "accessibilite_economique",
                            prompt: "Tarification d'entrée",
                            kind: CriterionKind::SingleChoice {
                                options: &[
                                    "Gratuit",
                                    "Tarif social disponible",
                                    "Prix modéré",
                                    "Prix élevé",
                                ],
                            },
                            unit: None,
                            help: None,
                            required: true,
                            impact: ImpactLevel::Medium,
                        },
                    ],
                },
                SubcategoryDefinition {
                    id: "economie_locale",
                    title: "Économie Locale et Territoriale",
                    criteria: vec![
                        CriterionDefinition {
                            id: "approvisionnement_local",
                            prompt: "Pourcentage d'approvisionnement local (< 200 km)",
                            kind: CriterionKind::Percentage,
                            unit: None,
                            help: None,
                            required: true,
                            impact: ImpactLevel::High,
                        },
                        CriterionDefinition {
                            id: "emplois_locaux",
                            prompt: "Création d'emplois locaux",
                            kind: numeric(),
                            unit: Some("nombre d'emplois"),
                            help: None,
                            required: false,
                            impact: ImpactLevel::Medium,
                        },
                        CriterionDefinition {
                            id: "transfert_competences",
                            prompt: "Transfert de compétences vers les acteurs locaux",
                            kind: CriterionKind::Boolean,
                            unit: None,
                            help: None,
                            required: false,
                            impact: ImpactLevel::Medium,
                        },
                    ],
                },
                SubcategoryDefinition {
                    id: "education_sensibilisation",
                    title: "Éducation et Sensibilisation",
                    criteria: vec![
                        CriterionDefinition {
                            id: "dimension_pedagogique",
                            prompt: "Dimension pédagogique sur les enjeux environnementaux",
                            kind: scale_10(&[(1, "Aucune dimension"), (10, "Très développée")]),
                            unit: None,
                            help: None,
                            required: true,
                            impact: ImpactLevel::Medium,
                        },
                        CriterionDefinition {
                            id: "formation_equipes",
                            prompt: "Formation des équipes aux enjeux durables",
                            kind: CriterionKind::Boolean,
                            unit: None,
                            help: None,
                            required: false,
                            impact: ImpactLevel::Low,
                        },
                    ],
                },
            ],
        },
        CategoryDefinition {
            id: "impacts_temporels_contextuels",
            title: "4. Impacts Temporels et Contextuels",
            description: "Évaluation de la durée, gouvernance et transparence",
            weight: 0.15,
            subcategories: vec![
                SubcategoryDefinition {
                    id: "duree_intensite",
                    title: "Durée et Intensité",
                    criteria: vec![
                        CriterionDefinition {
                            id: "duree_exposition",
                            prompt: "Durée totale de l'exposition",
                            kind: numeric(),
                            unit: Some("jours"),
                            help: None,
                            required: true,
                            impact: ImpactLevel::Medium,
                        },
                        CriterionDefinition {
                            id: "nombre_visiteurs",
                            prompt: "Nombre estimé de visiteurs",
                            kind: numeric(),
                            unit: Some("visiteurs"),
                            help: None,
                            required: true,
                            impact: ImpactLevel::Medium,
                        },
                        CriterionDefinition {
                            id: "reversibilite",
                            prompt: "Réversibilité des aménagements",
                            kind: scale_10(&[(1, "Irréversible"), (10, "Totalement réversible")]),
                            unit: None,
                            help: None,
                            required: true,
                            impact: ImpactLevel::Medium,
                        },
                    ],
                },
                SubcategoryDefinition {
                    id: "gouvernance_transparence",
                    title: "Gouvernance et Transparence",
                    criteria: vec![
                        CriterionDefinition {
                            id: "tracabilite_materiaux",
                            prompt: "Traçabilité de l'origine des matériaux",
                            kind: scale_10(&[(1, "Aucune traçabilité"), (10, "Traçabilité complète")]),
                            unit: None,
                            help: None,
                            required: true,
                            impact: ImpactLevel::Medium,
                        },
                        CriterionDefinition {
                            id: "certifications_fournisseurs",
                            prompt: "Certifications environnementales des fournisseurs",
                            kind: CriterionKind::SingleChoice {
                                options: &[
                                    "Aucune",
                                    "ISO 14001",
                                    "Labels sectoriels",
                                    "Multiples certifications",
                                ],
                            },
                            unit: None,
                            help: None,
                            required: false,
                            impact: ImpactLevel::Medium,
                        },
                        CriterionDefinition {
                            id: "transparence_couts",
                            prompt: "Transparence sur les coûts environnementaux",
                            kind: CriterionKind::Boolean,
                            unit: None,
                            help: None,
                            required: false,
                            impact: ImpactLevel::Low,
                        },
                    ],
                },
            ],
        },
        CategoryDefinition {
            id: "criteres_transversaux",
            title: "5. Critères Transversaux",
            description: "Innovation, mesure et exemplarité",
            weight: 0.10,
            subcategories: vec![
                SubcategoryDefinition {
                    id: "mesure_quantification",
                    title: "Mesure et Quantification",
                    criteria: vec![
                        CriterionDefinition {
                            id: "methode_acv",
                            prompt: "Utilisation de méthodes d'Analyse de Cycle de Vie (ACV)",
                            kind: CriterionKind::Boolean,
                            unit: None,
                            help: None,
                            required: false,
                            impact: ImpactLevel::Medium,
                        },
                        CriterionDefinition {
                            id: "objectifs_chiffres",
                            prompt: "Définition d'objectifs chiffrés de réduction d'impact",
                            kind: CriterionKind::Boolean,
                            unit: None,
                            help: None,
                            required: false,
                            impact: ImpactLevel::Medium,
                        },
                        CriterionDefinition {
                            id: "systeme_compensation",
                            prompt: "Mise en place d'un système de compensation carbone",
                            kind: CriterionKind::Boolean,
                            unit: None,
                            help: None,
                            required: false,
                            impact: ImpactLevel::Low,
                        },
                    ],
                },
                SubcategoryDefinition {
                    id: "innovation_exemplarite",
                    title: "Innovation et Exemplarité",
                    criteria: vec![
                        CriterionDefinition {
                            id: "materiaux_innovants",
                            prompt: "Utilisation de matériaux innovants éco-responsables",
                            kind: CriterionKind::Boolean,
                            unit: None,
                            help: None,
                            required: false,
                            impact: ImpactLevel::Medium,
                        },
                        CriterionDefinition {
                            id: "potentiel_replication",
                            prompt: "Potentiel de réplication du modèle",
                            kind: scale_10(&[(1, "Non réplicable"), (10, "Facilement réplicable")]),
                            unit: None,
                            help: None,
                            required: false,
                            impact: ImpactLevel::Medium,
                        },
                        CriterionDefinition {
                            id: "partage_retours_experience",
                            prompt: "Partage public des retours d'expérience et des mesures d'impact",
                            kind: CriterionKind::FreeText {
                                max_length: 1000,
                                min_length: None,
                            },
                            unit: None,
                            help: Some("Canaux de diffusion, publications, bilans partagés"),
                            required: false,
                            impact: ImpactLevel::Low,
                        },
                    ],
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::super::CriteriaCatalog;

    #[test]
    fn standard_catalog_constructs() {
        let catalog = CriteriaCatalog::standard().expect("reference catalog is coherent");
        assert_eq!(catalog.categories().len(), 5);
        assert!(catalog.question_count() > 40);
    }

    #[test]
    fn standard_weights_sum_to_one() {
        let catalog = CriteriaCatalog::standard().expect("reference catalog is coherent");
        let total: f64 = catalog
            .categories()
            .iter()
            .map(|category| category.weight)
            .sum();
        assert!((total - 1.0).abs() < super::super::WEIGHT_TOLERANCE);
    }

    #[test]
    fn questions_group_by_subcategory_in_order() {
        let catalog = CriteriaCatalog::standard().expect("reference catalog is coherent");
        let groups = catalog
            .questions("impacts_eco_sociaux")
            .expect("known category");
        let ids: Vec<&str> = groups.iter().map(|(id, _)| *id).collect();
        assert_eq!(
            ids,
            vec![
                "justice_sociale",
                "economie_locale",
                "education_sensibilisation"
            ]
        );
        assert!(catalog.questions("inconnue").is_none());
    }
}
