use chrono::NaiveDate;

use crate::assessment::catalog::{
    CategoryDefinition, CriteriaCatalog, CriterionDefinition, CriterionKind, ImpactLevel,
    SubcategoryDefinition,
};
use crate::assessment::{
    AnswerSubmission, Evaluation, ExhibitionMetadata, ExhibitionType, RawValue,
};

pub(super) fn metadata() -> ExhibitionMetadata {
    ExhibitionMetadata {
        name: "Art Contemporain 2026".to_string(),
        venue: "Musée d'Art Moderne".to_string(),
        city: Some("Paris".to_string()),
        country: "France".to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid date"),
        end_date: Some(NaiveDate::from_ymd_opt(2026, 9, 15).expect("valid date")),
        exhibition_type: ExhibitionType::TemporaryExhibition,
        surface_area: Some(850.0),
        estimated_visitors: Some(40_000),
        budget: Some(250_000.0),
        organizer: Some("Déjà Vu".to_string()),
    }
}

pub(super) fn standard_catalog() -> CriteriaCatalog {
    CriteriaCatalog::standard().expect("reference catalog is coherent")
}

/// Small two-category catalog with round numbers so percentage assertions
/// stay exact: six criteria in the first category, two in the second.
pub(super) fn compact_catalog() -> CriteriaCatalog {
    let scenographie = CategoryDefinition {
        id: "scenographie",
        title: "Scénographie",
        description: "Matériaux et mise en œuvre",
        weight: 0.6,
        subcategories: vec![SubcategoryDefinition {
            id: "materiaux",
            title: "Matériaux",
            criteria: vec![
                CriterionDefinition {
                    id: "empreinte_carbone",
                    prompt: "Empreinte carbone des matériaux",
                    kind: CriterionKind::Numeric {
                        min: Some(0.0),
                        max: Some(1_000_000.0),
                    },
                    unit: Some("kg CO₂eq"),
                    help: None,
                    required: true,
                    impact: ImpactLevel::High,
                },
                CriterionDefinition {
                    id: "part_recyclee",
                    prompt: "Part de matériaux recyclés",
                    kind: CriterionKind::Percentage,
                    unit: None,
                    help: None,
                    required: true,
                    impact: ImpactLevel::High,
                },
                CriterionDefinition {
                    id: "mode_transport",
                    prompt: "Principal mode de transport utilisé",
                    kind: CriterionKind::SingleChoice {
                        options: &["Train", "Camion", "Bateau", "Avion", "Transport multimodal"],
                    },
                    unit: None,
                    help: None,
                    required: true,
                    impact: ImpactLevel::High,
                },
                CriterionDefinition {
                    id: "dechets_dangereux",
                    prompt: "Production de déchets dangereux",
                    kind: CriterionKind::Boolean,
                    unit: None,
                    help: None,
                    required: false,
                    impact: ImpactLevel::High,
                },
                CriterionDefinition {
                    id: "reutilisation",
                    prompt: "Capacité de réutilisation après exposition",
                    kind: CriterionKind::Scale {
                        min: 1,
                        max: 10,
                        labels: &[(1, "Aucune"), (10, "Totale")],
                    },
                    unit: None,
                    help: None,
                    required: false,
                    impact: ImpactLevel::Medium,
                },
                CriterionDefinition {
                    id: "notes_demontage",
                    prompt: "Notes sur le démontage",
                    kind: CriterionKind::FreeText {
                        max_length: 200,
                        min_length: None,
                    },
                    unit: None,
                    help: None,
                    required: false,
                    impact: ImpactLevel::Low,
                },
            ],
        }],
    };

    let mediation = CategoryDefinition {
        id: "mediation",
        title: "Médiation",
        description: "Publics et sensibilisation",
        weight: 0.4,
        subcategories: vec![SubcategoryDefinition {
            id: "publics",
            title: "Publics",
            criteria: vec![
                CriterionDefinition {
                    id: "dimension_pedagogique",
                    prompt: "Dimension pédagogique",
                    kind: CriterionKind::Scale {
                        min: 1,
                        max: 10,
                        labels: &[],
                    },
                    unit: None,
                    help: None,
                    required: true,
                    impact: ImpactLevel::Medium,
                },
                CriterionDefinition {
                    id: "gratuite",
                    prompt: "Entrée gratuite",
                    kind: CriterionKind::Boolean,
                    unit: None,
                    help: None,
                    required: false,
                    impact: ImpactLevel::Low,
                },
            ],
        }],
    };

    CriteriaCatalog::from_categories(vec![scenographie, mediation])
        .expect("compact catalog is coherent")
}

pub(super) fn draft_evaluation(catalog: &CriteriaCatalog) -> Evaluation {
    Evaluation::new(catalog, metadata()).expect("metadata is valid")
}

pub(super) fn answer(raw: RawValue) -> AnswerSubmission {
    AnswerSubmission::of(raw)
}

/// A valid sample value for any criterion kind.
pub(super) fn sample_raw(kind: &CriterionKind) -> RawValue {
    match kind {
        CriterionKind::Numeric { .. } => RawValue::Number(120.0),
        CriterionKind::Percentage => RawValue::Number(50.0),
        CriterionKind::Boolean => RawValue::Boolean(true),
        CriterionKind::SingleChoice { options } => RawValue::Text(options[0].to_string()),
        CriterionKind::Scale { min, .. } => RawValue::Number(*min as f64),
        CriterionKind::FreeText { .. } => RawValue::Text("RAS".to_string()),
    }
}

/// Record a valid answer for every question in the catalog.
pub(super) fn answer_everything(catalog: &CriteriaCatalog, evaluation: &mut Evaluation) {
    for category in catalog.categories() {
        for subcategory in &category.subcategories {
            for criterion in &subcategory.criteria {
                evaluation
                    .record_answer(
                        catalog,
                        category.id,
                        subcategory.id,
                        criterion.id,
                        answer(sample_raw(&criterion.kind)),
                    )
                    .expect("sample answer is valid");
            }
        }
    }
}
