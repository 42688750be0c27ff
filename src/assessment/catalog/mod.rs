//! Static criteria catalog: five weighted categories of typed questions.
//!
//! The catalog is immutable reference data built once at startup. Category
//! weights must sum to 1.0; a catalog that fails that check never
//! constructs, so every running service holds a coherent weighting.

mod criteria;

use serde::Serialize;

/// Tolerance applied to the category weight-sum invariant.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Qualitative weight attached to a criterion, informing future scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    High,
    Medium,
    Low,
}

impl ImpactLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Question type together with its type-specific constraints. Validation
/// and value conversion both dispatch on this closed set, so adding a type
/// forces every match to be revisited.
#[derive(Debug, Clone, PartialEq)]
pub enum CriterionKind {
    Numeric {
        min: Option<f64>,
        max: Option<f64>,
    },
    Percentage,
    Boolean,
    SingleChoice {
        options: &'static [&'static str],
    },
    Scale {
        min: i64,
        max: i64,
        labels: &'static [(i64, &'static str)],
    },
    FreeText {
        max_length: usize,
        min_length: Option<usize>,
    },
}

impl CriterionKind {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Numeric { .. } => "numeric",
            Self::Percentage => "percentage",
            Self::Boolean => "boolean",
            Self::SingleChoice { .. } => "single_choice",
            Self::Scale { .. } => "scale",
            Self::FreeText { .. } => "free_text",
        }
    }
}

/// Immutable descriptor of one evaluable question.
#[derive(Debug, Clone)]
pub struct CriterionDefinition {
    pub id: &'static str,
    pub prompt: &'static str,
    pub kind: CriterionKind,
    pub unit: Option<&'static str>,
    pub help: Option<&'static str>,
    pub required: bool,
    pub impact: ImpactLevel,
}

/// Grouping of criteria under a category.
#[derive(Debug, Clone)]
pub struct SubcategoryDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub criteria: Vec<CriterionDefinition>,
}

impl SubcategoryDefinition {
    pub fn criterion(&self, id: &str) -> Option<&CriterionDefinition> {
        self.criteria.iter().find(|criterion| criterion.id == id)
    }
}

/// Top-level category with its relative weight in the global score.
#[derive(Debug, Clone)]
pub struct CategoryDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub weight: f64,
    pub subcategories: Vec<SubcategoryDefinition>,
}

impl CategoryDefinition {
    pub fn subcategory(&self, id: &str) -> Option<&SubcategoryDefinition> {
        self.subcategories
            .iter()
            .find(|subcategory| subcategory.id == id)
    }

    /// Required criteria of this category as `(subcategory_id, criterion)`
    /// pairs, in catalog order.
    pub fn required_criteria(&self) -> impl Iterator<Item = (&'static str, &CriterionDefinition)> {
        self.subcategories.iter().flat_map(|subcategory| {
            subcategory
                .criteria
                .iter()
                .filter(|criterion| criterion.required)
                .map(move |criterion| (subcategory.id, criterion))
        })
    }
}

/// Fatal catalog construction failures. These abort startup; there is no
/// runtime recovery from a misweighted or duplicated catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("category weights sum to {total:.6}, expected 1.0")]
    WeightSum { total: f64 },
    #[error("duplicate category id '{0}'")]
    DuplicateCategory(&'static str),
    #[error("duplicate criterion id '{criterion}' in {category}/{subcategory}")]
    DuplicateCriterion {
        category: &'static str,
        subcategory: &'static str,
        criterion: &'static str,
    },
}

/// Ordered, read-only view over the category definitions. Lookups return
/// `Option` so callers can degrade gracefully on unknown ids.
#[derive(Debug)]
pub struct CriteriaCatalog {
    categories: Vec<CategoryDefinition>,
}

impl CriteriaCatalog {
    /// The reference catalog for cultural exhibitions.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_categories(criteria::standard_categories())
    }

    pub fn from_categories(categories: Vec<CategoryDefinition>) -> Result<Self, CatalogError> {
        for (index, category) in categories.iter().enumerate() {
            if categories[..index]
                .iter()
                .any(|earlier| earlier.id == category.id)
            {
                return Err(CatalogError::DuplicateCategory(category.id));
            }
            for subcategory in &category.subcategories {
                for (position, criterion) in subcategory.criteria.iter().enumerate() {
                    if subcategory.criteria[..position]
                        .iter()
                        .any(|earlier| earlier.id == criterion.id)
                    {
                        return Err(CatalogError::DuplicateCriterion {
                            category: category.id,
                            subcategory: subcategory.id,
                            criterion: criterion.id,
                        });
                    }
                }
            }
        }

        let total: f64 = categories.iter().map(|category| category.weight).sum();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(CatalogError::WeightSum { total });
        }

        Ok(Self { categories })
    }

    /// Categories in insertion order. The order is stable and drives every
    /// UI and report listing.
    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&CategoryDefinition> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn subcategory(
        &self,
        category_id: &str,
        subcategory_id: &str,
    ) -> Option<&SubcategoryDefinition> {
        self.category(category_id)
            .and_then(|category| category.subcategory(subcategory_id))
    }

    pub fn criterion(
        &self,
        category_id: &str,
        subcategory_id: &str,
        criterion_id: &str,
    ) -> Option<&CriterionDefinition> {
        self.subcategory(category_id, subcategory_id)
            .and_then(|subcategory| subcategory.criterion(criterion_id))
    }

    /// Criteria of one category grouped by subcategory, in catalog order.
    pub fn questions(
        &self,
        category_id: &str,
    ) -> Option<Vec<(&'static str, &[CriterionDefinition])>> {
        self.category(category_id).map(|category| {
            category
                .subcategories
                .iter()
                .map(|subcategory| (subcategory.id, subcategory.criteria.as_slice()))
                .collect()
        })
    }

    pub fn question_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|category| &category.subcategories)
            .map(|subcategory| subcategory.criteria.len())
            .sum()
    }
}
