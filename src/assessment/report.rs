//! Progress views assembled for the API and the CLI.

use serde::Serialize;

use super::catalog::CriteriaCatalog;
use super::domain::{EvaluationId, EvaluationStatus};
use super::evaluation::{CompletionScope, Evaluation};

#[derive(Debug, Clone, Serialize)]
pub struct SubcategoryProgressEntry {
    pub subcategory_id: &'static str,
    pub title: &'static str,
    pub answered: usize,
    pub total: usize,
    pub completion_percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryProgressEntry {
    pub category_id: &'static str,
    pub title: &'static str,
    pub weight: f64,
    pub completion_percentage: f64,
    pub missing_required: Vec<&'static str>,
    pub subcategories: Vec<SubcategoryProgressEntry>,
}

/// Snapshot of where an evaluation stands, in catalog order.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    pub evaluation_id: EvaluationId,
    pub status: EvaluationStatus,
    pub status_label: &'static str,
    pub completion_percentage: f64,
    pub answered: usize,
    pub total_questions: usize,
    pub can_finalize: bool,
    pub categories: Vec<CategoryProgressEntry>,
}

impl ProgressReport {
    pub fn build(catalog: &CriteriaCatalog, evaluation: &Evaluation) -> Self {
        let categories = catalog
            .categories()
            .iter()
            .map(|category| {
                let subcategories = category
                    .subcategories
                    .iter()
                    .map(|subcategory| {
                        let answered = evaluation
                            .categories()
                            .get(category.id)
                            .and_then(|answers| answers.subcategories.get(subcategory.id))
                            .map(|answers| answers.questions.len())
                            .unwrap_or(0);
                        SubcategoryProgressEntry {
                            subcategory_id: subcategory.id,
                            title: subcategory.title,
                            answered,
                            total: subcategory.criteria.len(),
                            completion_percentage: evaluation
                                .completion(CompletionScope::Subcategory {
                                    category: category.id,
                                    subcategory: subcategory.id,
                                })
                                .unwrap_or(0.0),
                        }
                    })
                    .collect();

                CategoryProgressEntry {
                    category_id: category.id,
                    title: category.title,
                    weight: category.weight,
                    completion_percentage: evaluation
                        .completion(CompletionScope::Category(category.id))
                        .unwrap_or(0.0),
                    missing_required: evaluation
                        .missing_required(catalog, category.id)
                        .unwrap_or_default(),
                    subcategories,
                }
            })
            .collect();

        Self {
            evaluation_id: evaluation.id().clone(),
            status: evaluation.status(),
            status_label: evaluation.status().label(),
            completion_percentage: evaluation.completion_percentage(),
            answered: evaluation.answered_count(),
            total_questions: catalog.question_count(),
            can_finalize: evaluation.can_finalize(catalog),
            categories,
        }
    }
}
