//! Response aggregation model.
//!
//! An [`Evaluation`] mirrors the catalog tree and is mutated only through
//! its own methods. Every successful `record_answer` recomputes completion
//! percentages bottom-up (subcategory, then category, then the evaluation)
//! in the same call, so reads are never stale.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::CriteriaCatalog;
use super::domain::{
    CategoryAnswers, EvaluationId, EvaluationStatus, ExhibitionMetadata, MetadataError,
    QuestionAnswer, RawValue, SubcategoryAnswers,
};
use super::validation::{self, Violation};

/// Answer envelope accepted by [`Evaluation::record_answer`]. `value: None`
/// is the unset sentinel: a validation failure on required criteria, a
/// no-op otherwise.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnswerSubmission {
    pub value: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl AnswerSubmission {
    pub fn of(value: RawValue) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }
}

/// Scope selector for completion reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionScope<'a> {
    Evaluation,
    Category(&'a str),
    Subcategory {
        category: &'a str,
        subcategory: &'a str,
    },
}

/// A required criterion without a recorded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingRequired {
    pub category_id: &'static str,
    pub subcategory_id: &'static str,
    pub criterion_id: &'static str,
}

/// Errors surfaced by the aggregation model. All are deterministic for a
/// given input; none are retryable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error("unknown category '{0}'")]
    CategoryNotFound(String),
    #[error("unknown subcategory '{subcategory}' in category '{category}'")]
    SubcategoryNotFound {
        category: String,
        subcategory: String,
    },
    #[error("unknown criterion '{criterion}' in {category}/{subcategory}")]
    CriterionNotFound {
        category: String,
        subcategory: String,
        criterion: String,
    },
    #[error("answer rejected: {}", format_violations(.0))]
    ValidationFailed(Vec<Violation>),
    #[error("evaluation cannot be finalized: {} required answer(s) missing", .missing.len())]
    FinalizationBlocked { missing: Vec<MissingRequired> },
    #[error("evaluation must be completed before it can be validated")]
    NotCompleted,
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Root aggregate binding exhibition metadata, the response tree, lifecycle
/// status, and cached completion percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    evaluation_id: EvaluationId,
    metadata: ExhibitionMetadata,
    categories: BTreeMap<String, CategoryAnswers>,
    status: EvaluationStatus,
    completion_percentage: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
}

impl Evaluation {
    /// Create a draft evaluation whose answer tree is pre-seeded from the
    /// catalog, so completion is always measured against every question in
    /// the catalog.
    pub fn new(
        catalog: &CriteriaCatalog,
        metadata: ExhibitionMetadata,
    ) -> Result<Self, MetadataError> {
        metadata.validate()?;

        let mut categories = BTreeMap::new();
        for category in catalog.categories() {
            let mut subcategories = BTreeMap::new();
            for subcategory in &category.subcategories {
                subcategories.insert(subcategory.id.to_string(), SubcategoryAnswers::default());
            }
            categories.insert(
                category.id.to_string(),
                CategoryAnswers {
                    subcategories,
                    completion_percentage: 0.0,
                },
            );
        }

        let now = Utc::now();
        Ok(Self {
            evaluation_id: EvaluationId::generate(),
            metadata,
            categories,
            status: EvaluationStatus::Draft,
            completion_percentage: 0.0,
            created_at: now,
            updated_at: now,
            completed_at: None,
        })
    }

    pub fn id(&self) -> &EvaluationId {
        &self.evaluation_id
    }

    pub fn metadata(&self) -> &ExhibitionMetadata {
        &self.metadata
    }

    pub fn status(&self) -> EvaluationStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn categories(&self) -> &BTreeMap<String, CategoryAnswers> {
        &self.categories
    }

    pub fn answer(
        &self,
        category_id: &str,
        subcategory_id: &str,
        criterion_id: &str,
    ) -> Option<&QuestionAnswer> {
        self.categories
            .get(category_id)?
            .subcategories
            .get(subcategory_id)?
            .questions
            .get(criterion_id)
    }

    pub fn answered_count(&self) -> usize {
        self.categories
            .values()
            .flat_map(|category| category.subcategories.values())
            .map(|subcategory| subcategory.questions.len())
            .sum()
    }

    /// Validate and upsert one answer, then recompute completion bottom-up.
    /// Rejections are atomic: on any error the tree is untouched.
    pub fn record_answer(
        &mut self,
        catalog: &CriteriaCatalog,
        category_id: &str,
        subcategory_id: &str,
        criterion_id: &str,
        submission: AnswerSubmission,
    ) -> Result<(), EvaluationError> {
        let category = catalog
            .category(category_id)
            .ok_or_else(|| EvaluationError::CategoryNotFound(category_id.to_string()))?;
        let subcategory = category.subcategory(subcategory_id).ok_or_else(|| {
            EvaluationError::SubcategoryNotFound {
                category: category_id.to_string(),
                subcategory: subcategory_id.to_string(),
            }
        })?;
        let definition = subcategory.criterion(criterion_id).ok_or_else(|| {
            EvaluationError::CriterionNotFound {
                category: category_id.to_string(),
                subcategory: subcategory_id.to_string(),
                criterion: criterion_id.to_string(),
            }
        })?;

        let envelope =
            validation::validate_envelope(submission.confidence, submission.comments.as_deref());

        let raw = match submission.value {
            Some(ref raw) => raw,
            None => {
                if definition.required {
                    return Err(EvaluationError::ValidationFailed(vec![Violation::Required]));
                }
                if !envelope.is_empty() {
                    return Err(EvaluationError::ValidationFailed(envelope));
                }
                // Optional criterion with nothing to record.
                return Ok(());
            }
        };

        let value = match validation::accept(definition, raw) {
            Ok(value) => value,
            Err(mut violations) => {
                violations.extend(envelope);
                return Err(EvaluationError::ValidationFailed(violations));
            }
        };
        if !envelope.is_empty() {
            return Err(EvaluationError::ValidationFailed(envelope));
        }

        let now = Utc::now();
        let answer = QuestionAnswer {
            value,
            unit: submission
                .unit
                .or_else(|| definition.unit.map(str::to_string)),
            confidence: submission.confidence,
            comments: submission.comments,
            updated_at: now,
        };

        // The tree is seeded from the catalog, so the slot exists whenever
        // the id lookups above succeeded.
        if let Some(slot) = self
            .categories
            .get_mut(category_id)
            .and_then(|category| category.subcategories.get_mut(subcategory_id))
        {
            slot.questions.insert(criterion_id.to_string(), answer);
        }

        self.recompute_completion(catalog);
        self.refresh_status(now);
        self.updated_at = now;
        Ok(())
    }

    /// Cached completion percentage for the requested scope. `None` marks an
    /// unknown id so callers can degrade gracefully.
    pub fn completion(&self, scope: CompletionScope<'_>) -> Option<f64> {
        match scope {
            CompletionScope::Evaluation => Some(self.completion_percentage),
            CompletionScope::Category(category) => self
                .categories
                .get(category)
                .map(|answers| answers.completion_percentage),
            CompletionScope::Subcategory {
                category,
                subcategory,
            } => self
                .categories
                .get(category)?
                .subcategories
                .get(subcategory)
                .map(|answers| answers.completion_percentage),
        }
    }

    pub fn completion_percentage(&self) -> f64 {
        self.completion_percentage
    }

    /// Required criteria of one category that have no recorded answer yet.
    pub fn missing_required(
        &self,
        catalog: &CriteriaCatalog,
        category_id: &str,
    ) -> Result<Vec<&'static str>, EvaluationError> {
        let category = catalog
            .category(category_id)
            .ok_or_else(|| EvaluationError::CategoryNotFound(category_id.to_string()))?;

        let answers = self.categories.get(category_id);
        let missing = category
            .required_criteria()
            .filter(|(subcategory_id, criterion)| {
                !answers
                    .and_then(|category| category.subcategories.get(*subcategory_id))
                    .map(|subcategory| subcategory.questions.contains_key(criterion.id))
                    .unwrap_or(false)
            })
            .map(|(_, criterion)| criterion.id)
            .collect();
        Ok(missing)
    }

    /// All unanswered required criteria across the catalog, in catalog order.
    pub fn missing_required_all(&self, catalog: &CriteriaCatalog) -> Vec<MissingRequired> {
        catalog
            .categories()
            .iter()
            .flat_map(|category| {
                let answers = self.categories.get(category.id);
                category
                    .required_criteria()
                    .filter(move |(subcategory_id, criterion)| {
                        !answers
                            .and_then(|category| category.subcategories.get(*subcategory_id))
                            .map(|subcategory| subcategory.questions.contains_key(criterion.id))
                            .unwrap_or(false)
                    })
                    .map(move |(subcategory_id, criterion)| MissingRequired {
                        category_id: category.id,
                        subcategory_id,
                        criterion_id: criterion.id,
                    })
            })
            .collect()
    }

    /// Completion alone approximates readiness; required-field coverage is
    /// checked as well because optional-heavy subcategories could otherwise
    /// mask missing required items.
    pub fn can_finalize(&self, catalog: &CriteriaCatalog) -> bool {
        self.completion_percentage >= 100.0 && self.missing_required_all(catalog).is_empty()
    }

    /// Confirm the evaluation is complete. Refusal carries the missing
    /// required criteria so the caller can direct the user.
    pub fn finalize(&mut self, catalog: &CriteriaCatalog) -> Result<(), EvaluationError> {
        let missing = self.missing_required_all(catalog);
        if self.completion_percentage < 100.0 || !missing.is_empty() {
            return Err(EvaluationError::FinalizationBlocked { missing });
        }
        // Completion at 100% already moved the status forward; finalizing a
        // finalized evaluation stays idempotent.
        Ok(())
    }

    /// Reviewer sign-off. Only a completed evaluation can be validated.
    pub fn mark_validated(&mut self) -> Result<(), EvaluationError> {
        match self.status {
            EvaluationStatus::Completed | EvaluationStatus::Validated => {
                self.status = EvaluationStatus::Validated;
                self.updated_at = Utc::now();
                Ok(())
            }
            _ => Err(EvaluationError::NotCompleted),
        }
    }

    /// Shelve the evaluation. Terminal; no automatic transition leaves it.
    pub fn archive(&mut self) {
        self.status = EvaluationStatus::Archived;
        self.updated_at = Utc::now();
    }

    /// Plain structured record for the storage collaborator.
    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Rebuild an evaluation from a stored record. Cached completion
    /// percentages and status are restored as-is; the next mutation
    /// recomputes them against the catalog.
    pub fn from_snapshot(record: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(record)
    }

    fn recompute_completion(&mut self, catalog: &CriteriaCatalog) {
        for category in catalog.categories() {
            let Some(category_answers) = self.categories.get_mut(category.id) else {
                continue;
            };

            for subcategory in &category.subcategories {
                let Some(subcategory_answers) =
                    category_answers.subcategories.get_mut(subcategory.id)
                else {
                    continue;
                };
                let total = subcategory.criteria.len();
                subcategory_answers.completion_percentage = if total == 0 {
                    0.0
                } else {
                    subcategory_answers.questions.len() as f64 / total as f64 * 100.0
                };
            }

            category_answers.completion_percentage =
                mean_of(category_answers.subcategories.values().map(|subcategory| {
                    subcategory.completion_percentage
                }));
        }

        self.completion_percentage = mean_of(
            self.categories
                .values()
                .map(|category| category.completion_percentage),
        );
    }

    /// Forward-only status transitions driven by completion. `completed`
    /// is sticky: later edits never demote the status.
    fn refresh_status(&mut self, now: DateTime<Utc>) {
        if self.completion_percentage >= 100.0 {
            if matches!(
                self.status,
                EvaluationStatus::Draft | EvaluationStatus::InProgress
            ) {
                self.status = EvaluationStatus::Completed;
            }
            if self.completed_at.is_none() {
                self.completed_at = Some(now);
            }
        } else if self.completion_percentage > 0.0 && self.status == EvaluationStatus::Draft {
            self.status = EvaluationStatus::InProgress;
        }
    }
}

/// Unweighted arithmetic mean; category weights stay declared-but-unused
/// until the scoring phase lands.
fn mean_of(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
