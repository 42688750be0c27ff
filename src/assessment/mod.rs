//! Questionnaire-driven eco-assessment: criteria catalog, answer
//! validation, response aggregation, and evaluation lifecycle.

pub mod benchmarks;
pub mod catalog;
pub mod domain;
mod evaluation;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, CriteriaCatalog, CriterionDefinition, CriterionKind, ImpactLevel};
pub use domain::{
    AnswerValue, CategoryAnswers, EvaluationId, EvaluationStatus, ExhibitionMetadata,
    ExhibitionType, MetadataError, QuestionAnswer, RawValue, SubcategoryAnswers,
};
pub use evaluation::{
    AnswerSubmission, CompletionScope, Evaluation, EvaluationError, MissingRequired,
};
pub use report::ProgressReport;
pub use repository::{EvaluationRepository, MemoryEvaluationRepository, RepositoryError};
pub use router::assessment_router;
pub use service::{AssessmentService, AssessmentServiceError};
pub use validation::{validate, Violation};
