use std::sync::Arc;

use tracing::{debug, info};

use super::catalog::CriteriaCatalog;
use super::domain::{EvaluationId, ExhibitionMetadata, MetadataError};
use super::evaluation::{AnswerSubmission, Evaluation, EvaluationError};
use super::report::ProgressReport;
use super::repository::{EvaluationRepository, RepositoryError};

/// Service composing the criteria catalog and the evaluation store. One
/// instance serves every session; each call runs to completion before the
/// next (single-writer per evaluation, enforced by the host).
pub struct AssessmentService<R> {
    catalog: Arc<CriteriaCatalog>,
    repository: Arc<R>,
}

impl<R> AssessmentService<R>
where
    R: EvaluationRepository + 'static,
{
    pub fn new(catalog: Arc<CriteriaCatalog>, repository: Arc<R>) -> Self {
        Self {
            catalog,
            repository,
        }
    }

    pub fn catalog(&self) -> &CriteriaCatalog {
        &self.catalog
    }

    /// Open a new draft evaluation for the given exhibition.
    pub fn create(
        &self,
        metadata: ExhibitionMetadata,
    ) -> Result<Evaluation, AssessmentServiceError> {
        let evaluation = Evaluation::new(&self.catalog, metadata)?;
        let stored = self.repository.insert(evaluation)?;
        info!(evaluation_id = %stored.id().0, "evaluation created");
        Ok(stored)
    }

    /// Record one answer and return the refreshed progress report.
    pub fn record_answer(
        &self,
        id: &EvaluationId,
        category_id: &str,
        subcategory_id: &str,
        criterion_id: &str,
        submission: AnswerSubmission,
    ) -> Result<ProgressReport, AssessmentServiceError> {
        let mut evaluation = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        evaluation.record_answer(
            &self.catalog,
            category_id,
            subcategory_id,
            criterion_id,
            submission,
        )?;
        self.repository.update(evaluation.clone())?;

        debug!(
            evaluation_id = %evaluation.id().0,
            criterion = criterion_id,
            completion = evaluation.completion_percentage(),
            "answer recorded"
        );
        Ok(ProgressReport::build(&self.catalog, &evaluation))
    }

    pub fn progress(&self, id: &EvaluationId) -> Result<ProgressReport, AssessmentServiceError> {
        let evaluation = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(ProgressReport::build(&self.catalog, &evaluation))
    }

    /// Confirm completeness. Refused while required answers are missing.
    pub fn finalize(&self, id: &EvaluationId) -> Result<ProgressReport, AssessmentServiceError> {
        let mut evaluation = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        evaluation.finalize(&self.catalog)?;
        self.repository.update(evaluation.clone())?;
        info!(evaluation_id = %evaluation.id().0, "evaluation finalized");
        Ok(ProgressReport::build(&self.catalog, &evaluation))
    }

    pub fn get(&self, id: &EvaluationId) -> Result<Evaluation, AssessmentServiceError> {
        let evaluation = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(evaluation)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
