use std::collections::BTreeMap;
use std::sync::Mutex;

use super::domain::EvaluationId;
use super::evaluation::Evaluation;

/// Storage abstraction so the service module can be exercised in isolation.
/// The host environment decides persistence timing and single-writer
/// enforcement; the model itself holds no ambient session state.
pub trait EvaluationRepository: Send + Sync {
    fn insert(&self, evaluation: Evaluation) -> Result<Evaluation, RepositoryError>;
    fn update(&self, evaluation: Evaluation) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &EvaluationId) -> Result<Option<Evaluation>, RepositoryError>;
    fn list(&self, limit: usize) -> Result<Vec<Evaluation>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("evaluation already exists")]
    Conflict,
    #[error("evaluation not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// In-memory store backing the hosting binary. One evaluation per in-flight
/// session; durable persistence stays with the storage collaborator.
#[derive(Debug, Default)]
pub struct MemoryEvaluationRepository {
    records: Mutex<BTreeMap<EvaluationId, Evaluation>>,
}

impl MemoryEvaluationRepository {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<EvaluationId, Evaluation>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("evaluation store poisoned".to_string()))
    }
}

impl EvaluationRepository for MemoryEvaluationRepository {
    fn insert(&self, evaluation: Evaluation) -> Result<Evaluation, RepositoryError> {
        let mut records = self.lock()?;
        if records.contains_key(evaluation.id()) {
            return Err(RepositoryError::Conflict);
        }
        records.insert(evaluation.id().clone(), evaluation.clone());
        Ok(evaluation)
    }

    fn update(&self, evaluation: Evaluation) -> Result<(), RepositoryError> {
        let mut records = self.lock()?;
        records.insert(evaluation.id().clone(), evaluation);
        Ok(())
    }

    fn fetch(&self, id: &EvaluationId) -> Result<Option<Evaluation>, RepositoryError> {
        let records = self.lock()?;
        Ok(records.get(id).cloned())
    }

    fn list(&self, limit: usize) -> Result<Vec<Evaluation>, RepositoryError> {
        let records = self.lock()?;
        Ok(records.values().take(limit).cloned().collect())
    }
}
