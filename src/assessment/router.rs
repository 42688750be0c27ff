use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{EvaluationId, ExhibitionMetadata};
use super::evaluation::{AnswerSubmission, EvaluationError};
use super::repository::{EvaluationRepository, RepositoryError};
use super::service::{AssessmentService, AssessmentServiceError};

/// Router builder exposing HTTP endpoints over the assessment service.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: EvaluationRepository + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(create_handler::<R>))
        .route(
            "/api/v1/assessments/:evaluation_id",
            get(get_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:evaluation_id/answers",
            post(answer_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:evaluation_id/progress",
            get(progress_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:evaluation_id/finalize",
            post(finalize_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerRequest {
    category_id: String,
    subcategory_id: String,
    criterion_id: String,
    #[serde(flatten)]
    submission: AnswerSubmission,
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    axum::Json(metadata): axum::Json<ExhibitionMetadata>,
) -> Response
where
    R: EvaluationRepository + 'static,
{
    match service.create(metadata) {
        Ok(evaluation) => (StatusCode::CREATED, axum::Json(evaluation.snapshot())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(evaluation_id): Path<String>,
) -> Response
where
    R: EvaluationRepository + 'static,
{
    match service.get(&EvaluationId(evaluation_id)) {
        Ok(evaluation) => (StatusCode::OK, axum::Json(evaluation.snapshot())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn answer_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(evaluation_id): Path<String>,
    axum::Json(request): axum::Json<AnswerRequest>,
) -> Response
where
    R: EvaluationRepository + 'static,
{
    let id = EvaluationId(evaluation_id);
    match service.record_answer(
        &id,
        &request.category_id,
        &request.subcategory_id,
        &request.criterion_id,
        request.submission,
    ) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn progress_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(evaluation_id): Path<String>,
) -> Response
where
    R: EvaluationRepository + 'static,
{
    match service.progress(&EvaluationId(evaluation_id)) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn finalize_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(evaluation_id): Path<String>,
) -> Response
where
    R: EvaluationRepository + 'static,
{
    match service.finalize(&EvaluationId(evaluation_id)) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    match error {
        AssessmentServiceError::Evaluation(EvaluationError::ValidationFailed(violations)) => {
            let payload = json!({
                "error": "validation failed",
                "violations": violations
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        AssessmentServiceError::Evaluation(EvaluationError::FinalizationBlocked { missing }) => {
            let payload = json!({
                "error": "finalization blocked",
                "missing_required": missing,
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        AssessmentServiceError::Evaluation(
            error @ (EvaluationError::CategoryNotFound(_)
            | EvaluationError::SubcategoryNotFound { .. }
            | EvaluationError::CriterionNotFound { .. }),
        ) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        AssessmentServiceError::Evaluation(error @ EvaluationError::NotCompleted) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        AssessmentServiceError::Metadata(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        AssessmentServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({ "error": "evaluation not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        AssessmentServiceError::Repository(RepositoryError::Conflict) => {
            let payload = json!({ "error": "evaluation already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        other => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
