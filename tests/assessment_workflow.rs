//! Integration scenarios for the assessment workflow: evaluation setup,
//! answer recording, completion roll-up, and finalization — exercised
//! through the public service facade and the HTTP router.

mod common {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use eco_eval::assessment::{
        AnswerSubmission, AssessmentService, CriteriaCatalog, CriterionKind, EvaluationId,
        ExhibitionMetadata, ExhibitionType, MemoryEvaluationRepository, RawValue,
    };

    pub(super) fn metadata() -> ExhibitionMetadata {
        ExhibitionMetadata {
            name: "Territoires Vivants".to_string(),
            venue: "Grande Halle".to_string(),
            city: Some("Lyon".to_string()),
            country: "France".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 5, 2).expect("valid date"),
            end_date: Some(NaiveDate::from_ymd_opt(2026, 8, 30).expect("valid date")),
            exhibition_type: ExhibitionType::TemporaryExhibition,
            surface_area: Some(2300.0),
            estimated_visitors: Some(120_000),
            budget: Some(510_000.0),
            organizer: Some("Biennale Écologie & Design".to_string()),
        }
    }

    pub(super) fn build_service() -> (
        Arc<AssessmentService<MemoryEvaluationRepository>>,
        Arc<CriteriaCatalog>,
    ) {
        let catalog = Arc::new(CriteriaCatalog::standard().expect("reference catalog loads"));
        let repository = Arc::new(MemoryEvaluationRepository::default());
        let service = Arc::new(AssessmentService::new(catalog.clone(), repository));
        (service, catalog)
    }

    pub(super) fn sample_value(kind: &CriterionKind) -> RawValue {
        match kind {
            CriterionKind::Numeric { .. } => RawValue::Number(980.0),
            CriterionKind::Percentage => RawValue::Number(45.0),
            CriterionKind::Boolean => RawValue::Boolean(true),
            CriterionKind::SingleChoice { options } => RawValue::Text(options[0].to_string()),
            CriterionKind::Scale { min, .. } => RawValue::Number(*min as f64),
            CriterionKind::FreeText { .. } => RawValue::Text("Bilan publié".to_string()),
        }
    }

    pub(super) fn answer_everything(
        service: &AssessmentService<MemoryEvaluationRepository>,
        catalog: &CriteriaCatalog,
        id: &EvaluationId,
    ) {
        for category in catalog.categories() {
            for subcategory in &category.subcategories {
                for criterion in &subcategory.criteria {
                    service
                        .record_answer(
                            id,
                            category.id,
                            subcategory.id,
                            criterion.id,
                            AnswerSubmission::of(sample_value(&criterion.kind)),
                        )
                        .expect("sample answer accepted");
                }
            }
        }
    }
}

mod service {
    use super::common::*;
    use eco_eval::assessment::{
        AnswerSubmission, AssessmentServiceError, EvaluationError, EvaluationId, EvaluationStatus,
        RawValue, RepositoryError,
    };

    #[test]
    fn create_and_track_progress() {
        let (service, _) = build_service();
        let evaluation = service.create(metadata()).expect("evaluation created");
        assert_eq!(evaluation.status(), EvaluationStatus::Draft);

        let report = service
            .record_answer(
                evaluation.id(),
                "impacts_environnementaux_directs",
                "materiaux_ressources",
                "empreinte_carbone_materiaux",
                AnswerSubmission::of(RawValue::Number(150.0)),
            )
            .expect("answer recorded");

        assert_eq!(report.status, EvaluationStatus::InProgress);
        assert!(report.completion_percentage > 0.0);
        assert_eq!(report.answered, 1);
    }

    #[test]
    fn validation_errors_carry_the_violation_list() {
        let (service, _) = build_service();
        let evaluation = service.create(metadata()).expect("evaluation created");

        let err = service
            .record_answer(
                evaluation.id(),
                "impacts_environnementaux_directs",
                "materiaux_ressources",
                "materiaux_recycles",
                AnswerSubmission::of(RawValue::Number(-5.0)),
            )
            .expect_err("percentage out of range");

        match err {
            AssessmentServiceError::Evaluation(EvaluationError::ValidationFailed(violations)) => {
                assert_eq!(violations[0].to_string(), "must be between 0 and 100");
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn unknown_evaluation_is_not_found() {
        let (service, _) = build_service();
        let err = service
            .progress(&EvaluationId("missing".to_string()))
            .expect_err("no such evaluation");
        assert!(matches!(
            err,
            AssessmentServiceError::Repository(RepositoryError::NotFound)
        ));
    }

    #[test]
    fn finalize_refuses_until_every_required_answer_exists() {
        let (service, catalog) = build_service();
        let evaluation = service.create(metadata()).expect("evaluation created");

        let err = service
            .finalize(evaluation.id())
            .expect_err("nothing answered yet");
        match err {
            AssessmentServiceError::Evaluation(EvaluationError::FinalizationBlocked {
                missing,
            }) => {
                assert!(missing
                    .iter()
                    .any(|item| item.criterion_id == "empreinte_carbone_materiaux"));
            }
            other => panic!("expected finalization block, got {other:?}"),
        }

        answer_everything(&service, &catalog, evaluation.id());
        let report = service.finalize(evaluation.id()).expect("complete");
        assert_eq!(report.status, EvaluationStatus::Completed);
        assert_eq!(report.completion_percentage, 100.0);
        assert!(report.can_finalize);
    }

    #[test]
    fn completed_status_is_sticky_through_corrections() {
        let (service, catalog) = build_service();
        let evaluation = service.create(metadata()).expect("evaluation created");
        answer_everything(&service, &catalog, evaluation.id());

        let report = service
            .record_answer(
                evaluation.id(),
                "impacts_environnementaux_directs",
                "energie_climat",
                "consommation_eclairage",
                AnswerSubmission::of(RawValue::Number(3100.0)),
            )
            .expect("correction accepted");

        assert_eq!(report.status, EvaluationStatus::Completed);
    }

    #[test]
    fn snapshots_round_trip_through_the_repository() {
        let (service, _) = build_service();
        let evaluation = service.create(metadata()).expect("evaluation created");

        service
            .record_answer(
                evaluation.id(),
                "impacts_eco_sociaux",
                "justice_sociale",
                "respect_droits_humains",
                AnswerSubmission::of(RawValue::Text("Oui".to_string())),
            )
            .expect("answer recorded");

        let stored = service.get(evaluation.id()).expect("evaluation stored");
        let restored = eco_eval::assessment::Evaluation::from_snapshot(stored.snapshot())
            .expect("snapshot restores");
        assert_eq!(restored, stored);
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use eco_eval::assessment::assessment_router;

    fn build_router() -> axum::Router {
        let (service, _) = build_service();
        assessment_router(service)
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn post_assessment_returns_draft_record() {
        let router = build_router();

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/assessments")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_vec(&metadata()).expect("serialize metadata"),
            ))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::CREATED);

        let payload = read_json(response).await;
        assert!(payload.get("evaluation_id").is_some());
        assert_eq!(payload.get("status"), Some(&json!("draft")));
        assert_eq!(payload.get("completion_percentage"), Some(&json!(0.0)));
    }

    #[tokio::test]
    async fn recorded_answer_refreshes_progress() {
        let (service, _) = build_service();
        let evaluation = service.create(metadata()).expect("evaluation created");
        let router = assessment_router(service);

        let body = json!({
            "category_id": "impacts_environnementaux_directs",
            "subcategory_id": "transport_logistique",
            "criterion_id": "mode_transport",
            "value": "Train",
        });
        let request = Request::builder()
            .method("POST")
            .uri(format!(
                "/api/v1/assessments/{}/answers",
                evaluation.id().0
            ))
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let payload = read_json(response).await;
        assert_eq!(payload.get("status"), Some(&json!("in_progress")));
        assert_eq!(payload.get("answered"), Some(&json!(1)));
    }

    #[tokio::test]
    async fn invalid_choice_yields_unprocessable_entity() {
        let (service, _) = build_service();
        let evaluation = service.create(metadata()).expect("evaluation created");
        let router = assessment_router(service);

        let body = json!({
            "category_id": "impacts_environnementaux_directs",
            "subcategory_id": "transport_logistique",
            "criterion_id": "mode_transport",
            "value": "Violet",
        });
        let request = Request::builder()
            .method("POST")
            .uri(format!(
                "/api/v1/assessments/{}/answers",
                evaluation.id().0
            ))
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let payload = read_json(response).await;
        let violations = payload
            .get("violations")
            .and_then(Value::as_array)
            .expect("violations listed");
        assert!(violations[0]
            .as_str()
            .expect("violation text")
            .contains("Train, Camion, Bateau, Avion, Transport multimodal"));
    }

    #[tokio::test]
    async fn progress_for_unknown_evaluation_is_not_found() {
        let router = build_router();
        let request = Request::builder()
            .method("GET")
            .uri("/api/v1/assessments/ev-missing/progress")
            .body(Body::empty())
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn finalize_conflict_reports_missing_required() {
        let (service, _) = build_service();
        let evaluation = service.create(metadata()).expect("evaluation created");
        let router = assessment_router(service);

        let request = Request::builder()
            .method("POST")
            .uri(format!(
                "/api/v1/assessments/{}/finalize",
                evaluation.id().0
            ))
            .body(Body::empty())
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let payload = read_json(response).await;
        let missing = payload
            .get("missing_required")
            .and_then(Value::as_array)
            .expect("missing required listed");
        assert!(!missing.is_empty());
    }
}
