use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{Duration, Local};
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

use eco_eval::assessment::{
    assessment_router, AnswerSubmission, AssessmentService, CriteriaCatalog, ExhibitionMetadata,
    ExhibitionType, MemoryEvaluationRepository, ProgressReport, RawValue,
};
use eco_eval::config::AppConfig;
use eco_eval::error::AppError;
use eco_eval::telemetry;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Exhibition Eco-Assessment",
    about = "Serve and demonstrate the eco-assessment questionnaire service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the criteria catalog structure
    Catalog,
    /// Walk a sample evaluation through the questionnaire and print its progress
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug, Default)]
struct DemoArgs {
    /// Answer every question instead of a representative sample
    #[arg(long)]
    complete: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Catalog => run_catalog(),
        Command::Demo(args) => run_demo(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(CriteriaCatalog::standard()?);
    let repository = Arc::new(MemoryEvaluationRepository::default());
    let service = Arc::new(AssessmentService::new(catalog, repository));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(assessment_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "eco-assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_catalog() -> Result<(), AppError> {
    let catalog = CriteriaCatalog::standard()?;

    println!("Criteria catalog: {} questions", catalog.question_count());
    for category in catalog.categories() {
        println!();
        println!("{} (weight {:.2})", category.title, category.weight);
        println!("  {}", category.description);
        for subcategory in &category.subcategories {
            let required = subcategory
                .criteria
                .iter()
                .filter(|criterion| criterion.required)
                .count();
            println!(
                "  - {} [{}]: {} question(s), {} required",
                subcategory.title,
                subcategory.id,
                subcategory.criteria.len(),
                required
            );
        }
    }
    Ok(())
}

fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = Arc::new(CriteriaCatalog::standard()?);
    let repository = Arc::new(MemoryEvaluationRepository::default());
    let service = AssessmentService::new(catalog.clone(), repository);

    let start = Local::now().date_naive();
    let metadata = ExhibitionMetadata {
        name: "Regards sur la Matière".to_string(),
        venue: "Halle des Expositions".to_string(),
        city: Some("Nantes".to_string()),
        country: "France".to_string(),
        start_date: start,
        end_date: Some(start + Duration::days(90)),
        exhibition_type: ExhibitionType::TemporaryExhibition,
        surface_area: Some(1200.0),
        estimated_visitors: Some(55_000),
        budget: Some(380_000.0),
        organizer: Some("Collectif Déjà Vu".to_string()),
    };

    let evaluation = service.create(metadata)?;
    let id = evaluation.id().clone();

    if args.complete {
        for category in catalog.categories() {
            for subcategory in &category.subcategories {
                for criterion in &subcategory.criteria {
                    let raw = demo_value(&criterion.kind);
                    service.record_answer(
                        &id,
                        category.id,
                        subcategory.id,
                        criterion.id,
                        AnswerSubmission::of(raw),
                    )?;
                }
            }
        }
        let report = service.finalize(&id)?;
        render_progress(&report);
        return Ok(());
    }

    let sample: &[(&str, &str, &str, RawValue)] = &[
        (
            "impacts_environnementaux_directs",
            "materiaux_ressources",
            "empreinte_carbone_materiaux",
            RawValue::Number(1250.0),
        ),
        (
            "impacts_environnementaux_directs",
            "materiaux_ressources",
            "materiaux_recycles",
            RawValue::Number(65.0),
        ),
        (
            "impacts_environnementaux_directs",
            "transport_logistique",
            "mode_transport",
            RawValue::Text("Train".to_string()),
        ),
        (
            "impacts_eco_sociaux",
            "justice_sociale",
            "respect_droits_humains",
            RawValue::Text("Oui".to_string()),
        ),
        (
            "impacts_temporels_contextuels",
            "duree_intensite",
            "duree_exposition",
            RawValue::Number(90.0),
        ),
    ];

    let mut report = None;
    for (category_id, subcategory_id, criterion_id, raw) in sample.iter().cloned() {
        report = Some(service.record_answer(
            &id,
            category_id,
            subcategory_id,
            criterion_id,
            AnswerSubmission::of(raw),
        )?);
    }

    if let Some(report) = report {
        render_progress(&report);
    }
    Ok(())
}

fn demo_value(kind: &eco_eval::assessment::CriterionKind) -> RawValue {
    use eco_eval::assessment::CriterionKind;
    match kind {
        CriterionKind::Numeric { .. } => RawValue::Number(420.0),
        CriterionKind::Percentage => RawValue::Number(60.0),
        CriterionKind::Boolean => RawValue::Boolean(true),
        CriterionKind::SingleChoice { options } => RawValue::Text(options[0].to_string()),
        CriterionKind::Scale { max, .. } => RawValue::Number(*max as f64),
        CriterionKind::FreeText { .. } => {
            RawValue::Text("Synthèse partagée avec les partenaires".to_string())
        }
    }
}

fn render_progress(report: &ProgressReport) {
    println!(
        "Evaluation {} [{}]: {:.1}% complete ({}/{} questions)",
        report.evaluation_id.0,
        report.status_label,
        report.completion_percentage,
        report.answered,
        report.total_questions
    );
    println!(
        "Finalizable: {}",
        if report.can_finalize { "yes" } else { "no" }
    );
    for category in &report.categories {
        println!();
        println!(
            "{} : {:.1}% (weight {:.2})",
            category.title, category.completion_percentage, category.weight
        );
        for subcategory in &category.subcategories {
            println!(
                "  {} : {}/{} ({:.1}%)",
                subcategory.title,
                subcategory.answered,
                subcategory.total,
                subcategory.completion_percentage
            );
        }
        if !category.missing_required.is_empty() {
            println!("  missing required: {}", category.missing_required.join(", "));
        }
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
