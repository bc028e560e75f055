use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use attrix_advisor::{Advisor, AdvisorError};
use attrix_core::{parse_csv, Record};
use attrix_similarity::AnalysisEngine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Largest accepted request body; uploaded datasets can be large
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Shared, read-only state of the REST server
pub struct ApiState {
    pub engine: AnalysisEngine,
    pub advisor: Option<Arc<Advisor>>,
}

impl ApiState {
    pub fn new(engine: AnalysisEngine, advisor: Option<Arc<Advisor>>) -> Self {
        Self { engine, advisor }
    }
}

#[derive(Deserialize)]
struct AnalyzeRequest {
    #[serde(alias = "data")]
    employees: Vec<Record>,
    #[serde(alias = "index")]
    employee_index: i64,
}

#[derive(Serialize)]
struct ParsedDataset {
    columns: Vec<String>,
    employees: Vec<Record>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(state: Arc<ApiState>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::from(state.clone()))
                .configure(configure)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

/// Register routes and body limits
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().limit(MAX_BODY_BYTES))
        .app_data(web::PayloadConfig::default().limit(MAX_BODY_BYTES))
        .route("/health", web::get().to(health))
        .route("/datasets/parse", web::post().to(parse_dataset))
        .route("/analyze", web::post().to(analyze))
        .route("/recommend", web::post().to(recommend));
}

async fn health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

async fn parse_dataset(body: String) -> ActixResult<HttpResponse> {
    match parse_csv(&body) {
        Ok(dataset) => {
            let columns = dataset.columns().into_iter().map(String::from).collect();
            info!(records = dataset.len(), "parsed CSV dataset");
            Ok(HttpResponse::Ok().json(ParsedDataset {
                columns,
                employees: dataset.into_records(),
            }))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

async fn analyze(
    state: web::Data<ApiState>,
    req: web::Json<AnalyzeRequest>,
) -> ActixResult<HttpResponse> {
    let AnalyzeRequest { employees, employee_index } = req.into_inner();
    info!(records = employees.len(), index = employee_index, "analyze request");

    match state.engine.analyze_records(employees, employee_index) {
        Ok(summary) => Ok(HttpResponse::Ok().json(summary)),
        Err(e) => Ok(core_error_response(&e)),
    }
}

async fn recommend(
    state: web::Data<ApiState>,
    req: web::Json<AnalyzeRequest>,
) -> ActixResult<HttpResponse> {
    let request_id = Uuid::new_v4();
    let AnalyzeRequest { employees, employee_index } = req.into_inner();
    info!(%request_id, records = employees.len(), index = employee_index, "recommend request");

    let advisor = match &state.advisor {
        Some(a) => a.clone(),
        None => {
            return Ok(HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "error": "No generation service configured; set an API key to enable recommendations"
            })));
        }
    };

    // Validation happens before the generation service is contacted
    let summary = match state.engine.analyze_records(employees, employee_index) {
        Ok(s) => s,
        Err(e) => return Ok(core_error_response(&e)),
    };

    match advisor.recommend(&summary, state.engine.config()).await {
        Ok(recommendation) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "request_id": request_id.to_string(),
            "analysis": summary,
            "recommendation": recommendation.text,
            "model": recommendation.model,
            "generated_at": chrono::Utc::now().to_rfc3339(),
        }))),
        Err(e) => {
            warn!(%request_id, error = %e, "recommendation failed");
            Ok(advisor_error_response(&e))
        }
    }
}

fn core_error_response(err: &attrix_core::Error) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });
    if err.is_invalid_input() {
        HttpResponse::BadRequest().json(body)
    } else {
        HttpResponse::InternalServerError().json(body)
    }
}

fn advisor_error_response(err: &AdvisorError) -> HttpResponse {
    let body = serde_json::json!({
        "error": err.to_string(),
        "attempted_models": err.attempted_models(),
    });
    match err {
        AdvisorError::InvalidConfig(_) => HttpResponse::InternalServerError().json(body),
        _ => HttpResponse::BadGateway().json(body),
    }
}
