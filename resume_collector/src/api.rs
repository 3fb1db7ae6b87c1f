//! Web API Module
//!
//! Exposes the resume store over JSON endpoints.
//! All endpoints require no authentication.

use crate::config::ServerConfig;
use crate::resume::{self, NotFoundError, ResumeInput, ResumeStore, ValidationError, Violation};
use actix_cors::Cors;
use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    middleware::Logger,
    web, App, HttpRequest, HttpResponse, HttpServer, Responder, ResponseError,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

pub const WELCOME_MESSAGE: &str =
    "Welcome to Mini Resume Collector. Submit and browse resumes at /resumes.";

// ============================================================
// APPLICATION STATE
// ============================================================

/// Shared application state
pub struct AppState {
    pub store: ResumeStore,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: ResumeStore::new(),
            config,
        }
    }
}

// ============================================================
// API ERRORS
// ============================================================

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

/// JSON body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl ErrorBody {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            violations: Vec::new(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(err) => ErrorBody {
                error: self.to_string(),
                violations: err.violations.clone(),
            },
            // never echo the requested id back
            ApiError::NotFound(_) => ErrorBody::message("Resume not found"),
            ApiError::MalformedBody(_) => ErrorBody::message(self.to_string()),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Undecodable bodies are rejected like invalid submissions
fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("[API] Rejected body for {}: {}", req.path(), err);

    let response = match &err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            HttpResponse::PayloadTooLarge().json(ErrorBody::message(err.to_string()))
        }
        _ => ApiError::MalformedBody(err.to_string()).error_response(),
    };
    InternalError::from_response(err, response).into()
}

// ============================================================
// API HANDLERS
// ============================================================

/// Liveness probe
async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": WELCOME_MESSAGE }))
}

/// Health check endpoint
async fn health_check(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": data.config.service_name,
        "version": env!("CARGO_PKG_VERSION"),
        "records": data.store.len(),
    }))
}

/// Validate and store a new resume
async fn create_resume(
    data: web::Data<AppState>,
    req: web::Json<ResumeInput>,
) -> Result<HttpResponse, ApiError> {
    let profile = resume::validate(&req).map_err(|e| {
        log::info!("[API] Rejected resume submission: {}", e);
        e
    })?;

    let created = data.store.create(profile);
    log::info!("[API] Stored resume {}", created.id);

    Ok(HttpResponse::Created().json(created))
}

/// List every stored resume, oldest first
async fn list_resumes(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.store.list_all())
}

/// Fetch one resume by id
async fn get_resume(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let resume_id = path.into_inner();
    let resume = data.store.get_by_id(&resume_id)?;
    Ok(HttpResponse::Ok().json(resume))
}

// ============================================================
// SERVER CONFIGURATION
// ============================================================

/// Register state and routes on an app
pub fn configure(cfg: &mut web::ServiceConfig, state: web::Data<AppState>) {
    cfg.app_data(state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/resumes", web::post().to(create_resume))
        .route("/resumes", web::get().to(list_resumes))
        .route("/resumes/{resume_id}", web::get().to(get_resume));
}

/// Configure and run the API server
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let bind = (config.host.clone(), config.port);
    let state = web::Data::new(AppState::new(config));

    log::info!("Resume Collector API starting at http://{}:{}", bind.0, bind.1);
    log::info!("API Endpoints:");
    log::info!("   GET  /              - Welcome message");
    log::info!("   GET  /health        - Health check");
    log::info!("   POST /resumes       - Submit resume");
    log::info!("   GET  /resumes       - List resumes");
    log::info!("   GET  /resumes/:id   - Get resume");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();
        let state = state.clone();

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .configure(move |cfg| configure(cfg, state))
    })
    .bind(bind)?
    .run()
    .await
}
