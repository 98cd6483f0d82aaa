use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{PairingError, Planner};
use crate::models::{
    DefaultPairingRequest, ErrorResponse, GeneratePairingRequest, HealthResponse, PairingResponse,
    Roster, ScorePairsRequest, ScoresResponse,
};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub planner: Planner,
    /// Roster loaded from `pairing.roster_file` at startup, if any
    pub default_roster: Option<Arc<Roster>>,
}

/// Configure all pairing-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/pairings/scores", web::post().to(score_pairs))
        .route("/pairings/generate", web::post().to(generate_pairing))
        .route("/pairings/default", web::post().to(generate_default_pairing));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score table endpoint
///
/// POST /api/v1/pairings/scores
async fn score_pairs(
    state: web::Data<AppState>,
    req: web::Json<ScorePairsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score_pairs request: {:?}", errors);
        return validation_failed(errors);
    }

    match state.planner.scores(&req.roster(), &req.exclude_names) {
        Ok(scores) => HttpResponse::Ok().json(ScoresResponse::from(&scores)),
        Err(e) => precondition_failed("Failed to score pairs", e),
    }
}

/// Generate pairing endpoint
///
/// POST /api/v1/pairings/generate
///
/// Request body:
/// ```json
/// {
///   "topics": ["Rust", "Python"],
///   "participants": [{"name": "Ann", "proficiency": {"Rust": "preferred"}}],
///   "excludeNames": ["string"],
///   "seed": 42
/// }
/// ```
async fn generate_pairing(
    state: web::Data<AppState>,
    req: web::Json<GeneratePairingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for generate_pairing request: {:?}", errors);
        return validation_failed(errors);
    }

    tracing::info!(
        "Generating pairing for {} participants over {} topics",
        req.participants.len(),
        req.topics.len()
    );

    respond_with_pairing(&state.planner, &req.roster(), &req.exclude_names, req.seed)
}

/// Generate a pairing for the roster loaded at startup
///
/// POST /api/v1/pairings/default
///
/// An empty body means no extra exclusions and no seed; any other body
/// must parse as `DefaultPairingRequest`.
async fn generate_default_pairing(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> impl Responder {
    let req = match parse_default_request(&body) {
        Ok(req) => req,
        Err(e) => {
            tracing::info!("Invalid body for default pairing request: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "invalid_json".to_string(),
                message: format!("Invalid JSON: {}", e),
                status_code: 400,
            });
        }
    };

    let Some(roster) = state.default_roster.as_ref() else {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "No default roster".to_string(),
            message: "Set pairing.roster_file to enable this endpoint".to_string(),
            status_code: 404,
        });
    };

    respond_with_pairing(&state.planner, roster, &req.exclude_names, req.seed)
}

fn parse_default_request(body: &[u8]) -> Result<DefaultPairingRequest, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(DefaultPairingRequest::default());
    }
    serde_json::from_slice(body)
}

fn respond_with_pairing(
    planner: &Planner,
    roster: &Roster,
    exclude_names: &[String],
    seed: Option<u64>,
) -> HttpResponse {
    match planner.plan(roster, exclude_names, seed) {
        Ok(pairing) => HttpResponse::Ok().json(PairingResponse::from(pairing)),
        Err(e) => precondition_failed("Failed to generate pairing", e),
    }
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn precondition_failed(context: &str, err: PairingError) -> HttpResponse {
    tracing::warn!("{}: {}", context, err);
    HttpResponse::UnprocessableEntity().json(ErrorResponse {
        error: context.to_string(),
        message: err.to_string(),
        status_code: 422,
    })
}
