//! Route handlers

use actix_web::{HttpResponse, web};

use super::AppState;
use crate::error::ScanError;

/// Query pairs in request order. Repeated keys are kept.
pub type QueryPairs = Vec<(String, String)>;

/// First value of `key`; later repeats are ignored
fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// GET /api/github?username=<name>
///
/// Runs one scan for the first `username` value. Failures render as
/// `{ "error": <message> }` with the status of their [`ScanError`] kind.
pub async fn scan_user(
    state: web::Data<AppState>,
    query: web::Query<QueryPairs>,
) -> Result<HttpResponse, ScanError> {
    let report = state.scanner.scan(first_param(&query, "username")).await?;
    Ok(HttpResponse::Ok().json(report))
}

/// GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "starscan"
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/github", web::get().to(scan_user))
        .route("/health", web::get().to(health_check));
}
