// GET / and GET /health: static service metadata.

use axum::response::IntoResponse;
use axum::Json;

/// GET / returns the API name, version and available endpoints.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "News Topic Analyzer API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "analyze": "/analyze (POST)",
            "health": "/health (GET)",
        },
    }))
}

/// GET /health always answers 200 OK.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}
