// Receipt Points Service - Web Server
// REST API with Axum

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use receipt_points::{RawReceipt, ReceiptService, ServiceError};

/// Shared application state
#[derive(Clone)]
struct AppState {
    service: Arc<ReceiptService>,
}

/// Error body: {"error": "<message>"}
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(err: ServiceError) -> Response {
    let status = match err {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound => StatusCode::NOT_FOUND,
        ServiceError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.message().to_string(),
        }),
    )
        .into_response()
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /health - Health check
async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "OK" }))
}

/// POST /receipts/process - Validate, score, and store a receipt
async fn process_receipt(
    State(state): State<AppState>,
    Json(raw): Json<RawReceipt>,
) -> impl IntoResponse {
    match state.service.submit(raw) {
        Ok(id) => (StatusCode::OK, Json(json!({ "id": id }))).into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /receipts/:id/points - Points for a stored receipt
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.service.lookup(&id) {
        Ok(points) => (StatusCode::OK, Json(json!({ "points": points }))).into_response(),
        Err(err) => error_response(err),
    }
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    println!("🧾 Receipt Points Service - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Create shared state
    let state = AppState {
        service: Arc::new(ReceiptService::new()),
    };

    // Build router
    let app = Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(CorsLayer::permissive());

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000);
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:{}", port);
    println!("   Submit: POST http://localhost:{}/receipts/process", port);
    println!("   Points: GET  http://localhost:{}/receipts/{{id}}/points", port);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
