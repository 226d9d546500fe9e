//! HTTP + WebSocket API for Newton
//!
//! Endpoints:
//! - POST /infer - Run one turn, return the directive block
//! - GET /state - Current affect state
//! - POST /state/reset - Restore initial state
//! - WS /ws - Live updates after each inference
//! - GET /health - Health check
//!
//! One `AffectState` per process, guarded by a mutex: each request's
//! read-modify-write of trust is a critical section.

use axum::{
    body::Bytes,
    extract::{State, WebSocketUpgrade, ws::{Message, WebSocket}},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::core::{AffectTracker, Newton};
use crate::types::{AffectState, InferResponse, InferenceUpdate};
use crate::{NewtonError, UPDATE_CHANNEL_CAPACITY};

/// App state
pub struct AppState {
    pub newton: Newton,
    pub tracker: Mutex<AffectTracker>,
    pub update_tx: broadcast::Sender<InferenceUpdate>,
}

impl AppState {
    pub fn new(initial: AffectState) -> Self {
        let (update_tx, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        Self {
            newton: Newton::new(),
            tracker: Mutex::new(AffectTracker::with_state(initial)),
            update_tx,
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub updates: u64,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

/// Error returned by handlers
#[derive(Debug)]
pub struct ApiError(NewtonError);

impl From<NewtonError> for ApiError {
    fn from(err: NewtonError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = ErrorResponse {
            ok: false,
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Create the API router with a fresh state
pub fn create_router() -> Router {
    create_router_with_state(AffectState::new())
}

/// Create the API router starting from a given state
pub fn create_router_with_state(initial: AffectState) -> Router {
    let state = Arc::new(AppState::new(initial));

    Router::new()
        .route("/health", get(health))
        .route("/infer", post(infer))
        .route("/state", get(get_state))
        .route("/state/reset", post(reset_state))
        .route("/ws", get(websocket_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let tracker = state.tracker.lock().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        updates: tracker.update_count(),
    })
}

/// Pull `text` out of a request body.
///
/// Empty body, missing or non-string `text` all become "". Anything that is
/// not a JSON object is rejected.
pub fn extract_text(body: &[u8]) -> Result<String, NewtonError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(String::new());
    }
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| NewtonError::MalformedRequest(e.to_string()))?;
    let object = value
        .as_object()
        .ok_or_else(|| NewtonError::MalformedRequest("expected a JSON object".to_string()))?;
    Ok(object
        .get("text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string())
}

/// Run one turn through the pipeline
async fn infer(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<InferResponse>, ApiError> {
    // Parse before taking the lock so a bad body never touches state
    let text = extract_text(&body).map_err(|e| {
        warn!(error = %e, "rejected /infer body");
        e
    })?;

    let inference = {
        let mut tracker = state.tracker.lock().await;
        tracker.turn(&state.newton, &text)
    };

    // No subscribers is fine
    let _ = state.update_tx.send(inference.to_update());

    Ok(Json(inference.to_response()))
}

/// Current state snapshot
async fn get_state(State(state): State<Arc<AppState>>) -> Json<AffectState> {
    let tracker = state.tracker.lock().await;
    Json(*tracker.state())
}

/// Restore initial state
async fn reset_state(State(state): State<Arc<AppState>>) -> Json<AffectState> {
    let mut tracker = state.tracker.lock().await;
    tracker.reset();
    info!("affect state reset");
    Json(*tracker.state())
}

/// WebSocket handler for live updates
async fn websocket_handler(
    State(state): State<Arc<AppState>>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    let rx = state.update_tx.subscribe();
    ws.on_upgrade(move |socket| handle_websocket(socket, rx))
}

/// Handle WebSocket connection
async fn handle_websocket(mut socket: WebSocket, mut rx: broadcast::Receiver<InferenceUpdate>) {
    loop {
        let update = match rx.recv().await {
            Ok(update) => update,
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!(skipped, "websocket subscriber lagging");
                continue;
            }
            Err(broadcast::error::RecvError::Closed) => break,
        };
        let json = serde_json::to_string(&update).unwrap_or_default();
        if socket.send(Message::Text(json)).await.is_err() {
            break;
        }
    }
}

/// Run the API server
pub async fn run_server(addr: &str) -> Result<(), NewtonError> {
    let router = create_router();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| NewtonError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    info!(%addr, "Newton running");
    info!("  POST /infer        - Infer directives");
    info!("  GET  /state        - Current state");
    info!("  POST /state/reset  - Reset state");
    info!("  WS   /ws           - Live updates");
    info!("  GET  /health       - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
