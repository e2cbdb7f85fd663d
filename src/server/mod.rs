//! HTTP transport: a thin axum layer over the coordinator.
//!
//! Handlers marshal requests into engine operations and engine errors into
//! structured failure bodies. The coordinator sits behind a single
//! `tokio::sync::Mutex`, so each request gets an exclusive
//! load-mutate-save cycle and concurrent requests cannot lose updates to
//! last-write-wins races.

pub mod schema;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::core::{EngineError, GameState, PlayerKind};
use crate::engine::Coordinator;
use crate::store::StateStore;

/// Shared transport state: the coordinator behind its critical section.
pub struct AppState<S: StateStore> {
    coordinator: Arc<Mutex<Coordinator<S>>>,
}

impl<S: StateStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            coordinator: Arc::clone(&self.coordinator),
        }
    }
}

impl<S: StateStore> AppState<S> {
    #[must_use]
    pub fn new(coordinator: Coordinator<S>) -> Self {
        Self {
            coordinator: Arc::new(Mutex::new(coordinator)),
        }
    }
}

/// Build the router over a coordinator.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: StateStore + Send + 'static,
{
    Router::new()
        .route("/check_server", get(check_server))
        .route("/game_state", get(game_state::<S>))
        .route("/reset_game", post(reset_game::<S>))
        .route("/create_player", post(create_player::<S>))
        .route("/start_game", post(start_game::<S>))
        .route("/execute_action", post(execute_action::<S>))
        .route("/api_schema.json", get(api_schema))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, Default, Deserialize)]
struct CreatePlayerRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    house: Option<String>,
    #[serde(rename = "type", default)]
    kind: PlayerKind,
}

#[derive(Debug, Default, Deserialize)]
struct ExecuteActionRequest {
    #[serde(default)]
    player: Option<String>,
    #[serde(default)]
    action: Option<String>,
}

async fn check_server() -> Json<Value> {
    Json(json!({ "message": "Server is running." }))
}

async fn game_state<S>(State(app): State<AppState<S>>) -> Json<GameState>
where
    S: StateStore + Send + 'static,
{
    let coordinator = app.coordinator.lock().await;
    Json(coordinator.state())
}

async fn reset_game<S>(State(app): State<AppState<S>>) -> (StatusCode, Json<Value>)
where
    S: StateStore + Send + 'static,
{
    let coordinator = app.coordinator.lock().await;
    match coordinator.reset() {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "message": "Game state has been reset." })),
        ),
        Err(error) => engine_failure(&error),
    }
}

async fn create_player<S>(
    State(app): State<AppState<S>>,
    Json(request): Json<CreatePlayerRequest>,
) -> (StatusCode, Json<Value>)
where
    S: StateStore + Send + 'static,
{
    let name = request.name.as_deref().unwrap_or("");
    let house = request.house.as_deref().unwrap_or("");

    let coordinator = app.coordinator.lock().await;
    match coordinator.create_player(name, house, request.kind) {
        Ok(player) => (
            StatusCode::CREATED,
            Json(json!({
                "message": format!("Player {name} from House {} created successfully.", player.house)
            })),
        ),
        Err(error) => engine_failure(&error),
    }
}

async fn start_game<S>(State(app): State<AppState<S>>) -> (StatusCode, Json<Value>)
where
    S: StateStore + Send + 'static,
{
    let coordinator = app.coordinator.lock().await;
    match coordinator.start_game() {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Game has started!" }))),
        Err(error) => engine_failure(&error),
    }
}

async fn execute_action<S>(
    State(app): State<AppState<S>>,
    Json(request): Json<ExecuteActionRequest>,
) -> (StatusCode, Json<Value>)
where
    S: StateStore + Send + 'static,
{
    let player = request.player.as_deref().unwrap_or("");
    let action = request.action.as_deref().unwrap_or("");

    let coordinator = app.coordinator.lock().await;
    match coordinator.execute_action(player, action) {
        Ok(outcome) => (
            StatusCode::OK,
            Json(json!({ "message": outcome.message, "status": "success" })),
        ),
        Err(error) => action_failure(&error),
    }
}

async fn api_schema() -> Json<Value> {
    Json(schema::document())
}

/// Map an engine error to `{"error": ..., "kind": ...}`.
fn engine_failure(error: &EngineError) -> (StatusCode, Json<Value>) {
    let status = failure_status(error);
    warn!(%status, kind = error.kind(), %error, "request failed");
    (
        status,
        Json(json!({ "error": error.to_string(), "kind": error.kind() })),
    )
}

/// Map an action error to the `{"message", "status": "failed"}` shape.
fn action_failure(error: &EngineError) -> (StatusCode, Json<Value>) {
    let status = failure_status(error);
    warn!(%status, kind = error.kind(), %error, "action rejected");
    (
        status,
        Json(json!({
            "message": error.to_string(),
            "status": "failed",
            "kind": error.kind()
        })),
    )
}

fn failure_status(error: &EngineError) -> StatusCode {
    match error {
        EngineError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}
