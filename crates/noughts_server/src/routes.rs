//! HTTP polling API.
//!
//! Every route is a `GET`. Queries answer with plain-text codes (or a JSON array
//! for the board); `/player`, `/place` and `/reset` mutate the shared session.

use crate::page::Page;
use crate::wire;
use axum::{
    Json, Router,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use noughts_core::{MoveError, Role, SharedSession};
use tracing::{debug, info, instrument, warn};

/// State shared by every handler.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The one game all clients play.
    pub session: SharedSession,
    /// Page served at `/`.
    pub page: Page,
}

impl AppState {
    /// Creates state around an existing session.
    pub fn new(session: SharedSession, page: Page) -> Self {
        Self { session, page }
    }
}

/// Builds the router with every route of the polling API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/json", get(board))
        .route("/player", get(claim_player))
        .route("/place/{player}/{position}", get(place))
        .route("/status", get(status))
        .route("/turn", get(turn))
        .route("/reset", get(reset))
        .route("/print", get(print))
        .route("/health", get(health))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let response = next.run(req).await;
    debug!(%method, %uri, status = %response.status(), "Handled request");
    response
}

/// A refused move, answered with `400` and the reason as text.
#[derive(Debug)]
pub struct Rejected(pub MoveError);

impl IntoResponse for Rejected {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.0.to_string()).into_response()
    }
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.html().to_string())
}

async fn board(State(state): State<AppState>) -> Json<[u8; 9]> {
    Json(wire::cell_codes(&state.session.board()))
}

#[instrument(skip(state))]
async fn claim_player(State(state): State<AppState>) -> String {
    let role = state.session.claim_role();
    info!(%role, "Handed out role");
    role.code().to_string()
}

#[instrument(skip(state))]
async fn place(
    State(state): State<AppState>,
    Path((player, position)): Path<(String, String)>,
) -> Result<StatusCode, Rejected> {
    let role = Role::from_code(wire::parse_code(&player));
    let position = wire::parse_code(&position);

    match state.session.attempt_move(role, position) {
        Ok(outcome) => {
            info!(%role, position, %outcome, "Placement accepted");
            Ok(StatusCode::OK)
        }
        Err(e) => {
            warn!(%role, position, error = %e, "Placement rejected");
            Err(Rejected(e))
        }
    }
}

async fn status(State(state): State<AppState>) -> String {
    state.session.outcome().code().to_string()
}

async fn turn(State(state): State<AppState>) -> String {
    state.session.current_turn().code().to_string()
}

#[instrument(skip(state))]
async fn reset(State(state): State<AppState>) -> StatusCode {
    state.session.reset();
    info!("Game reset by client");
    StatusCode::OK
}

async fn print(State(state): State<AppState>) -> StatusCode {
    info!("\n{}\n--------", state.session.board());
    StatusCode::OK
}

async fn health() -> StatusCode {
    StatusCode::OK
}
