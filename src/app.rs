use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/capture", post(handlers::capture))
        .route("/api/report", get(handlers::get_report))
        .with_state(state)
}
