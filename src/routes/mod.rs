//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the HTML pages, their form actions, and the JSON API
//! under a single Axum router. Static assets are mounted by `main` so tests
//! can build the router without a filesystem.

pub mod contacts;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Pages, form actions, and JSON API routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(contacts::index))
        .route("/contacts", post(contacts::create))
        .route("/contacts/{id}", get(contacts::show).post(contacts::favorite))
        .route("/contacts/{id}/edit", get(contacts::edit_form).post(contacts::update))
        .route("/contacts/{id}/destroy", post(contacts::destroy))
        .route("/api/contacts", get(contacts::api_list))
        .route("/api/contacts/{id}", get(contacts::api_show))
        .route("/healthz", get(healthz))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
