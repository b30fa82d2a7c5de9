//! Login and registration stubs.
//!
//! The flows exist in the route table but are not implemented; both
//! answer 501 until a real session layer lands.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
}

async fn login() -> Response {
    stub("login")
}

async fn register() -> Response {
    stub("registration")
}

fn stub(flow: &str) -> Response {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({
            "error": format!("{flow} is not implemented"),
            "code": "NOT_IMPLEMENTED",
        })),
    )
        .into_response()
}
