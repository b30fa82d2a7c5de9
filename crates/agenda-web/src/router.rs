use axum::Router;
use tower_http::trace::TraceLayer;

use crate::routes;
use crate::state::AppState;

/// Build the full application router.
///
/// Used by both the production binary and the in-process tests so the two
/// exercise the same middleware stack.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::contacts::router())
        .merge(routes::auth::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
