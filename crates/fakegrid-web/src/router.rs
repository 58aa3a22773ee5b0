use axum::routing::put;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::SharedGridState;

/// Build the axum router exposing the grid double under the fixed `/uri`
/// path.
pub fn build_router(state: SharedGridState) -> Router {
    Router::new()
        .route(
            "/uri",
            put(handler::upload)
                .post(handler::create)
                .get(handler::download),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
