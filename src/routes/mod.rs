//! Router assembly: common routes plus the restaurant API, wrapped in the shared middleware.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Request bodies above this size are rejected before reaching a handler.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full application router with tracing and body limit layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(api_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES)),
        )
}
