//! Common routes: index banner.

use axum::{response::Html, routing::get, Router};

async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

/// GET /
pub fn common_routes() -> Router {
    Router::new().route("/", get(index))
}
