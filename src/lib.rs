//! Pizza restaurants: REST backend for restaurants, pizzas and priced offerings on SQLite.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError, CreateError};
pub use routes::{app, api_routes, common_routes};
pub use service::CrudService;
pub use state::AppState;
pub use store::{connect, ensure_tables, seed};

/// Install the fmt subscriber. `RUST_LOG` overrides the default directives.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("pizza_restaurants=info,tower_http=info")
            }),
        )
        .init();
}
