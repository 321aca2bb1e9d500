//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::{error_body, validation_errors_body};

pub const RESTAURANT_NOT_FOUND: &str = "Restaurant not found";
pub const VALIDATION_ERRORS: &str = "validation errors";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
    #[error("validation: {0}")]
    Validation(String),
}

/// Why a restaurant pizza could not be created. Every kind is reported to the
/// client as the same 400 body; the kind itself is only logged.
#[derive(Error, Debug)]
pub enum CreateError {
    #[error("invalid body: {0}")]
    InvalidBody(String),
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} must be an integer")]
    InvalidField(&'static str),
    #[error("price must be between {min} and {max}, got {value}")]
    PriceOutOfRange { value: i64, min: i64, max: i64 },
    #[error("restaurant {0} does not exist")]
    RestaurantNotFound(i64),
    #[error("pizza {0} does not exist")]
    PizzaNotFound(i64),
    #[error("store: {0}")]
    Store(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("restaurant not found: {0}")]
    RestaurantNotFound(String),
    #[error(transparent)]
    Validation(#[from] CreateError),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::RestaurantNotFound(_) => {
                (StatusCode::NOT_FOUND, Json(error_body(RESTAURANT_NOT_FOUND))).into_response()
            }
            AppError::Validation(e) => {
                match e {
                    CreateError::Store(_) => tracing::error!(error = %e, "restaurant pizza create failed"),
                    _ => tracing::warn!(error = %e, "restaurant pizza rejected"),
                }
                (
                    StatusCode::BAD_REQUEST,
                    Json(validation_errors_body(&[VALIDATION_ERRORS])),
                )
                    .into_response()
            }
            AppError::Config(_) | AppError::Db(_) => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(error_body("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}
