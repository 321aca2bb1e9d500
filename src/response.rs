//! Response helpers shared by the handlers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ValidationErrorsBody {
    pub errors: Vec<String>,
}

pub fn success_ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn success_created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn error_body(message: &str) -> ErrorBody {
    ErrorBody {
        error: message.to_string(),
    }
}

pub fn validation_errors_body(errors: &[&str]) -> ValidationErrorsBody {
    ValidationErrorsBody {
        errors: errors.iter().map(|e| e.to_string()).collect(),
    }
}
