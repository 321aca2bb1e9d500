//! Restaurant pizza handlers: create.

use crate::error::{AppError, CreateError};
use crate::response::success_created;
use crate::service::{CrudService, RequestValidator};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

/// POST /restaurant_pizzas. Malformed JSON is a validation failure like any other.
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let Json(body) = body.map_err(|e| CreateError::InvalidBody(e.body_text()))?;
    let new = RequestValidator::restaurant_pizza(&body)?;
    let created = CrudService::create_restaurant_pizza(&state.pool, &new).await?;
    tracing::info!(
        restaurant_pizza_id = created.id,
        restaurant_id = created.restaurant_id,
        pizza_id = created.pizza_id,
        "restaurant pizza created"
    );
    Ok(success_created(created))
}
