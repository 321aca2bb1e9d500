//! Restaurant handlers: list, read with nested offerings, delete.

use crate::error::AppError;
use crate::response::success_ok;
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;

/// Ids that do not parse as integers cannot name a restaurant, so they are reported as not found.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::RestaurantNotFound(id_str.to_string()))
}

/// GET /restaurants
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let restaurants = CrudService::list_restaurants(&state.pool).await?;
    Ok(success_ok(restaurants))
}

/// GET /restaurants/:id
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let restaurant = CrudService::get_restaurant(&state.pool, id)
        .await?
        .ok_or(AppError::RestaurantNotFound(id_str))?;
    Ok(success_ok(restaurant))
}

/// DELETE /restaurants/:id
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !CrudService::delete_restaurant(&state.pool, id).await? {
        return Err(AppError::RestaurantNotFound(id_str));
    }
    tracing::info!(restaurant_id = id, "restaurant deleted");
    Ok(StatusCode::NO_CONTENT)
}
