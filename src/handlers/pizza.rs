//! Pizza handlers: list.

use crate::error::AppError;
use crate::response::success_ok;
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::State;

/// GET /pizzas
pub async fn list_pizzas(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let pizzas = CrudService::list_pizzas(&state.pool).await?;
    Ok(success_ok(pizzas))
}
