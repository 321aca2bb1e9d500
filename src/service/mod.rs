//! CrudService: explicit queries over restaurants, pizzas and restaurant pizzas.

mod crud;
mod validation;
pub use crud::CrudService;
pub use validation::RequestValidator;
pub use crate::models::{MAX_PRICE, MIN_PRICE};
