//! HTTP handlers for restaurants, pizzas and restaurant pizzas.

pub mod restaurant;
pub mod pizza;
pub mod restaurant_pizza;
pub use restaurant::*;
pub use pizza::*;
pub use restaurant_pizza::*;
