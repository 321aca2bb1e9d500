//! Request validation for new restaurant pizzas.

use crate::error::CreateError;
use crate::models::{NewRestaurantPizza, MAX_PRICE, MIN_PRICE};
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Check shape and ranges of a create body. Reference checks happen in the store.
    pub fn restaurant_pizza(body: &Value) -> Result<NewRestaurantPizza, CreateError> {
        let obj = body
            .as_object()
            .ok_or_else(|| CreateError::InvalidBody("body must be a JSON object".into()))?;

        let price = required_integer(obj, "price")?;
        if !(MIN_PRICE..=MAX_PRICE).contains(&price) {
            return Err(CreateError::PriceOutOfRange {
                value: price,
                min: MIN_PRICE,
                max: MAX_PRICE,
            });
        }
        let pizza_id = required_integer(obj, "pizza_id")?;
        let restaurant_id = required_integer(obj, "restaurant_id")?;

        Ok(NewRestaurantPizza {
            price,
            pizza_id,
            restaurant_id,
        })
    }
}

/// Whole-number floats such as `5.0` count as integers.
fn required_integer(
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<i64, CreateError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(CreateError::MissingField(field)),
        Some(v) => v
            .as_i64()
            .or_else(|| {
                v.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            })
            .ok_or(CreateError::InvalidField(field)),
    }
}
