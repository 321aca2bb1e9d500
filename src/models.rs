//! Row types and the materialized response shapes built from them.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lowest accepted restaurant pizza price, inclusive.
pub const MIN_PRICE: i64 = 1;
/// Highest accepted restaurant pizza price, inclusive.
pub const MAX_PRICE: i64 = 30;

#[derive(FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

#[derive(FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

#[derive(FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

/// Validated input for a new restaurant pizza.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

/// One offering of a restaurant with its pizza joined in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RestaurantPizzaWithPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: Pizza,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RestaurantDetail {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaWithPizza>,
}

/// Body returned after creating a restaurant pizza.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RestaurantPizzaDetail {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: Pizza,
    pub restaurant: Restaurant,
}

/// Flat row of `restaurant_pizzas JOIN pizzas`.
#[derive(FromRow, Debug)]
pub(crate) struct OfferingRow {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza_name: String,
    pub pizza_ingredients: String,
}

impl From<OfferingRow> for RestaurantPizzaWithPizza {
    fn from(row: OfferingRow) -> Self {
        Self {
            id: row.id,
            price: row.price,
            pizza_id: row.pizza_id,
            restaurant_id: row.restaurant_id,
            pizza: Pizza {
                id: row.pizza_id,
                name: row.pizza_name,
                ingredients: row.pizza_ingredients,
            },
        }
    }
}

impl RestaurantDetail {
    pub fn new(restaurant: Restaurant, restaurant_pizzas: Vec<RestaurantPizzaWithPizza>) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            restaurant_pizzas,
        }
    }
}

impl RestaurantPizzaDetail {
    pub fn new(row: RestaurantPizza, pizza: Pizza, restaurant: Restaurant) -> Self {
        Self {
            id: row.id,
            price: row.price,
            pizza_id: row.pizza_id,
            restaurant_id: row.restaurant_id,
            pizza,
            restaurant,
        }
    }
}
