//! CRUD execution against SQLite. Every read returns fully materialized structs.

use crate::error::{AppError, CreateError};
use crate::models::{
    NewRestaurantPizza, OfferingRow, Pizza, Restaurant, RestaurantDetail, RestaurantPizza,
    RestaurantPizzaDetail, RestaurantPizzaWithPizza,
};
use sqlx::SqlitePool;

pub struct CrudService;

impl CrudService {
    /// All restaurants ordered by id.
    pub async fn list_restaurants(pool: &SqlitePool) -> Result<Vec<Restaurant>, AppError> {
        let rows = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// One restaurant with its offerings and their pizzas, or None.
    pub async fn get_restaurant(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<RestaurantDetail>, AppError> {
        let restaurant = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        let Some(restaurant) = restaurant else {
            return Ok(None);
        };

        let offerings: Vec<RestaurantPizzaWithPizza> = sqlx::query_as::<_, OfferingRow>(
            r#"
            SELECT rp.id, rp.price, rp.pizza_id, rp.restaurant_id,
                   p.name AS pizza_name, p.ingredients AS pizza_ingredients
            FROM restaurant_pizzas rp
            JOIN pizzas p ON p.id = rp.pizza_id
            WHERE rp.restaurant_id = ?
            ORDER BY rp.id
            "#,
        )
        .bind(id)
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(RestaurantPizzaWithPizza::from)
        .collect();

        Ok(Some(RestaurantDetail::new(restaurant, offerings)))
    }

    /// Delete one restaurant; its restaurant pizzas go with it. Returns false when no row matched.
    pub async fn delete_restaurant(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM restaurants WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// All pizzas ordered by id.
    pub async fn list_pizzas(pool: &SqlitePool) -> Result<Vec<Pizza>, AppError> {
        let rows = sqlx::query_as::<_, Pizza>(
            "SELECT id, name, ingredients FROM pizzas ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Insert a restaurant pizza after checking both references, in one transaction.
    /// Nothing is written unless every step succeeds.
    pub async fn create_restaurant_pizza(
        pool: &SqlitePool,
        new: &NewRestaurantPizza,
    ) -> Result<RestaurantPizzaDetail, CreateError> {
        let mut tx = pool.begin().await?;

        let restaurant = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants WHERE id = ?",
        )
        .bind(new.restaurant_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(CreateError::RestaurantNotFound(new.restaurant_id))?;

        let pizza = sqlx::query_as::<_, Pizza>(
            "SELECT id, name, ingredients FROM pizzas WHERE id = ?",
        )
        .bind(new.pizza_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(CreateError::PizzaNotFound(new.pizza_id))?;

        let id = sqlx::query(
            "INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id) VALUES (?, ?, ?)",
        )
        .bind(new.price)
        .bind(new.restaurant_id)
        .bind(new.pizza_id)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let row = sqlx::query_as::<_, RestaurantPizza>(
            "SELECT id, price, pizza_id, restaurant_id FROM restaurant_pizzas WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(RestaurantPizzaDetail::new(row, pizza, restaurant))
    }
}
