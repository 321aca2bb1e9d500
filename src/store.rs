//! SQLite pool setup, table DDL, and seed data.
//!
//! Foreign keys are switched on for every pooled connection so that
//! `ON DELETE CASCADE` and the reference checks on `restaurant_pizzas` hold.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{NewRestaurantPizza, MAX_PRICE, MIN_PRICE};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

/// Pool size for file-backed databases.
pub const MAX_CONNECTIONS: u32 = 5;

/// Open a pool for `config.database_url`, creating the database file if missing.
/// In-memory databases are pinned to a single long-lived connection, since each
/// SQLite connection would otherwise see its own empty database.
pub async fn connect(config: &AppConfig) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = if is_memory_url(&config.database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(opts)
            .await?
    };
    Ok(pool)
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Create `restaurants`, `pizzas` and `restaurant_pizzas` if they do not exist.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS restaurants (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            address TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pizzas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            ingredients TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    let restaurant_pizzas_ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS restaurant_pizzas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            price INTEGER NOT NULL CHECK (price BETWEEN {} AND {}),
            restaurant_id INTEGER NOT NULL REFERENCES restaurants(id) ON DELETE CASCADE,
            pizza_id INTEGER NOT NULL REFERENCES pizzas(id)
        )
        "#,
        MIN_PRICE, MAX_PRICE
    );
    sqlx::query(&restaurant_pizzas_ddl).execute(pool).await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_restaurant_pizzas_restaurant_id ON restaurant_pizzas (restaurant_id)",
    )
    .execute(pool)
    .await?;

    info!("database tables ready");
    Ok(())
}

const SEED_RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const SEED_PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (price, restaurant index, pizza index) into the seed tables above.
const SEED_OFFERINGS: &[(i64, usize, usize)] = &[(1, 0, 0), (4, 1, 1), (5, 2, 2)];

/// Replace all rows with sample restaurants, pizzas and priced offerings, in one transaction.
pub async fn seed(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM restaurant_pizzas").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM restaurants").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM pizzas").execute(&mut *tx).await?;

    let mut restaurant_ids = Vec::with_capacity(SEED_RESTAURANTS.len());
    for &(name, address) in SEED_RESTAURANTS {
        let id = sqlx::query("INSERT INTO restaurants (name, address) VALUES (?, ?)")
            .bind(name)
            .bind(address)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
        restaurant_ids.push(id);
    }

    let mut pizza_ids = Vec::with_capacity(SEED_PIZZAS.len());
    for &(name, ingredients) in SEED_PIZZAS {
        let id = sqlx::query("INSERT INTO pizzas (name, ingredients) VALUES (?, ?)")
            .bind(name)
            .bind(ingredients)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
        pizza_ids.push(id);
    }

    for &(price, r, p) in SEED_OFFERINGS {
        let new = NewRestaurantPizza {
            price,
            pizza_id: pizza_ids[p],
            restaurant_id: restaurant_ids[r],
        };
        sqlx::query("INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id) VALUES (?, ?, ?)")
            .bind(new.price)
            .bind(new.restaurant_id)
            .bind(new.pizza_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    info!(
        restaurants = SEED_RESTAURANTS.len(),
        pizzas = SEED_PIZZAS.len(),
        restaurant_pizzas = SEED_OFFERINGS.len(),
        "seeded database"
    );
    Ok(())
}
