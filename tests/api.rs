use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use pizza_restaurants::{app, connect, ensure_tables, AppConfig, AppState};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;

async fn setup() -> (Router, SqlitePool) {
    let config = AppConfig {
        database_url: "sqlite::memory:".into(),
        ..AppConfig::default()
    };
    let pool = connect(&config).await.unwrap();
    ensure_tables(&pool).await.unwrap();
    (app(AppState::new(pool.clone())), pool)
}

async fn insert_restaurant(pool: &SqlitePool, name: &str, address: &str) -> i64 {
    sqlx::query("INSERT INTO restaurants (name, address) VALUES (?, ?)")
        .bind(name)
        .bind(address)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

async fn insert_pizza(pool: &SqlitePool, name: &str, ingredients: &str) -> i64 {
    sqlx::query("INSERT INTO pizzas (name, ingredients) VALUES (?, ?)")
        .bind(name)
        .bind(ingredients)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

async fn restaurant_pizza_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_pizzas")
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = send(app, "GET", uri).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, &body.to_string()).await
}

#[tokio::test]
async fn index_serves_banner() {
    let (app, _pool) = setup().await;
    let (status, bytes) = send(&app, "GET", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(bytes).unwrap(), "<h1>Code challenge</h1>");
}

#[tokio::test]
async fn only_the_documented_routes_exist() {
    let (app, _pool) = setup().await;
    for uri in ["/health", "/ready", "/version"] {
        let (status, _) = send(&app, "GET", uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri: {}", uri);
    }
}

#[tokio::test]
async fn lists_restaurants_and_pizzas_in_id_order() {
    let (app, pool) = setup().await;
    let a = insert_restaurant(&pool, "A", "X").await;
    let b = insert_restaurant(&pool, "B", "Y").await;
    let p = insert_pizza(&pool, "Cheese", "Dough,Cheese").await;

    let (status, body) = get_json(&app, "/restaurants").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": a, "name": "A", "address": "X" },
            { "id": b, "name": "B", "address": "Y" }
        ])
    );

    let (status, body) = get_json(&app, "/pizzas").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "id": p, "name": "Cheese", "ingredients": "Dough,Cheese" }]));
}

#[tokio::test]
async fn empty_store_lists_are_empty_arrays() {
    let (app, _pool) = setup().await;
    assert_eq!(get_json(&app, "/restaurants").await, (StatusCode::OK, json!([])));
    assert_eq!(get_json(&app, "/pizzas").await, (StatusCode::OK, json!([])));
}

#[tokio::test]
async fn get_restaurant_nests_only_its_own_offerings() {
    let (app, pool) = setup().await;
    let a = insert_restaurant(&pool, "A", "X").await;
    let b = insert_restaurant(&pool, "B", "Y").await;
    let cheese = insert_pizza(&pool, "Cheese", "Dough,Cheese").await;
    let pep = insert_pizza(&pool, "Pepperoni", "Dough,Cheese,Pepperoni").await;

    let (status, first) =
        post_json(&app, "/restaurant_pizzas", json!({ "price": 5, "pizza_id": cheese, "restaurant_id": a })).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) =
        post_json(&app, "/restaurant_pizzas", json!({ "price": 7, "pizza_id": pep, "restaurant_id": b })).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get_json(&app, &format!("/restaurants/{}", a)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": a,
            "name": "A",
            "address": "X",
            "restaurant_pizzas": [{
                "id": first["id"],
                "price": 5,
                "pizza_id": cheese,
                "restaurant_id": a,
                "pizza": { "id": cheese, "name": "Cheese", "ingredients": "Dough,Cheese" }
            }]
        })
    );
}

#[tokio::test]
async fn missing_restaurant_is_404() {
    let (app, _pool) = setup().await;
    let (status, body) = get_json(&app, "/restaurants/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Restaurant not found" }));

    let (status, body) = get_json(&app, "/restaurants/not-a-number").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Restaurant not found" }));

    let (status, bytes) = send(&app, "DELETE", "/restaurants/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "Restaurant not found" }));
}

#[tokio::test]
async fn delete_cascades_to_offerings_but_keeps_pizzas() {
    let (app, pool) = setup().await;
    let a = insert_restaurant(&pool, "A", "X").await;
    let b = insert_restaurant(&pool, "B", "Y").await;
    let cheese = insert_pizza(&pool, "Cheese", "Dough,Cheese").await;
    for restaurant_id in [a, a, b] {
        let (status, _) = post_json(
            &app,
            "/restaurant_pizzas",
            json!({ "price": 10, "pizza_id": cheese, "restaurant_id": restaurant_id }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, bytes) = send(&app, "DELETE", &format!("/restaurants/{}", a)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());

    let remaining: Vec<i64> = sqlx::query_scalar("SELECT restaurant_id FROM restaurant_pizzas")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, vec![b]);

    let (status, body) = get_json(&app, "/pizzas").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = get_json(&app, &format!("/restaurants/{}", a)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_returns_nested_pizza_and_restaurant() {
    let (app, pool) = setup().await;
    let r = insert_restaurant(&pool, "A", "X").await;
    let p = insert_pizza(&pool, "Cheese", "Dough,Cheese").await;

    let (status, body) =
        post_json(&app, "/restaurant_pizzas", json!({ "price": 5, "pizza_id": p, "restaurant_id": r })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["price"], json!(5));
    assert_eq!(body["pizza_id"], json!(p));
    assert_eq!(body["restaurant_id"], json!(r));
    assert_eq!(body["pizza"], json!({ "id": p, "name": "Cheese", "ingredients": "Dough,Cheese" }));
    assert_eq!(body["restaurant"], json!({ "id": r, "name": "A", "address": "X" }));
    assert_eq!(restaurant_pizza_count(&pool).await, 1);
}

#[tokio::test]
async fn invalid_creates_are_400_and_write_nothing() {
    let (app, pool) = setup().await;
    let r = insert_restaurant(&pool, "A", "X").await;
    let p = insert_pizza(&pool, "Cheese", "Dough,Cheese").await;

    let bodies = vec![
        json!({ "price": 0, "pizza_id": p, "restaurant_id": r }),
        json!({ "price": 31, "pizza_id": p, "restaurant_id": r }),
        json!({ "price": -3, "pizza_id": p, "restaurant_id": r }),
        json!({ "pizza_id": p, "restaurant_id": r }),
        json!({ "price": "cheap", "pizza_id": p, "restaurant_id": r }),
        json!({ "price": 5, "pizza_id": p + 100, "restaurant_id": r }),
        json!({ "price": 5, "pizza_id": p, "restaurant_id": r + 100 }),
        json!({ "price": 5, "restaurant_id": r }),
        json!({ "price": 5, "pizza_id": p }),
        json!([]),
    ];
    for body in bodies {
        let (status, resp) = post_json(&app, "/restaurant_pizzas", body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(resp, json!({ "errors": ["validation errors"] }));
    }

    let (status, resp) = post_raw(&app, "/restaurant_pizzas", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp, json!({ "errors": ["validation errors"] }));

    assert_eq!(restaurant_pizza_count(&pool).await, 0);
}

#[tokio::test]
async fn whole_number_float_price_is_stored_as_integer() {
    let (app, pool) = setup().await;
    let r = insert_restaurant(&pool, "A", "X").await;
    let p = insert_pizza(&pool, "Cheese", "Dough,Cheese").await;

    let (status, body) =
        post_json(&app, "/restaurant_pizzas", json!({ "price": 5.0, "pizza_id": p, "restaurant_id": r })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["price"], json!(5));

    let (status, body) =
        post_json(&app, "/restaurant_pizzas", json!({ "price": 5.5, "pizza_id": p, "restaurant_id": r })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "errors": ["validation errors"] }));
    assert_eq!(restaurant_pizza_count(&pool).await, 1);
}

#[tokio::test]
async fn create_delete_then_lookup_scenario() {
    let (app, pool) = setup().await;
    let r = insert_restaurant(&pool, "A", "X").await;
    let p = insert_pizza(&pool, "Cheese", "Dough,Cheese").await;
    assert_eq!((r, p), (1, 1));

    let (status, body) =
        post_json(&app, "/restaurant_pizzas", json!({ "price": 5, "pizza_id": 1, "restaurant_id": 1 })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["pizza"]["name"], json!("Cheese"));

    let (status, _) = send(&app, "DELETE", "/restaurants/1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get_json(&app, "/restaurants/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Restaurant not found" }));
    assert_eq!(restaurant_pizza_count(&pool).await, 0);
}

#[tokio::test]
async fn unsupported_methods_are_405() {
    let (app, _pool) = setup().await;
    let (status, _) = send(&app, "PATCH", "/restaurants/1").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    let (status, _) = send(&app, "GET", "/restaurant_pizzas").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn seeded_store_is_browsable() {
    let (app, pool) = setup().await;
    pizza_restaurants::seed(&pool).await.unwrap();

    let (_, restaurants) = get_json(&app, "/restaurants").await;
    let restaurants = restaurants.as_array().unwrap().clone();
    assert_eq!(restaurants.len(), 3);
    for r in restaurants {
        let id = r["id"].as_i64().unwrap();
        let (status, detail) = get_json(&app, &format!("/restaurants/{}", id)).await;
        assert_eq!(status, StatusCode::OK);
        for offering in detail["restaurant_pizzas"].as_array().unwrap() {
            assert_eq!(offering["restaurant_id"], json!(id));
            assert_eq!(offering["pizza"]["id"], offering["pizza_id"]);
        }
    }
}
