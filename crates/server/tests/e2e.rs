use std::net::SocketAddr;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::ServerState;

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

struct TestApp {
    base_url: String,
    db: sea_orm::DatabaseConnection,
}

impl TestApp {
    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }
}

/// Fresh in-memory database per test, served on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect_in_memory().await?;
    let state = ServerState::new(db.clone());

    let app: Router = routes::build_router(state, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, db })
}

/// Dominion / Margherita fixture; returns (restaurant_id, pizza_id).
async fn seed_dominion(app: &TestApp) -> anyhow::Result<(i32, i32)> {
    let r = models::restaurant::create(&app.db, "Dominion", "Main St").await?;
    let p = models::pizza::create(&app.db, "Margherita", "Cheese, Tomato").await?;
    Ok((r.id, p.id))
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(app.url("/health")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_index_banner() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(app.url("/")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let content_type = res.headers().get("content-type").map(|v| v.to_str().unwrap_or_default().to_string());
    assert!(content_type.unwrap_or_default().starts_with("text/html"));
    assert_eq!(res.text().await?, "<h1>Code challenge</h1>");
    Ok(())
}

#[tokio::test]
async fn e2e_price_scenario() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (restaurant_id, pizza_id) = seed_dominion(&app).await?;
    let c = reqwest::Client::new();

    let res = c.post(app.url("/restaurant_pizzas"))
        .json(&json!({"price": 15, "pizza_id": pizza_id, "restaurant_id": restaurant_id}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["price"], 15);
    assert_eq!(body["pizza_id"], pizza_id);
    assert_eq!(body["restaurant_id"], restaurant_id);
    assert_eq!(body["pizza"], json!({"id": pizza_id, "name": "Margherita", "ingredients": "Cheese, Tomato"}));
    assert_eq!(body["restaurant"], json!({"id": restaurant_id, "name": "Dominion", "address": "Main St"}));

    let res = c.post(app.url("/restaurant_pizzas"))
        .json(&json!({"price": 35, "pizza_id": pizza_id, "restaurant_id": restaurant_id}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.text().await?, r#"{"errors":["validation errors"]}"#);

    let res = c.get(app.url(&format!("/restaurants/{restaurant_id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["name"], "Dominion");
    let entries = body["restaurant_pizzas"].as_array().cloned().unwrap_or_default();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["price"], 15);
    assert_eq!(entries[0]["pizza"]["name"], "Margherita");
    assert!(entries[0].get("restaurant").is_none());
    Ok(())
}

#[tokio::test]
async fn e2e_rejected_prices_leave_no_rows() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (restaurant_id, pizza_id) = seed_dominion(&app).await?;
    let c = reqwest::Client::new();

    for price in [-3_000_000_000_i64, -5, 0, 31, 100, 3_000_000_000] {
        let res = c.post(app.url("/restaurant_pizzas"))
            .json(&json!({"price": price, "pizza_id": pizza_id, "restaurant_id": restaurant_id}))
            .send().await?;
        assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST, "price {price}");
        assert_eq!(res.text().await?, r#"{"errors":["validation errors"]}"#, "price {price}");
    }
    assert_eq!(models::restaurant_pizza::count(&app.db).await?, 0);

    for price in [1, 30] {
        let res = c.post(app.url("/restaurant_pizzas"))
            .json(&json!({"price": price, "pizza_id": pizza_id, "restaurant_id": restaurant_id}))
            .send().await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED, "price {price}");
    }
    assert_eq!(models::restaurant_pizza::count(&app.db).await?, 2);
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_parent_is_validation_error() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (restaurant_id, _) = seed_dominion(&app).await?;
    let res = reqwest::Client::new()
        .post(app.url("/restaurant_pizzas"))
        .json(&json!({"price": 10, "pizza_id": 999, "restaurant_id": restaurant_id}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?, json!({"errors": ["validation errors"]}));
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_body_is_bad_request() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::Client::new()
        .post(app.url("/restaurant_pizzas"))
        .header("content-type", "application/json")
        .body(r#"{"price": "cheap"}"#)
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["errors"].as_array().map(|a| a.len()), Some(1));
    Ok(())
}

#[tokio::test]
async fn e2e_missing_restaurant_is_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    for path in ["/restaurants/42", "/restaurants/abc"] {
        let res = c.get(app.url(path)).send().await?;
        assert_eq!(res.status(), HttpStatusCode::NOT_FOUND, "{path}");
        assert_eq!(res.text().await?, r#"{"error":"Restaurant not found"}"#);
    }
    let res = c.delete(app.url("/restaurants/42")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, json!({"error": "Restaurant not found"}));
    Ok(())
}

#[tokio::test]
async fn e2e_delete_restaurant_cascades() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (restaurant_id, pizza_id) = seed_dominion(&app).await?;
    let other = models::restaurant::create(&app.db, "Sottocasa", "Atlantic Ave").await?;
    models::restaurant_pizza::create(&app.db, 12, pizza_id, restaurant_id).await?;
    models::restaurant_pizza::create(&app.db, 20, pizza_id, restaurant_id).await?;
    models::restaurant_pizza::create(&app.db, 9, pizza_id, other.id).await?;
    let c = reqwest::Client::new();

    let res = c.delete(app.url(&format!("/restaurants/{restaurant_id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    assert!(res.text().await?.is_empty());

    let res = c.get(app.url(&format!("/restaurants/{restaurant_id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(models::restaurant_pizza::count(&app.db).await?, 1);

    let res = c.get(app.url("/pizzas")).send().await?;
    assert_eq!(res.json::<Value>().await?.as_array().map(|a| a.len()), Some(1));

    let res = c.get(app.url("/restaurants")).send().await?;
    assert_eq!(
        res.json::<Value>().await?,
        json!([{"id": other.id, "name": "Sottocasa", "address": "Atlantic Ave"}])
    );
    Ok(())
}

#[tokio::test]
async fn e2e_list_pizzas() -> anyhow::Result<()> {
    let app = start_server().await?;
    seed_dominion(&app).await?;
    models::pizza::create(&app.db, "Pepperoni", "Cheese, Pepperoni").await?;
    let res = reqwest::get(app.url("/pizzas")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    let names: Vec<&str> = body.as_array().map(|a| a.iter().filter_map(|p| p["name"].as_str()).collect()).unwrap_or_default();
    assert_eq!(names, vec!["Margherita", "Pepperoni"]);
    assert!(body[0].get("restaurant_pizzas").is_none());
    Ok(())
}
