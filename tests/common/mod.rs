#![allow(dead_code)]

use actix_web::test::TestRequest;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;

use hrms_lite::config::Config;
use hrms_lite::db::create_tables;

/// Fresh in-memory store per test, schema created up front.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");
    create_tables(&pool).await.expect("Failed to create tables");
    pool
}

pub fn test_config() -> Config {
    Config {
        server_addr: "127.0.0.1:0".to_string(),
        database_url: "sqlite::memory:".to_string(),
        rate_per_min: 60_000,
    }
}

// The limiter keys on the peer IP, so every test request carries one.
fn peer() -> SocketAddr {
    "127.0.0.1:40000".parse().unwrap()
}

pub fn get(path: &str) -> TestRequest {
    TestRequest::get().uri(path).peer_addr(peer())
}

pub fn post(path: &str) -> TestRequest {
    TestRequest::post().uri(path).peer_addr(peer())
}

pub fn put(path: &str) -> TestRequest {
    TestRequest::put().uri(path).peer_addr(peer())
}

pub fn delete(path: &str) -> TestRequest {
    TestRequest::delete().uri(path).peer_addr(peer())
}

pub fn employee_payload(eid: &str, name: &str, email: &str, dept: &str) -> serde_json::Value {
    serde_json::json!({
        "employee_id": eid,
        "full_name": name,
        "email": email,
        "department": dept,
    })
}

/// Build the app under test: the real route table plus the real
/// extractor error handlers, backed by the given pool.
macro_rules! test_app {
    ($pool:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($pool.clone()))
                .app_data(hrms_lite::error::json_config())
                .app_data(hrms_lite::error::path_config())
                .app_data(hrms_lite::error::query_config())
                .configure(|cfg| hrms_lite::routes::configure(cfg, crate::common::test_config())),
        )
        .await
    };
}
