//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::Executor;
use tower::ServiceExt;

use fitness_server::db::schema;
use fitness_server::{build_router, AppState, Database, ServerConfig};

static SCHEMA_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Router over a pool that never connects. Only usable for requests that
/// are answered before the database is touched.
pub fn offline_app() -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/fitness_offline")
        .expect("lazy pool");
    build_router(AppState::new(Database::new(pool)), &ServerConfig::default())
}

/// Database handle bound to a fresh schema, so ids start at 1 and tests
/// never see each other's rows.
pub async fn isolated_database() -> Database {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let schema_name = format!(
        "fitness_test_{}_{}",
        std::process::id(),
        SCHEMA_COUNTER.fetch_add(1, Ordering::SeqCst)
    );

    let admin = PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .expect("admin pool");
    admin
        .execute(format!("CREATE SCHEMA {schema_name}").as_str())
        .await
        .expect("create schema");
    admin.close().await;

    let search_path = format!("SET search_path TO {schema_name}");
    let pool = PgPoolOptions::new()
        .max_connections(4)
        .after_connect(move |conn, _meta| {
            let search_path = search_path.clone();
            Box::pin(async move {
                conn.execute(search_path.as_str()).await?;
                Ok(())
            })
        })
        .connect(&url)
        .await
        .expect("test pool");

    schema::migrate(&pool).await.expect("migrate");
    Database::new(pool)
}

pub async fn isolated_app() -> (Router, Database) {
    let db = isolated_database().await;
    let app = build_router(AppState::new(db.clone()), &ServerConfig::default());
    (app, db)
}

pub fn request(method: Method, uri: &str, body: Option<&str>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send a request, returning status and parsed JSON (Null when empty).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, body)
}
