use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage, ImageExt};
use tower::ServiceExt;

use farmchainx_core::auth::TokenKeys;
use farmchainx_db::Database;
use farmchainx_server::routes;
use farmchainx_server::state::AppState;

pub const TEST_SECRET: &[u8] = b"test-secret-key";

pub struct TestApp {
    pub router: Router,
    _container: ContainerAsync<GenericImage>,
}

/// Spin up a PostgreSQL container and return the test app router.
pub async fn setup_test_app() -> TestApp {
    let container = GenericImage::new("postgres", "16")
        .with_exposed_port(ContainerPort::Tcp(5432))
        .with_wait_for(WaitFor::message_on_stderr(
            "database system is ready to accept connections",
        ))
        .with_env_var("POSTGRES_PASSWORD", "postgres")
        .with_env_var("POSTGRES_DB", "farmchainx_test")
        .start()
        .await
        .expect("Failed to start PostgreSQL container");

    let host = container.get_host().await.expect("Failed to get host");
    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get port");

    let url = format!("postgresql://postgres:postgres@{host}:{port}/farmchainx_test");

    let pool = retry_connect(&url).await;
    let db = Database::from_pool(pool);
    db.migrate().await.expect("Failed to run migrations");

    let state = Arc::new(AppState {
        db,
        tokens: TokenKeys::new(TEST_SECRET),
    });

    TestApp {
        router: routes::router(state),
        _container: container,
    }
}

async fn retry_connect(url: &str) -> PgPool {
    for _ in 0..30 {
        if let Ok(pool) = PgPoolOptions::new().max_connections(5).connect(url).await {
            return pool;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }
    panic!("Failed to connect to test database");
}

/// Fire a request and return status plus parsed JSON body (Null for empty bodies).
pub async fn send(
    router: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Register an account and return the AuthResponse body.
pub async fn register(router: &Router, email: &str, role: &str) -> serde_json::Value {
    let (status, json) = send(
        router,
        "POST",
        "/auth/register",
        None,
        Some(serde_json::json!({
            "email": email,
            "password": "hunter2",
            "role": role,
            "name": format!("Test {role}"),
            "location": "Testville"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "registration failed: {json}");
    json
}

/// Sample farmer crop payload for create/update requests.
pub fn crop_payload(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "crop_type": "Vegetable",
        "harvest_date": "2025-06-01",
        "expiry_date": "2025-07-01",
        "soil_type": "Loam",
        "quantity": 50.0,
        "quantity_unit": "kg",
        "price_per_unit": 3.0
    })
}
