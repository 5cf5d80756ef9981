use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage, ImageExt};

use farmchainx_core::models::{NewUser, User, UserRole};
use farmchainx_db::Database;

/// Spin up a PostgreSQL container, run migrations, and return the database
/// facade plus the container handle (dropped containers are torn down).
pub async fn setup_test_db() -> (Database, ContainerAsync<GenericImage>) {
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

    (db, container)
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

/// Insert an account with a throwaway password hash.
pub async fn create_user(db: &Database, email: &str, role: UserRole) -> User {
    let (farmer_code, distributor_code) = match role {
        UserRole::Farmer => (Some(format!("F-{email}")), None),
        UserRole::Distributor => (None, Some(format!("D-{email}"))),
        _ => (None, None),
    };
    db.users()
        .create(&NewUser {
            email: email.to_string(),
            password_hash: "$argon2id$test".to_string(),
            role,
            name: format!("Test {role}"),
            location: Some("Testville".to_string()),
            farmer_code,
            distributor_code,
        })
        .await
        .expect("Failed to create user")
}
