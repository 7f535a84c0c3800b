#![allow(dead_code)]

//! Shared fixtures for repository tests

use shop_core::{Product, UserRecord};

use chrono::DateTime;
use sqlx::SqlitePool;

/// Create a test pool with in-memory SQLite and run migrations.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn sample_user(email: &str) -> UserRecord {
    let mut user = UserRecord::new(
        "Test User".into(),
        email.into(),
        // Shape of a real bcrypt hash; repositories never inspect it
        "$2b$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy".into(),
        None,
    );
    // Storage keeps second precision; truncate so round-trip equality holds
    user.created_at = DateTime::from_timestamp(user.created_at.timestamp(), 0).unwrap();
    user
}

pub fn sample_product(name: &str) -> Product {
    let mut product = Product::new(name.into(), "Football".into(), 19.99);
    product.description = Some(format!("{} description", name));
    product.created_at = DateTime::from_timestamp(product.created_at.timestamp(), 0).unwrap();
    product
}
