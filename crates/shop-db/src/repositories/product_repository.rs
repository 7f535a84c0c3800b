//! Product repository for CRUD operations on the catalog.

use crate::{DbError, Result as DbErrorResult};

use shop_core::Product;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, product: &Product) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO products (id, name, category, description, price, image, rating, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(product.id.to_string())
        .bind(&product.name)
        .bind(&product.category)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.image)
        .bind(product.rating)
        .bind(product.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Product>> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, category, description, price, image, rating, created_at
                FROM products
                ORDER BY created_at DESC, name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_product).collect()
    }

    /// Random sample of at most `limit` products, for the storefront's
    /// featured section.
    pub async fn sample(&self, limit: i64) -> DbErrorResult<Vec<Product>> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, category, description, price, image, rating, created_at
                FROM products
                ORDER BY RANDOM()
                LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_product).collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Product>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, category, description, price, image, rating, created_at
                FROM products
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_product).transpose()
    }

    /// Overwrite the mutable fields of an existing product.
    /// `id` and `created_at` never change.
    pub async fn update(&self, product: &Product) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE products
                SET name = ?, category = ?, description = ?, price = ?, image = ?, rating = ?
                WHERE id = ?
            "#,
        )
        .bind(&product.name)
        .bind(&product.category)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.image)
        .bind(product.rating)
        .bind(product.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete a product. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_product(r: SqliteRow) -> DbErrorResult<Product> {
    let id: String = r.try_get("id")?;
    let created_at: i64 = r.try_get("created_at")?;

    Ok(Product {
        id: Uuid::parse_str(&id)
            .map_err(|e| DbError::corrupt(format!("invalid UUID in products.id: {}", e)))?,
        name: r.try_get("name")?,
        category: r.try_get("category")?,
        description: r.try_get("description")?,
        price: r.try_get("price")?,
        image: r.try_get("image")?,
        rating: r.try_get("rating")?,
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::corrupt("invalid timestamp in products.created_at"))?,
    })
}
