//! User repository - the credential store.
//!
//! Uniqueness of `email` lives in the schema (`UNIQUE COLLATE NOCASE`),
//! not in a check-then-insert sequence, so two concurrent registrations
//! for the same address cannot both commit: one insert wins and the
//! other surfaces as [`DbError::DuplicateEmail`].

use crate::{DbError, Result as DbErrorResult};

use shop_core::UserRecord;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new record. One durable write; the unique constraint is
    /// the duplicate check.
    pub async fn create(&self, user: &UserRecord) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
                INSERT INTO users (id, email, password_hash, name, photo, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(&user.photo)
        .bind(user.created_at.timestamp())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(DbError::DuplicateEmail {
                    email: user.email.clone(),
                    location: error_location::ErrorLocation::from(std::panic::Location::caller()),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Case-insensitive lookup by email.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, password_hash, name, photo, created_at
                FROM users
                WHERE email = ? COLLATE NOCASE
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_user).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, password_hash, name, photo, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_user).transpose()
    }

    /// Mutate the display attributes in place.
    ///
    /// Succeeds whether or not the new values differ from the stored
    /// ones; callers decide existence separately via [`find_by_id`].
    ///
    /// [`find_by_id`]: UserRepository::find_by_id
    pub async fn update_profile(
        &self,
        id: Uuid,
        name: &str,
        photo: Option<&str>,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE users
                SET name = ?, photo = ?
                WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(photo)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

fn row_to_user(r: SqliteRow) -> DbErrorResult<UserRecord> {
    let id: String = r.try_get("id")?;
    let created_at: i64 = r.try_get("created_at")?;

    Ok(UserRecord {
        id: Uuid::parse_str(&id)
            .map_err(|e| DbError::corrupt(format!("invalid UUID in users.id: {}", e)))?,
        email: r.try_get("email")?,
        password_hash: r.try_get("password_hash")?,
        name: r.try_get("name")?,
        photo: r.try_get("photo")?,
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::corrupt("invalid timestamp in users.created_at"))?,
    })
}
