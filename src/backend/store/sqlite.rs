/**
 * SQLite User Repository
 *
 * This module implements [`UserRepository`] on top of an sqlx SQLite pool.
 *
 * # Schema
 *
 * One `users` row per user. The watchlist is stored as a JSON array in the
 * `watchlist` column so a replace-all is a single `UPDATE`.
 *
 * # In-Memory Databases
 *
 * `sqlite::memory:` URLs get a pool pinned to one long-lived connection,
 * because every SQLite connection to `:memory:` opens a separate database.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::backend::store::{StoreError, UserRecord, UserRepository};
use crate::shared::Watchlist;

/// Raw `users` row
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    watchlist: String,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(UserRecord {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
            watchlist: serde_json::from_str(&row.watchlist)?,
        })
    }
}

/// SQLite-backed repository
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Connect to `database_url` and run migrations
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the connection fails and
    /// `StoreError::Migration` if the schema cannot be applied.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        tracing::info!("Connecting to database...");
        let pool = options.connect(database_url).await?;
        tracing::info!("Database connection pool created successfully");

        let repository = Self { pool };
        repository.migrate().await?;
        Ok(repository)
    }

    /// Apply the migrations in `./migrations`
    pub async fn migrate(&self) -> Result<(), StoreError> {
        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&self.pool).await?;
        tracing::info!("Database migrations completed successfully");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord, StoreError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, email, password_hash, created_at, watchlist)
            VALUES ($1, $2, $3, $4, '[]')
            RETURNING id, email, password_hash, created_at, watchlist
            "#,
        )
        .bind(&id)
        .bind(email)
        .bind(password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => StoreError::Conflict,
            other => StoreError::Database(other),
        })?;

        row.try_into()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, created_at, watchlist
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRecord::try_from).transpose()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, created_at, watchlist
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRecord::try_from).transpose()
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, created_at, watchlist
            FROM users
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(UserRecord::try_from).collect()
    }

    async fn read_watchlist(&self, user_id: &str) -> Result<Watchlist, StoreError> {
        let raw: Option<String> = sqlx::query_scalar("SELECT watchlist FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        let raw = raw.ok_or(StoreError::NotFound)?;
        Ok(serde_json::from_str(&raw)?)
    }

    async fn write_watchlist(
        &self,
        user_id: &str,
        watchlist: &Watchlist,
    ) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(watchlist)?;

        let result = sqlx::query("UPDATE users SET watchlist = $1 WHERE id = $2")
            .bind(encoded)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
