//! SQLite-backed persistence for `Simple` records: schema DDL, insert,
//! lookup, listing, soft delete, and test teardown.

use crate::error::AppError;
use crate::model::{NewSimple, Simple};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

const SIMPLES_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS simples (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    number INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    deleted_at TEXT
)
"#;

/// A handle to the record store. Cheap to clone; all clones share one pool,
/// and SQLite's own locking is the only concurrency guard.
#[derive(Clone)]
pub struct SimpleStore {
    pool: SqlitePool,
}

impl SimpleStore {
    /// Open (creating if absent) the database file at `location` and ensure
    /// the schema exists. Errors here are startup-fatal; callers should not
    /// retry.
    pub async fn open(location: &str) -> Result<Self, AppError> {
        let opts = SqliteConnectOptions::new()
            .filename(location)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await?;
        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(SIMPLES_DDL).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert one record, assigning the next identity and stamping both
    /// lifecycle timestamps. Returns the fully populated row.
    pub async fn insert(&self, new: &NewSimple) -> Result<Simple, AppError> {
        let now = Utc::now();
        tracing::debug!(name = %new.name, number = new.number, "insert simple");
        let row = sqlx::query_as::<_, Simple>(
            r#"
            INSERT INTO simples (name, number, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, number, created_at, updated_at, deleted_at
            "#,
        )
        .bind(&new.name)
        .bind(new.number)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Fetch the live record with `id`, or `None`.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Simple>, AppError> {
        let row = sqlx::query_as::<_, Simple>(
            "SELECT id, name, number, created_at, updated_at, deleted_at \
             FROM simples WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// All live records in ascending-identity (insertion) order. Empty vec,
    /// never an error, when none exist.
    pub async fn find_all(&self) -> Result<Vec<Simple>, AppError> {
        let rows = sqlx::query_as::<_, Simple>(
            "SELECT id, name, number, created_at, updated_at, deleted_at \
             FROM simples WHERE deleted_at IS NULL ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Mark the live record with `id` as deleted and return its state
    /// immediately prior to deletion. `None` if no live record matched.
    /// The row and its identity remain reserved permanently.
    pub async fn soft_delete(&self, id: i64) -> Result<Option<Simple>, AppError> {
        let Some(snapshot) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let now = Utc::now();
        tracing::debug!(id, "soft-delete simple");
        let result = sqlx::query(
            "UPDATE simples SET deleted_at = ?, updated_at = ? \
             WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(now)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;
        // A concurrent delete can win between the snapshot and the update.
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(snapshot))
    }

    /// Drop and recreate the table, clearing all rows and resetting identity
    /// assignment. Test teardown only.
    pub async fn reset(&self) -> Result<(), AppError> {
        sqlx::query("DROP TABLE IF EXISTS simples")
            .execute(&self.pool)
            .await?;
        self.ensure_schema().await
    }

    /// Liveness probe for readiness checks.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
