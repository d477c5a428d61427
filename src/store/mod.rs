//! SQLite-backed key-value store.
//!
//! The member list persists as one JSON-serialized value under a fixed key,
//! the way the original browser build of this panel used localStorage. The
//! stored value is replaced whole on every save; there is no diffing, no
//! versioning and no migration of the stored shape.

use std::path::Path;
use std::str::FromStr;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use crate::errors::AppError;
use crate::models::MemberRecord;

/// Fixed key the member list is stored under.
pub const STORE_KEY: &str = "usersData";

/// Initialize the database connection pool and run migrations.
pub async fn init_store(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Key-value store adapter for the member collection.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Load the stored member list.
    ///
    /// Fails soft: a missing key, a query error or an unparseable value all
    /// yield the empty list. Absent record fields default to empty strings.
    pub async fn load(&self) -> Vec<MemberRecord> {
        let row = sqlx::query("SELECT value FROM kv WHERE key = ?")
            .bind(STORE_KEY)
            .fetch_optional(&self.pool)
            .await;

        let raw: String = match row {
            Ok(Some(row)) => row.get("value"),
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read stored members, starting empty: {}", e);
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Stored member list is not parseable, starting empty: {}", e);
            Vec::new()
        })
    }

    /// Persist the whole member list (full replace).
    pub async fn save(&self, members: &[MemberRecord]) -> Result<(), AppError> {
        let value = serde_json::to_string(members)?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO kv (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(STORE_KEY)
        .bind(&value)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
