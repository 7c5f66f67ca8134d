//! `Books` table DDL and the parameterized statements run against it.

use crate::error::AppError;
use crate::model::Book;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;

const CREATE_BOOKS: &str = r#"
    CREATE TABLE IF NOT EXISTS Books (
        Book_ID INTEGER PRIMARY KEY AUTOINCREMENT,
        Title VARCHAR(100) NOT NULL,
        Author VARCHAR(100) NOT NULL,
        Comments TEXT
    )
"#;

const SELECT_COLUMNS: &str = "SELECT Book_ID AS id, Title AS title, Author AS author, Comments AS comments FROM Books";

/// Owns the connection pool. Cloning shares the pool.
#[derive(Clone, Debug)]
pub struct BookStore {
    pool: SqlitePool,
}

impl BookStore {
    /// Open (creating if missing) the database file at `path`. The parent directory is created too.
    pub async fn open(path: &Path) -> Result<Self, AppError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await?;
        }
        let opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await?;
        tracing::info!(path = %path.display(), "connected to database");
        Ok(BookStore { pool })
    }

    /// Private in-memory database. A single connection that never expires, so the data lives as long as the store.
    pub async fn in_memory() -> Result<Self, AppError> {
        let opts: SqliteConnectOptions = "sqlite::memory:".parse()?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await?;
        Ok(BookStore { pool })
    }

    /// Create the `Books` table if it does not exist. Safe on every startup.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(CREATE_BOOKS).execute(&self.pool).await?;
        tracing::info!("ensured Books table");
        Ok(())
    }

    /// All books ordered by title (ASCII case-insensitive), then id.
    pub async fn list_all(&self) -> Result<Vec<Book>, AppError> {
        let sql = format!("{} ORDER BY Title COLLATE NOCASE, Book_ID", SELECT_COLUMNS);
        let rows = sqlx::query_as::<_, Book>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        let sql = format!("{} WHERE Book_ID = ?", SELECT_COLUMNS);
        let row = sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Insert one row and return the id the store assigned.
    pub async fn insert(
        &self,
        title: Option<&str>,
        author: Option<&str>,
        comments: Option<&str>,
    ) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO Books (Title, Author, Comments) VALUES (?, ?, ?)")
            .bind(title)
            .bind(author)
            .bind(comments)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrite every mutable field of the row. A missing id is a no-op; returns rows affected.
    pub async fn update(
        &self,
        id: i64,
        title: Option<&str>,
        author: Option<&str>,
        comments: Option<&str>,
    ) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE Books SET Title = ?, Author = ?, Comments = ? WHERE Book_ID = ?")
            .bind(title)
            .bind(author)
            .bind(comments)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!(id, "update matched no book");
        }
        Ok(result.rows_affected())
    }

    /// Delete the row. A missing id is a no-op; returns rows affected.
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM Books WHERE Book_ID = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!(id, "delete matched no book");
        }
        Ok(result.rows_affected())
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
