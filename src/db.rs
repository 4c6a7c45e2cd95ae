use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{FromRow, SqlitePool};
use thiserror::Error;
use tracing::{debug, info};

use crate::utils::db_utils::{SqlValue, bind_all, bind_all_as};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Backend(#[from] sqlx::Error),

    #[error("storage handle is not registered with the application")]
    NotRegistered,
}

/// Outcome of a write statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecResult {
    pub last_insert_id: i64,
    pub rows_affected: u64,
}

const SCHEMA: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS Employee (
        id INTEGER PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        position TEXT NOT NULL,
        wage REAL NOT NULL,
        is_current_employee INTEGER NOT NULL DEFAULT 1
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Timesheet (
        id INTEGER PRIMARY KEY NOT NULL,
        hours REAL NOT NULL,
        rate REAL NOT NULL,
        date NOT NULL,
        employee_id INTEGER NOT NULL,
        FOREIGN KEY (employee_id) REFERENCES Employee(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Menu (
        id INTEGER PRIMARY KEY NOT NULL,
        title TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS MenuItem (
        id INTEGER PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        description TEXT,
        inventory INTEGER NOT NULL,
        price REAL NOT NULL,
        menu_id INTEGER NOT NULL,
        FOREIGN KEY (menu_id) REFERENCES Menu(id)
    )
    "#,
];

/// Cloneable handle over the SQLite pool. Every read and write in the
/// service goes through here.
#[derive(Clone, Debug)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Accepts a `sqlite:` URL or a bare file path.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let options = if database_url.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(database_url)?
        } else {
            SqliteConnectOptions::new().filename(database_url)
        };
        let options = options.create_if_missing(true).foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;

        info!(database_url, max_connections, "Connected to database");
        Ok(Self { pool })
    }

    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        debug!("Schema ready");
        Ok(())
    }

    pub async fn query<T>(&self, sql: &str, params: Vec<SqlValue>) -> Result<Vec<T>, StorageError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        debug!(sql, params = ?params, "query");
        let rows = bind_all_as(sqlx::query_as::<_, T>(sql), params)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn query_one<T>(
        &self,
        sql: &str,
        params: Vec<SqlValue>,
    ) -> Result<Option<T>, StorageError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        debug!(sql, params = ?params, "query_one");
        let row = bind_all_as(sqlx::query_as::<_, T>(sql), params)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn execute(&self, sql: &str, params: Vec<SqlValue>) -> Result<ExecResult, StorageError> {
        debug!(sql, params = ?params, "execute");
        let result = bind_all(sqlx::query(sql), params)
            .execute(&self.pool)
            .await?;
        Ok(ExecResult {
            last_insert_id: result.last_insert_rowid(),
            rows_affected: result.rows_affected(),
        })
    }
}
