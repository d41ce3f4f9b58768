//! Database connection management using Diesel ORM.
//!
//! The pool holds exactly one long-lived connection. SQLite serializes
//! access to it, and any thread may borrow it through the pool.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::SqliteConnection;

use crate::error::{Error, Result};

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Default `busy_timeout` pragma value in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

const CREATE_EMPLOYEES: &str = "CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name TEXT NOT NULL,
    age INTEGER NOT NULL,
    department TEXT NOT NULL,
    title TEXT NOT NULL,
    status TEXT NOT NULL,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_REQUESTS: &str = "CREATE TABLE IF NOT EXISTS requests (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    content TEXT NOT NULL,
    submitted_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Per-connection settings applied when the pool opens a connection.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionOptions {
    pub busy_timeout_ms: u64,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        configure_sqlite_connection(conn, self.busy_timeout_ms)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create the single-connection pool for the given database URL.
///
/// # Errors
/// Returns an error if the database cannot be opened.
pub fn create_pool(database_url: &str) -> Result<DbPool> {
    create_pool_with(database_url, ConnectionOptions::default())
}

/// Create the single-connection pool with explicit connection options.
///
/// The connection never expires, which keeps `:memory:` databases alive
/// for the life of the pool.
///
/// # Errors
/// Returns an error if the database cannot be opened.
pub fn create_pool_with(database_url: &str, options: ConnectionOptions) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connection_customizer(Box::new(options))
        .build(manager)
        .map_err(|e| Error::Connection(e.to_string()))
}

/// Create the `employees` and `requests` tables if they are absent.
///
/// Existing tables are left untouched, whatever their shape.
///
/// # Errors
/// Returns an error if a statement fails.
pub fn create_tables(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get()?;
    diesel::sql_query(CREATE_EMPLOYEES).execute(&mut conn)?;
    diesel::sql_query(CREATE_REQUESTS).execute(&mut conn)?;
    Ok(())
}

/// Configure SQLite connection pragmas.
fn configure_sqlite_connection(
    conn: &mut SqliteConnection,
    busy_timeout_ms: u64,
) -> std::result::Result<(), diesel::result::Error> {
    diesel::sql_query(format!("PRAGMA busy_timeout={busy_timeout_ms}")).execute(conn)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(diesel::QueryableByName)]
    struct TableName {
        #[diesel(sql_type = diesel::sql_types::Text)]
        name: String,
    }

    #[derive(diesel::QueryableByName)]
    struct Timeout {
        #[diesel(sql_type = diesel::sql_types::BigInt)]
        timeout: i64,
    }

    fn table_names(pool: &DbPool) -> Vec<String> {
        let mut conn = pool.get().unwrap();
        diesel::sql_query(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .load::<TableName>(&mut conn)
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect()
    }

    #[test]
    fn create_pool_with_memory_db() {
        let pool = create_pool(":memory:");
        assert!(pool.is_ok());
    }

    #[test]
    fn pool_holds_a_single_connection() {
        let pool = create_pool(":memory:").unwrap();
        let conn = pool.get();
        assert!(conn.is_ok());
        assert_eq!(pool.max_size(), 1);
    }

    #[test]
    fn create_tables_creates_both_tables() {
        let pool = create_pool(":memory:").unwrap();
        create_tables(&pool).unwrap();

        assert_eq!(table_names(&pool), vec!["employees", "requests"]);
    }

    #[test]
    fn create_tables_is_idempotent() {
        let pool = create_pool(":memory:").unwrap();
        create_tables(&pool).unwrap();
        create_tables(&pool).unwrap();
        create_tables(&pool).unwrap();

        assert_eq!(table_names(&pool), vec!["employees", "requests"]);
    }

    #[test]
    fn create_tables_leaves_foreign_shape_alone() {
        let pool = create_pool(":memory:").unwrap();
        {
            let mut conn = pool.get().unwrap();
            diesel::sql_query("CREATE TABLE employees (legacy TEXT)")
                .execute(&mut conn)
                .unwrap();
        }

        assert!(create_tables(&pool).is_ok());
        assert_eq!(table_names(&pool), vec!["employees", "requests"]);
    }

    #[test]
    fn busy_timeout_is_applied_on_acquire() {
        let pool = create_pool_with(
            ":memory:",
            ConnectionOptions {
                busy_timeout_ms: 1234,
            },
        )
        .unwrap();
        let mut conn = pool.get().unwrap();

        let row = diesel::sql_query("PRAGMA busy_timeout")
            .get_result::<Timeout>(&mut conn)
            .unwrap();
        assert_eq!(row.timeout, 1234);
    }

    #[test]
    fn connection_is_shared_across_threads() {
        use std::sync::Arc;
        use std::thread;

        let pool = Arc::new(create_pool(":memory:").unwrap());
        create_tables(&pool).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let pool = Arc::clone(&pool);
                thread::spawn(move || table_names(&pool).len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().expect("thread should not panic"), 2);
        }
    }
}
