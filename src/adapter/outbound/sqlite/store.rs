//! SQLite-backed survey store.
//!
//! Implements the [`SurveyStore`] port on top of the single-connection pool.

use diesel::prelude::*;
use tracing::{debug, info};

use crate::adapter::outbound::sqlite::database::connection::{
    create_pool_with, create_tables, ConnectionOptions, DbPool,
};
use crate::adapter::outbound::sqlite::database::model::{
    EmployeeRow, NewEmployeeRow, NewRequestRow, RequestRow,
};
use crate::adapter::outbound::sqlite::database::schema::{employees, requests};
use crate::domain::{Employee, NewEmployee, NewSupportRequest, SupportRequest};
use crate::error::Result;
use crate::port::SurveyStore;

#[derive(QueryableByName)]
struct LastInsertRowId {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    #[diesel(column_name = "id")]
    id: i32,
}

/// Survey store backed by a SQLite database file.
pub struct SqliteSurveyStore {
    pool: DbPool,
}

impl SqliteSurveyStore {
    /// Wrap an existing pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database at `database_url`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened.
    pub fn open(database_url: &str, options: ConnectionOptions) -> Result<Self> {
        let pool = create_pool_with(database_url, options)?;
        debug!(database = database_url, "Opened SQLite database");
        Ok(Self::new(pool))
    }

    /// Open a private in-memory database.
    ///
    /// # Errors
    /// Returns an error if SQLite cannot allocate the database.
    pub fn in_memory() -> Result<Self> {
        Self::open(":memory:", ConnectionOptions::default())
    }

    /// Access the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Run an insert and read back its rowid on the same connection.
    fn insert_returning_id<F>(&self, insert: F) -> Result<i32>
    where
        F: FnOnce(&mut SqliteConnection) -> QueryResult<usize>,
    {
        let mut conn = self.pool.get()?;
        insert(&mut *conn)?;
        let row = diesel::sql_query("SELECT last_insert_rowid() AS id")
            .get_result::<LastInsertRowId>(&mut conn)?;
        Ok(row.id)
    }
}

impl SurveyStore for SqliteSurveyStore {
    fn initialize(&self) -> Result<()> {
        create_tables(&self.pool)?;
        info!("Survey tables ready");
        Ok(())
    }

    fn insert_employee(&self, employee: &NewEmployee) -> Result<i32> {
        let row = NewEmployeeRow::from(employee);
        let id = self.insert_returning_id(|conn| {
            diesel::insert_into(employees::table)
                .values(&row)
                .execute(conn)
        })?;
        debug!(id, department = %employee.department, "Recorded employee");
        Ok(id)
    }

    fn insert_support_request(&self, request: &NewSupportRequest) -> Result<i32> {
        let row = NewRequestRow::from(request);
        let id = self.insert_returning_id(|conn| {
            diesel::insert_into(requests::table)
                .values(&row)
                .execute(conn)
        })?;
        debug!(id, "Recorded support request");
        Ok(id)
    }

    fn load_employees(&self) -> Result<Vec<Employee>> {
        let mut conn = self.pool.get()?;
        let rows: Vec<EmployeeRow> = employees::table
            .order(employees::id.asc())
            .select(EmployeeRow::as_select())
            .load(&mut conn)?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    fn load_support_requests(&self) -> Result<Vec<SupportRequest>> {
        let mut conn = self.pool.get()?;
        let rows: Vec<RequestRow> = requests::table
            .order(requests::id.asc())
            .select(RequestRow::as_select())
            .load(&mut conn)?;
        Ok(rows.into_iter().map(SupportRequest::from).collect())
    }
}
