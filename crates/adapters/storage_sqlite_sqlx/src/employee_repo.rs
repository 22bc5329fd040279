//! `SQLite` implementation of [`EmployeeRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use staffdesk_app::ports::EmployeeRepository;
use staffdesk_domain::employee::Employee;
use staffdesk_domain::error::StaffdeskError;
use staffdesk_domain::id::EmployeeId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Employee`].
struct Wrapper(Employee);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Employee> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let department: String = row.try_get("department")?;

        Ok(Self(Employee {
            id: EmployeeId::new(id),
            name,
            department,
        }))
    }
}

const INSERT: &str = "INSERT INTO employees (name, department) VALUES (?, ?)";
const UPSERT: &str = "INSERT INTO employees (id, name, department) VALUES (?, ?, ?) \
     ON CONFLICT(id) DO UPDATE SET name = excluded.name, department = excluded.department";
const SELECT_BY_ID: &str = "SELECT id, name, department FROM employees WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, department FROM employees ORDER BY id";
const DELETE_BY_ID: &str = "DELETE FROM employees WHERE id = ?";

/// `SQLite`-backed employee repository.
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository {
    fn create(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<Employee, StaffdeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&employee.name)
                .bind(&employee.department)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(employee.with_id(EmployeeId::new(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, StaffdeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Employee>, StaffdeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn save(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<Employee, StaffdeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPSERT)
                .bind(employee.id.get())
                .bind(&employee.name)
                .bind(&employee.department)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(employee)
        }
    }

    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<bool, StaffdeskError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
