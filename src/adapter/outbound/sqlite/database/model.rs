//! Database model types for Diesel ORM.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::{employees, requests};
use crate::domain::{Employee, NewEmployee, NewSupportRequest, SupportRequest};

/// Database row for an employee (insertable).
///
/// `id` and `updated_at` are left to the column defaults.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = employees)]
pub struct NewEmployeeRow<'a> {
    pub full_name: &'a str,
    pub age: i32,
    pub department: &'a str,
    pub title: &'a str,
    pub status: &'a str,
}

impl<'a> From<&'a NewEmployee> for NewEmployeeRow<'a> {
    fn from(employee: &'a NewEmployee) -> Self {
        Self {
            full_name: &employee.full_name,
            age: employee.age,
            department: &employee.department,
            title: &employee.title,
            status: &employee.status,
        }
    }
}

/// Database row for an employee (queryable), projected onto the business
/// columns.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EmployeeRow {
    pub full_name: String,
    pub age: i32,
    pub department: String,
    pub title: String,
    pub status: String,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            full_name: row.full_name,
            age: row.age,
            department: row.department,
            title: row.title,
            status: row.status,
            updated_at: row.updated_at,
        }
    }
}

/// Database row for a support request (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = requests)]
pub struct NewRequestRow<'a> {
    pub content: &'a str,
}

impl<'a> From<&'a NewSupportRequest> for NewRequestRow<'a> {
    fn from(request: &'a NewSupportRequest) -> Self {
        Self {
            content: &request.content,
        }
    }
}

/// Database row for a support request (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = requests)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RequestRow {
    pub id: Option<i32>,
    pub content: String,
    pub submitted_at: Option<NaiveDateTime>,
}

impl From<RequestRow> for SupportRequest {
    fn from(row: RequestRow) -> Self {
        Self {
            id: row.id.unwrap_or_default(),
            content: row.content,
            submitted_at: row.submitted_at,
        }
    }
}
