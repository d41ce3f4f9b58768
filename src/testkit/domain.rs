//! Builders for sample survey data.

use crate::domain::table::EMPLOYEE_COLUMNS;
use crate::domain::{Cell, Table};

/// One employee row in `EMPLOYEE_COLUMNS` order.
#[must_use]
pub fn employee_row(name: &str, age: i64, department: &str, title: &str, status: &str) -> Vec<Cell> {
    vec![
        Cell::from(name),
        Cell::Integer(age),
        Cell::from(department),
        Cell::from(title),
        Cell::from(status),
        Cell::from("2026-01-15 08:30:00"),
    ]
}

/// A small employees table covering three departments and two statuses.
#[must_use]
pub fn sample_employees() -> Table {
    let mut table = Table::new(EMPLOYEE_COLUMNS);
    let rows = [
        ("Nguyen Van A", 30, "IT", "Engineer", "Updated"),
        ("Tran Thi B", 41, "HR", "Manager", "Updated"),
        ("Le Van C", 25, "IT", "Engineer", "Pending"),
        ("Pham Thi D", 52, "Finance", "Accountant", "Updated"),
        ("Hoang Van E", 35, "IT", "Analyst", "Pending"),
    ];
    for (name, age, department, title, status) in rows {
        table
            .push_row(employee_row(name, age, department, title, status))
            .expect("sample rows match the employee columns");
    }
    table
}

/// A single-column table, for exercising one report at a time.
#[must_use]
pub fn single_column(column: &str, values: Vec<Cell>) -> Table {
    let mut table = Table::new([column]);
    for value in values {
        table
            .push_row(vec![value])
            .expect("single-cell rows always fit");
    }
    table
}
