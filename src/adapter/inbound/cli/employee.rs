//! Handlers for `employee add` and `employee list`.

use serde_json::{json, Map, Value};
use tabled::builder::Builder;

use crate::adapter::inbound::cli::command::EmployeeAddArgs;
use crate::adapter::inbound::cli::output;
use crate::application::SurveyService;
use crate::domain::Table;

/// Record one employee. Returns `false` when the service reported a failure.
pub fn add(service: &SurveyService, args: &EmployeeAddArgs) -> bool {
    if !service.save_employee(
        &args.name,
        args.age,
        &args.department,
        &args.title,
        &args.status,
    ) {
        return false;
    }
    output::success(&format!("Recorded {}", args.name));
    true
}

/// Print the employees snapshot as a table, or one JSON line per employee.
pub fn list(service: &SurveyService) -> bool {
    let table = service.all_employees();

    if output::is_json() {
        for record in records(&table) {
            output::json_record("employee", record);
        }
        return true;
    }

    if table.is_empty() {
        output::note("No employees recorded");
        return true;
    }
    output::section(&format!("Employees ({})", table.len()));
    output::block(render(&table));
    true
}

fn records(table: &Table) -> Vec<Value> {
    table
        .rows()
        .iter()
        .map(|row| {
            let object: Map<String, Value> = table
                .columns()
                .iter()
                .cloned()
                .zip(row.iter().map(|cell| json!(cell)))
                .collect();
            Value::Object(object)
        })
        .collect()
}

fn render(table: &Table) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.columns().iter().cloned());
    for row in table.rows() {
        builder.push_record(row.iter().map(ToString::to_string));
    }
    builder.build().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::{AGE, FULL_NAME};
    use crate::testkit::domain::sample_employees;

    #[test]
    fn records_key_cells_by_column() {
        let records = records(&sample_employees());
        assert_eq!(records.len(), 5);
        assert!(records[0][FULL_NAME].is_string());
        assert_eq!(records[0][AGE], json!(30));
    }

    #[test]
    fn render_includes_header_and_rows() {
        let rendered = render(&sample_employees());
        assert!(rendered.contains(FULL_NAME));
        assert!(rendered.contains("Finance"));
    }
}
