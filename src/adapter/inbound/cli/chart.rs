//! Handler for the `chart` command.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::command::ChartKind;
use crate::adapter::inbound::cli::output;
use crate::application::report::{bar_of_department, bar_of_title, histogram_of_age, pie_of_status};
use crate::application::SurveyService;
use crate::domain::{Chart, Table};
use crate::error::Result;

fn build(kind: ChartKind, table: &Table) -> Option<Chart> {
    match kind {
        ChartKind::Status => pie_of_status(table),
        ChartKind::Department => bar_of_department(table),
        ChartKind::Title => bar_of_title(table),
        ChartKind::Age => histogram_of_age(table),
    }
}

/// Render one chart as a Plotly figure, to `output` or stdout.
///
/// Prints "no data" when the snapshot cannot produce the chart.
///
/// # Errors
/// Returns an error if the figure cannot be serialized or written.
pub fn execute(service: &SurveyService, kind: ChartKind, output_path: Option<&Path>) -> Result<()> {
    let table = service.all_employees();
    let Some(chart) = build(kind, &table) else {
        output::note("no data");
        return Ok(());
    };

    let figure = chart.to_plotly();
    match output_path {
        Some(path) => {
            fs::write(path, serde_json::to_vec_pretty(&figure)?)?;
            output::success(&format!("Wrote {}", chart.title));
            output::field("File", path.display());
        }
        None => output::json_output(figure),
    }
    Ok(())
}
