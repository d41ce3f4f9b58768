//! Handler for the `export` command.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::application::report::build_spreadsheet;
use crate::application::SurveyService;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Write the employees snapshot to `path` as an Excel workbook.
///
/// # Errors
/// Returns an error if the workbook cannot be built or written.
pub fn execute(service: &SurveyService, config: &Config, path: &Path) -> Result<()> {
    let table = service.all_employees();
    let bytes = build_spreadsheet(&table, &config.report.sheet_name)?;
    fs::write(path, &bytes)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "export",
            "path": path.display().to_string(),
            "rows": table.len(),
            "bytes": bytes.len(),
        }));
        return Ok(());
    }

    output::success(&format!("Exported {} employees", table.len()));
    output::field("Sheet", &config.report.sheet_name);
    output::field("File", path.display());
    Ok(())
}
