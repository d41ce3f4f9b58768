//! Handlers for `request add` and `request list`.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::application::SurveyService;
use crate::domain::table::TIMESTAMP_FORMAT;
use crate::domain::SupportRequest;

#[derive(Tabled)]
struct RequestRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Submitted")]
    submitted_at: String,
    #[tabled(rename = "Content")]
    content: String,
}

impl From<&SupportRequest> for RequestRow {
    fn from(request: &SupportRequest) -> Self {
        Self {
            id: request.id,
            submitted_at: request
                .submitted_at
                .map(|at| at.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_default(),
            content: request.content.clone(),
        }
    }
}

/// Record one support request.
pub fn add(service: &SurveyService, content: &str) -> bool {
    if !service.save_support_request(content) {
        return false;
    }
    output::success("Support request recorded");
    true
}

/// Print every support request.
pub fn list(service: &SurveyService) -> bool {
    let requests = service.support_requests();

    if output::is_json() {
        for request in &requests {
            output::json_record("request", json!(request));
        }
        return true;
    }

    if requests.is_empty() {
        output::note("No support requests recorded");
        return true;
    }
    output::section(&format!("Support requests ({})", requests.len()));
    let rows: Vec<RequestRow> = requests.iter().map(RequestRow::from).collect();
    output::block(Table::new(rows));
    true
}
