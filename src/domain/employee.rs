//! Employee and support-request records.
//!
//! `New*` types carry what a form submission provides; the persisted types
//! add the surrogate id and the database-assigned timestamp.

use chrono::NaiveDateTime;
use serde::Serialize;

/// An employee submission, before it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub full_name: String,
    pub age: i32,
    pub department: String,
    pub title: String,
    /// Profile update status label (open set, e.g. "Updated", "Pending").
    pub status: String,
}

impl NewEmployee {
    #[must_use]
    pub fn new(
        full_name: impl Into<String>,
        age: i32,
        department: impl Into<String>,
        title: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            age,
            department: department.into(),
            title: title.into(),
            status: status.into(),
        }
    }
}

/// A stored employee record, without its surrogate id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub full_name: String,
    pub age: i32,
    pub department: String,
    pub title: String,
    pub status: String,
    /// Set by the database on insert.
    pub updated_at: Option<NaiveDateTime>,
}

/// A support request submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSupportRequest {
    pub content: String,
}

impl NewSupportRequest {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// A stored support request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportRequest {
    pub id: i32,
    pub content: String,
    pub submitted_at: Option<NaiveDateTime>,
}
