//! Persistence port for survey submissions.

use crate::domain::{Employee, NewEmployee, NewSupportRequest, SupportRequest};
use crate::error::Result;

/// Storage operations for employees and support requests.
///
/// Every insert is committed on its own; there are no multi-statement
/// transactions.
pub trait SurveyStore: Send + Sync {
    /// Create the tables if they do not exist. Safe to call repeatedly.
    fn initialize(&self) -> Result<()>;

    /// Insert an employee. Returns the new surrogate id.
    fn insert_employee(&self, employee: &NewEmployee) -> Result<i32>;

    /// Insert a support request. Returns the new surrogate id.
    fn insert_support_request(&self, request: &NewSupportRequest) -> Result<i32>;

    /// Load every employee, oldest first.
    fn load_employees(&self) -> Result<Vec<Employee>>;

    /// Load every support request, oldest first.
    fn load_support_requests(&self) -> Result<Vec<SupportRequest>>;
}
