//! Survey storage service.
//!
//! Wraps a [`SurveyStore`] with the contract a form host expects: writes
//! report success as a boolean, reads degrade to empty values, and every
//! failure is shown to the user through the [`Notifier`] instead of being
//! returned. The employees snapshot is memoized for a fixed TTL and is not
//! refreshed by writes, so a read right after a save may miss the new row
//! until the TTL elapses or [`SurveyService::invalidate_employees`] is called.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::application::cache::TtlCache;
use crate::domain::{NewEmployee, NewSupportRequest, SupportRequest, Table};
use crate::error::Error;
use crate::port::{Clock, Notice, Notifier, SurveyStore, SystemClock};

/// Default lifetime of the employees snapshot.
pub const DEFAULT_SNAPSHOT_TTL: Duration = Duration::from_secs(600);

/// Storage facade shared by every caller in the process.
pub struct SurveyService {
    store: Arc<dyn SurveyStore>,
    notifier: Arc<dyn Notifier>,
    employees: TtlCache<Table>,
}

impl SurveyService {
    /// Create a service on the system clock with the given snapshot TTL.
    #[must_use]
    pub fn new(store: Arc<dyn SurveyStore>, notifier: Arc<dyn Notifier>, ttl: Duration) -> Self {
        Self::with_clock(store, notifier, ttl, Arc::new(SystemClock))
    }

    /// Create a service with an injected clock.
    #[must_use]
    pub fn with_clock(
        store: Arc<dyn SurveyStore>,
        notifier: Arc<dyn Notifier>,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            notifier,
            employees: TtlCache::new(ttl, clock),
        }
    }

    /// Create the tables if needed. Returns `false` after notifying on error.
    pub fn initialize(&self) -> bool {
        match self.store.initialize() {
            Ok(()) => true,
            Err(error) => {
                self.report("Failed to initialize the database", &error);
                false
            }
        }
    }

    /// Store one employee submission.
    pub fn save_employee(
        &self,
        full_name: &str,
        age: i32,
        department: &str,
        title: &str,
        status: &str,
    ) -> bool {
        let employee = NewEmployee::new(full_name, age, department, title, status);
        match self.store.insert_employee(&employee) {
            Ok(id) => {
                debug!(id, "Employee saved");
                true
            }
            Err(error) => {
                self.report("Database error while saving employee", &error);
                false
            }
        }
    }

    /// Store one support request.
    pub fn save_support_request(&self, content: &str) -> bool {
        match self
            .store
            .insert_support_request(&NewSupportRequest::new(content))
        {
            Ok(id) => {
                debug!(id, "Support request saved");
                true
            }
            Err(error) => {
                self.report("Database error while saving support request", &error);
                false
            }
        }
    }

    /// Snapshot of every employee, memoized for the configured TTL.
    ///
    /// On failure the user is notified and an empty table is returned. That
    /// empty table is memoized like any other result.
    pub fn all_employees(&self) -> Table {
        self.employees
            .get_or_insert_with(|| match self.store.load_employees() {
                Ok(employees) => Table::from_employees(&employees),
                Err(error) => {
                    self.report("Could not load data from the database", &error);
                    Table::empty()
                }
            })
    }

    /// Drop the memoized snapshot so the next read hits storage.
    pub fn invalidate_employees(&self) {
        self.employees.invalidate();
    }

    /// Every support request, read straight from storage.
    pub fn support_requests(&self) -> Vec<SupportRequest> {
        self.store.load_support_requests().unwrap_or_else(|error| {
            self.report("Could not load support requests", &error);
            Vec::new()
        })
    }

    fn report(&self, context: &str, error: &Error) {
        warn!(error = %error, "{context}");
        self.notifier.notify(Notice::new(format!("{context}: {error}")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::SqliteSurveyStore;
    use crate::domain::table::{Cell, STATUS};
    use crate::testkit::clock::ManualClock;
    use crate::testkit::notifier::RecordingNotifier;
    use crate::testkit::store::{CountingStore, FailingStore};
    use std::sync::atomic::Ordering;

    struct Harness {
        service: SurveyService,
        notifier: RecordingNotifier,
        clock: ManualClock,
    }

    fn harness(store: Arc<dyn SurveyStore>) -> Harness {
        let notifier = RecordingNotifier::new();
        let clock = ManualClock::new();
        let service = SurveyService::with_clock(
            store,
            Arc::new(notifier.clone()),
            DEFAULT_SNAPSHOT_TTL,
            Arc::new(clock.clone()),
        );
        Harness {
            service,
            notifier,
            clock,
        }
    }

    fn sqlite_harness() -> Harness {
        let store = SqliteSurveyStore::in_memory().unwrap();
        let harness = harness(Arc::new(store));
        assert!(harness.service.initialize());
        harness
    }

    #[test]
    fn initialize_twice_succeeds_without_notices() {
        let h = sqlite_harness();
        assert!(h.service.initialize());
        assert!(h.notifier.is_empty());
    }

    #[test]
    fn saved_employee_appears_after_cache_expiry() {
        let h = sqlite_harness();
        assert!(h.service.all_employees().is_empty());

        assert!(h
            .service
            .save_employee("Nguyen Van A", 30, "IT", "Engineer", "Updated"));

        assert!(h.service.all_employees().is_empty());

        h.clock.advance(DEFAULT_SNAPSHOT_TTL);
        let table = h.service.all_employees();
        assert_eq!(table.len(), 1);
        let row = &table.rows()[0];
        assert_eq!(row[0], Cell::from("Nguyen Van A"));
        assert_eq!(row[1], Cell::Integer(30));
        assert_eq!(row[2], Cell::from("IT"));
        assert_eq!(row[3], Cell::from("Engineer"));
        assert_eq!(row[4], Cell::from("Updated"));
        assert!(!row[5].is_null());
    }

    #[test]
    fn invalidate_bypasses_the_cache() {
        let h = sqlite_harness();
        h.service.all_employees();
        h.service.save_employee("A", 22, "IT", "Intern", "Pending");

        h.service.invalidate_employees();
        assert_eq!(h.service.all_employees().len(), 1);
    }

    #[test]
    fn repeated_reads_do_not_touch_storage() {
        let store = CountingStore::new(SqliteSurveyStore::in_memory().unwrap());
        let loads = store.loads();
        let h = harness(Arc::new(store));
        h.service.initialize();

        for _ in 0..5 {
            h.service.all_employees();
        }
        assert_eq!(loads.load(Ordering::SeqCst), 1);

        h.clock.advance(Duration::from_secs(601));
        h.service.all_employees();
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn support_request_is_persisted() {
        let h = sqlite_harness();
        assert!(h.service.save_support_request("Need password reset"));

        let requests = h.service.support_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].content, "Need password reset");
    }

    #[test]
    fn write_failures_notify_and_return_false() {
        let h = harness(Arc::new(FailingStore::new("disk I/O error")));

        assert!(!h.service.initialize());
        assert!(!h.service.save_employee("A", 30, "IT", "Engineer", "Updated"));
        assert!(!h.service.save_support_request("help"));

        let messages = h.notifier.messages();
        assert_eq!(messages.len(), 3);
        assert!(messages[1].starts_with("Database error while saving employee"));
        assert!(messages[1].contains("disk I/O error"));
        assert!(messages[2].starts_with("Database error while saving support request"));
    }

    #[test]
    fn read_failure_yields_empty_table_and_one_notice() {
        let h = harness(Arc::new(FailingStore::new("no such table")));

        let table = h.service.all_employees();
        assert!(table.is_empty());
        assert!(!table.has_column(STATUS));

        // The failed read is memoized too.
        h.service.all_employees();
        assert_eq!(h.notifier.len(), 1);
        assert!(h.service.support_requests().is_empty());
        assert_eq!(h.notifier.len(), 2);
    }
}
