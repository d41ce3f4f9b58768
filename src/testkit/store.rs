//! Store doubles.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::{Employee, NewEmployee, NewSupportRequest, SupportRequest};
use crate::error::{Error, Result};
use crate::port::SurveyStore;

/// Store whose every operation fails with a database error.
#[derive(Debug, Clone)]
pub struct FailingStore {
    reason: String,
}

impl FailingStore {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T>(&self) -> Result<T> {
        Err(Error::Database(self.reason.clone()))
    }
}

impl SurveyStore for FailingStore {
    fn initialize(&self) -> Result<()> {
        self.fail()
    }

    fn insert_employee(&self, _employee: &NewEmployee) -> Result<i32> {
        self.fail()
    }

    fn insert_support_request(&self, _request: &NewSupportRequest) -> Result<i32> {
        self.fail()
    }

    fn load_employees(&self) -> Result<Vec<Employee>> {
        self.fail()
    }

    fn load_support_requests(&self) -> Result<Vec<SupportRequest>> {
        self.fail()
    }
}

/// Wraps a store and counts how often employees are loaded.
pub struct CountingStore<S> {
    inner: S,
    loads: Arc<AtomicUsize>,
}

impl<S: SurveyStore> CountingStore<S> {
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handle to the load counter.
    #[must_use]
    pub fn loads(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.loads)
    }
}

impl<S: SurveyStore> SurveyStore for CountingStore<S> {
    fn initialize(&self) -> Result<()> {
        self.inner.initialize()
    }

    fn insert_employee(&self, employee: &NewEmployee) -> Result<i32> {
        self.inner.insert_employee(employee)
    }

    fn insert_support_request(&self, request: &NewSupportRequest) -> Result<i32> {
        self.inner.insert_support_request(request)
    }

    fn load_employees(&self) -> Result<Vec<Employee>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.inner.load_employees()
    }

    fn load_support_requests(&self) -> Result<Vec<SupportRequest>> {
        self.inner.load_support_requests()
    }
}
