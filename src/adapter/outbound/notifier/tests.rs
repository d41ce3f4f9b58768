use super::{LogNotifier, NullNotifier};
use crate::application::SurveyService;
use crate::application::DEFAULT_SNAPSHOT_TTL;
use crate::port::{Notice, Notifier};
use crate::testkit::store::FailingStore;
use std::sync::Arc;

#[test]
fn test_log_notifier_accepts_notices() {
    LogNotifier.notify(Notice::new("database is locked"));
}

#[test]
fn test_null_notifier() {
    let notifier = NullNotifier;
    notifier.notify(Notice::new("ignored"));
}

#[test]
fn test_service_failures_reach_log_notifier() {
    let service = SurveyService::new(
        Arc::new(FailingStore::new("disk I/O error")),
        Arc::new(LogNotifier),
        DEFAULT_SNAPSHOT_TTL,
    );
    assert!(!service.save_support_request("help"));
    assert!(service.all_employees().is_empty());
}
