use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use staffsurvey::adapter::outbound::sqlite::database::connection::ConnectionOptions;
use staffsurvey::adapter::outbound::sqlite::SqliteSurveyStore;
use staffsurvey::application::SurveyService;
use staffsurvey::testkit::clock::ManualClock;
use staffsurvey::testkit::notifier::RecordingNotifier;
use tempfile::TempDir;

/// Temporary on-disk survey database for integration tests.
pub struct TempDb {
    _dir: TempDir,
    path: PathBuf,
}

impl TempDb {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("employee_data.db");
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> SqliteSurveyStore {
        SqliteSurveyStore::open(
            &self.path.display().to_string(),
            ConnectionOptions::default(),
        )
        .expect("open sqlite store")
    }

    /// A service over a fresh store, with its own notifier and manual clock.
    pub fn service(&self, ttl: Duration) -> (SurveyService, RecordingNotifier, ManualClock) {
        let notifier = RecordingNotifier::new();
        let clock = ManualClock::new();
        let service = SurveyService::with_clock(
            Arc::new(self.store()),
            Arc::new(notifier.clone()),
            ttl,
            Arc::new(clock.clone()),
        );
        (service, notifier, clock)
    }
}
