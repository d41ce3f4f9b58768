//! Composition root: turn a [`Config`] into a ready [`SurveyService`].

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::sqlite::SqliteSurveyStore;
use crate::application::SurveyService;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::Notifier;

/// Open the configured database and wrap it in a service.
///
/// Tables are not created here; call [`SurveyService::initialize`].
///
/// # Errors
/// Returns an error if the database cannot be opened.
pub fn build_service(config: &Config, notifier: Arc<dyn Notifier>) -> Result<SurveyService> {
    let store = SqliteSurveyStore::open(
        &config.database.path,
        config.database.connection_options(),
    )?;
    info!(
        database = %config.database.path,
        ttl_secs = config.cache.ttl_secs,
        "Survey service ready"
    );
    Ok(SurveyService::new(
        Arc::new(store),
        notifier,
        config.cache.ttl(),
    ))
}
