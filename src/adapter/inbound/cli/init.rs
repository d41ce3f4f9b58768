//! Handler for the `init` command.

use crate::adapter::inbound::cli::output;
use crate::infrastructure::config::Config;

/// Report the database that was prepared at startup.
pub fn execute(config: &Config) -> bool {
    output::success("Database ready");
    output::field("Database", &config.database.path);
    true
}
