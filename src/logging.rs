//! Logging setup for applications embedding the Ala Trie.
//!
//! The trie itself only emits `tracing` events; installing a subscriber is
//! left to the embedding application, which can use [`init_logging`].

use crate::config::{LogConfig, Validate};
use crate::error::{AlaError, AlaResult};
use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level when it parses.
///
/// # Errors
///
/// * `AlaError::Config` if the log configuration is invalid
/// * `AlaError::Logging` if a global subscriber is already installed
pub fn init_logging(config: &LogConfig) -> AlaResult<()> {
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AlaError::Logging(format!("Invalid log filter: {e}")))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_thread_names(true);

    let installed = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed
        .map_err(|e| AlaError::Logging(format!("Failed to set global tracing subscriber: {e}")))
}
