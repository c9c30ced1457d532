//! Log subscriber setup.
//!
//! Logs go to stderr so stdout stays parseable for `--json` output.

use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_LOG_LEVEL, LOG_ENV};

/// Pick the filter: `DIARY_LOG`, then the config file level, then the default.
pub fn build_filter(config_level: Option<&str>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return filter;
    }
    config_level
        .and_then(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

pub fn init(config_level: Option<&str>) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Err(err) = result {
        eprintln!("Warning: failed to initialize logging: {}", err);
    }
}
