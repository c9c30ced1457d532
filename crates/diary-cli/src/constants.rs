//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors, and server errors)
/// - 2: Misuse of shell command (reserved by shells and clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Entry not found.
    pub const NOT_FOUND: i32 = 3;

    /// Form validation failed or arguments were invalid.
    pub const INVALID_INPUT: i32 = 4;
}

/// Environment variable holding the `tracing` filter directive.
pub const LOG_ENV: &str = "DIARY_LOG";

/// Filter used when neither `DIARY_LOG` nor the config file sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
