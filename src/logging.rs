//! Diagnostic logging on stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `rtimesheet=debug`.
pub const LOG_ENV: &str = "RTIMESHEET_LOG";

/// Initialize the global tracing subscriber.
///
/// `RTIMESHEET_LOG` wins when set; otherwise `verbose` picks the level
/// (0 → warn, 1 → info, 2+ → debug). Calling it twice is harmless.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    tracing::debug!("logging initialized at {default_level}");
}
