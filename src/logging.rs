//! Structured logging setup
//!
//! Logs go to stderr so generated code on stdout stays clean. The filter comes
//! from `CURLPY_LOG` when set, otherwise from `-v` / `--debug`.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "CURLPY_LOG";

/// Level used when `CURLPY_LOG` is not set
pub fn level_for(verbose: u8, debug: bool) -> LevelFilter {
    if debug {
        return LevelFilter::DEBUG;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: u8, debug: bool, format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose, debug).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    installed.ok();
}
