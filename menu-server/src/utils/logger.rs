//! Logging Infrastructure
//!
//! `tracing` subscriber setup. `RUST_LOG` takes precedence over the
//! configured level.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional JSON output and daily file output
///
/// Calling it twice is harmless: the second registration is ignored.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("info")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    let file_appender = log_dir.and_then(|dir| {
        let path = Path::new(dir);
        if let Err(e) = std::fs::create_dir_all(path) {
            eprintln!("Cannot create log directory {}: {}", dir, e);
            return None;
        }
        Some(tracing_appender::rolling::daily(path, "menu-server.log"))
    });

    // Only the first initialization wins
    let _ = match (json, file_appender) {
        (true, Some(appender)) => builder
            .json()
            .with_writer(appender)
            .with_ansi(false)
            .try_init(),
        (true, None) => builder.json().try_init(),
        (false, Some(appender)) => builder.with_writer(appender).with_ansi(false).try_init(),
        (false, None) => builder.try_init(),
    };
}
