//! Logging Infrastructure
//!
//! Structured logging via `tracing-subscriber`, optionally written to a
//! daily rolling file.

use std::path::Path;

/// Log file prefix inside the log directory
pub const LOG_FILE_PREFIX: &str = "hotel-server";

/// Initialize the logger with optional file output
///
/// `log_level` accepts `trace`..`error`; anything unparsable falls back to
/// `info`. When `log_dir` does not exist it is created; if that fails logs
/// go to stdout. Calling this twice is a no-op.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = parse_level(log_level);

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if (log_path.exists() || std::fs::create_dir_all(log_path).is_ok())
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, LOG_FILE_PREFIX);
            let _ = subscriber.with_writer(file_appender).try_init();
            return;
        }
    }

    let _ = subscriber.try_init();
}

fn parse_level(log_level: Option<&str>) -> tracing::Level {
    log_level
        .and_then(|level| level.parse().ok())
        .unwrap_or(tracing::Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), tracing::Level::DEBUG);
        assert_eq!(parse_level(Some("WARN")), tracing::Level::WARN);
        assert_eq!(parse_level(Some("loud")), tracing::Level::INFO);
        assert_eq!(parse_level(None), tracing::Level::INFO);
    }

    #[test]
    fn test_file_logger_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");
        init_logger_with_file(Some("debug"), logs.to_str());
        assert!(logs.is_dir());
    }
}
