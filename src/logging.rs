//! Structured logging setup shared by the binaries.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::error::LoggingError;

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Truncated on open. The terminal UI logs here so output never lands on
    /// the alternate screen.
    File(PathBuf),
}

/// Parse a level name such as `"info"` or `"DEBUG"`.
pub fn parse_level(level: &str) -> Result<Level, LoggingError> {
    level
        .parse::<Level>()
        .map_err(|_| LoggingError::InvalidLevel(level.to_string()))
}

/// Install the global fmt subscriber. `RUST_LOG` takes precedence over
/// `level` when set.
pub fn init(level: &str, target: LogTarget) -> Result<(), LoggingError> {
    let level = parse_level(level)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = std::fs::File::create(&path)
                .map_err(|source| LoggingError::FileOpen { path, source })?;
            builder
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
        }
    };
    installed.map_err(|_| LoggingError::AlreadyInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_level("WARN").unwrap(), Level::WARN);
        assert_eq!(parse_level("trace").unwrap(), Level::TRACE);
    }

    #[test]
    fn test_parse_level_rejects_unknown() {
        let err = parse_level("chatty").unwrap_err();
        assert!(matches!(err, LoggingError::InvalidLevel(ref name) if name == "chatty"));
    }

    #[test]
    fn test_init_reports_unopenable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("drop_four.log");
        let err = init("info", LogTarget::File(path.clone())).unwrap_err();
        assert!(matches!(err, LoggingError::FileOpen { path: ref p, .. } if *p == path));
    }
}
