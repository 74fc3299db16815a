use std::path::PathBuf;

/// Errors raised when decoding game actions from their JSON form.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("malformed action '{input}': {source}")]
    Malformed {
        input: String,
        source: serde_json::Error,
    },
}

/// Errors that stop playback of an action script.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("line {line}: {source}")]
    Action { line: usize, source: ActionError },

    #[error("line {line}: failed to read script: {source}")]
    Read { line: usize, source: std::io::Error },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("unknown log level '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLevel(String),

    #[error("failed to open log file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("a global log subscriber is already installed")]
    AlreadyInstalled,
}
