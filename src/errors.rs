use thiserror::Error;

/// Configuration values that parse but make no sense for a game.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be between 0 and 1, got {value}")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    NegativeGold { field: &'static str, value: i32 },
}

/// Failures outside the hunt itself: setup, scripts and terminal I/O.
#[derive(Debug, Error)]
pub enum HuntError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("script {path}: {source}")]
    Script {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("summary serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
