// Error type for the recoverable failures of the crate
//
// Only I/O and input parsing can fail at runtime. Contract violations inside
// the search core (illegal moves, malformed positions) panic instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to parse JSON on line {line}: {source}")]
    LogEntry {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("turn {0} not found in log file")]
    MissingTurn(u32),
}

impl EngineError {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        EngineError::Io {
            path: path.into(),
            source,
        }
    }
}
