use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArmadaError {
    #[error("failed to persist development record at {path:?}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read development record at {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("development record at {path:?} is not valid JSON")]
    CorruptRecord {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("volume path is not valid UTF-8: {0:?}")]
    NonUtf8Path(PathBuf),

    #[error("session scope unavailable: parent process id is not supported on this platform")]
    SessionUnavailable,

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArmadaError>;
