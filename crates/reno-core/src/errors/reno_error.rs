use super::ConfigError;

/// Top-level error for the fallible edges around the scoring core.
#[derive(Debug, thiserror::Error)]
pub enum RenoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read proposal snapshot {path}: {source}")]
    SnapshotRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse proposal snapshot {path}: {message}")]
    SnapshotParse { path: String, message: String },

    #[error("no job template configured for category '{category}'")]
    UnknownJobCategory { category: String },
}

pub type RenoResult<T> = Result<T, RenoError>;
