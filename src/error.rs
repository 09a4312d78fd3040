use std::io;
use std::path::PathBuf;

/// Errors raised by the identification engine and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}: unknown algorithm")]
    UnknownAlgorithm(String),

    #[error("{name}: invalid algorithm name, {reason}")]
    InvalidAlgorithmName { name: String, reason: String },

    #[error("{0}: threshold must be 0.0 to 1.0")]
    InvalidThreshold(f64),

    #[error("{name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("{name}: cannot load database, {reason}")]
    Load { name: String, reason: String },

    #[error("{name}: cannot write database, {reason}")]
    Write { name: String, reason: String },

    #[error("{name}: short write, expected {expected} bytes, wrote {written}")]
    ShortWrite {
        name: String,
        expected: usize,
        written: usize,
    },

    #[error("{0}: license file not found")]
    LicenseFileNotFound(String),

    #[error("{}: {reason}", path.display())]
    Archive { path: PathBuf, reason: String },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config: {0}")]
    Config(String),
}

impl Error {
    /// Configuration errors are rejected before any processing starts.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::UnknownAlgorithm(_)
                | Error::InvalidAlgorithmName { .. }
                | Error::InvalidThreshold(_)
                | Error::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
