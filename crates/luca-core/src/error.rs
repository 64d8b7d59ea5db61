//! Error types for luca-core.

use thiserror::Error;

/// Result type for luca-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in luca-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The preference store rejected a read or write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored or supplied theme value is neither "light" nor "dark".
    #[error("Invalid theme '{0}', expected \"light\" or \"dark\"")]
    InvalidTheme(String),
}
