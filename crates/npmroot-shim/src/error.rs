//! Error types for shim parsing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot build shim pattern for package '{package}': {source}")]
    InvalidPattern {
        package: String,
        source:  regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
