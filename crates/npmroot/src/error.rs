use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The only failure a resolution surfaces; everything else ends as "not found".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("OS '{0}' is not supported")]
    UnsupportedPlatform(String),
}
