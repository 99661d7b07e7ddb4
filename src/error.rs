use thiserror::Error;

/// Errors raised by the drivers around the sorters.
///
/// The sorters themselves cannot fail; an out-of-range index would be a bug, not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),
    #[error("no algorithms selected for benchmarking")]
    NoAlgorithms,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
