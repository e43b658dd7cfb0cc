use std::fmt;

/// Result type for tenure-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// Commit store error
    Store(tenure_store::Error),

    /// Variable name outside the recognized set
    InvalidVariable(String),

    /// Duration math over an empty activity list with no explicit snapshot
    EmptyDomain,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(err) => write!(f, "Store error: {}", err),
            Error::InvalidVariable(var) => write!(f, "Not a valid variable: {}", var),
            Error::EmptyDomain => {
                write!(f, "No activity to derive a snapshot from: empty activity list")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::InvalidVariable(_) | Error::EmptyDomain => None,
        }
    }
}

impl From<tenure_store::Error> for Error {
    fn from(err: tenure_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<tenure_types::Error> for Error {
    fn from(err: tenure_types::Error) -> Self {
        match err {
            tenure_types::Error::EmptyDomain => Error::EmptyDomain,
        }
    }
}
