use std::fmt;

/// Result type for tenure-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operation needs at least one recorded activity
    EmptyDomain,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyDomain => {
                write!(f, "Empty activity list: no timestamps to derive from")
            }
        }
    }
}

impl std::error::Error for Error {}
