use std::fmt;

/// Custom error type for ezprompt
#[derive(Debug)]
pub enum Error {
    /// Error building a prompt with an unrecognized output format
    UnknownFormat(String),
    /// Error resolving a template placeholder with no override and no default
    MissingVariable(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownFormat(format) => write!(f, "Unknown prompt format: {}", format),
            Error::MissingVariable(name) => {
                write!(f, "Missing required template variable: {}", name)
            }
        }
    }
}

impl std::error::Error for Error {}

/// A specialized Result type for ezprompt operations
pub type Result<T> = std::result::Result<T, Error>;
