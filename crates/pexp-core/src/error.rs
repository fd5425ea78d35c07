//! Error types for pexp

use thiserror::Error;

/// pexp error type
#[derive(Error, Debug)]
pub enum Error {
    /// A required input was not supplied
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// An input was supplied but is non-numeric or out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error comes from input validation (as opposed to I/O or parsing).
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::MissingInput(_) | Error::InvalidParameter(_))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_kinds() {
        assert!(Error::MissingInput("q".into()).is_validation());
        assert!(Error::InvalidParameter("rate".into()).is_validation());
        let io = Error::from(std::io::Error::other("boom"));
        assert!(!io.is_validation());
    }

    #[test]
    fn test_message_names_parameter() {
        let e = Error::InvalidParameter("rate must be a positive number".into());
        assert_eq!(e.to_string(), "Invalid parameter: rate must be a positive number");
    }
}
