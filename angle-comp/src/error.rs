//! Error types for angle-comp

use std::fmt;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Numeric field of an `MCAngleCompSin` reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Amplitude,
    Phase,
    Offset,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Amplitude => "amplitude",
            Field::Phase => "phase",
            Field::Offset => "offset",
        };
        f.write_str(name)
    }
}

/// angle-comp error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reply did not split into the expected number of tokens
    #[error("Malformed reply: expected {expected} tokens, got {actual}")]
    Format {
        /// Token count of a well-formed reply
        expected: usize,
        /// Token count actually found
        actual: usize,
    },

    /// Numeric field is neither signed decimal nor hexadecimal
    #[error("Invalid {field} field: {token:?}")]
    Parse {
        /// Field the token was read for
        field: Field,
        /// Offending token text
        token: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be read or written
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl Error {
    /// Non-zero status code for callers that report integer results.
    ///
    /// A successful decode corresponds to status 0.
    pub fn status_code(&self) -> i32 {
        match self {
            Error::Format { .. } => 1,
            Error::Parse { .. } => 2,
            Error::Io(_) => 3,
            Error::Config(_) => 4,
            Error::InvalidParameter(_) => 5,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_field() {
        let err = Error::Parse {
            field: Field::Phase,
            token: "XYZ".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid phase field: \"XYZ\"");
        assert_eq!(err.status_code(), 2);
    }

    #[test]
    fn test_format_error_message() {
        let err = Error::Format {
            expected: 5,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Malformed reply: expected 5 tokens, got 3"
        );
        assert_ne!(err.status_code(), 0);
    }
}
