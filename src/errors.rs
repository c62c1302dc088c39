use std::fmt::{Debug, Display, Formatter, Result};

/// Represents errors that can occur outside the ingestion hot path.
///
/// Parsing and storage of market data never fail: malformed segments degrade to
/// partially populated records and a full ring buffer evicts. This enum covers the
/// remaining fallible surfaces: code-table lookups, configuration, snapshot
/// restore and persistence.
///
/// # Examples
///
/// ```
/// use fixmd::FixMdError;
///
/// let error = FixMdError::InvalidFieldValue {
///     field: "SubscriptionRequestType".to_string(),
///     value: "9".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid value for field SubscriptionRequestType: 9");
/// ```
pub enum FixMdError {
    /// Error that occurs when parsing fails with a specific message.
    ParseError {
        /// Descriptive message explaining the parsing failure
        message: String,
    },

    /// Error indicating a field has an invalid value.
    ///
    /// Raised by code-table conversions such as subscription kinds or entry types.
    InvalidFieldValue {
        /// The name of the field with the invalid value
        field: String,
        /// The invalid value as a string representation
        value: String,
    },

    /// Error indicating a configuration value cannot be used.
    InvalidConfiguration {
        /// Explanation of the rejected setting
        message: String,
    },

    /// Error raised by the filesystem while persisting market data.
    Io {
        /// Descriptive message with the I/O failure details
        message: String,
    },

    /// Error raised when serialization of internal data structures fails.
    SerializationError {
        /// Descriptive message with the serialization failure details
        message: String,
    },

    /// Error raised when deserialization of external data into internal structures fails.
    DeserializationError {
        /// Descriptive message with the deserialization failure details
        message: String,
    },

    /// Error raised when a checksum validation fails while restoring a snapshot.
    ChecksumMismatch {
        /// The checksum that was expected according to the serialized payload
        expected: String,
        /// The checksum that was computed from the provided payload
        actual: String,
    },
}

impl FixMdError {
    fn describe(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FixMdError::ParseError { message } => write!(f, "{message}"),
            FixMdError::InvalidFieldValue { field, value } => {
                write!(f, "Invalid value for field {field}: {value}")
            }
            FixMdError::InvalidConfiguration { message } => {
                write!(f, "Invalid configuration: {message}")
            }
            FixMdError::Io { message } => write!(f, "I/O error: {message}"),
            FixMdError::SerializationError { message } => {
                write!(f, "Serialization error: {message}")
            }
            FixMdError::DeserializationError { message } => {
                write!(f, "Deserialization error: {message}")
            }
            FixMdError::ChecksumMismatch { expected, actual } => {
                write!(f, "Checksum mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

impl Display for FixMdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.describe(f)
    }
}

impl Debug for FixMdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.describe(f)
    }
}

impl std::error::Error for FixMdError {}

impl From<std::io::Error> for FixMdError {
    fn from(error: std::io::Error) -> Self {
        FixMdError::Io {
            message: error.to_string(),
        }
    }
}
