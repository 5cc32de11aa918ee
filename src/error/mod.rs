//! Error types for fileslice.

use std::fmt;

/// Errors that can occur while slicing a source file.
#[derive(Debug)]
pub enum SliceError {
    /// An I/O error occurred while loading the source file.
    Io(std::io::Error),

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// A worker failed while producing its chunk range.
    ///
    /// Fatal to the whole invocation: partial results are discarded and the
    /// caller may re-invoke from scratch.
    Worker {
        /// Description of the worker failure.
        message: String,
    },
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceError::Io(e) => write!(f, "io error: {}", e),
            SliceError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            SliceError::Worker { message } => {
                write!(f, "worker failed: {}", message)
            }
        }
    }
}

impl std::error::Error for SliceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SliceError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SliceError {
    fn from(e: std::io::Error) -> Self {
        SliceError::Io(e)
    }
}

/// Errors raised by decimal-string addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericStringError {
    /// One of the operands was empty.
    Empty,

    /// One of the operands contained a non-digit character.
    NonDigit,
}

impl fmt::Display for NumericStringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericStringError::Empty => write!(f, "operand must be a non-empty string"),
            NumericStringError::NonDigit => {
                write!(f, "operand must contain only ASCII digits")
            }
        }
    }
}

impl std::error::Error for NumericStringError {}

/// Errors raised by calendar date-range computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRangeError {
    /// The month interval was zero.
    NonPositiveInterval,

    /// The computed start date fell outside the representable calendar range.
    OutOfRange,
}

impl fmt::Display for DateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRangeError::NonPositiveInterval => {
                write!(f, "interval must be a positive number of months")
            }
            DateRangeError::OutOfRange => write!(f, "date out of representable range"),
        }
    }
}

impl std::error::Error for DateRangeError {}

/// Errors raised by the encrypt/decrypt helpers.
#[cfg(feature = "crypt")]
#[derive(Debug)]
pub enum CryptError {
    /// The value could not be serialized or deserialized as JSON.
    Json(serde_json::Error),

    /// The ciphertext was not valid base64.
    Decode(base64::DecodeError),

    /// The ciphertext was too short to contain a nonce.
    Malformed,

    /// Encryption or decryption failed (wrong key or tampered data).
    Cipher,
}

#[cfg(feature = "crypt")]
impl fmt::Display for CryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptError::Json(e) => write!(f, "json error: {}", e),
            CryptError::Decode(e) => write!(f, "base64 decode error: {}", e),
            CryptError::Malformed => write!(f, "ciphertext too short"),
            CryptError::Cipher => write!(f, "cipher operation failed"),
        }
    }
}

#[cfg(feature = "crypt")]
impl std::error::Error for CryptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CryptError::Json(e) => Some(e),
            CryptError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "crypt")]
impl From<serde_json::Error> for CryptError {
    fn from(e: serde_json::Error) -> Self {
        CryptError::Json(e)
    }
}

#[cfg(feature = "crypt")]
impl From<base64::DecodeError> for CryptError {
    fn from(e: base64::DecodeError) -> Self {
        CryptError::Decode(e)
    }
}
