//! Custom error types for the account ledger
//!
//! Every validation, storage and parsing failure is a variant of
//! [`LedgerError`]. The `Display` output of a variant is the human-readable
//! reason reported to the caller.

use std::path::Path;

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// IBAN is not `ES` followed by 22 digits
    #[error("Invalid IBAN format: {0}")]
    InvalidFormat(String),

    /// IBAN check digits do not match the mod-97 checksum
    #[error("Invalid IBAN control digit: {iban} (expected {expected:02})")]
    InvalidCheckDigit { iban: String, expected: u32 },

    /// Transfer concept fails the length or word rules
    #[error("Invalid concept format: '{0}'")]
    InvalidConcept(String),

    /// Transfer date is malformed, not a calendar date, or out of range
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    /// Transfer date is before today
    #[error("Transfer date must be today or later: {0}")]
    DateInPast(String),

    #[error("Invalid transfer type: {0}")]
    InvalidTransferType(String),

    /// Transfer amount is not a decimal, too precise, or out of range
    #[error("Invalid transfer amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid deposit amount: {0}")]
    InvalidDepositAmount(String),

    /// Deposit input is missing a key, has an extra key, or has a non-string value
    #[error("Invalid key in deposit input: {0}")]
    InvalidInputKey(String),

    /// A stored transfer already matches on all six identifying fields
    #[error("Duplicated transfer in transfer list: {0}")]
    DuplicateTransfer(String),

    /// No transaction in the transactions store references this IBAN
    #[error("IBAN not found: {0}")]
    IbanNotFound(String),

    /// Deposit input file does not exist
    #[error("Input file not found: {0}")]
    InputNotFound(String),

    /// A required store file is missing or cannot be opened
    #[error("Wrong file or file path: {0}")]
    StoreUnreadable(String),

    /// A store file exists but is not a JSON array of the expected records
    #[error("JSON decode error in {path}: {reason}")]
    MalformedStore { path: String, reason: String },

    /// Rewriting a store file failed
    #[error("Failed to write store: {0}")]
    StoreWrite(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl LedgerError {
    /// Create a "malformed store" error for a file
    pub fn malformed(path: &Path, reason: impl ToString) -> Self {
        Self::MalformedStore {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_check_digit_display_pads_expected() {
        let err = LedgerError::InvalidCheckDigit {
            iban: "ES0134567890123456789012".into(),
            expected: 7,
        };
        assert_eq!(
            err.to_string(),
            "Invalid IBAN control digit: ES0134567890123456789012 (expected 07)"
        );
    }

    #[test]
    fn test_malformed_store_display() {
        let err = LedgerError::malformed(Path::new("/tmp/transfers.json"), "expected value");
        assert_eq!(
            err.to_string(),
            "JSON decode error in /tmp/transfers.json: expected value"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LedgerError = io_err.into();
        assert!(matches!(err, LedgerError::Io(_)));
    }
}
