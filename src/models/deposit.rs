//! Deposit model
//!
//! An account deposit is an immutable value: every field, including the
//! signature, is fixed when it is built. A deposit read back from the store
//! can be checked with [`AccountDeposit::has_valid_signature`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::money::Money;
use super::timestamp::epoch_seconds;
use crate::crypto::{deposit_signature, SIGNATURE_ALGORITHM};

/// Value of the `type` field of every deposit record
pub const DEPOSIT_RECORD_TYPE: &str = "DEPOSIT";

/// A deposit into an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDeposit {
    alg: String,
    #[serde(rename = "type")]
    record_type: String,
    to_iban: String,
    deposit_amount: f64,
    deposit_timestamp: f64,
    deposit_signature: String,
}

impl AccountDeposit {
    /// Create a deposit stamped with the current time
    pub fn new(to_iban: impl Into<String>, amount: Money) -> Self {
        Self::at(to_iban, amount, Utc::now())
    }

    /// Create a deposit stamped with the given instant
    pub fn at(to_iban: impl Into<String>, amount: Money, at: DateTime<Utc>) -> Self {
        Self::from_parts(to_iban, amount.to_f64(), epoch_seconds(at))
    }

    /// Create a deposit from raw amount and timestamp values
    pub fn from_parts(to_iban: impl Into<String>, deposit_amount: f64, deposit_timestamp: f64) -> Self {
        let mut deposit = Self {
            alg: SIGNATURE_ALGORITHM.to_string(),
            record_type: DEPOSIT_RECORD_TYPE.to_string(),
            to_iban: to_iban.into(),
            deposit_amount,
            deposit_timestamp,
            deposit_signature: String::new(),
        };
        deposit.deposit_signature = deposit.recompute_signature();
        deposit
    }

    pub fn alg(&self) -> &str {
        &self.alg
    }

    pub fn record_type(&self) -> &str {
        &self.record_type
    }

    pub fn to_iban(&self) -> &str {
        &self.to_iban
    }

    pub fn deposit_amount(&self) -> f64 {
        self.deposit_amount
    }

    /// UTC epoch seconds at construction
    pub fn deposit_timestamp(&self) -> f64 {
        self.deposit_timestamp
    }

    /// Signature frozen at construction (or as read from the store)
    pub fn deposit_signature(&self) -> &str {
        &self.deposit_signature
    }

    /// Signature derived from the current field values
    pub fn recompute_signature(&self) -> String {
        deposit_signature(
            &self.alg,
            &self.record_type,
            &self.to_iban,
            self.deposit_amount,
            self.deposit_timestamp,
        )
    }

    /// Whether the stored signature still matches the fields
    pub fn has_valid_signature(&self) -> bool {
        self.deposit_signature == self.recompute_signature()
    }
}
