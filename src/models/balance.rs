//! Balance models
//!
//! [`TransactionRecord`] is one movement in the externally maintained
//! transactions store. [`BalanceSnapshot`] is the result of one balance
//! calculation, appended to the balances store.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// One ledger movement: a signed amount against an IBAN
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "IBAN")]
    pub iban: String,
    pub amount: Money,
}

/// Balance of an IBAN at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    #[serde(rename = "IBAN")]
    pub iban: String,
    /// UTC epoch seconds when the balance was calculated
    pub time: f64,
    #[serde(rename = "BALANCE")]
    pub balance: Money,
}

impl BalanceSnapshot {
    pub fn new(iban: impl Into<String>, time: f64, balance: Money) -> Self {
        Self {
            iban: iban.into(),
            time,
            balance,
        }
    }
}
