//! Balance service
//!
//! Sums the externally maintained transactions of an IBAN and appends the
//! result to the balances store as a snapshot.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{now_epoch_seconds, BalanceSnapshot};
use crate::storage::{Storage, StoreKind};
use crate::validation::validate_iban;

/// Service for account balances
pub struct BalanceService<'a> {
    storage: &'a Storage,
}

impl<'a> BalanceService<'a> {
    /// Create a new balance service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Calculate the balance of an IBAN and record it as a snapshot
    ///
    /// The IBAN must appear in at least one transaction; a zero sum over
    /// matching transactions is a valid balance.
    pub fn calculate_balance(&self, iban: &str) -> LedgerResult<BalanceSnapshot> {
        let iban = validate_iban(iban)?;

        let totals = self.storage.transactions.total_for(iban)?;
        if totals.matched == 0 {
            return Err(LedgerError::IbanNotFound(iban.to_string()));
        }

        let snapshot = BalanceSnapshot::new(iban, now_epoch_seconds(), totals.total);
        self.storage.balances.insert(&snapshot)?;
        self.storage.log_append(StoreKind::Balances, iban, &snapshot);

        tracing::info!(
            iban,
            transactions = totals.matched,
            balance = %snapshot.balance,
            "balance recorded"
        );

        Ok(snapshot)
    }

    /// Recorded snapshots of an IBAN, oldest first
    pub fn history(&self, iban: &str) -> LedgerResult<Vec<BalanceSnapshot>> {
        let iban = validate_iban(iban)?;
        self.storage.balances.get_by_iban(iban)
    }
}
