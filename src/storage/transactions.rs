//! Transaction repository
//!
//! Read-only view of the externally maintained transactions store. The file
//! must exist: it is never created here.

use std::path::PathBuf;

use super::ledger::{LedgerStore, StoreKind};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, TransactionRecord};

#[derive(Debug)]
pub struct TransactionRepository {
    store: LedgerStore,
}

/// Sum of the transactions of one IBAN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IbanTotal {
    /// Number of transactions referencing the IBAN
    pub matched: usize,
    pub total: Money,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            store: LedgerStore::new(StoreKind::Transactions, path),
        }
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// All transactions in file order
    pub fn get_all(&self) -> LedgerResult<Vec<TransactionRecord>> {
        self.store.load_records()
    }

    /// Count and sum the transactions whose IBAN equals `iban` exactly
    ///
    /// A sum that leaves the representable range is reported as a malformed
    /// store.
    pub fn total_for(&self, iban: &str) -> LedgerResult<IbanTotal> {
        let mut totals = IbanTotal {
            matched: 0,
            total: Money::zero(),
        };

        for transaction in self.get_all()?.into_iter().filter(|t| t.iban == iban) {
            totals.matched += 1;
            totals.total = totals.total.checked_add(transaction.amount).ok_or_else(|| {
                LedgerError::malformed(
                    self.store.path(),
                    format!("sum of amounts for {} overflows", iban),
                )
            })?;
        }

        Ok(totals)
    }
}
