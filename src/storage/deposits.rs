//! Deposit repository
//!
//! Deposits are appended as-is; two deposits with equal fields are both kept.

use std::path::PathBuf;

use super::ledger::{LedgerStore, StoreKind};
use crate::error::LedgerResult;
use crate::models::AccountDeposit;

#[derive(Debug)]
pub struct DepositRepository {
    store: LedgerStore,
}

impl DepositRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            store: LedgerStore::new(StoreKind::Deposits, path),
        }
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn insert(&self, deposit: &AccountDeposit) -> LedgerResult<usize> {
        self.store.append(deposit)
    }

    /// All stored deposits, oldest first
    pub fn get_all(&self) -> LedgerResult<Vec<AccountDeposit>> {
        self.store.load_records()
    }
}
