//! Transfer repository
//!
//! Appends transfers to the transfers store, refusing any transfer whose six
//! identifying fields match a stored one.

use std::collections::HashSet;
use std::path::PathBuf;

use serde_json::Value;

use super::ledger::{LedgerStore, StoreKind};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{TransferKey, TransferRequest};

/// Repository for transfer persistence with duplicate detection
#[derive(Debug)]
pub struct TransferRepository {
    store: LedgerStore,
}

impl TransferRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            store: LedgerStore::new(StoreKind::Transfers, path),
        }
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// Append a transfer unless a stored transfer has the same dedup key
    pub fn insert(&self, transfer: &TransferRequest) -> LedgerResult<usize> {
        let key = transfer.dedup_key();
        self.store.append_checked(transfer, |existing| {
            if self.index(existing)?.contains(&key) {
                tracing::warn!(
                    code = transfer.transfer_code(),
                    from = transfer.from_iban(),
                    to = transfer.to_iban(),
                    "duplicate transfer rejected"
                );
                return Err(LedgerError::DuplicateTransfer(
                    transfer.transfer_code().to_string(),
                ));
            }
            Ok(())
        })
    }

    /// All stored transfers, oldest first
    pub fn get_all(&self) -> LedgerResult<Vec<TransferRequest>> {
        self.store.load_records()
    }

    pub fn count(&self) -> LedgerResult<usize> {
        Ok(self.store.load()?.len())
    }

    /// Dedup keys of the given raw records
    fn index(&self, records: &[Value]) -> LedgerResult<HashSet<TransferKey>> {
        records
            .iter()
            .enumerate()
            .map(|(i, value)| self.store.decode(i, value.clone()))
            .collect()
    }
}
