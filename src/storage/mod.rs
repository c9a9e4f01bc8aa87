//! Storage layer for the account ledger
//!
//! Four JSON-array stores live in the data directory. Appends are atomic
//! (temp file plus rename) and serialized per store within a process.

pub mod balances;
pub mod deposits;
pub mod file_io;
pub mod ledger;
pub mod transactions;
pub mod transfers;

pub use balances::BalanceRepository;
pub use deposits::DepositRepository;
pub use file_io::{read_json, read_json_required, write_json_atomic};
pub use ledger::{LedgerStore, StoreKind};
pub use transactions::{IbanTotal, TransactionRepository};
pub use transfers::TransferRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;

/// Main storage coordinator that provides access to all repositories
#[derive(Debug)]
pub struct Storage {
    paths: LedgerPaths,
    pub transfers: TransferRepository,
    pub deposits: DepositRepository,
    pub transactions: TransactionRepository,
    pub balances: BalanceRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with store names taken from `settings`
    pub fn new(paths: LedgerPaths, settings: &Settings) -> LedgerResult<Self> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            transfers: TransferRepository::new(paths.store_file(StoreKind::Transfers, settings)),
            deposits: DepositRepository::new(paths.store_file(StoreKind::Deposits, settings)),
            transactions: TransactionRepository::new(
                paths.store_file(StoreKind::Transactions, settings),
            ),
            balances: BalanceRepository::new(paths.store_file(StoreKind::Balances, settings)),
            audit,
            paths,
        })
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// The underlying store of a given kind
    pub fn store(&self, kind: StoreKind) -> &LedgerStore {
        match kind {
            StoreKind::Transfers => self.transfers.store(),
            StoreKind::Deposits => self.deposits.store(),
            StoreKind::Transactions => self.transactions.store(),
            StoreKind::Balances => self.balances.store(),
        }
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record an append in the audit log
    ///
    /// The record is already durable in its store, so a failing audit write
    /// is logged and otherwise ignored.
    pub fn log_append<T: Serialize>(&self, kind: StoreKind, record_id: &str, record: &T) {
        if let Some(logger) = &self.audit {
            let entry = AuditEntry::append(kind, record_id, record);
            if let Err(e) = logger.log(&entry) {
                tracing::error!(store = %kind, error = %e, "failed to write audit entry");
            }
        }
    }
}
