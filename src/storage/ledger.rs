//! Append-only JSON-array stores
//!
//! A [`LedgerStore`] is one file holding a JSON array of records. Appending
//! reads the whole array, pushes the new record and rewrites the file. The
//! cycle runs under a per-store mutex, so callers sharing one `LedgerStore`
//! in a process never interleave; separate processes are not coordinated.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use super::file_io::{read_json, read_json_required, write_json_atomic};
use crate::error::{LedgerError, LedgerResult};

/// The four kinds of store the ledger knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Transfers,
    Deposits,
    /// Populated externally; read-only here and required to exist
    Transactions,
    Balances,
}

impl StoreKind {
    pub fn all() -> &'static [StoreKind] {
        &[
            Self::Transfers,
            Self::Deposits,
            Self::Transactions,
            Self::Balances,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Transfers => "transfers",
            Self::Deposits => "deposits",
            Self::Transactions => "transactions",
            Self::Balances => "balances",
        }
    }

    /// Stores owned by another system: missing is an error, writes are refused
    pub fn is_external(&self) -> bool {
        matches!(self, Self::Transactions)
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One JSON-array store file
#[derive(Debug)]
pub struct LedgerStore {
    kind: StoreKind,
    path: PathBuf,
    lock: Mutex<()>,
}

impl LedgerStore {
    pub fn new(kind: StoreKind, path: PathBuf) -> Self {
        Self {
            kind,
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn kind(&self) -> StoreKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the raw records
    ///
    /// A missing file is an empty list, except for external stores where it
    /// is [`LedgerError::StoreUnreadable`]. Anything that is not a JSON array
    /// is [`LedgerError::MalformedStore`].
    pub fn load(&self) -> LedgerResult<Vec<Value>> {
        let records: Vec<Value> = if self.kind.is_external() {
            read_json_required(&self.path)?
        } else {
            read_json(&self.path)?
        };
        tracing::debug!(store = %self.kind, count = records.len(), "store loaded");
        Ok(records)
    }

    /// Load and decode every record as `T`
    pub fn load_records<T: DeserializeOwned>(&self) -> LedgerResult<Vec<T>> {
        self.load()?
            .into_iter()
            .enumerate()
            .map(|(index, value)| self.decode(index, value))
            .collect()
    }

    /// Decode one raw record of this store
    pub fn decode<T: DeserializeOwned>(&self, index: usize, value: Value) -> LedgerResult<T> {
        serde_json::from_value(value)
            .map_err(|e| LedgerError::malformed(&self.path, format!("record {}: {}", index, e)))
    }

    /// Append a record, returning the new record count
    pub fn append<T: Serialize>(&self, record: &T) -> LedgerResult<usize> {
        self.append_checked(record, |_| Ok(()))
    }

    /// Append a record after `check` accepts the current contents
    ///
    /// `check` runs under the store lock on the freshly loaded records; if it
    /// fails the file is left untouched.
    pub fn append_checked<T, F>(&self, record: &T, check: F) -> LedgerResult<usize>
    where
        T: Serialize,
        F: FnOnce(&[Value]) -> LedgerResult<()>,
    {
        if self.kind.is_external() {
            return Err(LedgerError::StoreWrite(format!(
                "{} store is read-only: {}",
                self.kind,
                self.path.display()
            )));
        }

        let _guard = self.lock.lock().map_err(|e| {
            LedgerError::StoreWrite(format!("Failed to acquire {} store lock: {}", self.kind, e))
        })?;

        let mut records = self.load()?;
        check(&records)?;

        records.push(serde_json::to_value(record)?);
        write_json_atomic(&self.path, &records)?;

        tracing::info!(store = %self.kind, count = records.len(), "record appended");
        Ok(records.len())
    }
}
