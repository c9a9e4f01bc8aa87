//! Audit logging for ledger appends
//!
//! Every record appended to a store is also written to an append-only audit
//! log as one JSON line, so the stores can be reconciled against the order in
//! which records were accepted.
//!
//! - `AuditEntry`: one appended record with its store, identifier and body.
//! - `AuditLogger`: writes and reads the line-delimited JSON (JSONL) log.
//!
//! # Example
//!
//! ```rust,ignore
//! use account_ledger::audit::{AuditEntry, AuditLogger};
//! use account_ledger::storage::StoreKind;
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::append(StoreKind::Transfers, transfer.transfer_code(), &transfer);
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::AuditEntry;
pub use logger::AuditLogger;
