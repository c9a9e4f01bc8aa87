//! account-ledger - validated transfers, signed deposits and balances
//!
//! This library validates bank transfer requests between Spanish IBANs,
//! records signed account deposits, and computes account balances from an
//! externally maintained transactions file. Every record is appended to a
//! JSON-array file; nothing is ever updated in place.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Transfer, deposit and balance records, and `Money`
//! - `validation`: IBAN checksum and field validators
//! - `crypto`: SHA-256 deposit signatures and transfer codes
//! - `storage`: JSON-array stores with atomic rewrites
//! - `services`: Transfer, deposit and balance operations
//! - `audit`: Audit logging of every append
//! - `cli`, `display`: Command handlers and terminal output
//!
//! # Example
//!
//! ```rust,ignore
//! use account_ledger::config::{LedgerPaths, Settings};
//! use account_ledger::services::BalanceService;
//! use account_ledger::storage::Storage;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! let snapshot = BalanceService::new(&storage).calculate_balance("ES9121000418450200051332")?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod validation;

pub use error::{LedgerError, LedgerResult};
