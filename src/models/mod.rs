//! Core data models for the account ledger
//!
//! Records persisted to the JSON stores (transfers, deposits, balance
//! snapshots) and the read-only transaction entries balances are computed
//! from.

pub mod balance;
pub mod deposit;
pub mod money;
pub mod timestamp;
pub mod transfer;

pub use balance::{BalanceSnapshot, TransactionRecord};
pub use deposit::{AccountDeposit, DEPOSIT_RECORD_TYPE};
pub use money::{Money, MoneyParseError};
pub use timestamp::{epoch_seconds, now_epoch_seconds};
pub use transfer::{TransferKey, TransferRequest, TransferType};
