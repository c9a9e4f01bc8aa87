//! Display formatting for terminal output
//!
//! Plain-text tables for stored transfers, deposits, balance snapshots and
//! audit entries. Columns are aligned by hand.

pub mod audit;
pub mod balance;
pub mod deposit;
pub mod text;
pub mod transfer;

pub use audit::format_audit_entries;
pub use balance::{format_balance, format_balance_history};
pub use deposit::{format_deposit_list, format_verification};
pub use transfer::format_transfer_list;
