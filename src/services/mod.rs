//! Service layer for the account ledger
//!
//! Services validate caller input, build records and hand them to the
//! storage layer. Each one borrows a [`Storage`](crate::storage::Storage)
//! for the duration of a call.

pub mod balance;
pub mod deposit;
pub mod transfer;

pub use balance::BalanceService;
pub use deposit::DepositService;
pub use transfer::TransferService;
