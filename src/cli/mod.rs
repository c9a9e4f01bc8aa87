//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod balance;
pub mod deposit;
pub mod iban;
pub mod transfer;

pub use balance::{handle_balance_command, BalanceCommands};
pub use deposit::{handle_deposit_command, DepositCommands};
pub use iban::{handle_iban_command, IbanCommands};
pub use transfer::{handle_transfer_command, TransferCommands};
