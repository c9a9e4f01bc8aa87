//! Deposit CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::display::{format_deposit_list, format_verification};
use crate::error::LedgerResult;
use crate::services::DepositService;
use crate::storage::Storage;

/// Deposit subcommands
#[derive(Subcommand)]
pub enum DepositCommands {
    /// Process a deposit request file and print the deposit signature
    ///
    /// The file holds {"IBAN": "ES..", "AMOUNT": "EUR dddd.dd"}.
    Process {
        /// Path to the JSON request
        input_file: PathBuf,
    },
    /// List recorded deposits
    List,
    /// Check every recorded deposit against its signature
    Verify,
}

/// Handle a deposit command
pub fn handle_deposit_command(storage: &Storage, cmd: DepositCommands) -> LedgerResult<()> {
    let service = DepositService::new(storage);

    match cmd {
        DepositCommands::Process { input_file } => {
            let signature = service.deposit_from_file(&input_file)?;
            println!("{}", signature);
        }

        DepositCommands::List => {
            let deposits = service.list()?;
            print!("{}", format_deposit_list(&deposits));
        }

        DepositCommands::Verify => {
            let checked = service.list()?.len();
            let tampered = service.verify_signatures()?;
            print!("{}", format_verification(checked, &tampered));
        }
    }

    Ok(())
}
