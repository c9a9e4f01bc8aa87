//! Balance CLI commands

use clap::Subcommand;

use crate::display::{format_balance, format_balance_history};
use crate::error::LedgerResult;
use crate::services::BalanceService;
use crate::storage::Storage;

/// Balance subcommands
#[derive(Subcommand)]
pub enum BalanceCommands {
    /// Calculate and record the balance of an IBAN
    Calculate {
        iban: String,
    },
    /// Show the recorded balances of an IBAN
    History {
        iban: String,
    },
}

/// Handle a balance command
pub fn handle_balance_command(storage: &Storage, cmd: BalanceCommands) -> LedgerResult<()> {
    let service = BalanceService::new(storage);

    match cmd {
        BalanceCommands::Calculate { iban } => {
            let snapshot = service.calculate_balance(&iban)?;
            print!("{}", format_balance(&snapshot));
        }

        BalanceCommands::History { iban } => {
            let snapshots = service.history(&iban)?;
            print!("{}", format_balance_history(&iban, &snapshots));
        }
    }

    Ok(())
}
