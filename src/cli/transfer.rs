//! Transfer CLI commands

use clap::Subcommand;

use crate::display::format_transfer_list;
use crate::error::LedgerResult;
use crate::services::TransferService;
use crate::storage::Storage;

/// Transfer subcommands
#[derive(Subcommand)]
pub enum TransferCommands {
    /// Submit a transfer and print its transfer code
    Submit {
        /// Source IBAN
        from_iban: String,
        /// Destination IBAN
        to_iban: String,
        /// Concept: two or more words, 10 to 30 characters
        concept: String,
        /// Transfer type (ORDINARY, INMEDIATE, URGENT)
        transfer_type: String,
        /// Transfer date (DD/MM/YYYY), today or later
        date: String,
        /// Amount between 10 and 10000, at most two decimals
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// List recorded transfers
    List,
}

/// Handle a transfer command
pub fn handle_transfer_command(storage: &Storage, cmd: TransferCommands) -> LedgerResult<()> {
    let service = TransferService::new(storage);

    match cmd {
        TransferCommands::Submit {
            from_iban,
            to_iban,
            concept,
            transfer_type,
            date,
            amount,
        } => {
            let code =
                service.submit(&from_iban, &to_iban, &concept, &transfer_type, &date, &amount)?;
            println!("{}", code);
        }

        TransferCommands::List => {
            let transfers = service.list()?;
            print!("{}", format_transfer_list(&transfers));
        }
    }

    Ok(())
}
