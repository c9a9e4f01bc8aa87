//! IBAN helper commands
//!
//! These never touch a store.

use clap::Subcommand;

use crate::error::LedgerResult;
use crate::validation::{generate_iban, validate_iban};

/// IBAN subcommands
#[derive(Subcommand)]
pub enum IbanCommands {
    /// Check the format and control digits of an IBAN
    Validate {
        iban: String,
    },
    /// Build a valid ES IBAN from a 20-digit account number
    Generate {
        bban: String,
    },
}

/// Handle an IBAN command
pub fn handle_iban_command(cmd: IbanCommands) -> LedgerResult<()> {
    match cmd {
        IbanCommands::Validate { iban } => {
            validate_iban(&iban)?;
            println!("{} is valid", iban);
        }

        IbanCommands::Generate { bban } => {
            println!("{}", generate_iban(&bban)?);
        }
    }

    Ok(())
}
