//! Transfer display formatting

use super::text::{prefix, separator, truncate};
use crate::models::TransferRequest;

/// Format stored transfers as a table
pub fn format_transfer_list(transfers: &[TransferRequest]) -> String {
    if transfers.is_empty() {
        return "No transfers found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:24} {:24} {:9} {:>10}  {:20} {}\n",
        "Date", "From", "To", "Type", "Amount", "Concept", "Code"
    ));
    output.push_str(&separator(125));
    output.push('\n');

    for transfer in transfers {
        output.push_str(&format!(
            "{:10} {:24} {:24} {:9} {:>10}  {:20} {}\n",
            transfer.transfer_date().format("%d/%m/%Y").to_string(),
            transfer.from_iban(),
            transfer.to_iban(),
            transfer.transfer_type().as_str(),
            transfer.transfer_amount().to_string(),
            truncate(transfer.transfer_concept(), 20),
            prefix(transfer.transfer_code(), 12)
        ));
    }

    output.push_str(&format!("\nTotal: {} transfer(s)\n", transfers.len()));
    output
}
