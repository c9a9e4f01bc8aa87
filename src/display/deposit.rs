//! Deposit display formatting

use super::text::{format_epoch, prefix, separator};
use crate::models::{AccountDeposit, Money};

/// Format stored deposits as a table
///
/// Deposits whose signature no longer matches their fields are flagged with `!`.
pub fn format_deposit_list(deposits: &[AccountDeposit]) -> String {
    if deposits.is_empty() {
        return "No deposits found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:19} {:24} {:>12}  {}\n",
        "Time (UTC)", "IBAN", "Amount", "Signature"
    ));
    output.push_str(&separator(80));
    output.push('\n');

    for deposit in deposits {
        let flag = if deposit.has_valid_signature() { ' ' } else { '!' };
        output.push_str(&format!(
            "{} {:19} {:24} {:>12}  {}\n",
            flag,
            format_epoch(deposit.deposit_timestamp()),
            deposit.to_iban(),
            format_amount(deposit.deposit_amount()),
            prefix(deposit.deposit_signature(), 16)
        ));
    }

    output.push_str(&format!("\nTotal: {} deposit(s)\n", deposits.len()));
    output
}

/// Format the result of a signature check
pub fn format_verification(checked: usize, tampered: &[AccountDeposit]) -> String {
    if tampered.is_empty() {
        return format!("All {} deposit signature(s) verified.\n", checked);
    }

    let mut output = format!(
        "{} of {} deposit signature(s) do not match their records:\n",
        tampered.len(),
        checked
    );
    for deposit in tampered {
        output.push_str(&format!(
            "  {} {} {}\n",
            deposit.deposit_signature(),
            deposit.to_iban(),
            format_amount(deposit.deposit_amount())
        ));
    }
    output
}

fn format_amount(amount: f64) -> String {
    match Money::from_f64(amount) {
        Some(money) => money.to_string(),
        None => amount.to_string(),
    }
}
