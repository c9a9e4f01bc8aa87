//! Balance display formatting

use super::text::{format_epoch, separator};
use crate::models::BalanceSnapshot;

/// Format a freshly calculated balance
pub fn format_balance(snapshot: &BalanceSnapshot) -> String {
    format!(
        "IBAN:    {}\nBalance: {}\nTime:    {} UTC\n",
        snapshot.iban,
        snapshot.balance,
        format_epoch(snapshot.time)
    )
}

/// Format the recorded snapshots of an IBAN
pub fn format_balance_history(iban: &str, snapshots: &[BalanceSnapshot]) -> String {
    if snapshots.is_empty() {
        return format!("No balances recorded for {}.\n", iban);
    }

    let mut output = String::new();
    output.push_str(&format!("Balance history: {}\n\n", iban));
    output.push_str(&format!("{:19} {:>14}\n", "Time (UTC)", "Balance"));
    output.push_str(&separator(34));
    output.push('\n');

    for snapshot in snapshots {
        output.push_str(&format!(
            "{:19} {:>14}\n",
            format_epoch(snapshot.time),
            snapshot.balance.to_string()
        ));
    }

    output
}
