//! Canonical strings and SHA-256 signatures
//!
//! The canonical deposit string is
//!
//! ```text
//! {alg:<ALG>,typ:<TYPE>,iban:<IBAN>,amount:<AMOUNT>,deposit_date:<TIMESTAMP>}
//! ```
//!
//! Numbers are rendered with [`canonical_number`], so a signature depends on
//! the exact floating-point value held by the record.

use sha2::{Digest, Sha256};

/// Name of the digest used for deposit signatures
pub const SIGNATURE_ALGORITHM: &str = "SHA-256";

/// Shortest round-trip rendering of a float, always with a fractional part
///
/// `10.0`, `1234.5`, `1700000000.25`. Values of magnitude below `1e-4` or
/// from `1e16` upward switch to exponent notation.
pub fn canonical_number(value: f64) -> String {
    format!("{:?}", value)
}

/// Lowercase hex SHA-256 digest of a UTF-8 string
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Canonical string signed for a deposit
pub fn deposit_signature_string(
    alg: &str,
    record_type: &str,
    iban: &str,
    amount: f64,
    timestamp: f64,
) -> String {
    format!(
        "{{alg:{},typ:{},iban:{},amount:{},deposit_date:{}}}",
        alg,
        record_type,
        iban,
        canonical_number(amount),
        canonical_number(timestamp)
    )
}

/// Signature of a deposit with the given fields
pub fn deposit_signature(
    alg: &str,
    record_type: &str,
    iban: &str,
    amount: f64,
    timestamp: f64,
) -> String {
    sha256_hex(&deposit_signature_string(
        alg,
        record_type,
        iban,
        amount,
        timestamp,
    ))
}

/// Canonical string a transfer code is derived from
pub fn transfer_code_string(
    from_iban: &str,
    to_iban: &str,
    transfer_type: &str,
    transfer_date: &str,
    transfer_amount: f64,
    transfer_concept: &str,
) -> String {
    format!(
        "{{from_iban:{},to_iban:{},transfer_type:{},transfer_date:{},transfer_amount:{},transfer_concept:{}}}",
        from_iban,
        to_iban,
        transfer_type,
        transfer_date,
        canonical_number(transfer_amount),
        transfer_concept
    )
}

/// Transfer code for the given fields
pub fn transfer_code(
    from_iban: &str,
    to_iban: &str,
    transfer_type: &str,
    transfer_date: &str,
    transfer_amount: f64,
    transfer_concept: &str,
) -> String {
    sha256_hex(&transfer_code_string(
        from_iban,
        to_iban,
        transfer_type,
        transfer_date,
        transfer_amount,
        transfer_concept,
    ))
}
