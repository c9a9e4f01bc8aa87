//! Input validation for transfers, deposits and balance queries
//!
//! Validators take the raw caller-supplied strings and either return the
//! parsed value or the [`LedgerError`](crate::error::LedgerError) describing
//! the first rule that failed.

pub mod fields;
pub mod iban;

pub use fields::{
    validate_concept, validate_deposit_amount, validate_transfer_amount, validate_transfer_date,
    validate_transfer_date_on, validate_transfer_type,
};
pub use iban::{generate_iban, validate_iban};
