//! Signatures for ledger records
//!
//! Deposit signatures and transfer codes are SHA-256 digests over a fixed
//! canonical string. No key is involved: a signature shows that a record's
//! fields have not changed since it was created, nothing more.

pub mod signature;

pub use signature::{
    canonical_number, deposit_signature, deposit_signature_string, sha256_hex, transfer_code,
    transfer_code_string, SIGNATURE_ALGORITHM,
};
