//! Spanish IBAN validation
//!
//! An IBAN is accepted when it is `ES` followed by 22 ASCII digits and its
//! check digits satisfy ISO 7064 mod-97-10: with the check digits zeroed and
//! the first four characters moved to the end, letters replaced by
//! `A=10 .. Z=35`, the check digits must equal `98 - (value mod 97)`.
//!
//! The rearranged value has 26 digits, which overflows `u64`. Two equivalent
//! reductions are provided: [`checksum_horner`] folds the digits one by one
//! modulo 97, [`checksum_wide`] parses the whole value into a `u128`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{LedgerError, LedgerResult};

/// Country prefix accepted by the validator
pub const COUNTRY_CODE: &str = "ES";

/// Number of digits after the country code (2 check digits + 20 account digits)
pub const IBAN_DIGITS: usize = 22;

static IBAN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ES[0-9]{22}$").expect("Invalid IBAN regex pattern"));

/// Validate a Spanish IBAN, returning it unchanged on success
pub fn validate_iban(iban: &str) -> LedgerResult<&str> {
    if !IBAN_PATTERN.is_match(iban) {
        tracing::debug!(iban, "IBAN rejected: format");
        return Err(LedgerError::InvalidFormat(iban.to_string()));
    }

    let (country, rest) = iban.split_at(2);
    let (check, bban) = rest.split_at(2);
    let actual: u32 = check
        .parse()
        .map_err(|_| LedgerError::InvalidFormat(iban.to_string()))?;
    let expected = expected_check_digits(country, bban);

    if actual != expected {
        tracing::debug!(iban, expected, "IBAN rejected: check digits");
        return Err(LedgerError::InvalidCheckDigit {
            iban: iban.to_string(),
            expected,
        });
    }

    Ok(iban)
}

/// Check digits an IBAN with this country code and account body must carry
///
/// The result is in `2..=98`.
pub fn expected_check_digits(country: &str, bban: &str) -> u32 {
    98 - checksum_horner(&rearranged_digits(country, bban))
}

/// Build a valid `ES` IBAN from a 20-digit account body
pub fn generate_iban(bban: &str) -> LedgerResult<String> {
    if bban.len() != IBAN_DIGITS - 2 || !bban.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LedgerError::InvalidFormat(bban.to_string()));
    }
    let check = expected_check_digits(COUNTRY_CODE, bban);
    Ok(format!("{}{:02}{}", COUNTRY_CODE, check, bban))
}

/// Rearranged numeric string: account body, then the country code with its
/// letters substituted, then the zeroed check digits
pub fn rearranged_digits(country: &str, bban: &str) -> String {
    let mut digits = String::with_capacity(bban.len() + country.len() * 2 + 2);
    for c in bban.chars().chain(country.chars()).chain("00".chars()) {
        if c.is_ascii_alphabetic() {
            let value = c.to_ascii_uppercase() as u32 - 'A' as u32 + 10;
            digits.push_str(&value.to_string());
        } else {
            digits.push(c);
        }
    }
    digits
}

/// `value mod 97` computed digit by digit; non-digits are skipped
pub fn checksum_horner(digits: &str) -> u32 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0, |acc, d| (acc * 10 + d) % 97)
}

/// `value mod 97` over the whole value as a `u128`
///
/// Returns `None` if the string is not all digits or exceeds 38 digits.
pub fn checksum_wide(digits: &str) -> Option<u32> {
    if digits.is_empty() || digits.len() > 38 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u128 = digits.parse().ok()?;
    Some((value % 97) as u32)
}
