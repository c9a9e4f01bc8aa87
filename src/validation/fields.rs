//! Field validators for transfer and deposit requests

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, MoneyParseError, TransferType};

/// Date format of transfer dates (`DD/MM/YYYY`)
pub const TRANSFER_DATE_FORMAT: &str = "%d/%m/%Y";

/// Accepted range of transfer years, inclusive
pub const MIN_TRANSFER_YEAR: i32 = 2025;
pub const MAX_TRANSFER_YEAR: i32 = 2050;

/// Accepted transfer amounts, inclusive
pub const MIN_TRANSFER_AMOUNT: Money = Money::from_cents(10_00);
pub const MAX_TRANSFER_AMOUNT: Money = Money::from_cents(10_000_00);

const CONCEPT_MIN_CHARS: usize = 10;
const CONCEPT_MAX_CHARS: usize = 30;

static CONCEPT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z]+(\s[a-zA-Z]+)+$").expect("Invalid concept regex pattern")
});

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-2][0-9]|3[0-1])/(0[0-9]|1[0-2])/[0-9]{4}$")
        .expect("Invalid date regex pattern")
});

static DEPOSIT_AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^EUR [0-9]{4}\.[0-9]{2}$").expect("Invalid deposit amount regex pattern")
});

/// Validate a transfer concept
///
/// 10 to 30 characters on a single line, made of at least two runs of ASCII
/// letters separated by single whitespace characters.
pub fn validate_concept(concept: &str) -> LedgerResult<&str> {
    let length = concept.chars().count();
    if !(CONCEPT_MIN_CHARS..=CONCEPT_MAX_CHARS).contains(&length)
        || concept.contains('\n')
        || !CONCEPT_PATTERN.is_match(concept)
    {
        return Err(LedgerError::InvalidConcept(concept.to_string()));
    }
    Ok(concept)
}

/// Validate a transfer date against the current UTC date
pub fn validate_transfer_date(date: &str) -> LedgerResult<NaiveDate> {
    validate_transfer_date_on(date, Utc::now().date_naive())
}

/// Validate a `DD/MM/YYYY` transfer date against `today`
///
/// Checks run in order: shape, calendar validity, not before `today`, year in
/// range. A past date is reported as [`LedgerError::DateInPast`] even when
/// its year is also out of range.
pub fn validate_transfer_date_on(date: &str, today: NaiveDate) -> LedgerResult<NaiveDate> {
    if !DATE_PATTERN.is_match(date) {
        return Err(LedgerError::InvalidDateFormat(date.to_string()));
    }

    let parsed = NaiveDate::parse_from_str(date, TRANSFER_DATE_FORMAT)
        .map_err(|_| LedgerError::InvalidDateFormat(date.to_string()))?;

    if parsed < today {
        return Err(LedgerError::DateInPast(date.to_string()));
    }

    if !(MIN_TRANSFER_YEAR..=MAX_TRANSFER_YEAR).contains(&parsed.year()) {
        return Err(LedgerError::InvalidDateFormat(format!(
            "{} (year must be between {} and {})",
            date, MIN_TRANSFER_YEAR, MAX_TRANSFER_YEAR
        )));
    }

    Ok(parsed)
}

/// Validate a transfer type token (`ORDINARY`, `INMEDIATE` or `URGENT`)
pub fn validate_transfer_type(transfer_type: &str) -> LedgerResult<TransferType> {
    transfer_type
        .parse()
        .map_err(|_| LedgerError::InvalidTransferType(transfer_type.to_string()))
}

/// Validate a transfer amount: a decimal with at most two fraction digits
/// within 10 to 10000 inclusive
pub fn validate_transfer_amount(raw: &str) -> LedgerResult<Money> {
    let amount = Money::parse(raw).map_err(|e| match e {
        MoneyParseError::TooPrecise(_) => {
            LedgerError::InvalidAmount(format!("{} (more than two decimal places)", raw))
        }
        MoneyParseError::InvalidFormat(_) => LedgerError::InvalidAmount(raw.to_string()),
    })?;

    if amount < MIN_TRANSFER_AMOUNT || amount > MAX_TRANSFER_AMOUNT {
        return Err(LedgerError::InvalidAmount(format!(
            "{} (must be between {} and {})",
            raw, MIN_TRANSFER_AMOUNT, MAX_TRANSFER_AMOUNT
        )));
    }

    Ok(amount)
}

/// Validate a deposit amount of the form `EUR dddd.dd`, strictly positive
pub fn validate_deposit_amount(raw: &str) -> LedgerResult<Money> {
    let numeric = raw
        .strip_prefix("EUR ")
        .filter(|_| DEPOSIT_AMOUNT_PATTERN.is_match(raw))
        .ok_or_else(|| LedgerError::InvalidDepositAmount(raw.to_string()))?;

    let amount =
        Money::parse(numeric).map_err(|_| LedgerError::InvalidDepositAmount(raw.to_string()))?;

    if !amount.is_positive() {
        return Err(LedgerError::InvalidDepositAmount(format!(
            "{} (deposit must be greater than 0)",
            raw
        )));
    }

    Ok(amount)
}
