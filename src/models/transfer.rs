//! Transfer model
//!
//! A transfer request moves an amount between two IBANs on a given date. Its
//! `transfer_code` is derived from the other six fields when the request is
//! built and never changes afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::crypto::transfer_code;
use crate::validation::fields::TRANSFER_DATE_FORMAT;

/// Processing speed requested for a transfer
///
/// `INMEDIATE` is the accepted spelling on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferType {
    Ordinary,
    Inmediate,
    Urgent,
}

impl TransferType {
    /// Wire token for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ordinary => "ORDINARY",
            Self::Inmediate => "INMEDIATE",
            Self::Urgent => "URGENT",
        }
    }

    /// All transfer types
    pub fn all() -> &'static [TransferType] {
        &[Self::Ordinary, Self::Inmediate, Self::Urgent]
    }
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransferType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown transfer type: {}", s))
    }
}

/// `DD/MM/YYYY` serde representation of transfer dates
mod transfer_date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TRANSFER_DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(TRANSFER_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, TRANSFER_DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// A validated, persisted transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    from_iban: String,
    to_iban: String,
    transfer_type: TransferType,
    #[serde(with = "transfer_date_format")]
    transfer_date: NaiveDate,
    transfer_amount: Money,
    transfer_concept: String,
    transfer_code: String,
}

impl TransferRequest {
    /// Build a transfer from already-validated fields and derive its code
    pub fn new(
        from_iban: impl Into<String>,
        to_iban: impl Into<String>,
        transfer_concept: impl Into<String>,
        transfer_type: TransferType,
        transfer_date: NaiveDate,
        transfer_amount: Money,
    ) -> Self {
        let mut transfer = Self {
            from_iban: from_iban.into(),
            to_iban: to_iban.into(),
            transfer_type,
            transfer_date,
            transfer_amount,
            transfer_concept: transfer_concept.into(),
            transfer_code: String::new(),
        };
        transfer.transfer_code = transfer.compute_code();
        transfer
    }

    pub fn from_iban(&self) -> &str {
        &self.from_iban
    }

    pub fn to_iban(&self) -> &str {
        &self.to_iban
    }

    pub fn transfer_type(&self) -> TransferType {
        self.transfer_type
    }

    pub fn transfer_date(&self) -> NaiveDate {
        self.transfer_date
    }

    pub fn transfer_amount(&self) -> Money {
        self.transfer_amount
    }

    pub fn transfer_concept(&self) -> &str {
        &self.transfer_concept
    }

    /// Identifier handed back to the caller
    pub fn transfer_code(&self) -> &str {
        &self.transfer_code
    }

    /// Recompute the code from the current fields
    pub fn compute_code(&self) -> String {
        transfer_code(
            &self.from_iban,
            &self.to_iban,
            self.transfer_type.as_str(),
            &self.transfer_date.format(TRANSFER_DATE_FORMAT).to_string(),
            self.transfer_amount.to_f64(),
            &self.transfer_concept,
        )
    }

    /// The six fields whose joint equality makes two transfers duplicates
    pub fn dedup_key(&self) -> TransferKey {
        TransferKey {
            from_iban: self.from_iban.clone(),
            to_iban: self.to_iban.clone(),
            transfer_date: self.transfer_date,
            transfer_amount: self.transfer_amount,
            transfer_concept: self.transfer_concept.clone(),
            transfer_type: self.transfer_type,
        }
    }
}

/// Duplicate-detection key of a transfer
///
/// Deserializes from a full stored transfer record; the code is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct TransferKey {
    pub from_iban: String,
    pub to_iban: String,
    #[serde(with = "transfer_date_format")]
    pub transfer_date: NaiveDate,
    pub transfer_amount: Money,
    pub transfer_concept: String,
    pub transfer_type: TransferType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> TransferRequest {
        TransferRequest::new(
            "ES9121000418450200051332",
            "ES8134567890123456789012",
            "Monthly rent",
            TransferType::Ordinary,
            NaiveDate::from_ymd_opt(2040, 6, 15).unwrap(),
            Money::from_cents(105050),
        )
    }

    #[test]
    fn test_transfer_type_tokens() {
        assert_eq!("INMEDIATE".parse::<TransferType>(), Ok(TransferType::Inmediate));
        assert!("IMMEDIATE".parse::<TransferType>().is_err());
        assert_eq!(TransferType::Urgent.to_string(), "URGENT");
        assert_eq!(
            serde_json::to_string(&TransferType::Inmediate).unwrap(),
            "\"INMEDIATE\""
        );
    }

    #[test]
    fn test_code_assigned_at_construction() {
        let transfer = sample();
        assert_eq!(transfer.transfer_code().len(), 64);
        assert_eq!(transfer.transfer_code(), transfer.compute_code());
        assert_eq!(transfer.transfer_code(), sample().transfer_code());
    }

    #[test]
    fn test_code_depends_on_fields() {
        let other = TransferRequest::new(
            "ES9121000418450200051332",
            "ES8134567890123456789012",
            "Monthly rent",
            TransferType::Urgent,
            NaiveDate::from_ymd_opt(2040, 6, 15).unwrap(),
            Money::from_cents(105050),
        );
        assert_ne!(sample().transfer_code(), other.transfer_code());
    }

    #[test]
    fn test_wire_format() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "from_iban": "ES9121000418450200051332",
                "to_iban": "ES8134567890123456789012",
                "transfer_type": "ORDINARY",
                "transfer_date": "15/06/2040",
                "transfer_amount": 1050.5,
                "transfer_concept": "Monthly rent",
                "transfer_code": sample().transfer_code(),
            })
        );

        let back: TransferRequest = serde_json::from_value(value).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_dedup_key_from_stored_record() {
        let value = serde_json::to_value(sample()).unwrap();
        let key: TransferKey = serde_json::from_value(value).unwrap();
        assert_eq!(key, sample().dedup_key());
    }
}
