//! Transfer service
//!
//! Validates transfer requests field by field, assigns the transfer code and
//! appends the transfer to the transfers store unless an identical transfer
//! is already recorded.

use crate::error::LedgerResult;
use crate::models::TransferRequest;
use crate::storage::{Storage, StoreKind};
use crate::validation::{
    validate_concept, validate_iban, validate_transfer_amount, validate_transfer_date,
    validate_transfer_type,
};

/// Service for submitting transfers between two IBANs
pub struct TransferService<'a> {
    storage: &'a Storage,
}

impl<'a> TransferService<'a> {
    /// Create a new transfer service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and record a transfer, returning its transfer code
    ///
    /// Fields are checked in order: source IBAN, destination IBAN, concept,
    /// type, date, amount. The first failing check is returned and nothing is
    /// written. A transfer matching a stored one on all six fields fails with
    /// [`LedgerError::DuplicateTransfer`](crate::error::LedgerError::DuplicateTransfer).
    pub fn submit(
        &self,
        from_iban: &str,
        to_iban: &str,
        concept: &str,
        transfer_type: &str,
        date: &str,
        amount: &str,
    ) -> LedgerResult<String> {
        let from_iban = validate_iban(from_iban)?;
        let to_iban = validate_iban(to_iban)?;
        let concept = validate_concept(concept)?;
        let transfer_type = validate_transfer_type(transfer_type)?;
        let date = validate_transfer_date(date)?;
        let amount = validate_transfer_amount(amount)?;

        let transfer =
            TransferRequest::new(from_iban, to_iban, concept, transfer_type, date, amount);

        self.storage.transfers.insert(&transfer)?;
        self.storage
            .log_append(StoreKind::Transfers, transfer.transfer_code(), &transfer);

        tracing::info!(
            code = transfer.transfer_code(),
            amount = %transfer.transfer_amount(),
            "transfer recorded"
        );

        Ok(transfer.transfer_code().to_string())
    }

    /// All recorded transfers, oldest first
    pub fn list(&self) -> LedgerResult<Vec<TransferRequest>> {
        self.storage.transfers.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LedgerPaths, Settings};
    use crate::error::LedgerError;
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    const FROM: &str = "ES9121000418450200051332";
    const TO: &str = "ES8134567890123456789012";
    const OTHER: &str = "ES6000491500051234567892";

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    fn date_in(days: i64) -> String {
        (Utc::now().date_naive() + Duration::days(days))
            .format("%d/%m/%Y")
            .to_string()
    }

    #[test]
    fn test_submit_returns_code_and_stores_transfer() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransferService::new(&storage);

        let code = service
            .submit(FROM, TO, "Monthly rent payment", "ORDINARY", &date_in(10), "500.00")
            .unwrap();

        assert_eq!(code.len(), 64);
        let stored = service.list().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].transfer_code(), code);
        assert_eq!(stored[0].compute_code(), code);
    }

    #[test]
    fn test_submit_is_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let code = TransferService::new(&storage)
            .submit(FROM, TO, "Monthly rent payment", "URGENT", &date_in(1), "20")
            .unwrap();

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].store, StoreKind::Transfers);
        assert_eq!(entries[0].record_id, code);
    }

    #[test]
    fn test_identical_transfer_is_duplicate() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransferService::new(&storage);
        let date = date_in(5);

        service
            .submit(FROM, TO, "Monthly rent payment", "ORDINARY", &date, "500.00")
            .unwrap();
        let result = service.submit(FROM, TO, "Monthly rent payment", "ORDINARY", &date, "500.00");

        assert!(matches!(result, Err(LedgerError::DuplicateTransfer(_))));
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_changing_any_field_is_not_duplicate() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransferService::new(&storage);
        let date = date_in(5);

        let base = ["Monthly rent payment", "ORDINARY", date.as_str(), "500.00"];
        service
            .submit(FROM, TO, base[0], base[1], base[2], base[3])
            .unwrap();

        let other_date = date_in(6);
        service.submit(OTHER, TO, base[0], base[1], base[2], base[3]).unwrap();
        service.submit(FROM, OTHER, base[0], base[1], base[2], base[3]).unwrap();
        service.submit(FROM, TO, "Weekly grocery bill", base[1], base[2], base[3]).unwrap();
        service.submit(FROM, TO, base[0], "INMEDIATE", base[2], base[3]).unwrap();
        service.submit(FROM, TO, base[0], base[1], &other_date, base[3]).unwrap();
        service.submit(FROM, TO, base[0], base[1], base[2], "500.01").unwrap();

        assert_eq!(service.list().unwrap().len(), 7);
    }

    #[test]
    fn test_equal_amount_written_differently_is_duplicate() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransferService::new(&storage);
        let date = date_in(3);

        service
            .submit(FROM, TO, "Monthly rent payment", "ORDINARY", &date, "10.5")
            .unwrap();
        let result = service.submit(FROM, TO, "Monthly rent payment", "ORDINARY", &date, "10.50");

        assert!(matches!(result, Err(LedgerError::DuplicateTransfer(_))));
    }

    #[test]
    fn test_validation_order() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransferService::new(&storage);
        let date = date_in(1);

        let err = service
            .submit("XX", "YY", "bad", "NONE", "99/99/9999", "1")
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidFormat(ref s) if s == "XX"));

        let err = service
            .submit(FROM, "ES0034567890123456789012", "bad", "NONE", "x", "1")
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidCheckDigit { .. }));

        let err = service.submit(FROM, TO, "bad", "NONE", "x", "1").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidConcept(_)));

        let err = service
            .submit(FROM, TO, "Monthly rent payment", "NONE", "x", "1")
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidTransferType(_)));

        let err = service
            .submit(FROM, TO, "Monthly rent payment", "URGENT", "x", "1")
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidDateFormat(_)));

        let err = service
            .submit(FROM, TO, "Monthly rent payment", "URGENT", &date, "1")
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));

        assert!(!storage.transfers.store().exists());
    }

    #[test]
    fn test_amount_bounds() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransferService::new(&storage);
        let date = date_in(2);
        let submit = |amount: &str| {
            service.submit(FROM, TO, "Monthly rent payment", "ORDINARY", &date, amount)
        };

        for bad in ["10000.01", "9.99", "10.005", "abc", ""] {
            assert!(
                matches!(submit(bad), Err(LedgerError::InvalidAmount(_))),
                "{} should be rejected",
                bad
            );
        }
        assert!(submit("10.00").is_ok());
        assert!(submit("10000").is_ok());
    }

    #[test]
    fn test_dates() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransferService::new(&storage);
        let submit = |date: &str| {
            service.submit(FROM, TO, "Monthly rent payment", "ORDINARY", date, "100")
        };

        assert!(submit(&date_in(0)).is_ok());
        assert!(matches!(
            submit(&date_in(-1)),
            Err(LedgerError::DateInPast(_))
        ));
        assert!(matches!(
            submit("01/01/2051"),
            Err(LedgerError::InvalidDateFormat(_))
        ));
        assert!(matches!(
            submit("31/02/2030"),
            Err(LedgerError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_malformed_store_is_reported_and_kept() {
        let (_temp_dir, storage) = create_test_storage();
        std::fs::write(storage.transfers.store().path(), "{oops").unwrap();

        let result = TransferService::new(&storage).submit(
            FROM,
            TO,
            "Monthly rent payment",
            "ORDINARY",
            &date_in(1),
            "100",
        );

        assert!(matches!(result, Err(LedgerError::MalformedStore { .. })));
        assert_eq!(
            std::fs::read_to_string(storage.transfers.store().path()).unwrap(),
            "{oops"
        );
    }
}
