//! Deposit service
//!
//! Turns a deposit request (`{"IBAN": ..., "AMOUNT": "EUR dddd.dd"}`) into a
//! signed deposit record and appends it to the deposits store.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{LedgerError, LedgerResult};
use crate::models::AccountDeposit;
use crate::storage::{Storage, StoreKind};
use crate::validation::{validate_deposit_amount, validate_iban};

/// Keys a deposit request must carry, and no others
const INPUT_KEYS: [&str; 2] = ["IBAN", "AMOUNT"];

/// Service for deposits into an account
pub struct DepositService<'a> {
    storage: &'a Storage,
}

impl<'a> DepositService<'a> {
    /// Create a new deposit service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record the deposit described by a JSON request file
    pub fn deposit_from_file(&self, input_file: &Path) -> LedgerResult<String> {
        if !input_file.is_file() {
            return Err(LedgerError::InputNotFound(input_file.display().to_string()));
        }

        let contents = std::fs::read_to_string(input_file)
            .map_err(|e| LedgerError::InputNotFound(format!("{}: {}", input_file.display(), e)))?;
        let input: Value = serde_json::from_str(&contents)
            .map_err(|e| LedgerError::malformed(input_file, e))?;

        self.process(&input)
    }

    /// Validate a deposit request, record the deposit and return its signature
    pub fn process(&self, input: &Value) -> LedgerResult<String> {
        let (iban, amount) = read_input(input)?;

        let iban = validate_iban(iban)?;
        let amount = validate_deposit_amount(amount)?;

        let deposit = AccountDeposit::new(iban, amount);
        self.storage.deposits.insert(&deposit)?;
        self.storage
            .log_append(StoreKind::Deposits, deposit.deposit_signature(), &deposit);

        tracing::info!(iban, amount = %amount, "deposit recorded");

        Ok(deposit.deposit_signature().to_string())
    }

    /// All recorded deposits, oldest first
    pub fn list(&self) -> LedgerResult<Vec<AccountDeposit>> {
        self.storage.deposits.get_all()
    }

    /// Recorded deposits whose signature no longer matches their fields
    pub fn verify_signatures(&self) -> LedgerResult<Vec<AccountDeposit>> {
        let tampered: Vec<AccountDeposit> = self
            .list()?
            .into_iter()
            .filter(|deposit| !deposit.has_valid_signature())
            .collect();

        for deposit in &tampered {
            tracing::warn!(
                iban = deposit.to_iban(),
                signature = deposit.deposit_signature(),
                "deposit signature mismatch"
            );
        }

        Ok(tampered)
    }
}

/// Extract the IBAN and AMOUNT strings of a deposit request
fn read_input(input: &Value) -> LedgerResult<(&str, &str)> {
    let object: &Map<String, Value> = input
        .as_object()
        .ok_or_else(|| LedgerError::InvalidInputKey("expected a JSON object".into()))?;

    if let Some(extra) = object.keys().find(|key| !INPUT_KEYS.contains(&key.as_str())) {
        return Err(LedgerError::InvalidInputKey(extra.clone()));
    }

    Ok((string_field(object, "IBAN")?, string_field(object, "AMOUNT")?))
}

fn string_field<'a>(object: &'a Map<String, Value>, key: &str) -> LedgerResult<&'a str> {
    match object.get(key) {
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(_) => Err(LedgerError::InvalidInputKey(format!("{} must be a string", key))),
        None => Err(LedgerError::InvalidInputKey(format!("missing {}", key))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LedgerPaths, Settings};
    use serde_json::json;
    use tempfile::TempDir;

    const IBAN: &str = "ES9121000418450200051332";

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_process_records_signed_deposit() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DepositService::new(&storage);

        let signature = service
            .process(&json!({"IBAN": IBAN, "AMOUNT": "EUR 1234.50"}))
            .unwrap();

        let deposits = service.list().unwrap();
        assert_eq!(deposits.len(), 1);
        let deposit = &deposits[0];
        assert_eq!(deposit.deposit_signature(), signature);
        assert_eq!(deposit.to_iban(), IBAN);
        assert_eq!(deposit.deposit_amount(), 1234.5);
        assert_eq!(deposit.alg(), "SHA-256");
        assert_eq!(deposit.record_type(), "DEPOSIT");
        assert!(deposit.has_valid_signature());
    }

    #[test]
    fn test_stored_record_field_names() {
        let (_temp_dir, storage) = create_test_storage();
        DepositService::new(&storage)
            .process(&json!({"IBAN": IBAN, "AMOUNT": "EUR 0010.00"}))
            .unwrap();

        let raw = storage.deposits.store().load().unwrap();
        let record = raw[0].as_object().unwrap();
        let mut keys: Vec<&str> = record.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "alg",
                "deposit_amount",
                "deposit_signature",
                "deposit_timestamp",
                "to_iban",
                "type"
            ]
        );
        assert_eq!(record["deposit_amount"], json!(10.0));
    }

    #[test]
    fn test_repeated_deposit_is_kept() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DepositService::new(&storage);
        let input = json!({"IBAN": IBAN, "AMOUNT": "EUR 0100.00"});

        service.process(&input).unwrap();
        service.process(&input).unwrap();

        assert_eq!(service.list().unwrap().len(), 2);
    }

    #[test]
    fn test_input_keys() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DepositService::new(&storage);

        for input in [
            json!({"IBAN": IBAN}),
            json!({"AMOUNT": "EUR 0100.00"}),
            json!({"IBAN": IBAN, "AMOUNT": "EUR 0100.00", "NOTE": "x"}),
            json!({"iban": IBAN, "AMOUNT": "EUR 0100.00"}),
            json!({"IBAN": IBAN, "AMOUNT": 100.0}),
            json!([IBAN, "EUR 0100.00"]),
        ] {
            assert!(
                matches!(service.process(&input), Err(LedgerError::InvalidInputKey(_))),
                "{} should be rejected",
                input
            );
        }
        assert!(!storage.deposits.store().exists());
    }

    #[test]
    fn test_iban_checked_before_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DepositService::new(&storage);

        let err = service
            .process(&json!({"IBAN": "ES00", "AMOUNT": "bad"}))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidFormat(_)));

        let err = service
            .process(&json!({"IBAN": IBAN, "AMOUNT": "bad"}))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidDepositAmount(_)));
    }

    #[test]
    fn test_deposit_amounts() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DepositService::new(&storage);
        let process = |amount: &str| service.process(&json!({"IBAN": IBAN, "AMOUNT": amount}));

        for bad in ["EUR 0000.00", "EUR 100.00", "EUR 1000.0", "USD 1000.00", "1000.00", "EUR -100.00"] {
            assert!(
                matches!(process(bad), Err(LedgerError::InvalidDepositAmount(_))),
                "{} should be rejected",
                bad
            );
        }
        assert!(process("EUR 0000.01").is_ok());
        assert!(process("EUR 9999.99").is_ok());
    }

    #[test]
    fn test_deposit_from_file() {
        let (temp_dir, storage) = create_test_storage();
        let service = DepositService::new(&storage);
        let input = temp_dir.path().join("deposit.json");
        std::fs::write(&input, r#"{"IBAN": "ES9121000418450200051332", "AMOUNT": "EUR 0500.00"}"#)
            .unwrap();

        let signature = service.deposit_from_file(&input).unwrap();
        assert_eq!(service.list().unwrap()[0].deposit_signature(), signature);
    }

    #[test]
    fn test_deposit_from_missing_or_broken_file() {
        let (temp_dir, storage) = create_test_storage();
        let service = DepositService::new(&storage);

        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(
            service.deposit_from_file(&missing),
            Err(LedgerError::InputNotFound(_))
        ));

        let broken = temp_dir.path().join("broken.json");
        std::fs::write(&broken, "{\"IBAN\": ").unwrap();
        assert!(matches!(
            service.deposit_from_file(&broken),
            Err(LedgerError::MalformedStore { .. })
        ));
    }

    #[test]
    fn test_unwritable_store_records_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DepositService::new(&storage);
        service
            .process(&json!({"IBAN": IBAN, "AMOUNT": "EUR 0100.00"}))
            .unwrap();

        // Occupy the temp file path the rewrite goes through
        let temp_path = storage.deposits.store().path().with_extension("json.tmp");
        std::fs::create_dir(&temp_path).unwrap();

        let err = service
            .process(&json!({"IBAN": IBAN, "AMOUNT": "EUR 0200.00"}))
            .unwrap_err();
        assert!(matches!(err, LedgerError::StoreWrite(_)));

        let deposits = service.list().unwrap();
        assert_eq!(deposits.len(), 1);
        assert_eq!(deposits[0].deposit_amount(), 100.0);
        assert_eq!(storage.audit().unwrap().read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_verify_signatures_finds_tampered_records() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DepositService::new(&storage);
        service
            .process(&json!({"IBAN": IBAN, "AMOUNT": "EUR 0100.00"}))
            .unwrap();
        service
            .process(&json!({"IBAN": IBAN, "AMOUNT": "EUR 0200.00"}))
            .unwrap();
        assert!(service.verify_signatures().unwrap().is_empty());

        let path = storage.deposits.store().path().to_path_buf();
        let mut records: Vec<Value> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        records[1]["deposit_amount"] = json!(2000.0);
        std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

        let tampered = service.verify_signatures().unwrap();
        assert_eq!(tampered.len(), 1);
        assert_eq!(tampered[0].deposit_amount(), 2000.0);
    }
}
