//! Balance snapshot repository

use std::path::PathBuf;

use super::ledger::{LedgerStore, StoreKind};
use crate::error::LedgerResult;
use crate::models::BalanceSnapshot;

#[derive(Debug)]
pub struct BalanceRepository {
    store: LedgerStore,
}

impl BalanceRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            store: LedgerStore::new(StoreKind::Balances, path),
        }
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn insert(&self, snapshot: &BalanceSnapshot) -> LedgerResult<usize> {
        self.store.append(snapshot)
    }

    pub fn get_all(&self) -> LedgerResult<Vec<BalanceSnapshot>> {
        self.store.load_records()
    }

    /// Snapshots of one IBAN, oldest first
    pub fn get_by_iban(&self, iban: &str) -> LedgerResult<Vec<BalanceSnapshot>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|s| s.iban == iban)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_snapshots_are_appended_never_replaced() {
        let temp_dir = TempDir::new().unwrap();
        let repo = BalanceRepository::new(temp_dir.path().join("balances.json"));
        let iban = "ES9121000418450200051332";

        repo.insert(&BalanceSnapshot::new(iban, 1.0, Money::from_cents(100)))
            .unwrap();
        repo.insert(&BalanceSnapshot::new(iban, 2.0, Money::from_cents(300)))
            .unwrap();
        repo.insert(&BalanceSnapshot::new("ES8134567890123456789012", 3.0, Money::zero()))
            .unwrap();

        let history = repo.get_by_iban(iban).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].balance.cents(), 300);
        assert_eq!(repo.get_all().unwrap().len(), 3);
    }
}
