//! User settings for the account ledger
//!
//! Stored as `config.json` in the base directory. Every field has a default,
//! so a partial or missing file still yields usable settings.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::storage::StoreKind;

/// File names of the four stores inside the data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreFiles {
    pub transfers: String,
    pub deposits: String,
    /// Written by an external system, only ever read here
    pub transactions: String,
    pub balances: String,
}

impl Default for StoreFiles {
    fn default() -> Self {
        Self {
            transfers: "transfers.json".to_string(),
            deposits: "deposits.json".to_string(),
            transactions: "transactions.json".to_string(),
            balances: "balances.json".to_string(),
        }
    }
}

impl StoreFiles {
    /// File name configured for a store
    pub fn file_name(&self, kind: StoreKind) -> &str {
        match kind {
            StoreKind::Transfers => &self.transfers,
            StoreKind::Deposits => &self.deposits,
            StoreKind::Transactions => &self.transactions,
            StoreKind::Balances => &self.balances,
        }
    }
}

/// User settings for the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub stores: StoreFiles,

    /// Whether appends are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            stores: StoreFiles::default(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LedgerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            LedgerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
