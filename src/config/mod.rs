//! Configuration module for the account ledger
//!
//! - XDG-compliant path resolution
//! - Store file names and audit preference persisted in `config.json`

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::{Settings, StoreFiles};
