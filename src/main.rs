use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use account_ledger::audit::AuditLogger;
use account_ledger::cli::{
    handle_balance_command, handle_deposit_command, handle_iban_command, handle_transfer_command,
    BalanceCommands, DepositCommands, IbanCommands, TransferCommands,
};
use account_ledger::config::{paths::DATA_DIR_ENV, LedgerPaths, Settings};
use account_ledger::display::format_audit_entries;
use account_ledger::storage::{Storage, StoreKind};

#[derive(Parser)]
#[command(
    name = "ledger",
    author = "Kaylee Beyene",
    version,
    about = "Validated transfers, signed deposits and balances for Spanish IBANs",
    long_about = "account-ledger validates and records bank transfers between Spanish \
                  IBANs, signs account deposits, and calculates account balances from \
                  a transactions file. All records are kept in JSON files."
)]
struct Cli {
    /// Base directory for configuration and stores
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transfer commands
    #[command(subcommand)]
    Transfer(TransferCommands),

    /// Deposit commands
    #[command(subcommand)]
    Deposit(DepositCommands),

    /// Balance commands
    #[command(subcommand)]
    Balance(BalanceCommands),

    /// IBAN helpers
    #[command(subcommand)]
    Iban(IbanCommands),

    /// Write the default configuration
    Init,

    /// Show current configuration and paths
    Config,

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("account-ledger - transfers, deposits and balances for Spanish IBANs");
        println!();
        println!("Run 'ledger --help' for usage information.");
        return Ok(());
    };

    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    tracing::debug!(base_dir = %paths.base_dir().display(), "configuration loaded");

    match command {
        Commands::Transfer(cmd) => {
            let storage = Storage::new(paths, &settings)?;
            handle_transfer_command(&storage, cmd)?;
        }
        Commands::Deposit(cmd) => {
            let storage = Storage::new(paths, &settings)?;
            handle_deposit_command(&storage, cmd)?;
        }
        Commands::Balance(cmd) => {
            let storage = Storage::new(paths, &settings)?;
            handle_balance_command(&storage, cmd)?;
        }
        Commands::Init => {
            if paths.is_initialized() {
                println!("Already initialized at: {}", paths.base_dir().display());
            } else {
                settings.save(&paths)?;
                println!("Initialized account-ledger at: {}", paths.base_dir().display());
            }
            println!(
                "Place the transactions file at: {}",
                paths.store_file(StoreKind::Transactions, &settings).display()
            );
        }
        Commands::Config => {
            println!("account-ledger Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Stores:");
            for kind in StoreKind::all() {
                println!(
                    "  {:13} {}",
                    kind.name(),
                    paths.store_file(*kind, &settings).display()
                );
            }
            println!();
            println!("Audit enabled: {}", settings.audit_enabled);
        }
        Commands::Audit { limit } => {
            let logger = AuditLogger::new(paths.audit_log());
            if !logger.exists() {
                println!("No audit log at {}", logger.path().display());
                return Ok(());
            }
            let entries = logger.read_recent(limit)?;
            print!("{}", format_audit_entries(&entries));
        }
        Commands::Iban(cmd) => handle_iban_command(cmd)?,
    }

    Ok(())
}
