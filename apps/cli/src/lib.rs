//! # Rental Desk Library
//!
//! Core library for the Rental Desk command-line application.
//!
//! ## Module Organization
//! ```text
//! rental_desk/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── AppConfig (env + defaults)
//! ├── prompt.rs       ◄─── Confirm trait for destructive actions
//! ├── commands/
//! │   ├── mod.rs      ◄─── Dispatch
//! │   ├── catalog.rs  ◄─── List view
//! │   ├── detail.rs   ◄─── Detail view, booking form, unbook
//! │   └── admin.rs    ◄─── Admin panel
//! └── error.rs        ◄─── AppError for commands
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod prompt;

use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::AppConfig;
use error::{AppError, AppResult};
use rental_db::{Database, DbConfig, RentalStore};

/// Runs one command and returns the text to print on stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Command Startup                                   │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • RENTAL_* environment variables, then --db                         │
/// │                                                                         │
/// │  2. Determine Database Path ──────────────────────────────────────────► │
/// │     • macOS: ~/Library/Application Support/com.rentaldesk.rental-desk   │
/// │     • Windows: %APPDATA%\rentaldesk\rental-desk\data                    │
/// │     • Linux: ~/.local/share/rental-desk                                 │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode, pending migrations applied                  │
/// │                                                                         │
/// │  4. Open RentalStore ─────────────────────────────────────────────────► │
/// │     • Missing or unreadable collections fall back to the seed data      │
/// │                                                                         │
/// │  5. Dispatch Command ─────────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> AppResult<String> {
    let mut config = AppConfig::from_env();
    if let Some(path) = cli.db {
        config.db_path = Some(path);
    }

    let db_path = get_database_path(&config)?;
    debug!(?db_path, "Database path determined");

    let db = Database::new(DbConfig::new(db_path)).await?;
    let output = match RentalStore::open(&db).await {
        Ok(mut store) => commands::dispatch(&mut store, &config, cli.command).await,
        Err(e) => Err(e.into()),
    };

    db.close().await;
    info!(ok = output.is_ok(), "Command finished");
    output
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout stays clean for views and `--json`.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=rental_db=trace` - Show trace for the storage crate only
/// - Default: warnings only
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Determines the database file path.
///
/// ## Resolution Order
/// 1. `--db` flag / `RENTAL_DB_PATH` (already folded into `config`)
/// 2. Platform data directory, created if missing
pub fn get_database_path(config: &AppConfig) -> AppResult<PathBuf> {
    if let Some(path) = &config.db_path {
        return Ok(path.clone());
    }

    let proj_dirs = ProjectDirs::from("com", "rentaldesk", "rental-desk")
        .ok_or_else(|| AppError::internal("Could not determine app data directory"))?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir).map_err(|e| {
        AppError::internal(format!(
            "Could not create data directory {}: {}",
            data_dir.display(),
            e
        ))
    })?;

    Ok(data_dir.join("rental.db"))
}
