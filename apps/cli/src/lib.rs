//! # Stockroom CLI Library
//!
//! Startup and session wiring for the `stockroom` binary.
//!
//! ## Module Organization
//! ```text
//! stockroom_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Flags, env vars, defaults
//! ├── console.rs      ◄─── Prompts and retry loops
//! ├── display.rs      ◄─── Fixed-width product tables
//! ├── menu.rs         ◄─── Menu loop
//! ├── commands/
//! │   └── product.rs  ◄─── One handler per menu operation
//! └── error.rs        ◄─── Session error type
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod display;
pub mod error;
pub mod menu;

use std::io;

use stockroom_db::{Database, DbConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::{AppConfig, CliArgs, ColorMode};
pub use console::Console;
pub use error::{CliError, CliResult};

/// Runs one interactive session.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Resolve configuration (flags > env > defaults)                     │
/// │  2. Apply colour policy                                                │
/// │  3. Open storage handle, create `products` if missing                  │
/// │  4. Menu loop on stdin/stdout until Exit or end of input               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(args: CliArgs) -> CliResult<()> {
    let config = AppConfig::load(&args)?;
    config.color.apply();

    info!(
        path = %config.database_path.display(),
        color = ?config.color,
        "Starting Stockroom"
    );

    let db = Database::open(DbConfig::new(&config.database_path)).await?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    menu::run_menu(&mut console, &db).await?;

    info!("Session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with tables on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=stockroom_db=debug` - Show every repository call
/// - `RUST_LOG=debug` - Everything
/// - Default: warnings only
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
