//! # Stockroom
//!
//! Interactive inventory manager.
//!
//! ```bash
//! stockroom                     # ./inventory.db
//! stockroom --db ~/shop.db      # another file
//! RUST_LOG=debug stockroom      # trace repository calls on stderr
//! ```

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use stockroom_cli::CliArgs;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    stockroom_cli::init_tracing();

    let args = CliArgs::parse();

    match stockroom_cli::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Session aborted");
            eprintln!("{} {}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
