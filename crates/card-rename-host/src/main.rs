//! Card rename debug console.
//!
//! Opens the rename configuration the same way a host does and then reads
//! console commands from stdin, one per line.  Useful for editing the file
//! with validation, and for checking what a card would be renamed to without
//! starting the game.
//!
//! # Usage
//!
//! ```text
//! card-rename-console [--config-dir <DIR>]
//! ```
//!
//! Without `--config-dir` the mod loader's per-user directory is used (see
//! `infrastructure::storage::paths`).  Log verbosity follows `RUST_LOG`
//! (default `info`); logs go to stderr so command replies on stdout stay
//! clean.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ JsonFileRepository::in_dir(dir)
//!  └─ ConfigStore::open(repo)      -- first load, default file on first run
//!  └─ loop: parse_command(line) → execute(&mut store, command)
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use card_rename_host::application::config_store::ConfigStore;
use card_rename_host::infrastructure::console::{execute, parse_command, ConsoleCommand, ConsoleError};
use card_rename_host::infrastructure::storage::{paths, JsonFileRepository};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Inspect and edit card renames from a terminal.
#[derive(Debug, Parser)]
#[command(name = "card-rename-console", version)]
struct Cli {
    /// Directory holding `card_renames.json`.
    ///
    /// Defaults to the mod loader's per-user configuration directory.
    #[arg(long)]
    config_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let dir = match cli.config_dir {
        Some(dir) => dir,
        None => paths::config_dir().context("pass --config-dir explicitly")?,
    };

    let mut store = ConfigStore::open(JsonFileRepository::in_dir(&dir));
    info!("card rename console ready, configuration at {}", store.location());
    println!("editing {}", store.location());
    println!("keys may be card IDs or original names; type `help` for commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        let command = match parse_command(&line) {
            Ok(ConsoleCommand::Quit) => break,
            Ok(command) => command,
            Err(ConsoleError::Empty) => continue,
            Err(e) => {
                eprintln!("error: {e}");
                continue;
            }
        };

        match execute(&mut store, command) {
            Ok(reply) => writeln!(stdout, "{reply}").context("failed to write to stdout")?,
            Err(e) => {
                warn!("console command failed: {e}");
                eprintln!("error: {e}");
            }
        }
    }

    info!("card rename console stopped");
    Ok(())
}
