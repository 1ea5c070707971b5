//! UnixNetwork launcher config tool: entry point.
//!
//! Reads and writes the launcher's `launcher.cfg` through the same
//! [`ConfigStore`] the launcher uses, so manual edits made here follow the
//! exact same locking, seeding, and format rules.
//!
//! # Usage
//!
//! ```text
//! unix-launcher [OPTIONS] <COMMAND>
//!
//! Commands:
//!   get   <KEY>          Print the value for KEY (empty line when unset)
//!   set   <KEY> <VALUE>  Create or update KEY
//!   list                 Print every KEY=VALUE in file order
//!   theme                Print the parsed Theme preference
//!   path                 Print the full path of the config file
//!   reset                Rewrite the file with the default entries only
//!
//! Options:
//!   --config-dir <DIR>     Directory holding the file [default: <app-data>/UnixNetwork]
//!   --file-name  <NAME>    Config file name [default: launcher.cfg]
//!   --log-level  <FILTER>  tracing filter, e.g. `debug` [default: RUST_LOG or info]
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable                     | Description                       |
//! |------------------------------|-----------------------------------|
//! | `UNIX_LAUNCHER_CONFIG_DIR`   | Same as `--config-dir`            |
//! | `UNIX_LAUNCHER_CONFIG_FILE`  | Same as `--file-name`             |
//! | `RUST_LOG`                   | Log filter when `--log-level` is absent |

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use launcher_core::Theme;
use unix_launcher::{
    ConfigStore, PlatformAppData, StoreOptions, TracingSink, DEFAULT_FILE_NAME,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Inspect and edit the UnixNetwork launcher configuration file.
#[derive(Debug, Parser)]
#[command(
    name = "unix-launcher",
    about = "Inspect and edit the UnixNetwork launcher configuration",
    version
)]
struct Cli {
    /// Directory holding the config file.
    ///
    /// Defaults to the `UnixNetwork` folder under the platform app-data root.
    #[arg(long, env = "UNIX_LAUNCHER_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Config file name inside the directory.
    #[arg(long, default_value = DEFAULT_FILE_NAME, env = "UNIX_LAUNCHER_CONFIG_FILE")]
    file_name: String,

    /// `tracing` filter directive; falls back to `RUST_LOG`, then `info`.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the value for KEY (an empty line when unset).
    Get { key: String },
    /// Create or update KEY.
    Set { key: String, value: String },
    /// Print every entry in file order.
    List,
    /// Print the parsed Theme preference.
    Theme,
    /// Print the full path of the config file.
    Path,
    /// Rewrite the file with the default entries only.
    Reset,
}

impl Cli {
    /// Builds [`StoreOptions`] from `--config-dir` / `--file-name`.
    ///
    /// # Errors
    ///
    /// Fails when no directory is given and the platform app-data root is unknown.
    fn store_options(&self) -> anyhow::Result<StoreOptions> {
        let options = match &self.config_dir {
            Some(dir) => StoreOptions::in_directory(dir),
            None => StoreOptions::from_app_data(&PlatformAppData)
                .context("no --config-dir given and no platform app-data directory found")?,
        };
        Ok(options.with_file_name(self.file_name.clone()))
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid --log-level '{directive}'"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let store = ConfigStore::new(Arc::new(TracingSink), cli.store_options()?);
    debug!("using config file {}", store.full_file_name().display());

    let result = run(&store, cli.command).await;
    store.dispose();
    result
}

async fn run(store: &ConfigStore, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Get { key } => {
            let value = store
                .get_property(&key)
                .await
                .with_context(|| format!("failed to read '{key}'"))?;
            println!("{value}");
        }
        Command::Set { key, value } => {
            store
                .create_or_set_property(&key, &value)
                .await
                .with_context(|| format!("failed to set '{key}'"))?;
        }
        Command::List => {
            let entries = store
                .entries()
                .await
                .context("failed to list config entries")?;
            for entry in entries {
                println!("{}={}", entry.key, entry.value);
            }
        }
        Command::Theme => {
            let theme = store
                .try_get_property::<Theme>("Theme")
                .await
                .unwrap_or_default();
            println!("{theme}");
        }
        Command::Path => println!("{}", store.full_file_name().display()),
        Command::Reset => {
            store
                .reset_to_defaults()
                .await
                .context("failed to reset config to defaults")?;
        }
    }
    Ok(())
}
