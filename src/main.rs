//! dnsprefs - Entry point.
//!
//! Small command-line front end over an [`EditSession`]: shows the current
//! DNS preferences and applies one change per invocation.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use dnsprefs::Config;
use dnsprefs::EditSession;
use dnsprefs::preferences::{EnglishAdvisory, RandomIds, validate_user_input};
use dnsprefs::settings::FileStore;

#[derive(Debug, Parser)]
#[command(name = "dnsprefs", version, about = "Manage custom DNS preferences")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, env = "CONFIG_PATH", default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the current preferences.
    Show,
    /// Turn ad blocking on or off (turns custom DNS off).
    BlockAds {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
    /// Turn tracker blocking on or off (turns custom DNS off).
    BlockTrackers {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
    /// Turn custom DNS on or off (turns both blockers off).
    CustomDns {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
    /// Add a custom DNS server.
    Add { address: String },
    /// Replace the address of the server at the given position.
    Edit { index: usize, address: String },
    /// Remove the server at the given position.
    Remove { index: usize },
    /// Check whether an address would be accepted.
    Check { address: String },
}

type Session = EditSession<FileStore, RandomIds>;

fn ensure_valid(address: &str) -> Result<()> {
    if address.is_empty() || !validate_user_input(address) {
        bail!("{address:?} is not a valid IP address");
    }
    Ok(())
}

fn entry_id_at(session: &Session, index: usize) -> Result<dnsprefs::preferences::EntryId> {
    session
        .state()
        .entries()
        .get(index)
        .map(|entry| entry.id)
        .with_context(|| format!("no DNS server at position {index}"))
}

fn print_state(session: &Session) {
    let state = session.state();
    println!("block ads:         {}", state.block_advertising());
    println!("block trackers:    {}", state.block_tracking());
    println!(
        "custom DNS:        {} (effective: {})",
        state.enable_custom_dns(),
        state.effective_enable_custom_dns()
    );
    for (index, entry) in state.entries().iter().enumerate() {
        println!("  [{index}] {}", entry.address);
    }
    if let Some(advisory) = session.advisory(&EnglishAdvisory) {
        println!("note: {advisory}");
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(&cli.config).context("Failed to load configuration")?;
    let store = FileStore::new(&config.settings_path);
    info!("Using settings file: {}", store.path().display());

    let mut session = EditSession::open(store, RandomIds, config.defaults.clone())
        .context("Failed to load DNS settings")?;

    match cli.command {
        Command::Show => {
            print_state(&session);
            return Ok(());
        }
        Command::Check { address } => {
            if validate_user_input(&address) {
                println!("{address:?} is acceptable");
                return Ok(());
            }
            bail!("{address:?} is not a valid IP address");
        }
        Command::BlockAds { enabled } => session.state_mut().set_block_advertising(enabled),
        Command::BlockTrackers { enabled } => session.state_mut().set_block_tracking(enabled),
        Command::CustomDns { enabled } => session.state_mut().set_enable_custom_dns(enabled),
        Command::Add { address } => {
            ensure_valid(&address)?;
            session.set_editing(true);
            session.add_entry(address);
        }
        Command::Edit { index, address } => {
            ensure_valid(&address)?;
            let id = entry_id_at(&session, index)?;
            session.set_editing(true);
            session.state_mut().update_entry_address(id, address);
        }
        Command::Remove { index } => {
            let id = entry_id_at(&session, index)?;
            session.set_editing(true);
            session.state_mut().remove_entry(id);
        }
    }

    session.commit().context("Failed to save DNS settings")?;
    print_state(&session);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    run(Cli::parse())
}
