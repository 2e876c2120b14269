//! Command-line surface for the stockroom inventory system.
//!
//! All behavior lives behind [`run`]; loading this crate as a library
//! executes nothing.

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};

use stockroom_core::Quantity;
use stockroom_inventory::{AuditLog, RemoveOutcome};
use stockroom_storage::FileStore;

#[derive(Debug, Parser)]
#[command(name = "stockroom", about = "Inventory management CLI", version)]
pub struct Cli {
    /// Path of the persisted inventory file.
    #[arg(long, global = true, default_value = "inventory.json")]
    pub file: PathBuf,

    /// Raise log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter applied when `RUST_LOG` is not set.
    pub fn default_log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a quantity of an item to the inventory.
    #[command(allow_negative_numbers = true)]
    Add { name: String, qty: i64 },

    /// Remove a quantity of an item from the inventory.
    #[command(allow_negative_numbers = true)]
    Remove { name: String, qty: i64 },

    /// Report every item and its quantity.
    List,

    /// Report the stored quantity of one item.
    Get { name: String },

    /// Report items whose quantity is below a threshold.
    Low {
        /// Items with quantity strictly below this value are reported.
        #[arg(long, default_value_t = 5)]
        threshold: u64,
    },
}

/// Execute one parsed command against the persisted store.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let file = FileStore::new(cli.file);
    match cli.command {
        Commands::Add { name, qty } => add(&file, &name, qty),
        Commands::Remove { name, qty } => remove(&file, &name, qty),
        Commands::List => list(&file),
        Commands::Get { name } => get(&file, &name),
        Commands::Low { threshold } => low(&file, threshold),
    }
}

fn add(file: &FileStore, name: &str, qty: i64) -> anyhow::Result<()> {
    let mut store = file.load_or_empty()?;
    let mut audit = AuditLog::new();

    let total = store
        .add_item(name, qty, Some(&mut audit))
        .with_context(|| format!("failed to add {qty} of {name:?}"))?;
    file.save(&store)?;

    for entry in &audit {
        tracing::debug!(%entry, "audit");
    }
    tracing::info!("added {qty} of {name} (now {total})");
    Ok(())
}

fn remove(file: &FileStore, name: &str, qty: i64) -> anyhow::Result<()> {
    let mut store = file.load_or_empty()?;

    let outcome = store
        .remove_item(name, qty)
        .with_context(|| format!("failed to remove {qty} of {name:?}"))?;
    file.save(&store)?;

    match outcome {
        RemoveOutcome::Reduced(remaining) => {
            tracing::info!("removed {qty} of {name} ({remaining} remaining)");
        }
        RemoveOutcome::Emptied => {
            tracing::info!("removed {qty} of {name} (record dropped)");
        }
    }
    Ok(())
}

fn list(file: &FileStore) -> anyhow::Result<()> {
    let store = file.load_or_empty()?;
    if store.is_empty() {
        tracing::info!("inventory is empty");
        return Ok(());
    }
    for record in store.records() {
        tracing::info!("{} -> {}", record.name, record.quantity);
    }
    Ok(())
}

fn get(file: &FileStore, name: &str) -> anyhow::Result<()> {
    let store = file.load_or_empty()?;
    let quantity = store
        .quantity_of(name)
        .with_context(|| format!("failed to look up {name:?}"))?;
    tracing::info!("{name}: {quantity}");
    Ok(())
}

fn low(file: &FileStore, threshold: u64) -> anyhow::Result<()> {
    let store = file.load_or_empty()?;
    let low = store.low_stock(Quantity::from_count(threshold));
    if low.is_empty() {
        tracing::info!("no items below threshold {threshold}");
        return Ok(());
    }
    for name in low {
        tracing::warn!("low stock: {name}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(argv: &[&str]) -> Cli {
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn verbosity_maps_to_log_directives() {
        assert_eq!(parse(&["stockroom", "list"]).default_log_directive(), "info");
        assert_eq!(
            parse(&["stockroom", "-v", "list"]).default_log_directive(),
            "debug"
        );
        assert_eq!(
            parse(&["stockroom", "-vv", "list"]).default_log_directive(),
            "trace"
        );
    }

    #[test]
    fn add_arguments_parse() {
        let cli = parse(&["stockroom", "--file", "stock.json", "add", "apple", "10"]);
        assert_eq!(cli.file, PathBuf::from("stock.json"));
        match cli.command {
            Commands::Add { name, qty } => {
                assert_eq!(name, "apple");
                assert_eq!(qty, 10);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn negative_quantities_reach_domain_validation() {
        // The parser must pass -1 through; rejecting it is the store's job.
        let cli = parse(&["stockroom", "add", "apple", "-1"]);
        match cli.command {
            Commands::Add { qty, .. } => assert_eq!(qty, -1),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
