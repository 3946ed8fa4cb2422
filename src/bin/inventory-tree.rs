// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Tree Printer
//!
//! Builds the reference MISIS inventory (or loads a JSON snapshot) and prints
//! it to stdout as an ASCII tree or as JSON.
//!
//! Run with: cargo run --bin inventory-tree
//!
//! Environment:
//! - `INVENTORY_FORMAT` - `tree` (default) or `json`
//! - `INVENTORY_NETWORK_NAME` - name of the reference network (default `MISIS network`)
//! - `INVENTORY_SNAPSHOT` - path to a JSON snapshot to print instead of the reference network
//! - `RUST_LOG` - tracing filter, logs go to stderr

use anyhow::{bail, Context, Result};
use cim_inventory::{Computer, Cpu, Disk, Memory, Network, StorageKind};
use std::path::PathBuf;
use tracing::{debug, info};

/// Output format for the rendered inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Tree,
    Json,
}

impl OutputFormat {
    fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "tree" | "text" => Ok(Self::Tree),
            "json" => Ok(Self::Json),
            other => bail!("Unknown INVENTORY_FORMAT '{}', expected 'tree' or 'json'", other),
        }
    }
}

/// Configuration for the inventory printer
#[derive(Debug, Clone)]
struct CliConfig {
    /// How to print the inventory
    format: OutputFormat,
    /// Name of the reference network
    network_name: String,
    /// Optional snapshot to load instead of the reference network
    snapshot: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        let format = match std::env::var("INVENTORY_FORMAT") {
            Ok(value) => OutputFormat::parse(&value)?,
            Err(_) => OutputFormat::Tree,
        };

        let network_name = std::env::var("INVENTORY_NETWORK_NAME")
            .unwrap_or_else(|_| "MISIS network".to_string());

        let snapshot = std::env::var("INVENTORY_SNAPSHOT").ok().map(PathBuf::from);

        Ok(Self {
            format,
            network_name,
            snapshot,
        })
    }
}

/// Two-host reference inventory
fn reference_network(name: &str) -> Result<Network> {
    let server1 = Computer::new("server1.misis.ru")
        .with_address("192.168.1.1")?
        .with_component(Cpu::new(4, 2500))
        .with_component(Memory::new(16000));

    let server2 = Computer::new("server2.misis.ru")
        .with_address("10.0.0.1")?
        .with_component(Cpu::new(8, 3200))
        .with_component(
            Disk::new(StorageKind::Magnetic, 2000)
                .with_partition(500, "system")?
                .with_partition(1500, "data")?,
        );

    Ok(Network::new(name)
        .with_computer(server1)
        .with_computer(server2))
}

fn load_network(config: &CliConfig) -> Result<Network> {
    match &config.snapshot {
        Some(path) => {
            info!("Loading inventory snapshot from {}", path.display());
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
            Network::from_json(&json).context("Failed to parse inventory snapshot")
        }
        None => reference_network(&config.network_name),
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = CliConfig::from_env()?;
    debug!(?config, "Configuration loaded");

    let network = load_network(&config)?;
    info!(
        "Inventory '{}' with {} computer(s)",
        network.name(),
        network.len()
    );

    match config.format {
        OutputFormat::Tree => println!("{}", network),
        OutputFormat::Json => println!("{}", network.to_json()?),
    }

    Ok(())
}
