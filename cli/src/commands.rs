pub mod export;
pub mod summary;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tfinv_common::config::Config;
use tfinv_common::format::Format;
use tfinv_core::inventory::{Filter, Inventory};
use tfinv_core::state;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "tfinv", version)]
#[command(about = "Builds host inventories from infrastructure state.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// More log output (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Less terminal output (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the inventory as json, yaml or ini
    #[command(alias = "r")]
    Render(RenderArgs),
    /// Print the groups and hosts found in the state
    #[command(alias = "s")]
    Summary(SourceArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format: json, yaml or ini
    #[arg(short, long, default_value = "yaml")]
    pub format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SourceArgs {
    /// State document to read, `-` for stdin
    #[arg(short, long, default_value = "-")]
    pub input: PathBuf,

    /// Only keep these hosts (repeatable or comma separated)
    #[arg(long = "host", value_delimiter = ',')]
    pub hosts: Vec<String>,

    /// Only keep these groups and hosts inside them (repeatable or comma separated)
    #[arg(long = "group", value_delimiter = ',')]
    pub groups: Vec<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl SourceArgs {
    pub fn to_config(&self, quiet: u8) -> Config {
        Config {
            hosts: self.hosts.clone(),
            groups: self.groups.clone(),
            quiet,
            ..Config::default()
        }
    }

    fn reads_stdin(&self) -> bool {
        self.input == Path::new("-")
    }
}

/// Reads and folds the state document, then applies the configured filters.
pub fn load_inventory(source: &SourceArgs, cfg: &Config) -> anyhow::Result<Inventory> {
    let inventory: Inventory = if source.reads_stdin() {
        state::inventory_from_reader(io::stdin().lock())?
    } else {
        let file = File::open(&source.input)
            .with_context(|| format!("failed to open {}", source.input.display()))?;
        state::inventory_from_reader(BufReader::new(file))
            .with_context(|| format!("failed to read {}", source.input.display()))?
    };

    info!(
        "Folded {} hosts and {} groups",
        inventory.hosts().len(),
        inventory.groups().len()
    );

    let filter = Filter::new(cfg.hosts.iter().cloned(), cfg.groups.iter().cloned());
    if filter.is_passthrough() {
        return Ok(inventory);
    }

    for name in filter.unknown_hosts(&inventory) {
        warn!("Host filter `{name}` matches no host");
    }
    for name in filter.unknown_groups(&inventory) {
        warn!("Group filter `{name}` matches no group");
    }

    let filtered = inventory.copy_filtered(&filter);
    info!(
        "Kept {} hosts and {} groups after filtering",
        filtered.hosts().len(),
        filtered.groups().len()
    );
    Ok(filtered)
}
