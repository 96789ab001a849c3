use std::{io, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use shared::domain::{SortDirection, SwapStep};
use sort_core::{apply_plan, plan};
use tokio::io::BufReader;

mod commands;
mod config;
mod host;
mod render;

use config::load_settings;
use host::Host;
use render::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "sortviz", about = "Step-by-step quicksort animation in the terminal")]
struct Cli {
    /// Config file; defaults to ./sortviz.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for reproducible value sets.
    #[arg(long)]
    seed: Option<u64>,
    /// Emit render payloads as JSON lines instead of a text grid.
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate values, then animate `sorts` alternating sorts.
    Run {
        #[arg(long, default_value = "10")]
        count: String,
        #[arg(long, default_value_t = 2)]
        sorts: usize,
    },
    /// Print the swap plan for a fixed list of values.
    Plan {
        #[arg(long, value_delimiter = ',', required = true)]
        values: Vec<u32>,
        #[arg(long)]
        descending: bool,
    },
    /// Drive a session from typed commands.
    Interactive,
}

#[derive(Debug, Serialize)]
struct PlanReport {
    direction: SortDirection,
    steps: Vec<SwapStep>,
    sorted: Vec<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(io::stderr)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match cli.command {
        Command::Run { count, sorts } => {
            let mut host = Host::new(&settings, io::stdout(), format);
            host.run_sorts(&count, sorts).await?;
            tracing::info!(values = ?host.session().values(), "run finished");
        }
        Command::Plan { values, descending } => {
            let direction = if descending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            let steps = plan(&values, direction);
            let mut sorted = values;
            apply_plan(&mut sorted, &steps);
            let report = PlanReport {
                direction,
                steps,
                sorted,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Interactive => {
            let mut host = Host::new(&settings, io::stdout(), format);
            host.interactive(BufReader::new(tokio::io::stdin())).await?;
        }
    }

    Ok(())
}
