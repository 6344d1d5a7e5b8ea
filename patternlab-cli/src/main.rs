//! PatternLab CLI — decorate, transform, and scenario run commands.
//!
//! Commands:
//! - `decorate` — build a decorator chain and print the text after each wrap
//! - `transform` — run a strategy context over some text, swapping strategies
//! - `run` — execute a TOML scenario file (or the built-in demo)
//!
//! Results go to stdout; logs go to stderr (`-v` for info, `-vv` for debug,
//! or set `RUST_LOG`).

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use patternlab_core::decorator::{chain_stages, DecoratorKind};
use patternlab_core::factory::create_strategy;
use patternlab_core::strategy::{Context, StrategyKind};
use patternlab_runner::{run_file, run_scenarios, RunReport, ScenarioConfig};

#[derive(Parser)]
#[command(
    name = "patternlab",
    about = "PatternLab CLI — decorator chains and swappable text strategies"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a decorator chain and print the text after each wrap, leaf first.
    Decorate {
        /// Layer to wrap with, innermost first: a, b, or plain. Repeatable.
        #[arg(long = "layer", value_name = "LAYER")]
        layers: Vec<DecoratorKind>,
    },
    /// Run a strategy context over TEXT, swapping through the given strategies.
    Transform {
        /// Input text.
        text: String,

        /// Strategy to apply: sorting or reverse. Repeat to swap in order.
        #[arg(long = "strategy", value_name = "STRATEGY", default_value = "sorting")]
        strategies: Vec<StrategyKind>,
    },
    /// Execute a scenario file. Defaults to the built-in demo.
    Run {
        /// Path to a TOML scenario file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the report as JSON.
        #[arg(long, default_value_t = false, conflicts_with = "detailed")]
        json: bool,

        /// Print scenario headers and step labels alongside outputs.
        #[arg(long, default_value_t = false)]
        detailed: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Decorate { layers } => run_decorate(&layers),
        Commands::Transform { text, strategies } => run_transform(&text, &strategies),
        Commands::Run {
            config,
            json,
            detailed,
        } => run_scenario_cmd(config.as_deref(), json, detailed),
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_decorate(layers: &[DecoratorKind]) -> Result<()> {
    for stage in chain_stages(layers) {
        println!("{stage}");
    }
    Ok(())
}

fn run_transform(text: &str, strategies: &[StrategyKind]) -> Result<()> {
    let Some((&first, rest)) = strategies.split_first() else {
        anyhow::bail!("at least one --strategy is required");
    };

    let mut context = Context::new(create_strategy(first));
    println!("{}", context.run_strategy(text)?);

    for &kind in rest {
        context.set_strategy(create_strategy(kind));
        println!("{}", context.run_strategy(text)?);
    }
    Ok(())
}

fn run_scenario_cmd(config_path: Option<&Path>, json: bool, detailed: bool) -> Result<()> {
    let report = match config_path {
        Some(path) => run_file(path)
            .with_context(|| format!("run scenario file {}", path.display()))?,
        None => {
            tracing::info!("no --config given, running built-in demo");
            run_scenarios(&ScenarioConfig::demo()).context("run built-in demo")?
        }
    };

    print_report(&report, json, detailed)
}

fn print_report(report: &RunReport, json: bool, detailed: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json().context("serialize report")?);
    } else if detailed {
        print!("{}", report.render_verbose());
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
