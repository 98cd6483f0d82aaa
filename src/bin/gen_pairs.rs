//! One-shot pairing for a signup roster
//!
//! Usage: gen-pairs [ROSTER] [--config FILE] [--exclude NAME]... [--seed N]
//!
//! Without ROSTER the `pairing.roster_file` setting is used. Configured
//! `skip_names` are always applied.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use workshop_pairs::config::Settings;
use workshop_pairs::core::{Matcher, Planner};
use workshop_pairs::services::load_roster;

#[derive(Parser)]
#[command(name = "gen-pairs", version, about = "Generate pairings for a pair programming workshop")]
struct Cli {
    /// Roster JSON file (defaults to pairing.roster_file)
    roster: Option<PathBuf>,

    /// Settings file instead of config/default.toml + config/local.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Participant to leave out (repeatable), on top of pairing.skip_names
    #[arg(long = "exclude")]
    exclude: Vec<String>,

    /// Seed for a reproducible pairing
    #[arg(long)]
    seed: Option<u64>,
}

fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // stdout carries the pairing, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .unwrap_or_else(|e| bail(format!("configuration: {e}")));

    let roster_path = cli
        .roster
        .or_else(|| settings.pairing.roster_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| bail("no roster given and pairing.roster_file is not set"));

    let roster = load_roster(&roster_path).unwrap_or_else(|e| bail(e));

    let matcher = Matcher::new(settings.pairing.weight_floor).unwrap_or_else(|e| bail(e));
    let planner = Planner::new(matcher, settings.pairing.skip_names.clone());

    let pairing = planner
        .plan(&roster, &cli.exclude, cli.seed)
        .unwrap_or_else(|e| bail(e));

    println!("{pairing}");
}
