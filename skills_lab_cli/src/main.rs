//! Future Skills Lab - interactive career guidance console
//!
//! Registers self-assessed skill profiles and recommends careers and
//! learning tracks from the built-in catalog.

use anyhow::Result;
use clap::Parser;
use skills_lab_cli::{Shell, ShellConfig};
use skills_lab_core::{Catalog, RecommenderConfig};
use std::io;

#[derive(Parser)]
#[command(name = "skills-lab", version)]
#[command(about = "Future Skills Lab - career guidance from self-assessed skills", long_about = None)]
struct Cli {
    /// Number of careers shown in recommendations
    #[arg(short, long, default_value_t = 3, value_parser = parse_top)]
    top: usize,

    /// Show each recommended career's learning track
    #[arg(long)]
    show_career_tracks: bool,

    /// Print the built-in catalog as JSON and exit
    #[arg(long)]
    print_catalog: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn parse_top(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("'{}' is not a positive number", s)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(default_filter));

    let catalog = Catalog::builtin();

    if cli.print_catalog {
        println!("{}", catalog.to_json_pretty()?);
        return Ok(());
    }

    let config = ShellConfig {
        recommender: RecommenderConfig {
            max_careers: cli.top,
            ..Default::default()
        },
        show_career_tracks: cli.show_career_tracks,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(catalog, config, stdin.lock(), stdout.lock());
    shell.run()?;

    Ok(())
}
