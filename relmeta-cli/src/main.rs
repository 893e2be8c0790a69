//! relmeta - release metadata operator tool
//!
//! Thin command-line surface over `relmeta-core`. Reads releases and
//! suggestions as JSON files and writes JSON to stdout (or a file).
//!
//! **Usage:**
//! ```bash
//! relmeta optimize release.json [--output optimized.json]
//! relmeta compare a.json b.json
//! relmeta rank base.json candidate1.json candidate2.json [-n 3]
//! relmeta best suggestions.json [-n 3]
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use relmeta_common::config::{ConfigResolver, ConfigSource};
use relmeta_common::TomlConfig;
use relmeta_core::{best_n_results, rank_releases, Release, ReleaseScorer, Suggestion};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for relmeta
#[derive(Parser, Debug)]
#[command(name = "relmeta")]
#[command(about = "Optimize, compare and rank music release metadata")]
#[command(version)]
struct Args {
    /// Config file (overrides RELMETA_CONFIG and the platform config file)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Promote data shared by tracks to the release and prune empty fields
    Optimize {
        /// Release JSON file
        file: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Score the identity of two releases and show every sub-score
    Compare {
        first: PathBuf,
        second: PathBuf,
    },

    /// Rank candidate releases by identity with a base release
    Rank {
        base: PathBuf,

        #[arg(required = true)]
        candidates: Vec<PathBuf>,

        /// Number of results (default from config)
        #[arg(short, value_name = "N")]
        n: Option<usize>,
    },

    /// Keep the best service suggestions by their reported score
    Best {
        /// JSON array of suggestions
        file: PathBuf,

        /// Number of results (default from config)
        #[arg(short, value_name = "N")]
        n: Option<usize>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (config, source) = ConfigResolver::new(args.config.clone())
        .load()
        .context("Failed to load configuration")?;

    init_tracing(&config, args.verbose);
    match &source {
        ConfigSource::Defaults => debug!("Using compiled default configuration"),
        ConfigSource::UnusablePlatformFile { path, reason } => warn!(
            "Ignoring unusable config file {}: {} (using defaults)",
            path.display(),
            reason
        ),
        other => debug!("Configuration source: {:?}", other),
    }

    let scorer = ReleaseScorer::new(config.scoring);

    match args.command {
        Command::Optimize { file, output } => {
            let mut release = read_release(&file)?;
            let report = release.optimize();
            info!(
                "Optimized {}: notes promoted: {}, tags promoted: {}, actor ids hoisted: {}",
                file.display(),
                report.notes_promoted,
                report.unprocessed_promoted,
                report.actor_ids_hoisted
            );
            let json = release.to_json_pretty()?;
            match output {
                Some(path) => {
                    fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Wrote {}", path.display());
                }
                None => println!("{}", json),
            }
        }
        Command::Compare { first, second } => {
            let a = read_release(&first)?;
            let b = read_release(&second)?;
            print_json(&scorer.breakdown(&a, &b))?;
        }
        Command::Rank { base, candidates, n } => {
            let base = read_release(&base)?;
            let candidates = candidates
                .iter()
                .map(|path| read_release(path))
                .collect::<Result<Vec<_>>>()?;
            let n = n.unwrap_or(config.ranking.default_count);
            info!("Ranking {} candidates, keeping {}", candidates.len(), n);
            print_json(&rank_releases(&base, candidates, n, &scorer))?;
        }
        Command::Best { file, n } => {
            let content = read_file(&file)?;
            let suggestions: Vec<Suggestion> = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse suggestions in {}", file.display()))?;
            let n = n.unwrap_or(config.ranking.default_count);
            print_json(&best_n_results(suggestions, n))?;
        }
    }

    Ok(())
}

fn init_tracing(config: &TomlConfig, verbose: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(&config.logging.level, verbose, rust_log.as_deref());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .init();
}

/// `--verbose` forces debug; otherwise `RUST_LOG` if set, else the configured level
fn filter_directive<'a>(
    config_level: &'a str,
    verbose: bool,
    rust_log: Option<&'a str>,
) -> &'a str {
    if verbose {
        return "debug";
    }
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ => config_level,
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_release(path: &Path) -> Result<Release> {
    let content = read_file(path)?;
    Release::from_json(&content)
        .with_context(|| format!("Failed to parse release in {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_overrides_rust_log() {
        assert_eq!(filter_directive("info", true, Some("warn")), "debug");
        assert_eq!(filter_directive("error", true, None), "debug");
    }

    #[test]
    fn test_rust_log_overrides_config_level() {
        let directive = filter_directive("info", false, Some("relmeta_core=trace"));
        assert_eq!(directive, "relmeta_core=trace");
        assert_eq!(filter_directive("warn", false, Some("  ")), "warn");
        assert_eq!(filter_directive("warn", false, None), "warn");
    }
}
