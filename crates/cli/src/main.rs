mod report;

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use verdure_core::{NotificationRecord, PriorityRules, TriageStats, critical, rank, render};

#[derive(Parser)]
#[command(name = "verdure")]
#[command(about = "Rank notifications by urgency and print a digest of the critical ones", long_about = None)]
struct Cli {
    /// JSON array of notification records
    #[arg(short, long)]
    records: PathBuf,

    /// JSON priority rules file
    #[arg(short = 'R', long)]
    rules: Option<PathBuf>,

    /// Override a rule list, e.g. `keywords=urgent,asap` (repeatable)
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,

    /// Reference time: epoch milliseconds or RFC 3339. Defaults to now.
    #[arg(short, long)]
    now: Option<String>,

    /// Print only the digest
    #[arg(long)]
    digest_only: bool,
}

fn main() -> anyhow::Result<()> {
    // Tracing: JSON to stderr when RUST_LOG is set, stdout stays clean for the report
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .init();
    }

    let cli = Cli::parse();

    let mut rules = match &cli.rules {
        Some(path) => PriorityRules::load(path)
            .with_context(|| format!("loading rules from {}", path.display()))?,
        None => PriorityRules::default(),
    };
    if !cli.overrides.is_empty() {
        rules
            .apply_overrides(&parse_overrides(&cli.overrides)?)
            .context("applying --set overrides")?;
    }

    let raw = std::fs::read_to_string(&cli.records)
        .with_context(|| format!("reading records from {}", cli.records.display()))?;
    let records: Vec<NotificationRecord> =
        serde_json::from_str(&raw).context("parsing notification records")?;

    let now = match cli.now.as_deref() {
        Some(s) => parse_now(s)?,
        None => Utc::now().timestamp_millis(),
    };
    tracing::info!(records = records.len(), now, "triage started");

    let ranked = rank(records, &rules, now);
    let digest = render(&critical(&ranked));

    if cli.digest_only {
        println!("{digest}");
        return Ok(());
    }

    for scored in &ranked {
        println!("{}", report::table_line(scored));
    }
    println!();
    println!("{digest}");
    println!();
    println!("{}", report::stats_block(&TriageStats::from_ranked(&ranked)));
    Ok(())
}

fn parse_overrides(pairs: &[String]) -> anyhow::Result<HashMap<String, String>> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => Ok((key.trim().to_owned(), value.to_owned())),
            None => bail!("override must be KEY=VALUE, got {pair:?}"),
        })
        .collect()
}

/// Epoch milliseconds, or an RFC 3339 timestamp.
fn parse_now(s: &str) -> anyhow::Result<i64> {
    if let Ok(ms) = s.parse::<i64>() {
        return Ok(ms);
    }
    let parsed = DateTime::parse_from_rfc3339(s)
        .with_context(|| format!("--now must be epoch ms or RFC 3339, got {s:?}"))?;
    Ok(parsed.with_timezone(&Utc).timestamp_millis())
}
