#![forbid(unsafe_code)]

use clap::Parser;
use config::Config;
use kernel::Roster;
use orchestrator::Analyzer;
use rt_split::{cli::Cli, report, roster_file};
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const PLACEHOLDER_FIELD: u8 = 8;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::builder()
        .with_default_directive(cli.verbosity.tracing_level_filter().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    debug!(config = ?cli);

    let mut config = match &cli.conffile {
        Some(path) => Config::load(path)?,
        _ => Config::new(),
    };
    if let Some(policy) = cli.policy {
        config.scoring.policy = policy;
    }

    if cli.dump_config {
        io::stdout().lock().write_all(config.to_toml()?.as_bytes())?;
        return Ok(());
    }

    let roster = match &cli.roster {
        Some(path) => roster_file::load(path)?,
        _ => Roster::placeholder(PLACEHOLDER_FIELD),
    };

    let analyzer = Analyzer::from_config(config);
    let context = match cli.track.as_deref() {
        Some(track) => Some(analyzer.prepare(track, cli.race).await),
        None => None,
    };
    let analysis = analyzer.analyze(&roster, cli.track.as_deref())?;

    let mut stdout = io::stdout().lock();
    report::write_report(&mut stdout, &analysis, context.as_ref())?;
    Ok(())
}
