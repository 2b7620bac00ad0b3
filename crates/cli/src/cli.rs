#![forbid(unsafe_code)]

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use config::ImputationPolicy;
use std::path::{Path, PathBuf};

/// Races are numbered 1 to 12 on a standard card.
const RACES: std::ops::RangeInclusive<u8> = 1..=12;

/// rt-split: greyhound R/T split & collision analyser
///
/// Ranks a field by first-section split, box bias, R/T rating, collision risk
/// and win recency, and draws a map of which runners are expected to cross
/// each other's path out of the boxes.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, value_parser = validate_file)]
    pub conffile: Option<PathBuf>,

    /// Roster file with one `[[runner]]` table per dog.
    ///
    /// Without a roster an eight-dog placeholder field is analysed.
    #[arg(short, long, value_parser = validate_file)]
    pub roster: Option<PathBuf>,

    /// Track whose box bias and race distances apply.
    #[arg(short, long)]
    pub track: Option<String>,

    /// Race number.
    #[arg(short = 'n', long, default_value_t = 1)]
    #[arg(value_parser = validate_race)]
    pub race: u8,

    /// How to handle missing splits: conservative-default, estimate-similar or
    /// exclude-from-ranking. Overrides the configuration file.
    #[arg(short, long, value_parser = parse_policy)]
    pub policy: Option<ImputationPolicy>,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    pub dump_config: bool,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

/// Check if the file exists.
#[inline(always)]
fn validate_file(file: &str) -> Result<PathBuf, String> {
    let path = Path::new(file);
    if path.exists() {
        Ok(path.to_owned())
    } else {
        Err(format!("File not found: {:?}", path))
    }
}

/// Validate race number
#[inline(always)]
fn validate_race(race: &str) -> Result<u8, String> {
    let race: u8 = race
        .parse()
        .map_err(|_| format!("`{race}` is not a valid race number"))?;
    if RACES.contains(&race) {
        Ok(race)
    } else {
        Err(format!(
            "Race number must be between {} and {}",
            RACES.start(),
            RACES.end()
        ))
    }
}

fn parse_policy(policy: &str) -> Result<ImputationPolicy, String> {
    match policy.trim().to_ascii_lowercase().as_str() {
        "conservative-default" | "conservative" => Ok(ImputationPolicy::ConservativeDefault),
        "estimate-similar" | "estimate" => Ok(ImputationPolicy::EstimateSimilar),
        "exclude-from-ranking" | "exclude" => Ok(ImputationPolicy::ExcludeFromRanking),
        _ => Err(format!("`{policy}` is not a known split policy")),
    }
}
