#![forbid(unsafe_code)]

use crate::error::Error;
use kernel::Roster;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a roster from a TOML file.
///
/// ```toml
/// [[runner]]
/// name = "Zipping Zeus"
/// box = 1
/// split = 5.12
/// rt = "G R"
/// last_win = "Last Start"
/// ```
pub fn load(path: &Path) -> Result<Roster, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::RosterRead {
        path: path.to_owned(),
        source,
    })?;
    let roster = parse(&text)?;
    debug!(?path, runners = roster.len(), "roster loaded");
    Ok(roster)
}

pub fn parse(text: &str) -> Result<Roster, Error> {
    Ok(toml_edit::de::from_str(text)?)
}
