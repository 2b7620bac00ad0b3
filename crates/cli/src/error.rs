#![forbid(unsafe_code)]

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read roster {path:?}: {source}")]
    RosterRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse roster: {0}")]
    RosterParse(#[from] toml_edit::de::Error),
}
