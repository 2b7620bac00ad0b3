#![forbid(unsafe_code)]

mod bias_category;
mod decoder_tables;
mod error;
mod imputation_policy;
mod lookup;
mod recency_table;
mod running_style;
mod scoring;
mod tracks;

pub use bias_category::BiasCategory;
pub use decoder_tables::DecoderTables;
pub use error::Error;
pub use imputation_policy::ImputationPolicy;
pub use lookup::Lookup;
pub use recency_table::RecencyTable;
pub use running_style::RunningStyle;
pub use scoring::Scoring;
pub use tracks::{TrackProfile, Tracks};

use figment::Figment;
use figment::providers::{Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub scoring: Scoring,
    pub decoder: DecoderTables,
    pub tracks: Tracks,
    pub lookup: Lookup,
}

impl Config {
    /// Configuration with every section at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a TOML file layered over the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_owned()));
        }

        let config: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml_edit::ser::to_string_pretty(self)?)
    }
}
