#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Track-specific assessment of how favourable a box is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BiasCategory {
    Good,
    #[default]
    Fair,
    Risky,
    WideBias,
}

impl BiasCategory {
    /// Penalty points contributed to the composite score.
    pub fn penalty(self) -> f64 {
        match self {
            BiasCategory::Good => 1.0,
            BiasCategory::Fair | BiasCategory::WideBias => 2.0,
            BiasCategory::Risky => 3.0,
        }
    }
}

impl fmt::Display for BiasCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BiasCategory::Good => "Good",
            BiasCategory::Fair => "Fair",
            BiasCategory::Risky => "Risky",
            BiasCategory::WideBias => "Wide Bias",
        };
        f.write_str(name)
    }
}
