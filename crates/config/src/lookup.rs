#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::time::Duration;

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Lookup {
    /// How long a race-distance answer stays cached, in seconds.
    #[serde_as(as = "serde_with::DurationSeconds")]
    pub cache_ttl: Duration,
}

impl Default for Lookup {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(5 * 60),
        }
    }
}
