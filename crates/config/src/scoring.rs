#![forbid(unsafe_code)]

use crate::imputation_policy::ImputationPolicy;
use crate::recency_table::RecencyTable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Scoring {
    /// Policy applied to runners without a usable split.
    pub policy: ImputationPolicy,

    /// Split (seconds) substituted by the conservative policy.
    pub default_split: f64,

    /// Base split (seconds) for the row-position estimate.
    pub estimate_base: f64,

    /// Increment added per row for the row-position estimate.
    pub estimate_step: f64,

    /// Number of rows after which the row-position estimate repeats.
    pub estimate_cycle: usize,

    /// Adjacent boxes whose splits differ by at most this many seconds contest
    /// the same ground.
    pub contest_window: f64,

    pub recency: RecencyTable,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            policy: ImputationPolicy::default(),
            default_split: 5.60,
            estimate_base: 5.50,
            estimate_step: 0.05,
            estimate_cycle: 3,
            contest_window: 0.10,
            recency: RecencyTable::default(),
        }
    }
}
