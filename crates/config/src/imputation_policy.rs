#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a missing or unparseable recorded split is filled in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ImputationPolicy {
    /// Substitute a fixed, deliberately slow split.
    #[default]
    ConservativeDefault,
    /// Substitute a placeholder derived from the runner's row position.
    EstimateSimilar,
    /// Leave the split unresolved; the runner is not ranked.
    ExcludeFromRanking,
}

impl ImputationPolicy {
    /// Whether every runner must end up with a real split under this policy.
    pub fn requires_full_resolution(self) -> bool {
        !matches!(self, ImputationPolicy::ExcludeFromRanking)
    }
}

impl fmt::Display for ImputationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImputationPolicy::ConservativeDefault => "conservative-default",
            ImputationPolicy::EstimateSimilar => "estimate-similar",
            ImputationPolicy::ExcludeFromRanking => "exclude-from-ranking",
        };
        f.write_str(name)
    }
}
