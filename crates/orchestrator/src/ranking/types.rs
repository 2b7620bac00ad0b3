#![forbid(unsafe_code)]

use kernel::{EffectiveSplit, EnrichedCompetitor};

/// An enriched runner with its scores. Ranking fields are `None` for runners
/// excluded from ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCompetitor {
    pub enriched: EnrichedCompetitor,
    pub collision_risk: u32,
    pub speed_rank: Option<u32>,
    pub composite_score: Option<f64>,
    pub rank: Option<u32>,
    /// Percentage, one decimal place.
    pub win_probability: f64,
}

impl RankedCompetitor {
    pub fn name(&self) -> &str {
        self.enriched.name()
    }

    pub fn lane(&self) -> u8 {
        self.enriched.lane()
    }

    pub fn effective_split(&self) -> EffectiveSplit {
        self.enriched.effective_split()
    }

    pub fn is_ranked(&self) -> bool {
        self.rank.is_some()
    }
}
