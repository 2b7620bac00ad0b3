#![forbid(unsafe_code)]

use crate::ranking::stats::{min_rank, softmax_percent};
use crate::ranking::types::RankedCompetitor;
use config::{Config, ImputationPolicy};
use kernel::{
    CollisionReport, EffectiveSplit, EnrichedCompetitor, RankingError, ensure_unique_lanes,
};
use tracing::debug;

pub trait Ranker: Send + Sync {
    /// Score and order an enriched field. The result is sorted by rank, ties
    /// by box, with unranked runners last.
    fn rank(
        &self,
        field: Vec<EnrichedCompetitor>,
        collisions: &CollisionReport,
    ) -> Result<Vec<RankedCompetitor>, RankingError>;
}

/// Sums speed rank, box bias, collision risk, R/T rating and win recency.
#[derive(Debug, Clone)]
pub struct CompositeRanker {
    policy: ImputationPolicy,
}

impl CompositeRanker {
    pub fn new(config: &Config) -> Self {
        Self {
            policy: config.scoring.policy,
        }
    }

    fn composite(competitor: &EnrichedCompetitor, speed_rank: u32, collision_risk: u32) -> f64 {
        f64::from(speed_rank)
            + competitor.bias.penalty()
            + f64::from(collision_risk)
            + f64::from(competitor.decoded.rating)
            + competitor.recency_score
    }
}

impl Default for CompositeRanker {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Ranker for CompositeRanker {
    fn rank(
        &self,
        field: Vec<EnrichedCompetitor>,
        collisions: &CollisionReport,
    ) -> Result<Vec<RankedCompetitor>, RankingError> {
        if field.is_empty() {
            return Err(RankingError::EmptyRoster);
        }
        ensure_unique_lanes(field.iter().map(|c| (c.lane(), c.name())))?;
        if self.policy.requires_full_resolution()
            && let Some(unresolved) = field.iter().find(|c| c.effective_split().is_excluded())
        {
            return Err(RankingError::UnresolvedSplit {
                name: unresolved.name().to_owned(),
                policy: self.policy.to_string(),
            });
        }

        let (rankable, mut excluded): (Vec<_>, Vec<_>) = field
            .into_iter()
            .partition(|c| !c.effective_split().is_excluded());
        if rankable.is_empty() {
            return Err(RankingError::NoRankableRunners);
        }

        let splits: Vec<EffectiveSplit> = rankable.iter().map(|c| c.effective_split()).collect();
        let speed_ranks = min_rank(&splits, EffectiveSplit::total_cmp);

        let risks: Vec<u32> = rankable.iter().map(|c| collisions.risk(c.lane())).collect();
        let composites: Vec<f64> = rankable
            .iter()
            .zip(&speed_ranks)
            .zip(&risks)
            .map(|((c, &speed), &risk)| Self::composite(c, speed, risk))
            .collect();
        let ranks = min_rank(&composites, f64::total_cmp);
        let probabilities = softmax_percent(&composites);

        let mut ranked: Vec<RankedCompetitor> = rankable
            .into_iter()
            .enumerate()
            .map(|(ix, enriched)| RankedCompetitor {
                enriched,
                collision_risk: risks[ix],
                speed_rank: Some(speed_ranks[ix]),
                composite_score: Some(composites[ix]),
                rank: Some(ranks[ix]),
                win_probability: probabilities[ix],
            })
            .collect();
        ranked.sort_by_key(|c| (c.rank, c.lane()));

        excluded.sort_by_key(|c| c.lane());
        debug!(
            ranked = ranked.len(),
            excluded = excluded.len(),
            "field ranked"
        );
        ranked.extend(excluded.into_iter().map(|enriched| RankedCompetitor {
            collision_risk: collisions.risk(enriched.lane()),
            enriched,
            speed_rank: None,
            composite_score: None,
            rank: None,
            win_probability: 0.0,
        }));

        Ok(ranked)
    }
}
