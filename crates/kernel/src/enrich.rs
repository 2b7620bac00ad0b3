#![forbid(unsafe_code)]

use crate::bias::BiasTable;
use crate::decoder::{Decoded, TraitDecoder};
use crate::flags::QualityFlags;
use crate::imputer::{EffectiveSplit, ResolvedSplit, SplitImputer};
use crate::recency::{RecencyScorer, WinRecency};
use crate::roster::{Competitor, Roster};
use config::{BiasCategory, Config, ImputationPolicy, RunningStyle};
use tracing::debug;

/// A runner with every row-local field resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedCompetitor {
    pub competitor: Competitor,
    pub decoded: Decoded,
    pub split: ResolvedSplit,
    pub bias: BiasCategory,
    pub recency: Option<WinRecency>,
    pub recency_score: f64,
    pub flags: QualityFlags,
}

impl EnrichedCompetitor {
    pub fn name(&self) -> &str {
        &self.competitor.name
    }

    pub fn lane(&self) -> u8 {
        self.competitor.lane
    }

    pub fn style(&self) -> RunningStyle {
        self.decoded.style
    }

    pub fn effective_split(&self) -> EffectiveSplit {
        self.split.split
    }
}

/// First pass: resolves style, split, bias and recency for each row on its own.
#[derive(Debug, Clone)]
pub struct Enricher {
    decoder: TraitDecoder,
    imputer: SplitImputer,
    bias: BiasTable,
    recency: RecencyScorer,
}

impl Enricher {
    pub fn new(
        decoder: TraitDecoder,
        imputer: SplitImputer,
        bias: BiasTable,
        recency: RecencyScorer,
    ) -> Self {
        Self {
            decoder,
            imputer,
            bias,
            recency,
        }
    }

    /// Build from configuration, using the bias layout of `track`.
    pub fn from_config(config: &Config, track: Option<&str>) -> Self {
        Self::new(
            TraitDecoder::new(&config.decoder),
            SplitImputer::new(&config.scoring),
            BiasTable::for_track(&config.tracks, track),
            RecencyScorer::new(config.scoring.recency),
        )
    }

    pub fn policy(&self) -> ImputationPolicy {
        self.imputer.policy()
    }

    pub fn enrich(&self, roster: &Roster) -> Vec<EnrichedCompetitor> {
        let field: Vec<_> = roster
            .competitors()
            .iter()
            .enumerate()
            .map(|(row, competitor)| self.enrich_one(row, competitor))
            .collect();

        debug!(
            runners = field.len(),
            defaulted = field
                .iter()
                .filter(|c| c.flags.contains(QualityFlags::DECODE_DEFAULT))
                .count(),
            imputed = field
                .iter()
                .filter(|c| c.flags.contains(QualityFlags::IMPUTATION_APPLIED))
                .count(),
            "roster enriched"
        );
        field
    }

    fn enrich_one(&self, row: usize, competitor: &Competitor) -> EnrichedCompetitor {
        let decoded = self.decoder.decode(competitor.style_code.as_deref());
        let split = self
            .imputer
            .impute(competitor.recorded_split.as_ref(), row);
        let recency = competitor
            .recency_code
            .as_deref()
            .and_then(WinRecency::parse);

        let mut flags = QualityFlags::empty();
        flags.set(QualityFlags::DECODE_DEFAULT, decoded.defaulted);
        flags.set(QualityFlags::IMPUTATION_APPLIED, split.imputed);
        flags.set(QualityFlags::EXCLUDED, split.split.is_excluded());

        EnrichedCompetitor {
            competitor: competitor.clone(),
            decoded,
            split,
            bias: self.bias.lookup(competitor.lane),
            recency,
            recency_score: self.recency.score(recency),
            flags,
        }
    }
}

impl Default for Enricher {
    fn default() -> Self {
        Self::from_config(&Config::default(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Scoring;

    #[test]
    fn enrich_resolves_each_row() {
        let roster: Roster = [
            Competitor::new("Alpha", 1)
                .with_split(5.02)
                .with_style("E R")
                .with_recency("Last Start"),
            Competitor::new("Bravo", 4).with_split_text("").with_style("SCR"),
        ]
        .into_iter()
        .collect();

        let field = Enricher::default().enrich(&roster);

        assert_eq!(field[0].style(), RunningStyle::Railer);
        assert_eq!(field[0].bias, BiasCategory::Good);
        assert_eq!(field[0].flags, QualityFlags::empty());
        assert_eq!(field[0].recency, Some(WinRecency::LastStart));

        assert_eq!(field[1].bias, BiasCategory::Risky);
        assert_eq!(field[1].effective_split(), EffectiveSplit::Seconds(5.60));
        assert_eq!(
            field[1].flags,
            QualityFlags::DECODE_DEFAULT | QualityFlags::IMPUTATION_APPLIED
        );
        assert_eq!(field[1].recency_score, 0.0);
    }

    #[test]
    fn excluded_runner_is_flagged() {
        let mut config = Config::default();
        config.scoring = Scoring {
            policy: ImputationPolicy::ExcludeFromRanking,
            ..Scoring::default()
        };
        let roster: Roster = [Competitor::new("Alpha", 1)].into_iter().collect();

        let field = Enricher::from_config(&config, None).enrich(&roster);

        assert!(field[0].flags.contains(QualityFlags::EXCLUDED));
        assert!(field[0].effective_split().is_excluded());
    }
}
