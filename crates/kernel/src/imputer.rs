#![forbid(unsafe_code)]

use crate::roster::RecordedSplit;
use config::{ImputationPolicy, Scoring};
use std::cmp::Ordering;
use std::fmt;

/// Split used for ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectiveSplit {
    Seconds(f64),
    /// No split and none substituted. Sorts after every real split.
    Excluded,
}

impl EffectiveSplit {
    pub fn seconds(self) -> Option<f64> {
        match self {
            EffectiveSplit::Seconds(seconds) => Some(seconds),
            EffectiveSplit::Excluded => None,
        }
    }

    pub fn is_excluded(self) -> bool {
        matches!(self, EffectiveSplit::Excluded)
    }

    /// Total order: real splits ascending, then `Excluded`.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (EffectiveSplit::Seconds(a), EffectiveSplit::Seconds(b)) => a.total_cmp(b),
            (EffectiveSplit::Seconds(_), EffectiveSplit::Excluded) => Ordering::Less,
            (EffectiveSplit::Excluded, EffectiveSplit::Seconds(_)) => Ordering::Greater,
            (EffectiveSplit::Excluded, EffectiveSplit::Excluded) => Ordering::Equal,
        }
    }
}

/// Two decimal places; full precision is kept for ranking.
impl fmt::Display for EffectiveSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectiveSplit::Seconds(seconds) => write!(f, "{seconds:.2}"),
            EffectiveSplit::Excluded => f.write_str("-"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSplit {
    pub split: EffectiveSplit,
    pub imputed: bool,
}

/// Parse a recorded split. `None` for anything that is not a finite,
/// non-negative number of seconds.
pub fn try_parse_split(recorded: &RecordedSplit) -> Option<f64> {
    let seconds = match recorded {
        RecordedSplit::Seconds(seconds) => *seconds,
        RecordedSplit::Text(text) => text.trim().parse::<f64>().ok()?,
    };
    (seconds.is_finite() && seconds >= 0.0).then_some(seconds)
}

#[derive(Debug, Clone)]
pub struct SplitImputer {
    policy: ImputationPolicy,
    default_split: f64,
    estimate_base: f64,
    estimate_step: f64,
    estimate_cycle: usize,
}

impl SplitImputer {
    pub fn new(scoring: &Scoring) -> Self {
        Self {
            policy: scoring.policy,
            default_split: scoring.default_split,
            estimate_base: scoring.estimate_base,
            estimate_step: scoring.estimate_step,
            estimate_cycle: scoring.estimate_cycle.max(1),
        }
    }

    pub fn policy(&self) -> ImputationPolicy {
        self.policy
    }

    /// Resolve the split for the runner at `row` (zero-based roster order).
    pub fn impute(&self, recorded: Option<&RecordedSplit>, row: usize) -> ResolvedSplit {
        if let Some(seconds) = recorded.and_then(try_parse_split) {
            return ResolvedSplit {
                split: EffectiveSplit::Seconds(seconds),
                imputed: false,
            };
        }

        let split = match self.policy {
            ImputationPolicy::ConservativeDefault => EffectiveSplit::Seconds(self.default_split),
            ImputationPolicy::EstimateSimilar => {
                // Placeholder until a similarity model exists.
                let offset = (row % self.estimate_cycle) as f64;
                EffectiveSplit::Seconds(self.estimate_base + self.estimate_step * offset)
            }
            ImputationPolicy::ExcludeFromRanking => EffectiveSplit::Excluded,
        };

        ResolvedSplit {
            split,
            imputed: true,
        }
    }
}

impl Default for SplitImputer {
    fn default() -> Self {
        Self::new(&Scoring::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn imputer(policy: ImputationPolicy) -> SplitImputer {
        SplitImputer::new(&Scoring {
            policy,
            ..Scoring::default()
        })
    }

    #[test]
    fn parses_numbers_and_text() {
        assert_eq!(try_parse_split(&RecordedSplit::Seconds(5.1)), Some(5.1));
        assert_eq!(try_parse_split(&RecordedSplit::Text(" 5.23 ".into())), Some(5.23));
        assert_eq!(try_parse_split(&RecordedSplit::Text("".into())), None);
        assert_eq!(try_parse_split(&RecordedSplit::Text("NBT".into())), None);
        assert_eq!(try_parse_split(&RecordedSplit::Text("nan".into())), None);
        assert_eq!(try_parse_split(&RecordedSplit::Seconds(-0.5)), None);
        assert_eq!(try_parse_split(&RecordedSplit::Seconds(f64::INFINITY)), None);
    }

    #[test]
    fn valid_split_is_never_flagged() {
        for policy in [
            ImputationPolicy::ConservativeDefault,
            ImputationPolicy::EstimateSimilar,
            ImputationPolicy::ExcludeFromRanking,
        ] {
            let resolved = imputer(policy).impute(Some(&RecordedSplit::Seconds(5.126)), 4);
            assert_eq!(resolved.split, EffectiveSplit::Seconds(5.126));
            assert!(!resolved.imputed);
        }
    }

    #[test]
    fn conservative_default_substitutes_constant() {
        let resolved = imputer(ImputationPolicy::ConservativeDefault).impute(None, 0);
        assert_eq!(resolved.split, EffectiveSplit::Seconds(5.60));
        assert!(resolved.imputed);
    }

    #[test]
    fn estimate_cycles_with_row_position() {
        let imputer = imputer(ImputationPolicy::EstimateSimilar);
        let missing = RecordedSplit::Text("".into());
        let splits: Vec<f64> = (0..4)
            .map(|row| imputer.impute(Some(&missing), row).split.seconds().unwrap())
            .collect();

        assert!((splits[0] - 5.50).abs() < 1e-9);
        assert!((splits[1] - 5.55).abs() < 1e-9);
        assert!((splits[2] - 5.60).abs() < 1e-9);
        assert!((splits[3] - 5.50).abs() < 1e-9);
    }

    #[test]
    fn exclude_leaves_sentinel() {
        let resolved = imputer(ImputationPolicy::ExcludeFromRanking)
            .impute(Some(&RecordedSplit::Text("".into())), 2);
        assert_eq!(resolved.split, EffectiveSplit::Excluded);
        assert!(resolved.imputed);
    }

    #[test]
    fn excluded_sorts_last() {
        let mut splits = vec![
            EffectiveSplit::Excluded,
            EffectiveSplit::Seconds(5.4),
            EffectiveSplit::Seconds(5.1),
        ];
        splits.sort_by(EffectiveSplit::total_cmp);
        assert_eq!(
            splits,
            vec![
                EffectiveSplit::Seconds(5.1),
                EffectiveSplit::Seconds(5.4),
                EffectiveSplit::Excluded,
            ]
        );
        assert_eq!(EffectiveSplit::Seconds(5.128).to_string(), "5.13");
    }
}
