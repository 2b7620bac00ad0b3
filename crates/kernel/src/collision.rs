#![forbid(unsafe_code)]

use crate::enrich::EnrichedCompetitor;
use config::{RunningStyle, Scoring};
use itertools::Itertools;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, trace};

// Absorbs representation error in split differences such as 5.20 - 5.10.
const SPLIT_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterferenceKind {
    /// A faster runner from a lower box crosses into a wide runner's path.
    FromInside,
    /// A faster runner from a higher box crosses towards a railer.
    FromOutside,
    /// Neighbouring boxes with near-equal splits fight for the same ground.
    /// Not counted as risk.
    Contest,
}

/// Directed interference from box `from` onto box `to`. For a contest `from`
/// is the lower box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interference {
    pub from: u8,
    pub to: u8,
    pub kind: InterferenceKind,
}

impl Interference {
    pub fn is_inward(&self) -> bool {
        !matches!(self.kind, InterferenceKind::Contest)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    risk: BTreeMap<u8, u32>,
    edges: Vec<Interference>,
}

impl CollisionReport {
    /// Number of faster runners projected to cross into `lane`.
    pub fn risk(&self, lane: u8) -> u32 {
        self.risk.get(&lane).copied().unwrap_or(0)
    }

    pub fn edges(&self) -> &[Interference] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Interference> {
        self.edges
    }
}

/// Second pass: pairwise interference over a fully enriched field.
#[derive(Debug, Clone)]
pub struct CollisionEstimator {
    contest_window: f64,
}

impl CollisionEstimator {
    pub fn new(scoring: &Scoring) -> Self {
        Self {
            contest_window: scoring.contest_window.max(0.0),
        }
    }

    pub fn estimate(&self, field: &[EnrichedCompetitor]) -> CollisionReport {
        let mut runners: Vec<&EnrichedCompetitor> = field.iter().collect();
        runners.sort_by_key(|c| c.lane());

        let mut report = CollisionReport {
            risk: runners.iter().map(|c| (c.lane(), 0)).collect(),
            edges: Vec::new(),
        };
        let mut linked: HashSet<(u8, u8)> = HashSet::new();

        for (victim, other) in runners.iter().cartesian_product(runners.iter()) {
            if victim.lane() == other.lane() {
                continue;
            }
            let Some(kind) = Self::inward(victim, other) else {
                continue;
            };
            trace!(from = other.lane(), to = victim.lane(), ?kind, "interference");
            *report.risk.entry(victim.lane()).or_default() += 1;
            report.edges.push(Interference {
                from: other.lane(),
                to: victim.lane(),
                kind,
            });
            linked.insert(pair_key(victim.lane(), other.lane()));
        }

        for (a, b) in runners.iter().tuple_combinations() {
            if b.lane().abs_diff(a.lane()) != 1 || linked.contains(&pair_key(a.lane(), b.lane())) {
                continue;
            }
            let (Some(split_a), Some(split_b)) =
                (a.effective_split().seconds(), b.effective_split().seconds())
            else {
                continue;
            };
            if (split_a - split_b).abs() <= self.contest_window + SPLIT_EPSILON {
                report.edges.push(Interference {
                    from: a.lane(),
                    to: b.lane(),
                    kind: InterferenceKind::Contest,
                });
            }
        }

        debug!(
            inward = report.edges.iter().filter(|e| e.is_inward()).count(),
            contests = report.edges.iter().filter(|e| !e.is_inward()).count(),
            "collision estimate complete"
        );
        report
    }

    /// Does `other` cross into `victim`'s path?
    fn inward(victim: &EnrichedCompetitor, other: &EnrichedCompetitor) -> Option<InterferenceKind> {
        let victim_split = victim.effective_split().seconds()?;
        let other_split = other.effective_split().seconds()?;
        if other_split >= victim_split {
            return None;
        }

        match victim.style() {
            RunningStyle::Wide
                if other.lane() < victim.lane() && other.style() != RunningStyle::Wide =>
            {
                Some(InterferenceKind::FromInside)
            }
            RunningStyle::Railer
                if other.lane() > victim.lane() && other.style() != RunningStyle::Railer =>
            {
                Some(InterferenceKind::FromOutside)
            }
            _ => None,
        }
    }
}

impl Default for CollisionEstimator {
    fn default() -> Self {
        Self::new(&Scoring::default())
    }
}

fn pair_key(a: u8, b: u8) -> (u8, u8) {
    (a.min(b), a.max(b))
}
