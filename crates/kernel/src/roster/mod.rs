#![forbid(unsafe_code)]

mod competitor;

pub use competitor::{Competitor, RecordedSplit};

use crate::RankingError;
use serde::Deserialize;
use std::collections::HashMap;

/// Ordered set of runners for a single race.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Roster {
    #[serde(default, alias = "runner")]
    competitors: Vec<Competitor>,
}

impl Roster {
    pub fn new(competitors: Vec<Competitor>) -> Self {
        Self { competitors }
    }

    /// `size` runners named `Dog 1..`, each on a 5.10 split with an `F M` code.
    pub fn placeholder(size: u8) -> Self {
        let competitors = (1..=size)
            .map(|lane| {
                Competitor::new(format!("Dog {lane}"), lane)
                    .with_split(5.10)
                    .with_style("F M")
            })
            .collect();
        Self { competitors }
    }

    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    pub fn len(&self) -> usize {
        self.competitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }

    /// Check that boxes form a permutation of `1..=N` and that names are unique.
    pub fn validate(&self) -> Result<(), RankingError> {
        if self.is_empty() {
            return Err(RankingError::EmptyRoster);
        }

        ensure_unique_lanes(self.competitors.iter().map(|c| (c.lane, c.name.as_str())))?;

        let size = self.len();
        let mut names: HashMap<&str, u8> = HashMap::with_capacity(size);
        for competitor in &self.competitors {
            if competitor.lane == 0 || usize::from(competitor.lane) > size {
                return Err(RankingError::LaneOutOfRange {
                    name: competitor.name.clone(),
                    lane: competitor.lane,
                    size,
                });
            }
            if names.insert(&competitor.name, competitor.lane).is_some() {
                return Err(RankingError::DuplicateName(competitor.name.clone()));
            }
        }

        Ok(())
    }
}

/// Fail on the first box shared by two runners.
pub fn ensure_unique_lanes<'a>(
    entries: impl IntoIterator<Item = (u8, &'a str)>,
) -> Result<(), RankingError> {
    let mut lanes: HashMap<u8, &str> = HashMap::new();
    for (lane, name) in entries {
        if let Some(first) = lanes.insert(lane, name) {
            return Err(RankingError::DuplicateLane {
                lane,
                first: first.to_owned(),
                second: name.to_owned(),
            });
        }
    }
    Ok(())
}

impl FromIterator<Competitor> for Roster {
    fn from_iter<I: IntoIterator<Item = Competitor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
