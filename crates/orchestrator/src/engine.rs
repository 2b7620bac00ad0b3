#![forbid(unsafe_code)]

use crate::clock::SystemClock;
use crate::directory::{CachedDirectory, RaceContext, RaceDirectory, RaceDistance, StaticDirectory};
use crate::error::Error;
use crate::ranking::{CompositeRanker, RankedCompetitor, Ranker};
use crate::render::render_collision_map;
use config::Config;
use kernel::{CollisionEstimator, EffectiveSplit, Enricher, Interference, RankingError, Roster};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

pub struct Services {
    pub ranker: Box<dyn Ranker + Send + Sync>,
    pub directory: Box<dyn RaceDirectory + Send + Sync>,
}

impl Services {
    /// Composite ranking with the configured track table behind a TTL cache.
    pub fn from_config(config: &Config) -> Self {
        Self {
            ranker: Box::new(CompositeRanker::new(config)),
            directory: Box::new(CachedDirectory::new(
                StaticDirectory::new(config.tracks.clone()),
                config.lookup.cache_ttl,
                Box::new(SystemClock),
            )),
        }
    }
}

/// A runner identified by name and box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub name: String,
    pub lane: u8,
}

impl From<&RankedCompetitor> for Pick {
    fn from(competitor: &RankedCompetitor) -> Self {
        Self {
            name: competitor.name().to_owned(),
            lane: competitor.lane(),
        }
    }
}

/// Everything produced by one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Sorted by rank, ties by box, unranked runners last.
    pub ranked: Vec<RankedCompetitor>,
    pub interference: Vec<Interference>,
    pub collision_map: String,
    /// Lowest composite score.
    pub top_pick: Pick,
    /// Lowest effective split.
    pub fastest: Pick,
}

pub struct Analyzer {
    config: Config,
    services: Services,
}

impl Analyzer {
    pub fn new(config: Config, services: Services) -> Self {
        Self { config, services }
    }

    pub fn from_config(config: Config) -> Self {
        let services = Services::from_config(&config);
        Self::new(config, services)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Look up race metadata. Never fails: lookup errors become
    /// [`RaceDistance::Unavailable`] and an empty live-timing set.
    pub async fn prepare(&self, track: &str, race: u8) -> RaceContext {
        let distance = match self.services.directory.race_distance(track, race).await {
            Ok(distance) => RaceDistance::Known(distance),
            Err(err) => {
                warn!(track, race, %err, "race distance lookup failed");
                RaceDistance::Unavailable
            }
        };

        let live_tracks = self
            .services
            .directory
            .live_timing_tracks()
            .await
            .unwrap_or_else(|err| {
                warn!(%err, "live timing lookup failed");
                BTreeSet::new()
            });
        let live_timing = live_tracks
            .iter()
            .any(|name| name.eq_ignore_ascii_case(track.trim()));

        RaceContext {
            track: track.to_owned(),
            race,
            distance,
            live_timing,
        }
    }

    /// Score, rank and map `roster`, using the box bias of `track` when given.
    ///
    /// Structural problems abort before any scoring and nothing partial is returned.
    pub fn analyze(&self, roster: &Roster, track: Option<&str>) -> Result<Analysis, Error> {
        roster.validate()?;

        let enricher = Enricher::from_config(&self.config, track);
        let field = enricher.enrich(roster);
        let collisions = CollisionEstimator::new(&self.config.scoring).estimate(&field);
        let ranked = self.services.ranker.rank(field, &collisions)?;
        let interference = collisions.into_edges();
        let collision_map = render_collision_map(&ranked, &interference);

        let top_pick = ranked
            .first()
            .filter(|c| c.is_ranked())
            .map(Pick::from)
            .ok_or(RankingError::NoRankableRunners)?;
        let fastest = ranked
            .iter()
            .filter(|c| !c.effective_split().is_excluded())
            .min_by(|a, b| {
                a.effective_split()
                    .total_cmp(&b.effective_split())
                    .then(a.lane().cmp(&b.lane()))
            })
            .map(Pick::from)
            .ok_or(RankingError::NoRankableRunners)?;

        debug!(policy = %enricher.policy(), edges = interference.len(), "analysis complete");
        info!(winner = %top_pick.name, lane = top_pick.lane, "predicted winner");

        Ok(Analysis {
            ranked,
            interference,
            collision_map,
            top_pick,
            fastest,
        })
    }
}

impl Analysis {
    pub fn get(&self, lane: u8) -> Option<&RankedCompetitor> {
        self.ranked.iter().find(|c| c.lane() == lane)
    }

    pub fn fastest_split(&self) -> Option<EffectiveSplit> {
        self.get(self.fastest.lane).map(|c| c.effective_split())
    }
}
