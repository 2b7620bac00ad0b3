#![forbid(unsafe_code)]

use crate::directory::LookupError;
use async_trait::async_trait;
use config::Tracks;
use std::collections::BTreeSet;

/// External source of race metadata. Implementations may be slow or fail;
/// callers degrade failures to "unavailable".
#[async_trait]
pub trait RaceDirectory: Send + Sync {
    /// Advertised distance of `race` at `track`.
    async fn race_distance(&self, track: &str, race: u8) -> Result<String, LookupError>;

    /// Tracks publishing R/T timing today. May be empty.
    async fn live_timing_tracks(&self) -> Result<BTreeSet<String>, LookupError>;
}

/// Directory answering from the `[tracks]` configuration section.
#[derive(Debug, Clone)]
pub struct StaticDirectory {
    tracks: Tracks,
}

impl StaticDirectory {
    pub fn new(tracks: Tracks) -> Self {
        Self { tracks }
    }
}

#[async_trait]
impl RaceDirectory for StaticDirectory {
    async fn race_distance(&self, track: &str, race: u8) -> Result<String, LookupError> {
        self.tracks
            .distance(track, race)
            .map(str::to_owned)
            .ok_or_else(|| LookupError::NoDistance {
                track: track.to_owned(),
                race,
            })
    }

    async fn live_timing_tracks(&self) -> Result<BTreeSet<String>, LookupError> {
        Ok(self.tracks.live_timing.iter().cloned().collect())
    }
}

/// Directory that never answers.
#[derive(Debug, Default)]
pub struct UnavailableDirectory;

#[async_trait]
impl RaceDirectory for UnavailableDirectory {
    async fn race_distance(&self, _track: &str, _race: u8) -> Result<String, LookupError> {
        Err(LookupError::Unavailable)
    }

    async fn live_timing_tracks(&self) -> Result<BTreeSet<String>, LookupError> {
        Err(LookupError::Unavailable)
    }
}
