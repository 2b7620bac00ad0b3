#![forbid(unsafe_code)]

use crate::clock::Clock;
use crate::directory::{LookupError, RaceDirectory};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{BTreeSet, HashMap};
use std::time::{Duration, Instant};
use tracing::trace;

/// Caches successful answers of another directory for a fixed time-to-live.
/// Failures are never cached.
pub struct CachedDirectory<D> {
    inner: D,
    ttl: Duration,
    clock: Box<dyn Clock + Send + Sync>,
    distances: Mutex<HashMap<(String, u8), (Instant, String)>>,
    live_timing: Mutex<Option<(Instant, BTreeSet<String>)>>,
}

impl<D: RaceDirectory> CachedDirectory<D> {
    pub fn new(inner: D, ttl: Duration, clock: Box<dyn Clock + Send + Sync>) -> Self {
        Self {
            inner,
            ttl,
            clock,
            distances: Mutex::new(HashMap::new()),
            live_timing: Mutex::new(None),
        }
    }

    fn fresh(&self, stored_at: Instant) -> bool {
        self.clock.now().saturating_duration_since(stored_at) < self.ttl
    }
}

#[async_trait]
impl<D: RaceDirectory> RaceDirectory for CachedDirectory<D> {
    async fn race_distance(&self, track: &str, race: u8) -> Result<String, LookupError> {
        let key = (track.trim().to_ascii_lowercase(), race);
        let cached = self.distances.lock().get(&key).cloned();
        if let Some((stored_at, distance)) = cached
            && self.fresh(stored_at)
        {
            trace!(track, race, "race distance cache hit");
            return Ok(distance);
        }

        let distance = self.inner.race_distance(track, race).await?;
        self.distances
            .lock()
            .insert(key, (self.clock.now(), distance.clone()));
        Ok(distance)
    }

    async fn live_timing_tracks(&self) -> Result<BTreeSet<String>, LookupError> {
        let cached = self.live_timing.lock().clone();
        if let Some((stored_at, tracks)) = cached
            && self.fresh(stored_at)
        {
            return Ok(tracks);
        }

        let tracks = self.inner.live_timing_tracks().await?;
        *self.live_timing.lock() = Some((self.clock.now(), tracks.clone()));
        Ok(tracks)
    }
}
