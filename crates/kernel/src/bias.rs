#![forbid(unsafe_code)]

use config::{BiasCategory, Tracks};
use tracing::debug;

/// Per-box bias for one track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiasTable {
    lanes: Vec<BiasCategory>,
}

impl BiasTable {
    /// `lanes[0]` is box 1.
    pub fn new(lanes: Vec<BiasCategory>) -> Self {
        Self { lanes }
    }

    pub fn for_track(tracks: &Tracks, track: Option<&str>) -> Self {
        Self::new(tracks.bias_for(track).to_vec())
    }

    /// Bias for `lane`. Boxes beyond the table are treated as `Fair`.
    pub fn lookup(&self, lane: u8) -> BiasCategory {
        let category = usize::from(lane)
            .checked_sub(1)
            .and_then(|ix| self.lanes.get(ix))
            .copied();
        category.unwrap_or_else(|| {
            debug!(lane, "no bias entry for box, using fair");
            BiasCategory::Fair
        })
    }
}

impl Default for BiasTable {
    fn default() -> Self {
        Self::for_track(&Tracks::default(), None)
    }
}
