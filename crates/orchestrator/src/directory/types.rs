#![forbid(unsafe_code)]

use std::fmt;

/// Advertised race distance, or an explicit marker that it could not be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaceDistance {
    Known(String),
    Unavailable,
}

impl fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaceDistance::Known(distance) => f.write_str(distance),
            RaceDistance::Unavailable => f.write_str("unavailable"),
        }
    }
}

/// What is known about a race before scoring starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceContext {
    pub track: String,
    pub race: u8,
    pub distance: RaceDistance,
    /// Whether the track publishes R/T timing today.
    pub live_timing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("no distance published for race {race} at {track}")]
    NoDistance { track: String, race: u8 },

    #[error("race directory is unavailable")]
    Unavailable,
}
