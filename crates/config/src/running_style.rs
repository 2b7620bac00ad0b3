#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lateral tendency of a runner once the boxes open.
///
/// `Straight` is kept distinct from `Middle` so that the position token `S`
/// survives decoding; the collision rules treat both as neutral.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum RunningStyle {
    Railer,
    #[default]
    Middle,
    Wide,
    Straight,
}

impl RunningStyle {
    /// Single character used in the collision map.
    pub fn glyph(self) -> char {
        match self {
            RunningStyle::Railer => 'R',
            RunningStyle::Middle => 'M',
            RunningStyle::Wide => 'W',
            RunningStyle::Straight => 'S',
        }
    }
}

impl fmt::Display for RunningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunningStyle::Railer => "Railer",
            RunningStyle::Middle => "Middle",
            RunningStyle::Wide => "Wide",
            RunningStyle::Straight => "Straight",
        };
        f.write_str(name)
    }
}
