#![forbid(unsafe_code)]

use crate::running_style::RunningStyle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Letter tables used to decode an `R/T` code such as `"G W"`.
///
/// Keys are single upper-case letters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DecoderTables {
    /// Rating token to rating (1 is best).
    pub ratings: BTreeMap<String, u8>,

    /// Position token to running style.
    pub positions: BTreeMap<String, RunningStyle>,
}

impl Default for DecoderTables {
    fn default() -> Self {
        let ratings = [("E", 1), ("G", 2), ("F", 3), ("S", 4), ("R", 5)]
            .into_iter()
            .map(|(letter, rating)| (letter.to_owned(), rating))
            .collect();
        let positions = [
            ("R", RunningStyle::Railer),
            ("M", RunningStyle::Middle),
            ("W", RunningStyle::Wide),
            ("S", RunningStyle::Straight),
        ]
        .into_iter()
        .map(|(letter, style)| (letter.to_owned(), style))
        .collect();

        Self { ratings, positions }
    }
}
