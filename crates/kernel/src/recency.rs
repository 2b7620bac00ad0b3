#![forbid(unsafe_code)]

use config::RecencyTable;
use std::fmt;

/// How recently a runner last won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinRecency {
    LastStart,
    LastThreeStarts,
    LastFiveStarts,
    LastTenStarts,
    OverTenStarts,
    Never,
}

impl WinRecency {
    /// Parse a label such as `"Last Start"` or `"last 5 starts"`. Unknown
    /// labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        let normalized = label
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();
        let recency = match normalized.as_str() {
            "last start" => WinRecency::LastStart,
            "last 3 starts" => WinRecency::LastThreeStarts,
            "last 5 starts" => WinRecency::LastFiveStarts,
            "last 10 starts" => WinRecency::LastTenStarts,
            "over 10 starts" => WinRecency::OverTenStarts,
            "never" => WinRecency::Never,
            _ => return None,
        };
        Some(recency)
    }
}

impl fmt::Display for WinRecency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WinRecency::LastStart => "Last Start",
            WinRecency::LastThreeStarts => "Last 3 Starts",
            WinRecency::LastFiveStarts => "Last 5 Starts",
            WinRecency::LastTenStarts => "Last 10 Starts",
            WinRecency::OverTenStarts => "Over 10 Starts",
            WinRecency::Never => "Never",
        };
        f.write_str(label)
    }
}

/// Maps a recency to penalty points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecencyScorer {
    table: RecencyTable,
}

impl RecencyScorer {
    pub fn new(table: RecencyTable) -> Self {
        Self {
            table: table.clamp(),
        }
    }

    /// Unknown recency scores zero.
    pub fn score(&self, recency: Option<WinRecency>) -> f64 {
        let Some(recency) = recency else {
            return 0.0;
        };
        match recency {
            WinRecency::LastStart => self.table.last_start,
            WinRecency::LastThreeStarts => self.table.last_3_starts,
            WinRecency::LastFiveStarts => self.table.last_5_starts,
            WinRecency::LastTenStarts => self.table.last_10_starts,
            WinRecency::OverTenStarts => self.table.over_10_starts,
            WinRecency::Never => self.table.never,
        }
    }
}

impl Default for RecencyScorer {
    fn default() -> Self {
        Self::new(RecencyTable::default())
    }
}
