#![forbid(unsafe_code)]

pub mod bias;
pub mod collision;
pub mod decoder;
pub mod enrich;
mod error;
pub mod flags;
pub mod imputer;
pub mod recency;
pub mod roster;

pub use bias::BiasTable;
pub use collision::{CollisionEstimator, CollisionReport, Interference, InterferenceKind};
pub use decoder::{Decoded, TraitDecoder};
pub use enrich::{EnrichedCompetitor, Enricher};
pub use error::RankingError;
pub use flags::QualityFlags;
pub use imputer::{EffectiveSplit, ResolvedSplit, SplitImputer, try_parse_split};
pub use recency::{RecencyScorer, WinRecency};
pub use roster::{Competitor, RecordedSplit, Roster, ensure_unique_lanes};
