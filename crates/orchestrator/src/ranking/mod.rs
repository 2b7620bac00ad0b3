#![forbid(unsafe_code)]

mod ranker;
mod stats;
mod types;

pub use ranker::{CompositeRanker, Ranker};
pub use stats::{min_rank, softmax_percent};
pub use types::RankedCompetitor;
