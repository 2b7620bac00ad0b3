#![forbid(unsafe_code)]

use kernel::RankingError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cannot rank roster: {0}")]
    Ranking(#[from] RankingError),
}
