#![forbid(unsafe_code)]

/// Structural problems with a roster. Any of these aborts the whole analysis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankingError {
    /// The roster has no runners.
    #[error("roster is empty")]
    EmptyRoster,

    /// A box number lies outside `1..=size`.
    #[error("runner `{name}` has box {lane}, expected 1..={size}")]
    LaneOutOfRange { name: String, lane: u8, size: usize },

    /// Two runners share a box.
    #[error("box {lane} is assigned to both `{first}` and `{second}`")]
    DuplicateLane {
        lane: u8,
        first: String,
        second: String,
    },

    /// Two runners share a name.
    #[error("runner name `{0}` appears more than once")]
    DuplicateName(String),

    /// A split was left unresolved under a policy that must resolve every split.
    #[error("split for `{name}` is unresolved under the {policy} policy")]
    UnresolvedSplit { name: String, policy: String },

    /// Every runner was excluded, so nothing can be ranked.
    #[error("no runner has a usable split")]
    NoRankableRunners,
}
