#![forbid(unsafe_code)]

use bitflags::bitflags;

bitflags! {
    /// Data-quality notes attached to an enriched runner. None of these stop
    /// the analysis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct QualityFlags: u8 {
        /// The R/T code was unusable and the neutral default was used.
        const DECODE_DEFAULT = 1 << 0;
        /// The split was filled in (or left out) by the imputation policy.
        const IMPUTATION_APPLIED = 1 << 1;
        /// The runner has no split and takes no part in ranking.
        const EXCLUDED = 1 << 2;
    }
}
