#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Penalty points for how long ago a runner last won.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecencyTable {
    pub last_start: f64,
    pub last_3_starts: f64,
    pub last_5_starts: f64,
    pub last_10_starts: f64,
    pub over_10_starts: f64,
    pub never: f64,
}

impl Default for RecencyTable {
    fn default() -> Self {
        Self {
            last_start: 0.0,
            last_3_starts: 0.2,
            last_5_starts: 0.3,
            last_10_starts: 0.4,
            over_10_starts: 0.5,
            never: 0.6,
        }
    }
}

impl RecencyTable {
    /// Replace non-finite values with zero and clamp to `0.0..=10.0`.
    pub fn clamp(self) -> Self {
        let fix = |value: f64| {
            if value.is_finite() {
                value.clamp(0.0, 10.0)
            } else {
                0.0
            }
        };
        Self {
            last_start: fix(self.last_start),
            last_3_starts: fix(self.last_3_starts),
            last_5_starts: fix(self.last_5_starts),
            last_10_starts: fix(self.last_10_starts),
            over_10_starts: fix(self.over_10_starts),
            never: fix(self.never),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn clamp_limits_values(a in any::<f64>(), b in -1000f64..1000.0, c in any::<f64>()) {
            let table = RecencyTable {
                last_start: a,
                last_3_starts: b,
                never: c,
                ..RecencyTable::default()
            }
            .clamp();
            for value in [table.last_start, table.last_3_starts, table.never] {
                prop_assert!((0.0..=10.0).contains(&value));
            }
        }
    }
}
