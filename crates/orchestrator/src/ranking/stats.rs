#![forbid(unsafe_code)]

use std::cmp::Ordering;

/// Probabilities are reported to one decimal place, i.e. in tenths of a percent.
const UNITS_PER_PERCENT: f64 = 10.0;
const TOTAL_UNITS: u64 = 1000;

/// Rank `values` ascending with the "min" tie method: equal values share the
/// lowest rank of their group and the next distinct value skips ahead.
///
/// ```
/// # use orchestrator::ranking::min_rank;
/// let ranks = min_rank(&[5.2, 5.0, 5.2, 5.4], f64::total_cmp);
/// assert_eq!(ranks, vec![2, 1, 2, 4]);
/// ```
pub fn min_rank<T>(values: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> Vec<u32> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| cmp(&values[a], &values[b]));

    let mut ranks = vec![0; values.len()];
    for (position, &ix) in order.iter().enumerate() {
        ranks[ix] = match position.checked_sub(1).map(|prev| order[prev]) {
            Some(prev) if cmp(&values[prev], &values[ix]) == Ordering::Equal => ranks[prev],
            _ => position as u32 + 1,
        };
    }
    ranks
}

/// Softmax over negated penalty scores, as percentages that sum to exactly
/// 100.0 at one decimal place. Lower scores get more mass.
pub fn softmax_percent(scores: &[f64]) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }

    let best = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let weights: Vec<f64> = scores.iter().map(|score| (best - score).exp()).collect();
    let total: f64 = weights.iter().sum();

    let shares: Vec<f64> = weights
        .iter()
        .map(|weight| weight / total * 100.0 * UNITS_PER_PERCENT)
        .collect();
    apportion(&shares, TOTAL_UNITS)
        .into_iter()
        .map(|units| units as f64 / UNITS_PER_PERCENT)
        .collect()
}

/// Largest-remainder rounding of `shares` to whole units summing to `total`.
fn apportion(shares: &[f64], total: u64) -> Vec<u64> {
    let mut units: Vec<u64> = shares.iter().map(|share| share.floor() as u64).collect();
    let assigned: u64 = units.iter().sum();

    let mut by_remainder: Vec<usize> = (0..shares.len()).collect();
    by_remainder.sort_by(|&a, &b| {
        let ra = shares[a] - shares[a].floor();
        let rb = shares[b] - shares[b].floor();
        rb.total_cmp(&ra).then(a.cmp(&b))
    });

    for &ix in by_remainder
        .iter()
        .cycle()
        .take(total.saturating_sub(assigned) as usize)
    {
        units[ix] += 1;
    }
    units
}
