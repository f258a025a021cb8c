//! Cumulative-subtraction weighted choice.

use rand::Rng;

/// Pick one entry with probability proportional to its weight.
///
/// Draws `r` uniformly from `[0, total)` and walks `entries` in slice order,
/// subtracting each weight from `r`; the first entry that brings `r` to zero
/// or below wins. Entries whose weight is not a positive finite number take
/// no part. If rounding lets `r` survive the whole walk, the last eligible
/// entry is returned.
///
/// Returns `None` when no entry is eligible.
pub fn pick_weighted<'a, T, R: Rng + ?Sized>(
    entries: &'a [(T, f64)],
    rng: &mut R,
) -> Option<&'a T> {
    let eligible = |w: f64| w.is_finite() && w > 0.0;

    let total: f64 = entries
        .iter()
        .filter(|(_, w)| eligible(*w))
        .map(|(_, w)| w)
        .sum();
    if !(total.is_finite() && total > 0.0) {
        return None;
    }

    let mut roll = rng.random::<f64>() * total;
    let mut last = None;
    for (item, weight) in entries.iter().filter(|(_, w)| eligible(*w)) {
        roll -= weight;
        if roll <= 0.0 {
            return Some(item);
        }
        last = Some(item);
    }
    last
}
