//! Seeded exponential smoothing — the seed-then-recurse primitive.
//!
//! Seed: arithmetic mean of the first full `window` of defined upstream
//! values, ending at the seed position inclusive.
//! Recurse: out[t] = (cur - prev) * k + prev, where prev is this series'
//! own previous output.
//! First defined output at position `first_defined + window - 1`.

use rust_decimal::Decimal;

/// Apply seeded exponential smoothing to an optional-valued series.
///
/// Returns a series of the same length. Output is `None` before the seed
/// position. A `None` upstream value inside the seed window leaves the whole
/// output undefined; a `None` after the seed leaves the remainder undefined
/// (the recursion has no value to consume).
///
/// The smoothing constant `k` is supplied by the caller; the PMO stages use
/// `2 / window` for the ROC-EMA and PMO lines and `2 / (window + 1)` for the
/// signal line.
pub fn seeded_ema(values: &[Option<Decimal>], window: usize, k: Decimal) -> Vec<Option<Decimal>> {
    assert!(window >= 1, "smoothing window must be >= 1");

    let mut out: Vec<Option<Decimal>> = vec![None; values.len()];

    let Some(first) = values.iter().position(Option::is_some) else {
        return out;
    };
    let seed_at = first + window - 1;
    if seed_at >= values.len() {
        return out;
    }

    // Accumulate the seed window once; the single forward pass keeps the
    // total cost linear in the series length.
    let mut sum = Decimal::ZERO;
    for value in &values[first..=seed_at] {
        match value {
            Some(v) => sum += *v,
            None => return out,
        }
    }
    let seed = sum / Decimal::from(window as u64);
    out[seed_at] = Some(seed);

    let mut prev = seed;
    for (i, value) in values.iter().enumerate().skip(seed_at + 1) {
        match value {
            Some(cur) => {
                let next = (cur - prev) * k + prev;
                out[i] = Some(next);
                prev = next;
            }
            None => return out,
        }
    }

    out
}
