//! Rate of Change (ROC).
//!
//! Percentage price change over N quotes.
//! roc[t] = (close[t] - close[t-period]) / close[t-period] * 100
//! Undefined for the first `period` positions.

use rust_decimal_macros::dec;

use crate::domain::{Quote, RocResult};

/// Compute the ROC series, one record per quote.
///
/// A zero prior close leaves that position undefined (checked division)
/// rather than poisoning the pass.
pub fn roc(quotes: &[Quote], period: usize) -> Vec<RocResult> {
    assert!(period >= 1, "ROC period must be >= 1");

    quotes
        .iter()
        .enumerate()
        .map(|(i, quote)| {
            let value = if i >= period {
                let prev = quotes[i - period].close;
                (quote.close - prev)
                    .checked_div(prev)
                    .map(|change| change * dec!(100))
            } else {
                None
            };
            RocResult {
                index: i + 1,
                date: quote.date,
                roc: value,
            }
        })
        .collect()
}
