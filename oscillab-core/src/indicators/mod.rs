//! Indicator implementations.
//!
//! The PMO pipeline is three applications of the seeded-EMA primitive in
//! `smoothing`, fed by the `roc` stage. Each stage is a pure pass over the
//! full series; outputs are merged onto one index-aligned record per quote.

pub mod pmo;
pub mod roc;
pub mod smoothing;

pub use pmo::{pmo, PmoError, PmoParams};
pub use roc::roc;
pub use smoothing::seeded_ema;

/// Create synthetic quotes from close prices for testing.
///
/// Generates plausible OHLV around the closes: open = prev close (or close
/// for the first quote), high = max(open, close) + 1, low = min(open, close) - 1,
/// volume = 1000.
#[cfg(test)]
pub fn make_quotes(closes: &[rust_decimal::Decimal]) -> Vec<crate::domain::Quote> {
    use crate::domain::Quote;
    use rust_decimal_macros::dec;
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let high = open.max(close) + dec!(1);
            let low = open.min(close) - dec!(1);
            Quote {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high,
                low,
                close,
                volume: 1000,
            }
        })
        .collect()
}
