//! Quote — the fundamental market data unit.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// OHLCV quote for a single day.
///
/// Quotes arrive already cleaned: sorted ascending by date, deduplicated, no
/// gaps. That preparation is the caller's responsibility; the computation core
/// treats slice position `p` as the quote's 1-based index `p + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
}

impl Quote {
    /// Basic OHLC sanity check: high >= low, high bounds open/close, positive prices.
    pub fn is_sane(&self) -> bool {
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.open > Decimal::ZERO
            && self.close > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_quote() -> Quote {
        Quote {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            open: dec!(100.00),
            high: dec!(105.00),
            low: dec!(98.00),
            close: dec!(103.00),
            volume: 50_000,
        }
    }

    #[test]
    fn quote_is_sane() {
        assert!(sample_quote().is_sane());
    }

    #[test]
    fn quote_detects_insane_high_low() {
        let mut quote = sample_quote();
        quote.high = dec!(97.00); // below low
        assert!(!quote.is_sane());
    }

    #[test]
    fn quote_detects_nonpositive_close() {
        let mut quote = sample_quote();
        quote.close = Decimal::ZERO;
        quote.low = dec!(-1);
        assert!(!quote.is_sane());
    }

    #[test]
    fn quote_serialization_roundtrip() {
        let quote = sample_quote();
        let json = serde_json::to_string(&quote).unwrap();
        let deser: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(quote, deser);
    }
}
