//! Result series records, index-aligned 1:1 with the input quotes.
//!
//! Every record carries the quote's 1-based `index` and `date`; value fields
//! are `None` until the producing stage's warm-up index is reached and stay
//! `Some` from then on.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Single-value result of the Rate-of-Change stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocResult {
    pub index: usize,
    pub date: NaiveDate,
    pub roc: Option<Decimal>,
}

/// One PMO pipeline record: all three stage outputs for a single quote.
///
/// The three fields become defined independently, in stage order:
/// `roc_ema` first, then `pmo`, then `signal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PmoResult {
    pub index: usize,
    pub date: NaiveDate,
    pub roc_ema: Option<Decimal>,
    pub pmo: Option<Decimal>,
    pub signal: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn pmo_result_serialization_roundtrip() {
        let record = PmoResult {
            index: 64,
            date: NaiveDate::from_ymd_opt(2024, 4, 5).unwrap(),
            roc_ema: Some(dec!(1.2345)),
            pmo: Some(dec!(0.9876)),
            signal: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        let deser: PmoResult = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deser);
    }

    #[test]
    fn roc_result_none_roundtrip() {
        let record = RocResult {
            index: 1,
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            roc: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        let deser: RocResult = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deser);
    }
}
