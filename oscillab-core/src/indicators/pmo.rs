//! Price Momentum Oscillator (PMO).
//!
//! Three chained seeded-EMA stages over 1-period ROC:
//!   roc_ema = seeded_ema(roc,     time_period,      2 / time_period) * 10
//!   pmo     = seeded_ema(roc_ema, smoothing_period, 2 / smoothing_period)
//!   signal  = seeded_ema(pmo,     signal_period,    2 / (signal_period + 1))
//!
//! First defined values (1-based): roc_ema at time_period + 1, pmo at
//! time_period + smoothing_period, signal at
//! time_period + smoothing_period + signal_period - 1. The signal line's
//! off-by-one relative to a plain `+ window` rule matches the reference
//! behavior and is preserved deliberately.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{PmoResult, Quote};
use crate::indicators::roc::roc;
use crate::indicators::smoothing::seeded_ema;

/// Window lengths for the three smoothing stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PmoParams {
    /// ROC smoothing window. Must be greater than 1.
    pub time_period: usize,
    /// PMO line smoothing window. Must be greater than 0.
    pub smoothing_period: usize,
    /// Signal line smoothing window. Must be greater than 0.
    pub signal_period: usize,
}

impl Default for PmoParams {
    fn default() -> Self {
        Self {
            time_period: 35,
            smoothing_period: 20,
            signal_period: 10,
        }
    }
}

/// Errors from PMO validation. Raised before any computation begins;
/// no partial results are ever returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PmoError {
    #[error("{0}")]
    BadParameter(String),

    #[error(
        "insufficient history: {provided} periods provided when at least {minimum} is required; \
         since PMO chains several smoothing passes, {recommended} or more periods are \
         recommended for full convergence precision"
    )]
    InsufficientHistory {
        provided: usize,
        minimum: usize,
        recommended: usize,
    },
}

/// Compute the PMO series for a cleaned, date-ascending quote history.
///
/// Returns one record per quote, index-aligned 1:1 with the input. Each stage
/// reads only positions at or before the current one from its upstream, so
/// truncating the input truncates the output without changing shared values.
pub fn pmo(quotes: &[Quote], params: &PmoParams) -> Result<Vec<PmoResult>, PmoError> {
    validate(quotes, params)?;

    let roc_values: Vec<Option<Decimal>> = roc(quotes, 1).into_iter().map(|r| r.roc).collect();

    // Stage 1: ROC-EMA, scaled x10 once after the recursion. The recursion is
    // linear, so scaling the finished series is equivalent to the reference's
    // per-element scaling and keeps the loop untouched.
    let k_roc = dec!(2) / Decimal::from(params.time_period as u64);
    let roc_ema: Vec<Option<Decimal>> = seeded_ema(&roc_values, params.time_period, k_roc)
        .into_iter()
        .map(|v| v.map(|ema| ema * dec!(10)))
        .collect();

    // Stage 2: PMO line, consuming the scaled stage-1 output.
    let k_pmo = dec!(2) / Decimal::from(params.smoothing_period as u64);
    let pmo_line = seeded_ema(&roc_ema, params.smoothing_period, k_pmo);

    // Stage 3: signal line. Note the (window + 1) smoothing constant.
    let k_signal = dec!(2) / Decimal::from(params.signal_period as u64 + 1);
    let signal_line = seeded_ema(&pmo_line, params.signal_period, k_signal);

    Ok(quotes
        .iter()
        .enumerate()
        .map(|(i, quote)| PmoResult {
            index: i + 1,
            date: quote.date,
            roc_ema: roc_ema[i],
            pmo: pmo_line[i],
            signal: signal_line[i],
        })
        .collect())
}

fn validate(quotes: &[Quote], params: &PmoParams) -> Result<(), PmoError> {
    if params.time_period <= 1 {
        return Err(PmoError::BadParameter(
            "time period must be greater than 1 for PMO".into(),
        ));
    }
    if params.smoothing_period == 0 {
        return Err(PmoError::BadParameter(
            "smoothing period must be greater than 0 for PMO".into(),
        ));
    }
    if params.signal_period == 0 {
        return Err(PmoError::BadParameter(
            "signal period must be greater than 0 for PMO".into(),
        ));
    }

    let minimum = params.time_period + params.smoothing_period;
    if quotes.len() < minimum {
        return Err(PmoError::InsufficientHistory {
            provided: quotes.len(),
            minimum,
            recommended: minimum + params.signal_period + 250,
        });
    }

    Ok(())
}
