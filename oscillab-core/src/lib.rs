//! Oscillab Core — decimal-precise momentum oscillator pipeline.
//!
//! This crate contains the computation core:
//! - Domain types (quotes, ROC and PMO result series)
//! - Seeded exponential smoothing primitive (seed-then-recurse EMA)
//! - Rate-of-Change stage
//! - Three-stage PMO orchestrator with parameter and history validation
//!
//! All value arithmetic is `rust_decimal::Decimal`; undefined warm-up values
//! are `None`, never sentinel numbers. The pipeline is a pure batch transform:
//! quotes in, an index-aligned result series out, no I/O and no global state.

pub mod domain;
pub mod indicators;

pub use domain::{PmoResult, Quote, RocResult};
pub use indicators::{pmo, PmoError, PmoParams};
