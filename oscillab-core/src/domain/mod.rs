//! Domain types — quotes in, derived result series out.

pub mod quote;
pub mod series;

pub use quote::Quote;
pub use series::{PmoResult, RocResult};
