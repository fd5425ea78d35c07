//! Probability building blocks for pexp.
//!
//! - exponential distribution functions (pdf/logpdf/cdf/sf/quantile)
//! - small numeric helpers (evenly spaced grids)

pub mod exponential;
pub mod math;
