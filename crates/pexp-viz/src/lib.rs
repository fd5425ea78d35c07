//! # pexp-viz
//!
//! Exponential CDF evaluation plus the plot-friendly chart artifact that
//! accompanies it.
//!
//! This crate is intentionally dependency-light: it emits plain data
//! (arrays instead of nested objects) and never depends on a renderer.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Exponential CDF evaluator and chart artifact.
pub mod exponential;

pub use exponential::{
    CURVE_POINTS, ChartPanel, CurveSample, DEFAULT_RATE, ExponentialCdfResult,
    ExponentialChartArtifact, evaluate, evaluate_value,
};
