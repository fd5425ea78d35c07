//! Exponential distribution utilities.
//!
//! Parameterised by the rate `λ` (inverse mean). Support is `x >= 0`; every
//! function here returns the natural boundary value outside the support
//! instead of an error, and only rejects an invalid `rate`.

use pexp_core::{Error, Result};

/// Error text shared by every rate check in the workspace.
pub const RATE_ERROR: &str = "rate must be a positive number";

/// Check that `rate` is a usable exponential rate (finite and > 0).
#[inline]
pub fn validate_rate(rate: f64) -> Result<()> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(Error::InvalidParameter(RATE_ERROR.to_string()));
    }
    Ok(())
}

/// PDF of an Exponential distribution at `x` with rate `rate`.
///
/// `f(x) = λ e^(-λx)` for `x >= 0`, `0` otherwise.
pub fn pdf(x: f64, rate: f64) -> Result<f64> {
    validate_rate(rate)?;
    if x < 0.0 {
        return Ok(0.0);
    }
    Ok(rate * (-rate * x).exp())
}

/// Log-PDF of an Exponential distribution at `x` with rate `rate`.
pub fn logpdf(x: f64, rate: f64) -> Result<f64> {
    validate_rate(rate)?;
    if x < 0.0 {
        return Ok(f64::NEG_INFINITY);
    }
    Ok(rate.ln() - rate * x)
}

/// Negative log-likelihood of an Exponential distribution at `x`.
pub fn nll(x: f64, rate: f64) -> Result<f64> {
    Ok(-logpdf(x, rate)?)
}

/// CDF `P(X <= x) = 1 - e^(-λx)`.
///
/// Evaluated as `-expm1(-λx)` so small `λx` keep full relative precision.
pub fn cdf(x: f64, rate: f64) -> Result<f64> {
    validate_rate(rate)?;
    if x <= 0.0 {
        return Ok(0.0);
    }
    Ok(-(-rate * x).exp_m1())
}

/// Survival function `P(X > x) = e^(-λx)`.
pub fn sf(x: f64, rate: f64) -> Result<f64> {
    validate_rate(rate)?;
    if x <= 0.0 {
        return Ok(1.0);
    }
    Ok((-rate * x).exp())
}

/// Inverse CDF: the `x` with `cdf(x, rate) == p`.
///
/// `p == 1` maps to `+inf`; `p` outside `[0, 1]` is rejected.
pub fn quantile(p: f64, rate: f64) -> Result<f64> {
    validate_rate(rate)?;
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidParameter(format!(
            "probability must be in [0, 1], got {}",
            p
        )));
    }
    if p == 1.0 {
        return Ok(f64::INFINITY);
    }
    Ok(-(-p).ln_1p() / rate)
}
