use pexp_core::{Error, Result};
use pexp_prob::exponential::{self, RATE_ERROR};
use pexp_prob::math::linspace;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rate used when the caller does not supply one.
pub const DEFAULT_RATE: f64 = 1.0;

/// Number of evenly spaced samples in the chart curves.
pub const CURVE_POINTS: usize = 1000;

/// Schema tag written into every chart artifact.
pub const CHART_SCHEMA_VERSION: &str = "pexp_chart_v0";

const Q_REQUIRED: &str = "q is required and must be numeric";
const Q_RANGE: &str = "q must be a finite, non-negative number";

/// One `(x, pdf(x), cdf(x))` triple of the chart curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSample {
    /// Sample position.
    pub x: f64,
    /// Density at `x`.
    pub pdf: f64,
    /// Cumulative probability at `x`.
    pub cdf: f64,
}

/// Title and axis labels of one chart panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPanel {
    /// Panel title.
    pub title: String,
    /// Horizontal axis label.
    pub x_label: String,
    /// Vertical axis label.
    pub y_label: String,
}

/// Plot-friendly artifact for the two-panel exponential chart.
///
/// The left panel shows the PDF with the area `x <= shade_until` filled, the
/// right panel the CDF. Both carry a vertical rule at `quantile`; the CDF
/// panel additionally marks `(quantile, cumulative_probability)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExponentialChartArtifact {
    /// Artifact schema tag.
    pub schema_version: String,
    /// Evaluation point.
    pub quantile: f64,
    /// Distribution rate.
    pub rate: f64,
    /// `P(X <= quantile)`.
    pub cumulative_probability: f64,
    /// Upper bound of the shaded PDF area (same as `quantile`).
    pub shade_until: f64,
    /// Sample positions over `[0, quantile + 3 / rate]`.
    pub x_values: Vec<f64>,
    /// PDF aligned with `x_values`.
    pub pdf_values: Vec<f64>,
    /// CDF aligned with `x_values`.
    pub cdf_values: Vec<f64>,
    /// Left panel description.
    pub pdf_panel: ChartPanel,
    /// Right panel description.
    pub cdf_panel: ChartPanel,
}

impl ExponentialChartArtifact {
    /// Build the chart artifact for already-validated inputs.
    fn build(q: f64, rate: f64, prob: f64) -> Result<Self> {
        let x_values = linspace(0.0, q + 3.0 / rate, CURVE_POINTS);
        let pdf_values =
            x_values.iter().map(|&x| exponential::pdf(x, rate)).collect::<Result<Vec<_>>>()?;
        let cdf_values =
            x_values.iter().map(|&x| exponential::cdf(x, rate)).collect::<Result<Vec<_>>>()?;

        Ok(Self {
            schema_version: CHART_SCHEMA_VERSION.to_string(),
            quantile: q,
            rate,
            cumulative_probability: prob,
            shade_until: q,
            x_values,
            pdf_values,
            cdf_values,
            pdf_panel: ChartPanel {
                title: format!("Probability Density Function for q = {}, rate = {}", q, rate),
                x_label: "X".into(),
                y_label: "f(X)".into(),
            },
            cdf_panel: ChartPanel {
                title: format!("Cumulative Distribution Function for q = {}, rate = {}", q, rate),
                x_label: "x".into(),
                y_label: "probability".into(),
            },
        })
    }

    /// Iterate the curves as `(x, pdf, cdf)` triples in ascending `x`.
    pub fn samples(&self) -> impl Iterator<Item = CurveSample> + '_ {
        self.x_values.iter().zip(self.pdf_values.iter()).zip(self.cdf_values.iter()).map(
            |((&x, &pdf), &cdf)| CurveSample { x, pdf, cdf },
        )
    }

    /// Number of curve samples.
    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    /// Whether the artifact carries no curve samples.
    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }
}

/// Outcome of a single evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExponentialCdfResult {
    /// Evaluation point.
    pub quantile: f64,
    /// Distribution rate.
    pub rate: f64,
    /// `1 - exp(-rate * quantile)`.
    pub cumulative_probability: f64,
    /// Chart artifact, present iff it was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<ExponentialChartArtifact>,
}

fn validate_q(q: Option<f64>) -> Result<f64> {
    let q = q.ok_or_else(|| Error::MissingInput(Q_REQUIRED.to_string()))?;
    if q.is_nan() {
        return Err(Error::InvalidParameter(Q_REQUIRED.to_string()));
    }
    if !q.is_finite() || q < 0.0 {
        return Err(Error::InvalidParameter(Q_RANGE.to_string()));
    }
    Ok(q)
}

/// Cumulative probability of an Exponential(`rate`) distribution at `q`.
///
/// Inputs are validated before anything is computed: a missing `q` is
/// [`Error::MissingInput`], a NaN / negative / infinite `q` or a non-positive
/// / non-finite `rate` is [`Error::InvalidParameter`]. When `want_chart` is
/// set the result also carries [`CURVE_POINTS`] samples of the PDF and CDF
/// over `[0, q + 3 / rate]`.
pub fn evaluate(q: Option<f64>, rate: f64, want_chart: bool) -> Result<ExponentialCdfResult> {
    let q = validate_q(q)?;
    exponential::validate_rate(rate)?;

    let prob = exponential::cdf(q, rate)?;
    let chart = if want_chart { Some(ExponentialChartArtifact::build(q, rate, prob)?) } else { None };

    log::debug!("pexp: q={} rate={} prob={} chart={}", q, rate, prob, want_chart);

    Ok(ExponentialCdfResult { quantile: q, rate, cumulative_probability: prob, chart })
}

/// Evaluate a loosely-typed request such as `{"q": 0.5, "rate": 2, "want_chart": false}`.
///
/// `rate` defaults to [`DEFAULT_RATE`] and `want_chart` to `true`. A missing
/// or `null` `q` is [`Error::MissingInput`]; a `q` or `rate` that is not a
/// JSON number, or a `want_chart` that is not a boolean, is
/// [`Error::InvalidParameter`].
pub fn evaluate_value(request: &Value) -> Result<ExponentialCdfResult> {
    let obj = request
        .as_object()
        .ok_or_else(|| Error::InvalidParameter("request must be a JSON object".to_string()))?;

    let q = match obj.get("q") {
        None | Some(Value::Null) => None,
        Some(v) => {
            Some(v.as_f64().ok_or_else(|| Error::InvalidParameter(Q_REQUIRED.to_string()))?)
        }
    };

    let rate = match obj.get("rate") {
        None | Some(Value::Null) => DEFAULT_RATE,
        Some(v) => v.as_f64().ok_or_else(|| Error::InvalidParameter(RATE_ERROR.to_string()))?,
    };

    let want_chart = match obj.get("want_chart") {
        None | Some(Value::Null) => true,
        Some(v) => v.as_bool().ok_or_else(|| {
            Error::InvalidParameter("want_chart must be a boolean".to_string())
        })?,
    };

    evaluate(q, rate, want_chart)
}
