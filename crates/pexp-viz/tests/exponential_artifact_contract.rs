use approx::assert_abs_diff_eq;
use pexp_core::Error;
use pexp_viz::{CURVE_POINTS, ExponentialCdfResult, evaluate, evaluate_value};
use statrs::distribution::{ContinuousCDF, Exp};

#[test]
fn probability_matches_closed_form() {
    for &rate in &[0.05, 0.5, 1.0, 2.5, 10.0] {
        for i in 0..60 {
            let q = i as f64 * 0.15;
            let r = evaluate(Some(q), rate, false).expect("valid inputs");
            let closed = 1.0 - (-rate * q).exp();
            assert_abs_diff_eq!(r.cumulative_probability, closed, epsilon = 1e-9);
            assert_abs_diff_eq!(
                r.cumulative_probability,
                Exp::new(rate).unwrap().cdf(q),
                epsilon = 1e-12
            );
        }
    }
}

#[test]
fn probability_is_monotone_in_q_and_rate() {
    let qs: Vec<f64> = (0..200).map(|i| i as f64 * 0.05).collect();
    let probs: Vec<f64> =
        qs.iter().map(|&q| evaluate(Some(q), 0.7, false).unwrap().cumulative_probability).collect();
    assert!(probs.windows(2).all(|w| w[0] < w[1]), "cdf must increase with q");

    let rates = [0.1, 0.3, 0.9, 1.7, 2.2];
    let by_rate: Vec<f64> = rates
        .iter()
        .map(|&rate| evaluate(Some(1.5), rate, false).unwrap().cumulative_probability)
        .collect();
    assert!(by_rate.windows(2).all(|w| w[0] < w[1]), "cdf must increase with rate for q > 0");
}

#[test]
fn probability_stays_below_one() {
    for &(q, rate) in &[(0.0, 1.0), (1.0, 1.0), (10.0, 1.0), (5.0, 3.0), (30.0, 1.0)] {
        let p = evaluate(Some(q), rate, false).unwrap().cumulative_probability;
        assert!((0.0..1.0).contains(&p), "q={} rate={} p={}", q, rate, p);
    }
}

#[test]
fn chart_samples_span_domain() {
    let r = evaluate(Some(1.0), 1.0, true).unwrap();
    let chart = r.chart.as_ref().expect("chart requested");

    assert_eq!(chart.schema_version, "pexp_chart_v0");
    assert_eq!(chart.len(), CURVE_POINTS);
    assert_eq!(chart.x_values.len(), 1000);
    assert_eq!(chart.pdf_values.len(), 1000);
    assert_eq!(chart.cdf_values.len(), 1000);
    assert_eq!(chart.x_values[0], 0.0);
    assert_abs_diff_eq!(chart.x_values[999], 4.0, epsilon = 1e-12);
    assert_eq!(chart.pdf_values[0], 1.0);
    assert_eq!(chart.cdf_values[0], 0.0);
    assert_eq!(chart.quantile, 1.0);
    assert_eq!(chart.shade_until, 1.0);
    assert_eq!(chart.cumulative_probability, r.cumulative_probability);

    let samples: Vec<_> = chart.samples().collect();
    assert_eq!(samples.len(), 1000);
    assert!(samples.windows(2).all(|w| w[0].x < w[1].x));
    for s in &samples {
        assert_abs_diff_eq!(s.pdf, (-s.x).exp(), epsilon = 1e-12);
        assert_abs_diff_eq!(s.cdf, 1.0 - (-s.x).exp(), epsilon = 1e-12);
    }
}

#[test]
fn chart_domain_scales_with_rate() {
    let r = evaluate(Some(2.0), 0.5, true).unwrap();
    let chart = r.chart.unwrap();
    // q + 3 / rate = 2 + 6
    assert_abs_diff_eq!(*chart.x_values.last().unwrap(), 8.0, epsilon = 1e-12);
    assert_eq!(chart.pdf_values[0], 0.5);
}

#[test]
fn evaluation_is_deterministic() {
    let a = evaluate(Some(0.8), 1.3, true).unwrap();
    let b = evaluate(Some(0.8), 1.3, true).unwrap();
    assert_eq!(a, b);
}

#[test]
fn validation_errors() {
    assert!(matches!(evaluate(None, 1.0, true), Err(Error::MissingInput(_))));
    assert!(matches!(evaluate(Some(1.0), 0.0, true), Err(Error::InvalidParameter(_))));
    assert!(matches!(evaluate(Some(1.0), -2.0, true), Err(Error::InvalidParameter(_))));
    let err = evaluate_value(&serde_json::json!({"q": 1, "rate": "a"})).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
    assert!(err.to_string().contains("rate must be a positive number"));
}

#[test]
fn result_json_roundtrip_keeps_chart() {
    let r = evaluate(Some(0.5), 1.0, true).unwrap();
    let text = serde_json::to_string(&r).unwrap();
    let back: ExponentialCdfResult = serde_json::from_str(&text).unwrap();
    let chart = back.chart.expect("chart survives serialization");
    assert_eq!(chart.x_values.len(), 1000);
    assert_abs_diff_eq!(back.cumulative_probability, 0.3934693402873666, epsilon = 1e-15);
}
