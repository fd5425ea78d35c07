//! Small numeric utilities used across probability code.

/// `n` evenly spaced values over `[start, stop]`, both endpoints included.
///
/// Matches the usual `linspace` conventions: `n == 0` yields an empty vector,
/// `n == 1` yields `[start]`. The last element is pinned to `stop` so the
/// upper endpoint is exact regardless of accumulated rounding.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            out[n - 1] = stop;
            out
        }
    }
}
