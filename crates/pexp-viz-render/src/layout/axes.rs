/// Linear axis with tick generation and data→pixel mapping.
#[derive(Debug, Clone)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub label: String,
    pub tick_positions: Vec<f64>,
    pub tick_labels: Vec<String>,
    pub minor_ticks: Vec<f64>,
}

impl Axis {
    /// Auto-scale linear axis with "nice number" ticks.
    pub fn auto_linear(data_min: f64, data_max: f64, target_ticks: usize) -> Self {
        let (nice_min, nice_max, step) = nice_range(data_min, data_max, target_ticks);
        let mut ticks = Vec::new();
        let mut labels = Vec::new();
        let n_major = ((nice_max - nice_min) / step).round() as usize;
        for i in 0..=n_major {
            let v = nice_min + step * i as f64;
            ticks.push(v);
            labels.push(format_tick(v, step));
        }

        // Minor ticks: 5 subdivisions per major
        let minor_step = step / 5.0;
        let minor = (0..=n_major * 5)
            .filter(|i| i % 5 != 0)
            .map(|i| nice_min + minor_step * i as f64)
            .collect();

        Self {
            min: nice_min,
            max: nice_max,
            label: String::new(),
            tick_positions: ticks,
            tick_labels: labels,
            minor_ticks: minor,
        }
    }

    /// Fixed axis with explicit limits (no tick auto-generation).
    pub fn fixed(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            label: String::new(),
            tick_positions: Vec::new(),
            tick_labels: Vec::new(),
            minor_ticks: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Map a data value to pixel coordinate.
    pub fn data_to_pixel(&self, value: f64, px_min: f64, px_max: f64) -> f64 {
        let frac = (value - self.min) / (self.max - self.min);
        px_min + frac * (px_max - px_min)
    }
}

/// "Nice numbers" algorithm for pleasant tick spacing.
fn nice_range(data_min: f64, data_max: f64, target_ticks: usize) -> (f64, f64, f64) {
    if !(data_max - data_min).is_finite() || (data_max - data_min).abs() < 1e-15 {
        return (data_min - 1.0, data_min + 1.0, 1.0);
    }
    let range = data_max - data_min;
    let rough_step = range / (target_ticks.max(2) - 1) as f64;
    let step = nice_step(rough_step);
    let nice_min = (data_min / step).floor() * step;
    let nice_max = (data_max / step).ceil() * step;
    (nice_min, nice_max, step)
}

fn nice_step(rough: f64) -> f64 {
    let exp = rough.abs().log10().floor();
    let frac = rough / 10.0_f64.powf(exp);
    let nice_frac = if frac <= 1.5 {
        1.0
    } else if frac <= 3.5 {
        2.0
    } else if frac <= 7.5 {
        5.0
    } else {
        10.0
    };
    nice_frac * 10.0_f64.powf(exp)
}

fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    // Avoid "-0"
    let v = if value.abs() < step * 0.01 { 0.0 } else { value };
    if decimals == 0 {
        format!("{}", v.round() as i64)
    } else {
        format!("{:.prec$}", v, prec = decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_linear_basic() {
        let ax = Axis::auto_linear(0.0, 10.0, 6);
        assert!(!ax.tick_positions.is_empty());
        assert!(ax.min <= 0.0);
        assert!(ax.max >= 10.0);
        assert_eq!(ax.tick_positions.len(), ax.tick_labels.len());
    }

    #[test]
    fn probability_axis_ticks() {
        let ax = Axis::auto_linear(0.0, 1.0, 6);
        assert_eq!(ax.tick_labels, vec!["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]);
        assert_eq!(ax.minor_ticks.len(), 20);
    }

    #[test]
    fn data_to_pixel_linear() {
        let ax = Axis::auto_linear(0.0, 100.0, 5);
        let px = ax.data_to_pixel(50.0, 0.0, 500.0);
        assert!((px - 250.0).abs() < 1.0);
    }

    #[test]
    fn inverted_pixel_range() {
        let ax = Axis::fixed(0.0, 1.0);
        assert!((ax.data_to_pixel(0.0, 100.0, 0.0) - 100.0).abs() < 1e-12);
        assert!((ax.data_to_pixel(1.0, 100.0, 0.0)).abs() < 1e-12);
    }

    #[test]
    fn degenerate_range() {
        let ax = Axis::auto_linear(2.0, 2.0, 5);
        assert!(ax.min < 2.0 && ax.max > 2.0);
    }

    #[test]
    fn nice_step_values() {
        assert!((nice_step(3.2) - 2.0).abs() < 1e-9);
        assert!((nice_step(0.7) - 0.5).abs() < 1e-9);
        assert!((nice_step(15.0) - 10.0).abs() < 1e-9);
        assert!((nice_step(4.5) - 5.0).abs() < 1e-9);
        assert!((nice_step(1.2) - 1.0).abs() < 1e-9);
    }
}
