use crate::layout::margins::PlotArea;

/// Dual panel layout (PDF panel + CDF panel side by side).
/// Left panel gets `left_frac` of width, right panel gets the rest.
#[derive(Debug, Clone)]
pub struct DualPanelLayout {
    pub left: PlotArea,
    pub right: PlotArea,
}

impl DualPanelLayout {
    pub fn new(x: f64, top: f64, total_width: f64, height: f64, gap: f64, left_frac: f64) -> Self {
        let usable = (total_width - gap).max(0.0);
        let left_w = usable * left_frac;
        let right_w = usable - left_w;

        Self {
            left: PlotArea::manual(x, top, left_w, height),
            right: PlotArea::manual(x + left_w + gap, top, right_w, height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_fill_width_without_overlap() {
        let l = DualPanelLayout::new(40.0, 30.0, 600.0, 200.0, 60.0, 0.55);
        assert!((l.left.width - 297.0).abs() < 1e-9);
        assert!(l.left.right() < l.right.left);
        assert!((l.right.right() - 640.0).abs() < 1e-9);
        assert_eq!(l.left.height, l.right.height);
    }
}
