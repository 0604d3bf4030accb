//! Plot-area arithmetic shared by the SVG charts.

/// Fixed-size drawing area with margins, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub const STANDARD: PlotArea = PlotArea {
        width: 640.0,
        height: 300.0,
        left: 56.0,
        right: 16.0,
        top: 16.0,
        bottom: 56.0,
    };

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    pub fn inner_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    /// Baseline of the value axis.
    pub fn floor(&self) -> f64 {
        self.height - self.bottom
    }

    /// Vertical position of a `[0, 1]` ratio; 0 sits on the floor.
    pub fn y(&self, ratio: f64) -> f64 {
        self.floor() - ratio.clamp(0.0, 1.0) * self.inner_height()
    }

    /// Left edge and width of band `index` out of `count` equal bands.
    pub fn band(&self, index: usize, count: usize) -> (f64, f64) {
        let width = self.inner_width() / count.max(1) as f64;
        (self.left + width * index as f64, width)
    }

    /// Horizontal center of band `index`.
    pub fn band_center(&self, index: usize, count: usize) -> f64 {
        let (x, width) = self.band(index, count);
        x + width / 2.0
    }
}

/// Shorten long category names so axis labels don't collide.
pub(crate) fn axis_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_split_inner_width() {
        let plot = PlotArea::STANDARD;
        let (x0, w) = plot.band(0, 4);
        let (x3, _) = plot.band(3, 4);
        assert_eq!(x0, plot.left);
        assert_eq!(w, plot.inner_width() / 4.0);
        assert_eq!(x3 + w, plot.width - plot.right);
    }

    #[test]
    fn ratio_maps_to_vertical_span() {
        let plot = PlotArea::STANDARD;
        assert_eq!(plot.y(0.0), plot.floor());
        assert_eq!(plot.y(1.0), plot.top);
        assert_eq!(plot.y(7.0), plot.top);
    }

    #[test]
    fn long_labels_are_shortened() {
        assert_eq!(axis_label("Review", 10), "Review");
        assert_eq!(axis_label("Approve purchase order", 8), "Approve…");
    }
}
