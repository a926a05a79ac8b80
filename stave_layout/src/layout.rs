// Copyright 2025 the Stave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas geometry: outer size, margins, and the derived plot rectangle.

use kurbo::Rect;

/// Outer canvas size and the four margins that frame the plot area.
///
/// All fields are in pixels. Margins are not validated against the outer
/// size: a geometry where `width <= margin_left + margin_right` (or the
/// vertical equivalent) flows through and yields zero- or negative-size
/// bands and bars rather than an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeometry {
    /// Outer width.
    pub width: f64,
    /// Outer height.
    pub height: f64,
    /// Top margin.
    pub margin_top: f64,
    /// Right margin.
    pub margin_right: f64,
    /// Bottom margin.
    pub margin_bottom: f64,
    /// Left margin.
    pub margin_left: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 500.0,
            margin_top: 20.0,
            margin_right: 30.0,
            margin_bottom: 30.0,
            margin_left: 30.0,
        }
    }
}

impl ChartGeometry {
    /// Creates a geometry with the given outer size and default margins.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Sets all four margins.
    pub fn with_margins(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.margin_top = top;
        self.margin_right = right;
        self.margin_bottom = bottom;
        self.margin_left = left;
        self
    }

    /// The plot rectangle: the canvas inset by the margins.
    ///
    /// Marks are drawn inside this rectangle; axes sit on its bottom and
    /// left edges.
    pub fn plot_rect(&self) -> Rect {
        Rect::new(
            self.margin_left,
            self.margin_top,
            self.width - self.margin_right,
            self.height - self.margin_bottom,
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn default_geometry_matches_the_stock_chart() {
        let g = ChartGeometry::default();
        assert!((g.width - 1000.0).abs() < 1e-9);
        assert!((g.height - 500.0).abs() < 1e-9);
        let plot = g.plot_rect();
        assert!((plot.x0 - 30.0).abs() < 1e-9);
        assert!((plot.y0 - 20.0).abs() < 1e-9);
        assert!((plot.x1 - 970.0).abs() < 1e-9);
        assert!((plot.y1 - 470.0).abs() < 1e-9);
    }

    #[test]
    fn oversized_margins_produce_a_negative_plot_width() {
        let g = ChartGeometry::new(40.0, 400.0).with_margins(20.0, 30.0, 30.0, 30.0);
        let plot = g.plot_rect();
        assert!(plot.width() < 0.0, "expected degenerate plot, got {plot:?}");
    }
}
