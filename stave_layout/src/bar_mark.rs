// Copyright 2025 the Stave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::{Brush, Color};

use crate::data::Datum;
use crate::error::LayoutError;
use crate::scale::{ScaleBand, ScaleLinear};

/// The bar fill used when none is configured (a muted teal).
pub const DEFAULT_BAR_FILL: Color = Color::from_rgb8(0x69, 0xb3, 0xa2);

/// A single bar, ready for a renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct BarMark {
    /// Bar geometry in canvas coordinates.
    ///
    /// The rect is not normalized: with misconfigured margins the baseline
    /// can sit above the bar's top edge, giving `y1 < y0`. The rendering
    /// layer decides how to treat that.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// Generates one rect per datum from a band scale and a value scale.
///
/// Bars rise (or descend) from the bottom edge of the plot rectangle to the
/// scaled value. Data with duplicate labels produce one rect each, stacked
/// on the same band.
#[derive(Clone, Debug, PartialEq)]
pub struct BarMarkSpec {
    /// Fill paint for bars.
    pub fill: Brush,
}

impl Default for BarMarkSpec {
    fn default() -> Self {
        Self {
            fill: Brush::Solid(DEFAULT_BAR_FILL),
        }
    }
}

impl BarMarkSpec {
    /// Creates a bar mark spec with the default fill.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Generates one bar per datum, in input order.
    ///
    /// Fails with [`LayoutError::UnknownLabel`] if `band` does not cover a
    /// datum's label.
    pub fn marks(
        &self,
        data: &[Datum],
        band: &ScaleBand,
        y_scale: &ScaleLinear,
        plot: Rect,
    ) -> Result<Vec<BarMark>, LayoutError> {
        let baseline = plot.y1;
        data.iter()
            .map(|d| {
                let slot = band.band_or_err(&d.label)?;
                let y = y_scale.map(d.value);
                Ok(BarMark {
                    rect: Rect::new(slot.x, y, slot.x + slot.width, baseline),
                    fill: self.fill.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn bars_rest_on_the_plot_bottom() {
        let plot = Rect::new(30.0, 20.0, 970.0, 470.0);
        let data = vec![Datum::new("a", 3.0), Datum::new("b", 7.0)];
        let band = ScaleBand::new(data.iter().map(|d| d.label.clone()), (plot.x0, plot.x1));
        let y_scale = ScaleLinear::new((2.0, 8.0), (plot.y1, plot.y0));

        let bars = BarMarkSpec::new()
            .marks(&data, &band, &y_scale, plot)
            .unwrap();

        assert_eq!(bars.len(), 2);
        for (bar, datum) in bars.iter().zip(&data) {
            let slot = band.band(&datum.label).unwrap();
            assert!((bar.rect.x0 - slot.x).abs() < 1e-9);
            assert!((bar.rect.width() - slot.width).abs() < 1e-9);
            assert!((bar.rect.y1 - 470.0).abs() < 1e-9);
            assert!((bar.rect.y0 - y_scale.map(datum.value)).abs() < 1e-9);
        }
    }

    #[test]
    fn a_foreign_band_scale_is_an_error() {
        let plot = Rect::new(0.0, 0.0, 100.0, 100.0);
        let data = vec![Datum::new("a", 1.0)];
        let band = ScaleBand::new(vec!["b"], (plot.x0, plot.x1));
        let y_scale = ScaleLinear::new((0.0, 2.0), (plot.y1, plot.y0));

        let err = BarMarkSpec::new()
            .marks(&data, &band, &y_scale, plot)
            .unwrap_err();
        assert_eq!(err, LayoutError::UnknownLabel("a".into()));
    }
}
