// Copyright 2025 the Stave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart assembly: data and geometry in, scales, axes, and bars out.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Brush;

use crate::axis::{BandAxis, ValueAxis};
use crate::bar_mark::{BarMark, BarMarkSpec, DEFAULT_BAR_FILL};
use crate::data::Datum;
use crate::error::LayoutError;
use crate::layout::ChartGeometry;
use crate::scale::{ScaleBand, ScaleLinear};

/// A bar chart description: the data plus everything configurable.
///
/// Options default to a 1000x500 canvas with 20/30/30/30 margins, band
/// padding of 0.125 steps, roughly ten value ticks, and the default fill.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChartSpec {
    /// Input data, in band order.
    pub data: Vec<Datum>,
    /// Canvas size and margins.
    pub geometry: ChartGeometry,
    /// Inner band padding as a fraction of the step.
    pub padding_inner: f64,
    /// Outer band padding as a fraction of the step.
    pub padding_outer: f64,
    /// Approximate number of value-axis ticks.
    pub tick_count: usize,
    /// Bar fill paint.
    pub fill: Brush,
}

impl BarChartSpec {
    /// Creates a spec with default geometry and styling.
    pub fn new(data: Vec<Datum>) -> Self {
        Self {
            data,
            geometry: ChartGeometry::default(),
            padding_inner: 0.125,
            padding_outer: 0.125,
            tick_count: 10,
            fill: Brush::Solid(DEFAULT_BAR_FILL),
        }
    }

    /// Sets the canvas geometry.
    pub fn with_geometry(mut self, geometry: ChartGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Sets inner and outer band padding in step units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner;
        self.padding_outer = outer;
        self
    }

    /// Sets the approximate value-axis tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets the bar fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Computes the value domain for the vertical scale.
    ///
    /// Each non-zero value contributes `value - 1` to the lower bound and
    /// `value + 1` to the upper bound; an exact zero contributes `0` to
    /// both. The padding is per-value, not applied to the final min/max.
    ///
    /// Fails with [`LayoutError::EmptyData`] when there are no data points.
    pub fn value_domain(&self) -> Result<(f64, f64), LayoutError> {
        let mut values = self.data.iter().map(|d| d.value);
        let Some(first) = values.next() else {
            return Err(LayoutError::EmptyData);
        };
        let pad_lo = |v: f64| if v != 0.0 { v - 1.0 } else { 0.0 };
        let pad_hi = |v: f64| if v != 0.0 { v + 1.0 } else { 0.0 };
        let mut lo = pad_lo(first);
        let mut hi = pad_hi(first);
        for v in values {
            lo = lo.min(pad_lo(v));
            hi = hi.max(pad_hi(v));
        }
        Ok((lo, hi))
    }

    /// Computes the full chart layout.
    ///
    /// Everything is recomputed from the spec on each call; nothing is
    /// cached between frames. The band range is the plot's horizontal
    /// extent with pixel rounding; the value range is the plot's vertical
    /// extent, inverted so larger values sit higher.
    pub fn render(&self) -> Result<BarChartLayout, LayoutError> {
        let domain = self.value_domain()?;
        let plot = self.geometry.plot_rect();

        let x_scale = ScaleBand::new(
            self.data.iter().map(|d| d.label.clone()),
            (plot.x0, plot.x1),
        )
        .with_padding(self.padding_inner, self.padding_outer)
        .with_round(true);
        let y_scale = ScaleLinear::new(domain, (plot.y1, plot.y0));

        let bars = BarMarkSpec::new()
            .with_fill(self.fill.clone())
            .marks(&self.data, &x_scale, &y_scale, plot)?;

        let x_axis = BandAxis::bottom(&x_scale, plot);
        let y_axis = ValueAxis::left(&y_scale, plot, self.tick_count);

        Ok(BarChartLayout {
            plot,
            x_scale,
            y_scale,
            bars,
            x_axis,
            y_axis,
        })
    }
}

/// The computed layout for one frame of a bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChartLayout {
    /// The plot rectangle (canvas inset by margins).
    pub plot: Rect,
    /// Label to band mapping.
    pub x_scale: ScaleBand,
    /// Value to y mapping (inverted range).
    pub y_scale: ScaleLinear,
    /// One bar per datum, in input order.
    pub bars: Vec<BarMark>,
    /// Bottom axis: rule plus one tick per band, at band centers.
    pub x_axis: BandAxis,
    /// Left axis: rule plus ticks at nice values.
    pub y_axis: ValueAxis,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn value_domain_pads_by_one_unit() {
        let spec = BarChartSpec::new(vec![Datum::new("a", 3.0), Datum::new("b", 7.0)]);
        assert_eq!(spec.value_domain(), Ok((2.0, 8.0)));
    }

    #[test]
    fn zero_values_contribute_zero_to_both_bounds() {
        let spec = BarChartSpec::new(vec![Datum::new("a", 0.0), Datum::new("b", 5.0)]);
        assert_eq!(spec.value_domain(), Ok((0.0, 6.0)));

        // All-zero data collapses the domain to a point.
        let spec = BarChartSpec::new(vec![Datum::new("a", 0.0)]);
        assert_eq!(spec.value_domain(), Ok((0.0, 0.0)));
    }

    #[test]
    fn negative_values_pad_downward() {
        let spec = BarChartSpec::new(vec![Datum::new("a", -4.0), Datum::new("b", 2.0)]);
        assert_eq!(spec.value_domain(), Ok((-5.0, 3.0)));
    }

    #[test]
    fn empty_data_has_no_domain() {
        let spec = BarChartSpec::new(Vec::new());
        assert_eq!(spec.value_domain(), Err(LayoutError::EmptyData));
    }
}
