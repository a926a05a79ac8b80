// Copyright 2025 the Stave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis generation.
//!
//! Axes are produced as plain data: a rule line along the plot edge plus a
//! tick list. A rendering layer decides stroke widths, tick lengths, fonts,
//! and label placement.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};

use crate::scale::{ScaleBand, ScaleLinear};

/// Axis placement relative to the plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed above the plot area.
    Top,
    /// A horizontal axis placed below the plot area.
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
    /// A vertical axis placed to the right of the plot area.
    Right,
}

/// A tick on a categorical axis, one per band.
#[derive(Clone, Debug, PartialEq)]
pub struct BandTick {
    /// Tick position on the axis rule, at the center of the band.
    pub pos: Point,
    /// The band's label.
    pub label: String,
}

/// A tick on a value axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueTick {
    /// Tick position on the axis rule.
    pub pos: Point,
    /// The tick's value in data units.
    pub value: f64,
}

/// A categorical axis: a rule line plus one tick per band.
#[derive(Clone, Debug, PartialEq)]
pub struct BandAxis {
    /// Axis placement.
    pub orient: AxisOrient,
    /// The axis rule along the plot edge.
    pub rule: Line,
    /// Ticks in band order.
    pub ticks: Vec<BandTick>,
}

impl BandAxis {
    /// Builds a horizontal band axis along the bottom edge of `plot`.
    pub fn bottom(scale: &ScaleBand, plot: Rect) -> Self {
        Self::horizontal(scale, plot, AxisOrient::Bottom)
    }

    /// Builds a horizontal band axis along the top edge of `plot`.
    pub fn top(scale: &ScaleBand, plot: Rect) -> Self {
        Self::horizontal(scale, plot, AxisOrient::Top)
    }

    fn horizontal(scale: &ScaleBand, plot: Rect, orient: AxisOrient) -> Self {
        let y = match orient {
            AxisOrient::Top => plot.y0,
            _ => plot.y1,
        };
        let half_width = 0.5 * scale.band_width();
        let ticks = scale
            .labels()
            .iter()
            .enumerate()
            .map(|(i, label)| BandTick {
                pos: Point::new(scale.x(i) + half_width, y),
                label: label.clone(),
            })
            .collect();
        Self {
            orient,
            rule: Line::new((plot.x0, y), (plot.x1, y)),
            ticks,
        }
    }
}

/// A value axis: a rule line plus ticks at "nice" values.
///
/// Tick values come from the scale's tick generator; values the generator
/// proposes outside the scale's domain are dropped, so every tick lies on
/// the rule.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueAxis {
    /// Axis placement.
    pub orient: AxisOrient,
    /// The axis rule along the plot edge.
    pub rule: Line,
    /// Ticks in increasing value order.
    pub ticks: Vec<ValueTick>,
}

impl ValueAxis {
    /// Builds a vertical value axis along the left edge of `plot`.
    pub fn left(scale: &ScaleLinear, plot: Rect, tick_count: usize) -> Self {
        Self::vertical(scale, plot, AxisOrient::Left, tick_count)
    }

    /// Builds a vertical value axis along the right edge of `plot`.
    pub fn right(scale: &ScaleLinear, plot: Rect, tick_count: usize) -> Self {
        Self::vertical(scale, plot, AxisOrient::Right, tick_count)
    }

    fn vertical(scale: &ScaleLinear, plot: Rect, orient: AxisOrient, tick_count: usize) -> Self {
        let x = match orient {
            AxisOrient::Right => plot.x1,
            _ => plot.x0,
        };
        let (d0, d1) = scale.domain();
        let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        let ticks = scale
            .ticks(tick_count)
            .into_iter()
            .filter(|v| *v >= lo - 1e-9 && *v <= hi + 1e-9)
            .map(|v| ValueTick {
                pos: Point::new(x, scale.map(v)),
                value: v,
            })
            .collect();
        Self {
            orient,
            rule: Line::new((x, plot.y0), (x, plot.y1)),
            ticks,
        }
    }
}
