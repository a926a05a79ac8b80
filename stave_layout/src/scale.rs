// Copyright 2025 the Stave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale types: a label-keyed band scale and a linear value scale.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::LayoutError;

/// A linear mapping from a continuous domain to a continuous range.
///
/// A vertical chart scale typically has an inverted range (`range.0 >
/// range.1`) so that larger values map to smaller y coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A zero-width domain maps everything to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the configured domain (as authored).
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range (as authored).
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns "nice-ish" tick values for the domain.
    ///
    /// Step sizes snap to 1/2/5 times a power of ten, so ticks may start
    /// below or end above the domain endpoints.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// The horizontal slot a band scale assigns to one label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    /// Left edge of the band.
    pub x: f64,
    /// Band width.
    pub width: f64,
}

/// A label-keyed band scale for categorical charts.
///
/// The domain is the sequence of distinct labels in first-appearance order;
/// a duplicate label maps onto the band of its first occurrence. Bands are
/// separated by `padding_inner` and inset from the range ends by
/// `padding_outer`, both expressed as fractions of the step. With rounding
/// enabled, step, start, and band width snap to whole pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleBand {
    labels: Vec<String>,
    index: HashMap<String, usize>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    round: bool,
}

impl ScaleBand {
    /// Creates a band scale over the distinct labels of `labels`, covering
    /// `range`.
    ///
    /// Defaults: `padding_inner = padding_outer = 0.125`, centered
    /// alignment, no rounding.
    pub fn new<I, L>(labels: I, range: (f64, f64)) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let mut ordered = Vec::new();
        let mut index = HashMap::new();
        for label in labels {
            let label: String = label.into();
            if !index.contains_key(&label) {
                index.insert(label.clone(), ordered.len());
                ordered.push(label);
            }
        }
        Self {
            labels: ordered,
            index,
            range,
            padding_inner: 0.125,
            padding_outer: 0.125,
            align: 0.5,
            round: false,
        }
    }

    /// Sets inner and outer padding in step units.
    ///
    /// Inner padding is clamped to `[0, 1]`, outer padding to `>= 0`.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Sets how leftover space is distributed: `0` packs bands toward the
    /// range start, `1` toward the end, `0.5` centers them.
    pub fn with_align(mut self, align: f64) -> Self {
        self.align = align.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables snapping of step, start, and band width to whole
    /// pixels.
    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Returns the number of bands.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the scale has no bands.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the distinct labels in band order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the configured range (as authored).
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns the distance between the left edges of adjacent bands.
    pub fn step(&self) -> f64 {
        self.geometry().1
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        self.geometry().2
    }

    /// Returns the left edge of the band at `index`.
    ///
    /// The index is not bounds-checked; out-of-range indices extrapolate.
    pub fn x(&self, index: usize) -> f64 {
        let (start, step, _width) = self.geometry();
        start + step * index as f64
    }

    /// Returns the band for `label`, or `None` if the label is not in the
    /// domain.
    pub fn band(&self, label: &str) -> Option<Band> {
        let i = *self.index.get(label)?;
        let (start, step, width) = self.geometry();
        Some(Band {
            x: start + step * i as f64,
            width,
        })
    }

    /// Like [`ScaleBand::band`], but reports an unknown label as
    /// [`LayoutError::UnknownLabel`].
    pub fn band_or_err(&self, label: &str) -> Result<Band, LayoutError> {
        self.band(label)
            .ok_or_else(|| LayoutError::UnknownLabel(String::from(label)))
    }

    /// Computes `(start, step, band_width)` for the current configuration.
    ///
    /// `step = span / max(1, n - padding_inner + 2 * padding_outer)`, with
    /// leftover space distributed by `align`. Rounding floors the step and
    /// rounds start and width, which can leave the outermost gaps slightly
    /// unequal.
    fn geometry(&self) -> (f64, f64, f64) {
        let (r0, r1) = self.range;
        let (lo, hi) = if r1 >= r0 { (r0, r1) } else { (r1, r0) };
        let n = self.labels.len() as f64;

        let mut step = (hi - lo) / 1.0_f64.max(n - self.padding_inner + 2.0 * self.padding_outer);
        if self.round {
            step = step.floor();
        }
        let mut start = lo + (hi - lo - step * (n - self.padding_inner)) * self.align;
        if self.round {
            start = start.round();
        }
        let mut width = step * (1.0 - self.padding_inner);
        if self.round {
            width = width.round();
        }
        (start, step, width)
    }
}
