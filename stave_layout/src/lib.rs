// Copyright 2025 the Stave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart layout as plain data.
//!
//! `stave_layout` computes the geometry of a labeled bar chart:
//! - a **band scale** mapping category labels to horizontal slots,
//! - a **linear scale** mapping values to vertical positions,
//! - **axis** rule lines and tick positions for both,
//! - one **bar rect** per datum.
//!
//! The crate never touches a rendering surface. A renderer (SVG, canvas, a
//! GPU scene graph) consumes the returned geometry; see `stave_layout_demo`
//! for an SVG example.
//!
//! Every call to [`BarChartSpec::render`] recomputes everything from its
//! inputs. There is no caching and no shared state, so identical inputs give
//! identical outputs and concurrent calls do not interfere.

#![no_std]

extern crate alloc;

mod axis;
mod bar_mark;
mod chart;
#[cfg(test)]
mod chart_tests;
mod data;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod layout;
mod scale;

pub use axis::{AxisOrient, BandAxis, BandTick, ValueAxis, ValueTick};
pub use bar_mark::{BarMark, BarMarkSpec, DEFAULT_BAR_FILL};
pub use chart::{BarChartLayout, BarChartSpec};
pub use data::Datum;
pub use error::LayoutError;
pub use layout::ChartGeometry;
pub use scale::{Band, ScaleBand, ScaleLinear};
