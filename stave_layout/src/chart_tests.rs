// Copyright 2025 the Stave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end layout tests for the bar chart pipeline.

extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use crate::{BarChartSpec, ChartGeometry, Datum, LayoutError};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9
}

#[test]
fn default_geometry_maps_the_domain_to_the_plot_edges() {
    let layout = BarChartSpec::new(vec![Datum::new("a", 3.0), Datum::new("b", 7.0)])
        .render()
        .unwrap();

    // Domain [2, 8] onto [470, 20].
    assert!(close(layout.y_scale.map(2.0), 470.0));
    assert!(close(layout.y_scale.map(8.0), 20.0));
    // Affine in between: halfway through the domain, halfway down the range.
    assert!(close(layout.y_scale.map(5.0), 245.0));
}

#[test]
fn bars_follow_their_bands_and_the_baseline() {
    let data = vec![Datum::new("a", 3.0), Datum::new("b", 7.0)];
    let layout = BarChartSpec::new(data.clone()).render().unwrap();

    assert_eq!(layout.bars.len(), data.len());
    for (bar, datum) in layout.bars.iter().zip(&data) {
        let band = layout.x_scale.band(&datum.label).unwrap();
        assert!(close(bar.rect.x0, band.x));
        assert!(close(bar.rect.width(), band.width));
        assert!(close(bar.rect.y1, 470.0), "bars rest on the plot bottom");
        assert!(close(bar.rect.y0, layout.y_scale.map(datum.value)));
    }
    // value 3 in [2, 8]: one sixth up the plot.
    assert!(close(layout.bars[0].rect.y0, 395.0));
    // value 7: five sixths up.
    assert!(close(layout.bars[1].rect.y0, 95.0));
}

#[test]
fn duplicate_labels_share_a_band_but_keep_their_bars() {
    let data = vec![
        Datum::new("a", 1.0),
        Datum::new("b", 2.0),
        Datum::new("a", 3.0),
    ];
    let layout = BarChartSpec::new(data).render().unwrap();

    assert_eq!(layout.x_scale.len(), 2);
    assert_eq!(layout.bars.len(), 3);
    assert!(close(layout.bars[0].rect.x0, layout.bars[2].rect.x0));
    assert_eq!(layout.x_axis.ticks.len(), 2);
}

#[test]
fn render_is_a_pure_function_of_the_spec() {
    let spec = BarChartSpec::new(vec![
        Datum::new("a", 4.0),
        Datum::new("b", 0.0),
        Datum::new("c", -2.5),
    ])
    .with_geometry(ChartGeometry::new(640.0, 360.0))
    .with_tick_count(6);

    let first = spec.render().unwrap();
    let second = spec.render().unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_data_is_an_error_not_nan_geometry() {
    let err = BarChartSpec::new(Vec::new()).render().unwrap_err();
    assert_eq!(err, LayoutError::EmptyData);
}

#[test]
fn axis_ticks_line_up_with_scales() {
    let layout = BarChartSpec::new(vec![
        Datum::new("x", 0.0),
        Datum::new("y", 5.0),
        Datum::new("z", 10.0),
    ])
    .render()
    .unwrap();

    // Band ticks sit at band centers along the bottom edge.
    for (tick, label) in layout.x_axis.ticks.iter().zip(["x", "y", "z"]) {
        assert_eq!(tick.label, label);
        let band = layout.x_scale.band(label).unwrap();
        assert!(close(tick.pos.x, band.x + band.width / 2.0));
        assert!(close(tick.pos.y, 470.0));
    }

    // Value ticks stay inside the [0, 11] domain and map through the scale.
    assert!(!layout.y_axis.ticks.is_empty());
    for tick in &layout.y_axis.ticks {
        assert!(tick.value >= -1e-9);
        assert!(tick.value <= 11.0 + 1e-9);
        assert!(close(tick.pos.y, layout.y_scale.map(tick.value)));
    }
}

#[test]
fn degenerate_geometry_flows_through_without_panicking() {
    let geometry = ChartGeometry::new(1000.0, 40.0).with_margins(20.0, 30.0, 30.0, 30.0);
    let layout = BarChartSpec::new(vec![Datum::new("a", 1.0), Datum::new("b", 2.0)])
        .with_geometry(geometry)
        .render()
        .unwrap();

    // A 40px canvas with 50px of vertical margin inverts the plot; bars
    // extend below the collapsed baseline instead of erroring.
    assert!(layout.plot.height() < 0.0);
    assert!(layout.bars.iter().all(|b| b.rect.height() < 0.0));
}
