// Copyright 2025 the Stave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a sample labeled bar chart to an SVG file.

mod svg;

use stave_layout::{BarChartSpec, Datum};

fn main() {
    let data = vec![
        Datum::new("apples", 10.0),
        Datum::new("bananas", 7.0),
        Datum::new("cherries", 4.0),
        Datum::new("dates", 0.0),
        Datum::new("elderberries", 12.0),
    ];

    let spec = BarChartSpec::new(data);
    let layout = spec.render().expect("dataset is non-empty");

    let svg = svg::to_svg_string(&layout, &spec.geometry);
    std::fs::write("stave_bar_chart.svg", svg).expect("write stave_bar_chart.svg");
    println!("wrote stave_bar_chart.svg");
}
