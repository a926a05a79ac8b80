// Copyright 2025 the Stave Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG serialization for bar chart layouts.

use kurbo::Line;
use peniko::Brush;
use stave_layout::{BarChartLayout, ChartGeometry};

const TICK_SIZE: f64 = 5.0;
const LABEL_GAP: f64 = 8.0;
const FONT_SIZE: f64 = 10.0;
const AXIS_COLOR: &str = "#333";

pub(crate) fn to_svg_string(layout: &BarChartLayout, geometry: &ChartGeometry) -> String {
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="0 0 {} {}" width="{}" height="{}">"#,
        geometry.width, geometry.height, geometry.width, geometry.height
    ));
    out.push('\n');

    out.push_str("<g class=\"plot-area\">\n");
    for bar in &layout.bars {
        // Normalize so degenerate layouts still produce drawable rects.
        let r = bar.rect.abs();
        out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            r.x0,
            r.y0,
            r.width(),
            r.height(),
        ));
        write_paint_attr(&mut out, "fill", &bar.fill);
        out.push_str("/>\n");
    }
    out.push_str("</g>\n");

    out.push_str("<g class=\"x-axis\">\n");
    write_line(&mut out, layout.x_axis.rule);
    for tick in &layout.x_axis.ticks {
        write_line(
            &mut out,
            Line::new(tick.pos, (tick.pos.x, tick.pos.y + TICK_SIZE)),
        );
        out.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="hanging" fill="{}">{}</text>"#,
            tick.pos.x,
            tick.pos.y + TICK_SIZE + LABEL_GAP,
            FONT_SIZE,
            AXIS_COLOR,
            escape_xml(&tick.label)
        ));
        out.push('\n');
    }
    out.push_str("</g>\n");

    out.push_str("<g class=\"y-axis\">\n");
    write_line(&mut out, layout.y_axis.rule);
    for tick in &layout.y_axis.ticks {
        write_line(
            &mut out,
            Line::new((tick.pos.x - TICK_SIZE, tick.pos.y), tick.pos),
        );
        out.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" text-anchor="end" dominant-baseline="middle" fill="{}">{}</text>"#,
            tick.pos.x - TICK_SIZE - LABEL_GAP,
            tick.pos.y,
            FONT_SIZE,
            AXIS_COLOR,
            format_value(tick.value)
        ));
        out.push('\n');
    }
    out.push_str("</g>\n");

    out.push_str("</svg>\n");
    out
}

fn write_line(out: &mut String, line: Line) {
    out.push_str(&format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1"/>"#,
        line.p0.x, line.p0.y, line.p1.x, line.p1.y, AXIS_COLOR
    ));
    out.push('\n');
}

fn format_value(v: f64) -> String {
    if v == v.trunc() {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
