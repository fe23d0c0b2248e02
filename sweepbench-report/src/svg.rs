//! SVG Line Chart
//!
//! Hand-written SVG, no drawing backend:
//!
//! ```text
//!            title
//!   ┌──────────────────────────┐
//! y │ grid + ticks   ●───●     │
//!   │          ●───●           │
//!   │   ●───●                  │
//!   └──────────────────────────┘
//!               x label
//! ```
//!
//! Both axes include zero and end on "nice" ticks (1, 2 or 5 × 10^k), so a
//! negative reading extends the y axis below zero instead of leaving the plot.

use crate::chart::ChartStyle;
use sweepbench_core::ResultSeries;

const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 70.0;
const MARGIN_BOTTOM: f64 = 80.0;
const MIN_CANVAS: u32 = 240;
const TARGET_TICKS: f64 = 5.0;
const GRID_COLOR: &str = "#e0e0e0";
const AXIS_COLOR: &str = "#333333";
const TEXT_COLOR: &str = "#333333";
const MARKER_RADIUS: f64 = 3.5;

/// Axis scale from `min` to `max`, ticked every `step`
#[derive(Debug, Clone, Copy, PartialEq)]
struct Axis {
    min: f64,
    max: f64,
    step: f64,
}

impl Axis {
    const UNIT: Axis = Axis {
        min: 0.0,
        max: 1.0,
        step: 0.2,
    };

    fn fit(data_min: f64, data_max: f64) -> Self {
        let low = data_min.min(0.0);
        let high = data_max.max(0.0);
        if !low.is_finite() || !high.is_finite() || high <= low {
            return Self::UNIT;
        }
        let step = nice_step((high - low) / TARGET_TICKS);
        Self {
            min: (low / step).floor() * step,
            max: (high / step).ceil() * step,
            step,
        }
    }

    fn ticks(&self) -> impl Iterator<Item = f64> + '_ {
        // Integer tick indices keep zero exactly zero
        let first = (self.min / self.step).round() as i64;
        let last = (self.max / self.step).round() as i64;
        (first..=last).map(move |i| i as f64 * self.step)
    }

    /// Position of `value` along the axis, 0.0 at `min` and 1.0 at `max`
    fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    fn label(&self, value: f64) -> String {
        let decimals = if self.step >= 1.0 {
            0
        } else {
            (-self.step.log10().floor()) as usize
        };
        format!("{:.*}", decimals, value)
    }
}

/// Round `raw` up to 1, 2, 5 or 10 times a power of ten
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render `series` as a standalone SVG document
pub fn render_svg(series: &ResultSeries, style: &ChartStyle) -> String {
    let width = f64::from(style.width.max(MIN_CANVAS));
    let height = f64::from(style.height.max(MIN_CANVAS));
    let left = MARGIN_LEFT;
    let right = width - MARGIN_RIGHT;
    let top = MARGIN_TOP;
    let bottom = height - MARGIN_BOTTOM;

    let x_axis = Axis::fit(
        0.0,
        series.iter().map(|p| f64::from(p.dimension())).fold(0.0, f64::max),
    );
    let measurements = series.measurements();
    let y_axis = Axis::fit(
        measurements.iter().copied().fold(0.0, f64::min),
        measurements.iter().copied().fold(0.0, f64::max),
    );

    let sx = |v: f64| left + x_axis.fraction(v) * (right - left);
    let sy = |v: f64| bottom - y_axis.fraction(v) * (bottom - top);

    let color = escape_xml(&style.line_color);
    let mut out = String::new();

    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = width,
        h = height
    ));
    out.push_str(&format!(
        "  <style>\n    .title {{ font: bold 20px sans-serif; fill: {c}; }}\n    .label {{ font: 14px sans-serif; fill: {c}; }}\n    .tick {{ font: 12px sans-serif; fill: {c}; }}\n  </style>\n",
        c = TEXT_COLOR
    ));
    out.push_str(&format!(
        "  <rect width=\"{}\" height=\"{}\" fill=\"#ffffff\"/>\n",
        width, height
    ));

    // Title
    out.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" class=\"title\">{}</text>\n",
        width / 2.0,
        top / 2.0 + 7.0,
        escape_xml(&style.title)
    ));

    // Grid and tick labels
    out.push_str("  <g class=\"grid\">\n");
    for value in x_axis.ticks() {
        let x = sx(value);
        out.push_str(&format!(
            "    <line x1=\"{x:.2}\" y1=\"{top:.2}\" x2=\"{x:.2}\" y2=\"{bottom:.2}\" stroke=\"{GRID_COLOR}\" stroke-width=\"1\"/>\n"
        ));
        out.push_str(&format!(
            "    <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" class=\"tick\">{}</text>\n",
            x,
            bottom + 20.0,
            x_axis.label(value)
        ));
    }
    for value in y_axis.ticks() {
        let y = sy(value);
        out.push_str(&format!(
            "    <line x1=\"{left:.2}\" y1=\"{y:.2}\" x2=\"{right:.2}\" y2=\"{y:.2}\" stroke=\"{GRID_COLOR}\" stroke-width=\"1\"/>\n"
        ));
        out.push_str(&format!(
            "    <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" class=\"tick\">{}</text>\n",
            left - 10.0,
            y + 4.0,
            y_axis.label(value)
        ));
    }
    out.push_str("  </g>\n");

    // Axes
    out.push_str(&format!(
        "  <polyline class=\"axes\" points=\"{left:.2},{top:.2} {left:.2},{bottom:.2} {right:.2},{bottom:.2}\" fill=\"none\" stroke=\"{AXIS_COLOR}\" stroke-width=\"1.5\"/>\n"
    ));

    // Axis labels
    out.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" class=\"label\">{}</text>\n",
        (left + right) / 2.0,
        height - 25.0,
        escape_xml(&style.x_label)
    ));
    let y_label_x = 25.0;
    let y_label_y = (top + bottom) / 2.0;
    out.push_str(&format!(
        "  <text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"middle\" class=\"label\" transform=\"rotate(-90 {x:.2} {y:.2})\">{}</text>\n",
        escape_xml(&style.y_label),
        x = y_label_x,
        y = y_label_y
    ));

    // Data
    if !series.is_empty() {
        let points: Vec<String> = series
            .iter()
            .map(|p| {
                format!(
                    "{:.2},{:.2}",
                    sx(f64::from(p.dimension())),
                    sy(p.measurement())
                )
            })
            .collect();
        out.push_str(&format!(
            "  <polyline class=\"series\" points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>\n",
            points.join(" "),
            color
        ));

        out.push_str(&format!("  <g class=\"markers\" fill=\"{}\">\n", color));
        for p in series {
            out.push_str(&format!(
                "    <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\"><title>{} : {:.4} gflops</title></circle>\n",
                sx(f64::from(p.dimension())),
                sy(p.measurement()),
                MARKER_RADIUS,
                p.dimension(),
                p.measurement()
            ));
        }
        out.push_str("  </g>\n");
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweepbench_core::ResultSeriesBuilder;

    fn series_of(points: &[(u32, f64)]) -> ResultSeries {
        let mut builder = ResultSeriesBuilder::new();
        for &(d, m) in points {
            builder.record(d, m);
        }
        builder.finish()
    }

    fn data_polyline(svg: &str) -> &str {
        let start = svg
            .find("class=\"series\" points=\"")
            .expect("series polyline")
            + "class=\"series\" points=\"".len();
        let end = start + svg[start..].find('"').unwrap();
        &svg[start..end]
    }

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(0.9), 1.0);
        assert_eq!(nice_step(1.5), 2.0);
        assert_eq!(nice_step(3.0), 5.0);
        assert_eq!(nice_step(7.0), 10.0);
        assert_eq!(nice_step(156.0), 200.0);
    }

    #[test]
    fn test_axis_fit() {
        let axis = Axis::fit(0.0, 780.0);
        assert_eq!(axis.step, 200.0);
        assert_eq!(axis.min, 0.0);
        assert_eq!(axis.max, 800.0);
        assert_eq!(axis.ticks().count(), 5);

        let empty = Axis::fit(0.0, 0.0);
        assert_eq!(empty, Axis::UNIT);
    }

    #[test]
    fn test_axis_fit_extends_below_zero() {
        let axis = Axis::fit(-3.0, 7.0);
        assert_eq!(axis.step, 2.0);
        assert_eq!(axis.min, -4.0);
        assert_eq!(axis.max, 8.0);
        assert_eq!(
            axis.ticks().collect::<Vec<_>>(),
            vec![-4.0, -2.0, 0.0, 2.0, 4.0, 6.0, 8.0]
        );
        assert_eq!(axis.fraction(-4.0), 0.0);
        assert_eq!(axis.fraction(8.0), 1.0);
    }

    #[test]
    fn test_axis_labels() {
        let axis = Axis::fit(0.0, 780.0);
        assert_eq!(axis.label(400.0), "400");

        let axis = Axis::UNIT;
        assert_eq!(axis.label(0.4), "0.4");
    }

    #[test]
    fn test_one_vertex_per_point() {
        let series = series_of(&[(20, 0.2), (60, 0.6), (100, 1.0), (140, 1.4)]);
        let svg = render_svg(&series, &ChartStyle::default());

        assert_eq!(data_polyline(&svg).split(' ').count(), 4);
        assert_eq!(svg.matches("<circle").count(), 4);
    }

    #[test]
    fn test_labels_and_color() {
        let series = series_of(&[(20, 0.2)]);
        let svg = render_svg(&series, &ChartStyle::default());

        assert!(svg.contains(">Performance en gigaflops</text>"));
        assert!(svg.contains(">STENCIL_SIZE_X = STENCIL_SIZE_Y</text>"));
        assert!(svg.contains(">gflops</text>"));
        assert!(svg.contains("stroke=\"green\""));
        assert!(svg.contains("<g class=\"markers\" fill=\"green\">"));
    }

    #[test]
    fn test_empty_series_renders_axes_only() {
        let svg = render_svg(&ResultSeries::default(), &ChartStyle::default());

        assert!(svg.contains("class=\"axes\""));
        assert!(!svg.contains("class=\"series\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let style = ChartStyle {
            title: "A & B <test>".to_string(),
            ..ChartStyle::default()
        };
        let svg = render_svg(&series_of(&[(20, 1.0)]), &style);
        assert!(svg.contains("A &amp; B &lt;test&gt;"));
    }

    #[test]
    fn test_higher_measurement_is_drawn_higher() {
        let series = series_of(&[(20, 0.5), (60, 2.0)]);
        let svg = render_svg(&series, &ChartStyle::default());
        let ys: Vec<f64> = data_polyline(&svg)
            .split(' ')
            .map(|pt| pt.split(',').nth(1).unwrap().parse().unwrap())
            .collect();
        // SVG y grows downward
        assert!(ys[1] < ys[0]);
    }

    #[test]
    fn test_negative_measurement_stays_inside_plot() {
        let series = series_of(&[(20, 0.4), (60, -0.3), (100, 1.2)]);
        let style = ChartStyle::default();
        let svg = render_svg(&series, &style);

        let top = MARGIN_TOP;
        let bottom = f64::from(style.height) - MARGIN_BOTTOM;
        for pt in data_polyline(&svg).split(' ') {
            let y: f64 = pt.split(',').nth(1).unwrap().parse().unwrap();
            assert!((top..=bottom).contains(&y), "y = {} outside [{}, {}]", y, top, bottom);
        }
        assert!(svg.contains(">-0.5</text>"));
    }
}
