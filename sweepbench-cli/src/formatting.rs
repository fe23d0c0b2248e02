//! Output Formatting
//!
//! Human-readable summary printed after a completed sweep:
//! one row per sweep point (Mflops as reported, Gflops as charted),
//! the peak point, and where the chart was written.

use chrono::{DateTime, Utc};
use std::path::Path;
use sweepbench_core::{MFLOPS_PER_GFLOPS, ResultSeries};

/// Format a completed series for terminal display
pub fn format_human_summary(
    series: &ResultSeries,
    chart_path: &Path,
    finished_at: DateTime<Utc>,
) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("SweepBench Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    output.push_str(&format!(
        "  {:>10}  {:>14}  {:>10}\n",
        "size", "mflops", "gflops"
    ));
    output.push_str(&format!("  {}\n", "-".repeat(38)));

    let peak = series.peak();
    for point in series {
        let marker = if peak == Some(*point) { " ◀ peak" } else { "" };
        output.push_str(&format!(
            "  {:>10}  {:>14.4}  {:>10.4}{}\n",
            format!("{0}x{0}", point.dimension()),
            point.measurement() * MFLOPS_PER_GFLOPS,
            point.measurement(),
            marker
        ));
    }

    output.push('\n');
    output.push_str("Summary\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!("  Points: {}\n", series.len()));
    if let Some(peak) = peak {
        output.push_str(&format!(
            "  Peak:   {:.4} gflops at {}x{}\n",
            peak.measurement(),
            peak.dimension(),
            peak.dimension()
        ));
    }
    output.push_str(&format!("  Chart:  {}\n", chart_path.display()));
    output.push_str(&format!(
        "  Done:   {}\n",
        finished_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use sweepbench_core::ResultSeriesBuilder;

    #[test]
    fn test_summary_lists_every_point_and_peak() {
        let mut builder = ResultSeriesBuilder::new();
        builder.record(20, 0.5);
        builder.record(60, 2.25);
        builder.record(100, 1.75);
        let series = builder.finish();
        let finished_at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();

        let text = format_human_summary(&series, Path::new("performance.svg"), finished_at);

        assert!(text.contains("20x20"));
        assert!(text.contains("100x100"));
        assert!(text.contains("2250.0000"));
        assert!(text.contains("Peak:   2.2500 gflops at 60x60"));
        assert_eq!(text.matches("◀ peak").count(), 1);
        assert!(text.contains("Chart:  performance.svg"));
        assert!(text.contains("2026-01-02 03:04:05 UTC"));
    }

    #[test]
    fn test_summary_of_empty_series() {
        let text = format_human_summary(
            &ResultSeries::default(),
            Path::new("performance.svg"),
            Utc::now(),
        );
        assert!(text.contains("Points: 0"));
        assert!(!text.contains("Peak:"));
    }
}
