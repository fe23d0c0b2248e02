//! Measurement Extraction
//!
//! Reads the throughput figure out of one kernel run's stdout.
//!
//! The kernel reports on a fixed line, for example:
//!
//! ```text
//! 20 20
//! # steps = 412
//! # time = 1503.2 usecs.
//! # performance = 1096.8142 Mflops     <- line index 3
//! # cases = 1.2e+09 case par seconde.
//! ```
//!
//! Marker characters are stripped from that line, it is split on whitespace,
//! and the second token is the Mflops figure. The position is a fixed contract
//! with the kernel; no other layout is recognized.

use crate::error::{ParseFailureReason, SweepError};

/// Zero-based index of the line carrying the measurement
pub const MEASUREMENT_LINE: usize = 3;

/// Zero-based index of the figure among the line's whitespace-separated tokens
pub const MEASUREMENT_TOKEN: usize = 1;

/// Characters removed from the measurement line before tokenizing
pub const MARKER_CHARS: [char; 2] = ['#', '='];

/// Mflops in one Gflops
pub const MFLOPS_PER_GFLOPS: f64 = 1000.0;

/// Extract the throughput in Gflops from raw kernel output.
///
/// Fails with [`SweepError::ParseFailure`] when the output has fewer than
/// four lines, the measurement line has fewer than two tokens, or the token
/// is not a finite decimal number. The returned error carries no dimension;
/// callers attach it with [`SweepError::at_dimension`].
pub fn extract_measurement(output: &str) -> Result<f64, SweepError> {
    let line = output.split('\n').nth(MEASUREMENT_LINE).ok_or_else(|| {
        parse_failure(ParseFailureReason::TooFewLines {
            expected: MEASUREMENT_LINE + 1,
            found: output.split('\n').count(),
        })
    })?;

    let stripped: String = line.chars().filter(|c| !MARKER_CHARS.contains(c)).collect();

    let token = stripped
        .split_whitespace()
        .nth(MEASUREMENT_TOKEN)
        .ok_or_else(|| {
            parse_failure(ParseFailureReason::TooFewTokens {
                line_index: MEASUREMENT_LINE,
                line: line.to_string(),
            })
        })?;

    let mflops = token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            parse_failure(ParseFailureReason::InvalidNumber {
                line_index: MEASUREMENT_LINE,
                token: token.to_string(),
                line: line.to_string(),
            })
        })?;

    Ok(mflops / MFLOPS_PER_GFLOPS)
}

fn parse_failure(reason: ParseFailureReason) -> SweepError {
    SweepError::ParseFailure {
        dimension: None,
        reason,
    }
}
