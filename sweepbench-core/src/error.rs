//! Sweep Error Taxonomy
//!
//! Every failure aborts the current sweep. There is no recoverable variant.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the sweep stages
#[derive(Debug, Error)]
pub enum SweepError {
    /// The kernel could not be launched or exited with a non-zero status
    #[error("kernel `{program}` failed at dimension {dimension}: {reason}")]
    ProcessFailure {
        /// Program that was invoked
        program: String,
        /// Sweep point being processed
        dimension: u32,
        /// What went wrong
        reason: ProcessFailureReason,
    },

    /// The captured output did not have the expected line/token shape
    #[error("cannot parse kernel output{}: {reason}", describe_dimension(*dimension))]
    ParseFailure {
        /// Sweep point whose output was parsed, once known
        dimension: Option<u32>,
        /// What went wrong
        reason: ParseFailureReason,
    },

    /// The chart could not be written
    #[error("cannot write chart to {}: {source}", path.display())]
    RenderFailure {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl SweepError {
    /// Attach the sweep point to a parse failure raised by the (dimension-agnostic) extractor.
    pub fn at_dimension(self, at: u32) -> Self {
        match self {
            SweepError::ParseFailure {
                dimension: None,
                reason,
            } => SweepError::ParseFailure {
                dimension: Some(at),
                reason,
            },
            other => other,
        }
    }

    /// Dimension the failure occurred at, if known
    pub fn dimension(&self) -> Option<u32> {
        match self {
            SweepError::ProcessFailure { dimension, .. } => Some(*dimension),
            SweepError::ParseFailure { dimension, .. } => *dimension,
            SweepError::RenderFailure { .. } => None,
        }
    }
}

/// Why a kernel invocation failed
#[derive(Debug, Error)]
pub enum ProcessFailureReason {
    /// Spawning failed (missing executable, permission denied, ...)
    #[error("could not launch: {0}")]
    Launch(#[source] std::io::Error),

    /// The process ran but did not exit successfully
    #[error("{}", describe_exit(*code, stderr))]
    Exit {
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
        /// Captured standard error, trimmed
        stderr: String,
    },
}

/// Why the measurement line could not be read
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseFailureReason {
    /// Output has fewer lines than the measurement line index requires
    #[error("expected at least {expected} lines, found {found}")]
    TooFewLines {
        /// Required line count
        expected: usize,
        /// Lines actually present
        found: usize,
    },

    /// Measurement line has no figure at the expected token position
    #[error("line {line_index} has too few tokens: {line:?}")]
    TooFewTokens {
        /// Zero-based line index
        line_index: usize,
        /// Raw line content
        line: String,
    },

    /// Token at the expected position is not a finite decimal number
    #[error("token {token:?} on line {line_index} is not a number: {line:?}")]
    InvalidNumber {
        /// Zero-based line index
        line_index: usize,
        /// Offending token
        token: String,
        /// Raw line content
        line: String,
    },

    /// Standard output is not valid UTF-8
    #[error("output is not valid UTF-8 after byte {valid_up_to}")]
    InvalidUtf8 {
        /// Length of the valid UTF-8 prefix
        valid_up_to: usize,
    },
}

fn describe_dimension(dimension: Option<u32>) -> String {
    dimension
        .map(|d| format!(" at dimension {}", d))
        .unwrap_or_default()
}

fn describe_exit(code: Option<i32>, stderr: &str) -> String {
    let status = match code {
        Some(code) => format!("exited with status {}", code),
        None => "terminated by signal".to_string(),
    };
    if stderr.is_empty() {
        status
    } else {
        format!("{} ({})", status, stderr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_dimension_fills_parse_failure() {
        let err = SweepError::ParseFailure {
            dimension: None,
            reason: ParseFailureReason::TooFewLines {
                expected: 4,
                found: 1,
            },
        }
        .at_dimension(60);

        assert_eq!(err.dimension(), Some(60));
        assert_eq!(
            err.to_string(),
            "cannot parse kernel output at dimension 60: expected at least 4 lines, found 1"
        );
    }

    #[test]
    fn test_at_dimension_keeps_process_failure() {
        let err = SweepError::ProcessFailure {
            program: "./stencil".to_string(),
            dimension: 20,
            reason: ProcessFailureReason::Exit {
                code: Some(3),
                stderr: String::new(),
            },
        }
        .at_dimension(99);

        assert_eq!(err.dimension(), Some(20));
        assert_eq!(
            err.to_string(),
            "kernel `./stencil` failed at dimension 20: exited with status 3"
        );
    }

    #[test]
    fn test_exit_reason_includes_stderr() {
        let reason = ProcessFailureReason::Exit {
            code: None,
            stderr: "segfault".to_string(),
        };
        assert_eq!(reason.to_string(), "terminated by signal (segfault)");
    }

    #[test]
    fn test_invalid_utf8_message() {
        let err = SweepError::ParseFailure {
            dimension: Some(20),
            reason: ParseFailureReason::InvalidUtf8 { valid_up_to: 0 },
        };
        assert_eq!(
            err.to_string(),
            "cannot parse kernel output at dimension 20: output is not valid UTF-8 after byte 0"
        );
    }
}
