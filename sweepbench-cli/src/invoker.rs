//! Kernel Invoker
//!
//! Runs the external kernel for one sweep point and captures its stdout.
//! This is the only place that spawns processes. Each call blocks until the
//! kernel exits; there is no timeout and no cancellation.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use sweepbench_core::{ParseFailureReason, ProcessFailureReason, SweepError};

/// Default kernel executable, resolved against the working directory
pub const DEFAULT_KERNEL: &str = "./stencil";

/// Runs the kernel for a single square problem size
pub trait KernelInvoker {
    /// Run `<kernel> <dimension> <dimension>` and return its full stdout.
    ///
    /// Fails with [`SweepError::ProcessFailure`] when the kernel cannot be
    /// launched or exits with a non-zero status, and with
    /// [`SweepError::ParseFailure`] when its stdout is not valid UTF-8.
    fn invoke(&mut self, dimension: u32) -> Result<String, SweepError>;
}

impl<I: KernelInvoker + ?Sized> KernelInvoker for &mut I {
    fn invoke(&mut self, dimension: u32) -> Result<String, SweepError> {
        (**self).invoke(dimension)
    }
}

/// Kernel executable launched as a child process
#[derive(Debug, Clone)]
pub struct KernelProcess {
    program: PathBuf,
}

impl KernelProcess {
    /// Kernel at `program` (a path, or a bare name looked up on `PATH`)
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Executable being launched
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn failure(&self, dimension: u32, reason: ProcessFailureReason) -> SweepError {
        SweepError::ProcessFailure {
            program: self.program.display().to_string(),
            dimension,
            reason,
        }
    }
}

impl Default for KernelProcess {
    fn default() -> Self {
        Self::new(DEFAULT_KERNEL)
    }
}

impl KernelInvoker for KernelProcess {
    fn invoke(&mut self, dimension: u32) -> Result<String, SweepError> {
        let size = dimension.to_string();
        tracing::debug!(program = %self.program.display(), dimension, "launching kernel");

        let output = Command::new(&self.program)
            .arg(&size)
            .arg(&size)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.failure(dimension, ProcessFailureReason::Launch(e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(self.failure(
                dimension,
                ProcessFailureReason::Exit {
                    code: output.status.code(),
                    stderr,
                },
            ));
        }

        String::from_utf8(output.stdout).map_err(|e| SweepError::ParseFailure {
            dimension: Some(dimension),
            reason: ParseFailureReason::InvalidUtf8 {
                valid_up_to: e.utf8_error().valid_up_to(),
            },
        })
    }
}
