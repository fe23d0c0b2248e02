//! Configuration loading from sweep.toml
//!
//! An optional `sweep.toml` can name the kernel, the chart path and the chart
//! look. It is discovered by walking up from the current directory. Without
//! it the harness runs `./stencil` and writes `performance.svg`; a file that
//! exists but cannot be read or parsed is an error, never silently replaced
//! by the defaults.
//!
//! The sweep range itself is fixed and cannot be configured.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use sweepbench_report::{ChartStyle, DEFAULT_CHART_PATH};

use crate::invoker::DEFAULT_KERNEL;

/// Name of the discovered configuration file
pub const CONFIG_FILE_NAME: &str = "sweep.toml";

/// SweepBench configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SweepConfig {
    /// Kernel configuration
    #[serde(default)]
    pub kernel: KernelConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Chart appearance
    #[serde(default)]
    pub visuals: VisualsConfig,
}

/// Kernel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// Kernel executable, invoked as `<program> <size> <size>`
    #[serde(default = "default_program")]
    pub program: String,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

fn default_program() -> String {
    DEFAULT_KERNEL.to_string()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Chart file, overwritten on every completed sweep
    #[serde(default = "default_chart_path")]
    pub chart_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            chart_path: default_chart_path(),
        }
    }
}

fn default_chart_path() -> String {
    DEFAULT_CHART_PATH.to_string()
}

/// Chart appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualsConfig {
    /// Chart width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Chart height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
    /// Line color (any SVG color)
    #[serde(default = "default_line_color")]
    pub line_color: String,
}

impl Default for VisualsConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            line_color: default_line_color(),
        }
    }
}

fn default_width() -> u32 {
    1280
}
fn default_height() -> u32 {
    720
}
fn default_line_color() -> String {
    "green".to_string()
}

impl SweepConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("invalid {}", path.display()))?;
        Ok(config)
    }

    /// Discover and load configuration by walking up from the current directory.
    ///
    /// Returns `Ok(None)` when no `sweep.toml` exists anywhere up the tree.
    pub fn discover() -> anyhow::Result<Option<Self>> {
        let cwd = std::env::current_dir().context("cannot determine current directory")?;
        Self::discover_from(&cwd)
    }

    /// Discover configuration by walking up from `start`
    pub fn discover_from(start: &Path) -> anyhow::Result<Option<Self>> {
        for dir in start.ancestors() {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                let config = Self::load(&config_path)?;
                tracing::debug!(path = %config_path.display(), "loaded configuration");
                return Ok(Some(config));
            }
        }
        Ok(None)
    }

    /// Chart style derived from `[visuals]`; labels and title are fixed
    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle {
            line_color: self.visuals.line_color.clone(),
            width: self.visuals.width,
            height: self.visuals.height,
            ..ChartStyle::default()
        }
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# SweepBench Configuration
#
# The sweep range (20..800, step 40) is fixed and not configurable.

[kernel]
# Executable invoked as `<program> <size> <size>`
program = "./stencil"

[output]
# Chart file, overwritten after every completed sweep
chart_path = "performance.svg"

[visuals]
# Chart dimensions
width = 1280
height = 720
# Line color (any SVG color)
line_color = "green"
"#
        .to_string()
    }
}
