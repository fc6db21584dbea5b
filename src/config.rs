//! Run configuration.
//!
//! All values are fixed defaults; a `.env` file (or the process environment)
//! may point the run at different files, but there are no command-line flags.

use std::path::PathBuf;

use crate::domain::StyleProfile;
use crate::error::AppError;
use crate::models::CurveParams;

pub const DEFAULT_OKVS_CSV: &str = "okvs_bench.csv";
pub const DEFAULT_THRESHOLD_CSV: &str = "rt_vs_n_by_t.csv";
pub const DEFAULT_OUTPUT: &str = "fig_param_tradeoff.svg";
/// Pixels per inch of the exported figure.
pub const DEFAULT_RESOLUTION: u32 = 300;

/// Whether to preview the figure after writing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Preview when stdout is an interactive terminal.
    Auto,
    Never,
}

impl DisplayMode {
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(DisplayMode::Auto),
            "never" => Ok(DisplayMode::Never),
            other => Err(AppError::Config(format!(
                "TRADEOFF_DISPLAY must be `auto` or `never`, got '{other}'."
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// OKVS benchmark (alpha vs success rate).
    pub okvs_path: PathBuf,
    /// Threshold benchmark (threshold vs communication).
    pub threshold_path: PathBuf,
    pub output_path: PathBuf,
    pub resolution: u32,
    pub curve: CurveParams,
    pub style: StyleProfile,
    pub display: DisplayMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            okvs_path: PathBuf::from(DEFAULT_OKVS_CSV),
            threshold_path: PathBuf::from(DEFAULT_THRESHOLD_CSV),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            resolution: DEFAULT_RESOLUTION,
            curve: CurveParams::default(),
            style: StyleProfile::default(),
            display: DisplayMode::Auto,
        }
    }
}

impl PipelineConfig {
    /// Load `.env` (if any) and apply path/display overrides.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty("TRADEOFF_OKVS_CSV") {
            config.okvs_path = PathBuf::from(v.trim());
        }
        if let Some(v) = non_empty("TRADEOFF_THRESHOLD_CSV") {
            config.threshold_path = PathBuf::from(v.trim());
        }
        if let Some(v) = non_empty("TRADEOFF_OUTPUT") {
            config.output_path = PathBuf::from(v.trim());
        }
        if let Some(v) = non_empty("TRADEOFF_DISPLAY") {
            config.display = DisplayMode::parse(&v)?;
        }
        Ok(config)
    }
}
