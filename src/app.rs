//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - installs the log subscriber
//! - loads the run configuration
//! - runs the figure pipeline

use tracing_subscriber::EnvFilter;

use crate::config::PipelineConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `tradeoff` binary.
pub fn run() -> Result<(), AppError> {
    init_logging();

    let config = PipelineConfig::from_env()?;
    let path = pipeline::run_pipeline(&config)?;

    println!("Figure written to {}", path.display());
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
