//! Input/output helpers.
//!
//! - CSV ingest + existence checks (`ingest`)
//! - figure export (SVG) + optional preview (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
