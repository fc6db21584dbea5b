//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - loaded benchmark tables (`BenchmarkTable`, `Value`)
//! - column heuristics and their results (`ColumnSpec`, `ResolvedSchema`)
//! - aggregation output (`GroupKey`, `AggregatedSeries`)
//! - figure description (`Panel`, `Series`, `StyleProfile`, `Figure`)

pub mod figure;
pub mod types;

pub use figure::*;
pub use types::*;
