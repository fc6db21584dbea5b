//! `psi-tradeoff` library crate.
//!
//! The binary (`tradeoff`) is a thin wrapper around this library so that:
//!
//! - every pipeline stage is testable without spawning processes
//! - the loader/export contract can be reused for simpler single-panel figures

pub mod aggregate;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod models;
pub mod plot;
pub mod schema;
pub mod tui;
