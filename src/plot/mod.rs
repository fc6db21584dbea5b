//! Figure composition and drawing.
//!
//! - panel layout + shared style (`compose`)
//! - Plotters rendering onto any backend (`draw`)

pub mod compose;
pub mod draw;

pub use compose::*;
pub use draw::*;
