//! Closed-form theoretical models.
//!
//! Models are small, pure functions of their parameters; they never look at
//! measured data.

pub mod cuckoo;

pub use cuckoo::*;
