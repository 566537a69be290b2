//! User-facing settings consumed by the history engine and paste pipeline.
//!
//! The core only reads these values. Loading them from disk is the bootstrap
//! layer's job; writing them back is out of scope.

mod defaults;
mod model;

pub use model::*;
