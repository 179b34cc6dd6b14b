// src/lib.rs
//! Umbrella crate re-exporting [`countrypick_core`] for the demos.

pub use countrypick_core::*;
