//! Platform layer
//!
//! Handles host differences for:
//! - Frame timing and visibility (`driver`, all targets)
//! - Browser bindings (`web`, wasm32 only)

pub mod driver;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use driver::FrameDriver;
