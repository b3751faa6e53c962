//! Prelude module for the myanmar_calendar crate.
//!
//! Re-exports the derive_more macro used for name rendering.

pub use derive_more::Display;
