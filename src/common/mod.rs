//! Common types, traits, and utilities shared across the crate.
//!
//! This module provides the error type, EMU unit constants, the `Length`
//! value type and the lazily evaluated property helpers.

// Submodule declarations
pub mod error;
pub mod lazy;
pub mod style;
pub mod unit;

// Re-exports for convenience
pub use error::{Error, Result};
pub use lazy::{LazyProperty, LazySlot};
pub use style::{Centipoints, Cm, Emu, Inches, Length, Mm, Pt};
pub use unit::LengthUnit;
