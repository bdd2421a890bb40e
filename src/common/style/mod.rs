//! Common style and measurement types.
//!
//! This module provides the EMU-based length used for every geometry field
//! of a presentation document.

// Submodule declarations
pub mod len;

// Re-exports
pub use len::{Centipoints, Cm, Emu, Inches, Length, Mm, Pt};
