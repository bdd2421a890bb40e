//! Unified error types for pptx-util.
//!
//! This module provides the single error type shared by the length, enumeration
//! and lazy-property modules.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
