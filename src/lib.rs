//! pptx-util - value types for PowerPoint document models
//!
//! This library provides the small, leaf-level types a presentation object
//! model is built from. It does no parsing, rendering or file I/O.
//!
//! # Features
//!
//! - **Typed lengths**: `Length` stores an exact number of EMU (914,400 per
//!   inch); `Inches`, `Cm`, `Mm`, `Pt`, `Centipoints` and `Emu` construct it
//! - **Text enumerations**: auto-size, underline, vertical anchor, paragraph
//!   alignment and numbered-bullet styles with their MS API codes and
//!   DrawingML tokens
//! - **Bullet styles**: `BulletStyle` for no bullet, inherited, custom glyph
//!   and numbered bullets
//! - **Lazy properties**: `LazyProperty` computes a value once per owner and
//!   refuses assignment
//!
//! # Example - Lengths
//!
//! ```rust
//! use pptx_util::{Cm, Inches, Length, Pt};
//!
//! let margin: Length = Cm(1.27).into();
//! assert_eq!(margin, Inches(0.5).into());
//! assert_eq!(Length::from(Pt(18.0)).centipoints(), 1800);
//! ```
//!
//! # Example - Enumerations
//!
//! ```rust
//! use pptx_util::pptx::{BaseEnum, BaseXmlEnum, MsoAnchor, PpAlign};
//!
//! let align = PpAlign::from_xml("just")?;
//! assert_eq!(align, PpAlign::Justify);
//! assert_eq!(align.value(), 4);
//!
//! // The mixed sentinel is a return value only
//! assert!(MsoAnchor::Mixed.validate_settable().is_err());
//! # Ok::<(), pptx_util::Error>(())
//! ```

/// Shared error type, unit constants, `Length` and lazy properties
pub mod common;

/// Text enumerations and bullet styles
pub mod pptx;

// Re-export commonly used types for convenience
pub use common::{
    Centipoints, Cm, Emu, Error, Inches, LazyProperty, LazySlot, Length, LengthUnit, Mm, Pt,
    Result,
};
pub use pptx::{BulletStyle, BulletStyleType};
