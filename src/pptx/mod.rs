//! PowerPoint text value types.
//!
//! - `enums`: styled enumerations for auto-size, underline, vertical anchor,
//!   paragraph alignment and numbered bullets
//! - `bullet`: the `BulletStyle` value built on the numbered-bullet enumeration
pub mod bullet;
pub mod enums;

pub use bullet::{BulletStyle, BulletValue};
pub use enums::{
    BaseEnum, BaseXmlEnum, BulletStyleType, MsoAnchor, MsoAutoSize, MsoNumberedBulletStyle,
    MsoTextUnderlineType, MsoUnderline, MsoVerticalAnchor, PpAlign, PpParagraphAlignment,
};
