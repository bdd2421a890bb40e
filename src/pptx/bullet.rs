//! Bullet configuration of a paragraph.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pptx::enums::{BaseEnum, BulletStyleType, MsoNumberedBulletStyle};

/// How a paragraph's bullet is rendered.
///
/// A serializer reads [`BulletStyle::style`] and [`BulletStyle::value`] to
/// decide what to write: nothing for `Default`, an explicit suppression for
/// `NoBullet`, the literal glyph for `Custom`, and a numbering-scheme token
/// for `Numbered`.
///
/// # Examples
///
/// ```rust
/// use pptx_util::pptx::{BulletStyle, BulletStyleType, MsoNumberedBulletStyle};
///
/// let bullet = BulletStyle::custom("•");
/// assert_eq!(bullet.style(), BulletStyleType::Custom);
/// assert_eq!(bullet, BulletStyle::custom("•"));
/// assert_ne!(bullet, BulletStyle::numbered(MsoNumberedBulletStyle::ArabicPeriod));
/// assert_ne!(BulletStyle::NO_BULLET, BulletStyle::DEFAULT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BulletStyle {
    /// Bullets explicitly disabled for the paragraph
    NoBullet,
    /// Bullet inherited from the layout, master or theme
    Default,
    /// Bullet rendered as the given text
    Custom(String),
    /// Auto-numbered bullet
    Numbered(MsoNumberedBulletStyle),
}

/// Payload of a [`BulletStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletValue<'a> {
    /// Literal glyph text of a custom bullet
    Text(&'a str),
    /// Numbering scheme of a numbered bullet
    Numbered(MsoNumberedBulletStyle),
}

impl BulletStyle {
    /// Bullets explicitly disabled.
    pub const NO_BULLET: BulletStyle = BulletStyle::NoBullet;

    /// Bullet defined by the slide layout or master.
    pub const DEFAULT: BulletStyle = BulletStyle::Default;

    /// A bullet rendered as `bullet`.
    ///
    /// Any string is accepted, including the empty string.
    #[inline]
    pub fn custom(bullet: impl Into<String>) -> Self {
        Self::Custom(bullet.into())
    }

    /// A numbered bullet using `style`.
    ///
    /// The style is stored as given. Rejecting `STYLE_MIXED` is left to the
    /// serializer.
    #[inline]
    pub const fn numbered(style: MsoNumberedBulletStyle) -> Self {
        Self::Numbered(style)
    }

    /// Kind of bullet.
    #[inline]
    pub const fn style(&self) -> BulletStyleType {
        match self {
            Self::NoBullet => BulletStyleType::NoBullet,
            Self::Default => BulletStyleType::Default,
            Self::Custom(_) => BulletStyleType::Custom,
            Self::Numbered(_) => BulletStyleType::Numbered,
        }
    }

    /// Payload, `None` for `NoBullet` and `Default`.
    #[inline]
    pub fn value(&self) -> Option<BulletValue<'_>> {
        match self {
            Self::NoBullet | Self::Default => None,
            Self::Custom(text) => Some(BulletValue::Text(text)),
            Self::Numbered(style) => Some(BulletValue::Numbered(*style)),
        }
    }

    /// Whether the bullet comes from an ancestor rather than the paragraph.
    #[inline]
    pub const fn is_inherited(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl Default for BulletStyle {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<MsoNumberedBulletStyle> for BulletStyle {
    #[inline]
    fn from(style: MsoNumberedBulletStyle) -> Self {
        Self::Numbered(style)
    }
}

impl fmt::Display for BulletStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBullet => write!(f, "No Bullet"),
            Self::Default => write!(f, "Default"),
            Self::Custom(text) => write!(f, "Custom({:?})", text),
            Self::Numbered(style) => write!(f, "Numbered({})", style.name()),
        }
    }
}
