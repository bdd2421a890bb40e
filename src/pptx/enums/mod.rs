//! Enumerations used by PowerPoint text objects.
//!
//! Every member carries the numeric code of the matching MS API enumeration,
//! an optional token used in the DrawingML markup, and a description. Codes and
//! tokens are fixed by the interchange format and must never be renumbered.
//!
//! Reverse lookups (code, token and symbolic name to member) go through
//! indices built once per enumeration on first use.
//!
//! # Examples
//!
//! ```rust
//! use pptx_util::pptx::enums::{BaseEnum, BaseXmlEnum, MsoUnderline, PpAlign};
//!
//! assert_eq!(PpAlign::from_xml("ctr").unwrap(), PpAlign::Center);
//! assert_eq!(MsoUnderline::from_value(3).unwrap().to_xml().unwrap(), "dbl");
//! assert!(PpAlign::from_value(99).is_err());
//! ```
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::{Error, Result};

/// Code of the "more than one value applies" sentinel.
pub const MIXED_VALUE: i32 = -2;

/// A closed enumeration whose members carry an MS API numeric code.
pub trait BaseEnum: Copy + Eq + Hash + fmt::Debug + 'static {
    /// MS API name of the enumeration.
    const NAME: &'static str;

    /// Every member, in declaration order.
    const MEMBERS: &'static [Self];

    /// Numeric code of this member.
    fn value(self) -> i32;

    /// Symbolic name, e.g. `SHAPE_TO_FIT_TEXT`.
    fn name(self) -> &'static str;

    /// Human readable description.
    fn description(self) -> &'static str;

    /// Look up the member with numeric code `value`.
    ///
    /// Fails with [`Error::UnknownValue`] when no member has that code.
    fn from_value(value: i32) -> Result<Self>;

    /// Look up the member by symbolic name.
    ///
    /// Fails with [`Error::UnknownName`] when no member has that name.
    fn from_name(name: &str) -> Result<Self>;

    /// Whether this is the return-value-only "mixed" sentinel.
    #[inline]
    fn is_mixed(self) -> bool {
        self.value() == MIXED_VALUE
    }

    /// Return `self` if it may be assigned to a property.
    ///
    /// The mixed sentinel can be observed when reading a property over several
    /// objects but is never a valid value to set.
    fn validate_settable(self) -> Result<Self> {
        if self.is_mixed() {
            Err(Error::ReadOnlyValue {
                enumeration: Self::NAME,
                member: self.name(),
            })
        } else {
            Ok(self)
        }
    }
}

/// An enumeration whose members map to tokens in the XML markup.
pub trait BaseXmlEnum: BaseEnum {
    /// Markup token of this member, if it has one.
    fn xml_value(self) -> Option<&'static str>;

    /// Look up the member whose markup token is `xml_value`.
    ///
    /// Fails with [`Error::UnknownXmlValue`] when no member has that token.
    fn from_xml(xml_value: &str) -> Result<Self>;

    /// Markup token to write for this member.
    ///
    /// Fails with [`Error::NoXmlRepresentation`] for members without a token.
    fn to_xml(self) -> Result<&'static str> {
        self.xml_value().ok_or(Error::NoXmlRepresentation {
            enumeration: Self::NAME,
            member: self.name(),
        })
    }
}

/// Build a reverse index over `E::MEMBERS`, skipping members without a key.
pub(crate) fn index_members<E, K>(key: impl Fn(E) -> Option<K>) -> HashMap<K, E>
where
    E: BaseEnum,
    K: Eq + Hash,
{
    E::MEMBERS
        .iter()
        .filter_map(|&member| key(member).map(|k| (k, member)))
        .collect()
}

/// Declare an MS API enumeration implementing [`BaseEnum`].
///
/// Each member is written `Variant = code, "SYMBOL", "description";`.
macro_rules! base_enum {
    (
        $(#[$meta:meta])*
        pub enum $ty:ident ($api:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal, $symbol:literal, $desc:literal;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(i32)]
        pub enum $ty {
            $(
                $(#[$vmeta])*
                #[cfg_attr(feature = "serde", serde(rename = $symbol))]
                $variant = $code,
            )+
        }

        impl $crate::pptx::enums::BaseEnum for $ty {
            const NAME: &'static str = $api;

            const MEMBERS: &'static [Self] = &[$(Self::$variant),+];

            #[inline]
            fn value(self) -> i32 {
                self as i32
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol,)+
                }
            }

            fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $desc,)+
                }
            }

            fn from_value(value: i32) -> $crate::Result<Self> {
                static INDEX: ::once_cell::sync::Lazy<::std::collections::HashMap<i32, $ty>> =
                    ::once_cell::sync::Lazy::new(|| {
                        $crate::pptx::enums::index_members(|member: $ty| {
                            Some($crate::pptx::enums::BaseEnum::value(member))
                        })
                    });
                INDEX.get(&value).copied().ok_or_else(|| {
                    ::tracing::debug!(enumeration = $api, value, "no member with value");
                    $crate::Error::UnknownValue {
                        enumeration: $api,
                        value,
                    }
                })
            }

            fn from_name(name: &str) -> $crate::Result<Self> {
                static INDEX: ::once_cell::sync::Lazy<
                    ::std::collections::HashMap<&'static str, $ty>,
                > = ::once_cell::sync::Lazy::new(|| {
                    $crate::pptx::enums::index_members(|member: $ty| {
                        Some($crate::pptx::enums::BaseEnum::name(member))
                    })
                });
                INDEX.get(name).copied().ok_or_else(|| {
                    ::tracing::debug!(enumeration = $api, name, "no member with name");
                    $crate::Error::UnknownName {
                        enumeration: $api,
                        name: name.to_string(),
                    }
                })
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                use $crate::pptx::enums::BaseEnum;
                write!(f, "{} ({})", self.name(), self.value())
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::Error;

            /// Parse from the symbolic name.
            fn from_str(s: &str) -> $crate::Result<Self> {
                <Self as $crate::pptx::enums::BaseEnum>::from_name(s)
            }
        }
    };
}

/// Declare an enumeration implementing both [`BaseEnum`] and [`BaseXmlEnum`].
///
/// Each member is written `Variant = code, "SYMBOL", Some("token"), "description";`
/// with `None` in place of the token for members absent from the markup.
macro_rules! xml_enum {
    (
        $(#[$meta:meta])*
        pub enum $ty:ident ($api:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal, $symbol:literal, $token:expr, $desc:literal;
            )+
        }
    ) => {
        base_enum! {
            $(#[$meta])*
            pub enum $ty ($api) {
                $(
                    $(#[$vmeta])*
                    $variant = $code, $symbol, $desc;
                )+
            }
        }

        impl $crate::pptx::enums::BaseXmlEnum for $ty {
            fn xml_value(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => $token,)+
                }
            }

            fn from_xml(xml_value: &str) -> $crate::Result<Self> {
                static INDEX: ::once_cell::sync::Lazy<
                    ::std::collections::HashMap<&'static str, $ty>,
                > = ::once_cell::sync::Lazy::new(|| {
                    $crate::pptx::enums::index_members(|member: $ty| {
                        $crate::pptx::enums::BaseXmlEnum::xml_value(member)
                    })
                });
                INDEX.get(xml_value).copied().ok_or_else(|| {
                    ::tracing::debug!(enumeration = $api, xml_value, "no member with token");
                    $crate::Error::UnknownXmlValue {
                        enumeration: $api,
                        value: xml_value.to_string(),
                    }
                })
            }
        }
    };
}

pub mod text;

pub use text::{
    BulletStyleType, MsoAnchor, MsoAutoSize, MsoNumberedBulletStyle, MsoTextUnderlineType,
    MsoUnderline, MsoVerticalAnchor, PpAlign, PpParagraphAlignment,
};
