//! Unit constants and unit names for EMU-based lengths.
//!
//! Office Open XML stores every geometry field as an integer number of
//! English Metric Units (EMU). All other units are exact integer multiples.

use crate::Result;
use std::fmt;
use std::str::FromStr;

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_MM: i64 = 36_000;
pub const EMUS_PER_PT: i64 = 12_700;
pub const EMUS_PER_CENTIPOINT: i64 = 127;
pub const EMUS_PER_TWIP: i64 = 635;

/// Truncate `value * factor` toward zero.
///
/// Out-of-range results saturate and NaN maps to zero.
#[inline]
pub(crate) fn scale_to_emu(value: f64, factor: i64) -> i64 {
    (value * factor as f64) as i64
}

/// Units a [`Length`](crate::common::Length) can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// English Metric Unit, the native integer unit
    Emu,
    /// Inch
    Inch,
    /// Centimeter
    Centimeter,
    /// Millimeter
    Millimeter,
    /// Point (1/72 inch)
    Point,
    /// Hundredth of a point (1/7200 inch)
    Centipoint,
}

impl LengthUnit {
    /// Get the unit abbreviation
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emu => "emu",
            Self::Inch => "in",
            Self::Centimeter => "cm",
            Self::Millimeter => "mm",
            Self::Point => "pt",
            Self::Centipoint => "cpt",
        }
    }

    /// Number of EMU in one of this unit.
    #[inline]
    pub const fn emus_per_unit(&self) -> i64 {
        match self {
            Self::Emu => 1,
            Self::Inch => EMUS_PER_INCH,
            Self::Centimeter => EMUS_PER_CM,
            Self::Millimeter => EMUS_PER_MM,
            Self::Point => EMUS_PER_PT,
            Self::Centipoint => EMUS_PER_CENTIPOINT,
        }
    }

    fn from_str_internal(s: &str) -> Option<Self> {
        match s {
            "emu" => Some(Self::Emu),
            "in" | "inch" => Some(Self::Inch),
            "cm" => Some(Self::Centimeter),
            "mm" => Some(Self::Millimeter),
            "pt" => Some(Self::Point),
            "cpt" => Some(Self::Centipoint),
            _ => None,
        }
    }
}

impl FromStr for LengthUnit {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_internal(s)
            .ok_or_else(|| crate::Error::ParseError(format!("Unknown length unit '{}'", s)))
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
