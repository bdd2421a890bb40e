use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::common::unit::{
    EMUS_PER_CENTIPOINT, EMUS_PER_CM, EMUS_PER_INCH, EMUS_PER_MM, EMUS_PER_PT, EMUS_PER_TWIP,
    LengthUnit, scale_to_emu,
};

/// Length measurement in English Metric Units.
///
/// The stored value is always an exact integer number of EMU. Every other
/// unit is a view computed on access; nothing else is stored. Equality and
/// ordering are plain integer semantics on the EMU value, so lengths built
/// from different units compare by the EMU they truncated to.
///
/// Values are never mutated. Arithmetic produces a new `Length`.
///
/// # Examples
///
/// ```rust
/// use pptx_util::common::{Cm, Inches, Length, Pt};
///
/// let width: Length = Inches(1.0).into();
/// assert_eq!(width.emu(), 914_400);
/// assert_eq!(Length::from(Pt(72.0)), width);
///
/// // 2.54cm is exactly one inch in EMU
/// assert_eq!(Length::from(Cm(2.54)), width);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Length {
    /// Value in EMUs (English Metric Units)
    /// 1 inch = 914,400 EMUs
    /// 1 cm = 360,000 EMUs
    emu: i64,
}

impl Length {
    /// Zero length.
    pub const ZERO: Length = Length { emu: 0 };

    /// Create a length from EMUs (English Metric Units).
    ///
    /// EMUs are the native unit used in Office Open XML formats.
    #[inline]
    pub const fn from_emu(emu: i64) -> Self {
        Self { emu }
    }

    /// Create a length from inches, truncating toward zero.
    #[inline]
    pub fn from_inches(inches: f64) -> Self {
        Self::from_emu(scale_to_emu(inches, EMUS_PER_INCH))
    }

    /// Create a length from centimeters, truncating toward zero.
    #[inline]
    pub fn from_cm(cm: f64) -> Self {
        Self::from_emu(scale_to_emu(cm, EMUS_PER_CM))
    }

    /// Create a length from millimeters, truncating toward zero.
    #[inline]
    pub fn from_mm(mm: f64) -> Self {
        Self::from_emu(scale_to_emu(mm, EMUS_PER_MM))
    }

    /// Create a length from points, truncating toward zero.
    #[inline]
    pub fn from_pt(points: f64) -> Self {
        Self::from_emu(scale_to_emu(points, EMUS_PER_PT))
    }

    /// Create a length from hundredths of a point, truncating toward zero.
    #[inline]
    pub fn from_centipoints(centipoints: f64) -> Self {
        Self::from_emu(scale_to_emu(centipoints, EMUS_PER_CENTIPOINT))
    }

    /// Create a length from twips (1/20 point).
    #[inline]
    pub const fn from_twips(twips: i64) -> Self {
        Self::from_emu(twips.saturating_mul(EMUS_PER_TWIP))
    }

    /// Get the value in EMUs.
    #[inline]
    pub const fn emu(&self) -> i64 {
        self.emu
    }

    /// Convert to inches.
    #[inline]
    pub fn inches(&self) -> f64 {
        self.emu as f64 / EMUS_PER_INCH as f64
    }

    /// Convert to centimeters.
    #[inline]
    pub fn cm(&self) -> f64 {
        self.emu as f64 / EMUS_PER_CM as f64
    }

    /// Convert to millimeters.
    #[inline]
    pub fn mm(&self) -> f64 {
        self.emu as f64 / EMUS_PER_MM as f64
    }

    /// Convert to points (1/72 inch).
    #[inline]
    pub fn pt(&self) -> f64 {
        self.emu as f64 / EMUS_PER_PT as f64
    }

    /// Integer length in hundredths of a point (1/7200 inch).
    ///
    /// Floor division: font sizes are stored in centipoints and must be an
    /// exact integer. `Emu(126)` is zero centipoints, `Emu(-1)` is minus one.
    #[inline]
    pub const fn centipoints(&self) -> i64 {
        self.emu.div_euclid(EMUS_PER_CENTIPOINT)
    }

    /// Convert to twips, rounded to the nearest twip.
    #[inline]
    pub fn twips(&self) -> i64 {
        (self.emu as f64 / EMUS_PER_TWIP as f64).round() as i64
    }

    /// Floating point value of this length in `unit`.
    ///
    /// Unlike [`Length::centipoints`] this does not floor.
    #[inline]
    pub fn to_unit(&self, unit: LengthUnit) -> f64 {
        self.emu as f64 / unit.emus_per_unit() as f64
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}\"", self.inches())
    }
}

impl FromStr for Length {
    type Err = crate::Error;

    /// Parse length from string (e.g., "1.5in", "10pt", "2.54 cm").
    ///
    /// A bare number is taken as EMU.
    ///
    /// # Examples
    ///
    /// ```
    /// use pptx_util::common::{Inches, Length};
    ///
    /// let length = "1.5in".parse::<Length>().unwrap();
    /// assert_eq!(length, Inches(1.5).into());
    ///
    /// let length = "12700".parse::<Length>().unwrap();
    /// assert_eq!(length.pt(), 1.0);
    /// ```
    fn from_str(s: &str) -> crate::Result<Self> {
        let s = s.trim();
        let mut seen_dot = false;
        let split = s
            .char_indices()
            .find(|&(i, c)| {
                let numeric =
                    c.is_ascii_digit() || (c == '.' && !seen_dot) || (c == '-' && i == 0);
                if c == '.' {
                    seen_dot = true;
                }
                !numeric
            })
            .map_or(s.len(), |(i, _)| i);
        // Whitespace is only allowed between the number and the unit
        let (digits, non_digits) = (&s[..split], s[split..].trim_start());

        if digits.is_empty() || digits == "-" {
            return Err(crate::Error::ParseError(format!(
                "No numeric value found in '{}'",
                s
            )));
        }

        let value: f64 = fast_float2::parse(digits).map_err(|_| {
            crate::Error::ParseError(format!("Failed to parse numeric value from '{}'", s))
        })?;

        let unit = if non_digits.is_empty() {
            LengthUnit::Emu
        } else {
            non_digits.parse::<LengthUnit>()?
        };

        Ok(Self::from_emu(scale_to_emu(value, unit.emus_per_unit())))
    }
}

impl From<i64> for Length {
    #[inline]
    fn from(emu: i64) -> Self {
        Self::from_emu(emu)
    }
}

impl From<Length> for i64 {
    #[inline]
    fn from(length: Length) -> Self {
        length.emu
    }
}

impl Add for Length {
    type Output = Length;

    #[inline]
    fn add(self, rhs: Length) -> Length {
        Length::from_emu(self.emu.saturating_add(rhs.emu))
    }
}

impl Sub for Length {
    type Output = Length;

    #[inline]
    fn sub(self, rhs: Length) -> Length {
        Length::from_emu(self.emu.saturating_sub(rhs.emu))
    }
}

impl Neg for Length {
    type Output = Length;

    #[inline]
    fn neg(self) -> Length {
        Length::from_emu(self.emu.saturating_neg())
    }
}

impl Mul<i64> for Length {
    type Output = Length;

    #[inline]
    fn mul(self, rhs: i64) -> Length {
        Length::from_emu(self.emu.saturating_mul(rhs))
    }
}

impl Div<i64> for Length {
    type Output = Length;

    /// Truncating integer division, saturating on `i64::MIN / -1`.
    /// Panics if `rhs` is zero.
    #[inline]
    fn div(self, rhs: i64) -> Length {
        Length::from_emu(self.emu.saturating_div(rhs))
    }
}

impl Sum for Length {
    fn sum<I: Iterator<Item = Length>>(iter: I) -> Length {
        iter.fold(Length::ZERO, Add::add)
    }
}

macro_rules! length_constructor {
    ($(#[$doc:meta])* $name:ident($ty:ty) => $ctor:path) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(pub $ty);

        impl From<$name> for Length {
            #[inline]
            fn from(value: $name) -> Length {
                $ctor(value.0)
            }
        }

        impl $name {
            /// The EMU length this constructor produces.
            #[inline]
            pub fn length(self) -> Length {
                Length::from(self)
            }
        }
    };
}

length_constructor! {
    /// Length given in inches.
    Inches(f64) => Length::from_inches
}

length_constructor! {
    /// Length given in hundredths of a point.
    Centipoints(f64) => Length::from_centipoints
}

length_constructor! {
    /// Length given in centimeters.
    Cm(f64) => Length::from_cm
}

length_constructor! {
    /// Length given directly in English Metric Units.
    Emu(i64) => Length::from_emu
}

length_constructor! {
    /// Length given in millimeters.
    Mm(f64) => Length::from_mm
}

length_constructor! {
    /// Length given in points.
    Pt(f64) => Length::from_pt
}
