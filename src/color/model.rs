use std::fmt;

use crate::color::convert::{hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
use crate::error::{Component, RangeError};

/// Derived HSL view of a [`Color`].
///
/// `h` is in whole degrees, `s` and `l` are in `0.0..=1.0` rounded to two decimals.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub h: u16,
    pub s: f64,
    pub l: f64,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.h,
            (self.s * 100.0).round(),
            (self.l * 100.0).round()
        )
    }
}

/// An 8-bit RGB color.
///
/// Channels are always integers in `0..=255`. HSL and hex views are derived from
/// the channels on every call and never cached, so a channel set through
/// [`Color::set_r`] and friends is reflected immediately.
///
/// Setters take `&mut self`; sharing a color between threads for mutation needs
/// external synchronization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

// opaque white, matching the defaults of `Color::rgb` and `Color::hsl`
impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Validate an 8-bit channel given as a float, rounding to the nearest integer.
#[inline]
fn channel(component: Component, value: f64) -> Result<u8, RangeError> {
    let v = RangeError::check(component, value, 0.0, 255.0)?;
    Ok(v.round() as u8)
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// HSL inputs that produce the default color (hue 360°, saturation 1, lightness 1).
    pub const DEFAULT_HSL: (f64, f64, f64) = (360.0, 1.0, 1.0);

    #[must_use]
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from channel values in `0.0..=255.0`.
    ///
    /// Each value is rounded to the nearest integer. Fails on the first channel
    /// outside the range, naming it.
    pub fn try_rgb(r: f64, g: f64, b: f64) -> Result<Self, RangeError> {
        Ok(Self {
            r: channel(Component::Red, r)?,
            g: channel(Component::Green, g)?,
            b: channel(Component::Blue, b)?,
        })
    }

    /// Build a color from hue in degrees and saturation/lightness in `0.0..=1.0`.
    ///
    /// Hue wraps with a positive modulus, so `-170.0` means `190.0`.
    /// Saturation and lightness outside their range are rejected.
    pub fn hsl(h: f64, s: f64, l: f64) -> Result<Self, RangeError> {
        if !h.is_finite() {
            return Err(RangeError::new(Component::Hue, h, 0.0, 360.0));
        }
        let s = RangeError::check(Component::Saturation, s, 0.0, 1.0)?;
        let l = RangeError::check(Component::Lightness, l, 0.0, 1.0)?;

        let [r, g, b] = hsl_to_rgb(h.rem_euclid(360.0), s, l);
        Self::try_rgb(r, g, b)
    }

    /// Build a color from a 6-digit or 3-digit hex code.
    ///
    /// Any non-hex character (such as a leading `#`) is ignored.
    pub fn hex(hex: &str) -> Result<Self, crate::error::ParseError> {
        crate::color::parse::parse_hex(hex)
    }

    /// Parse `rgb(r,g,b)`, `hsl(h,s%,l%)` or a hex code.
    pub fn parse(text: &str) -> Result<Self, crate::error::ColorError> {
        crate::color::parse::parse_color(text)
    }

    #[must_use]
    #[inline]
    pub fn r(self) -> u8 {
        self.r
    }

    #[must_use]
    #[inline]
    pub fn g(self) -> u8 {
        self.g
    }

    #[must_use]
    #[inline]
    pub fn b(self) -> u8 {
        self.b
    }

    pub fn set_r(&mut self, value: f64) -> Result<(), RangeError> {
        self.r = channel(Component::Red, value)?;
        Ok(())
    }

    pub fn set_g(&mut self, value: f64) -> Result<(), RangeError> {
        self.g = channel(Component::Green, value)?;
        Ok(())
    }

    pub fn set_b(&mut self, value: f64) -> Result<(), RangeError> {
        self.b = channel(Component::Blue, value)?;
        Ok(())
    }

    #[must_use]
    #[inline]
    pub fn into_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    #[must_use]
    #[inline]
    pub fn into_hsl(self) -> Hsl {
        rgb_to_hsl(self.into_rgb())
    }

    /// Hue in whole degrees.
    #[must_use]
    #[inline]
    pub fn h(self) -> u16 {
        self.into_hsl().h
    }

    /// Saturation, rounded to two decimals.
    #[must_use]
    #[inline]
    pub fn s(self) -> f64 {
        self.into_hsl().s
    }

    /// Lightness, rounded to two decimals.
    #[must_use]
    #[inline]
    pub fn l(self) -> f64 {
        self.into_hsl().l
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    #[inline]
    pub fn into_hex(self) -> String {
        rgb_to_hex(self.into_rgb())
    }

    /// Euclidean distance between the two RGB triples.
    #[must_use]
    #[inline]
    pub fn distance(self, other: Color) -> f64 {
        let d = |a: u8, b: u8| f64::from(a) - f64::from(b);
        let (dr, dg, db) = (d(self.r, other.r), d(self.g, other.g), d(self.b, other.b));
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.into_rgb()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.into_hex())
    }
}
