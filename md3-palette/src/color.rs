//! Packed ARGB seeds and 8-bit RGBA scheme colors.
//!
//! Seeds enter the crate as [`Argb`] values (`0xAARRGGBB`); every scheme
//! field is stored as an [`Rgba`] with one byte per channel, ready to be
//! uploaded by a renderer.

use std::{fmt, str::FromStr};

use bytemuck::{Pod, Zeroable};

use crate::error::{Error, Result};

/// A color packed as `0xAARRGGBB`.
///
/// ```
/// use md3_palette::Argb;
///
/// let seed: Argb = "#6750A4".parse()?;
/// assert_eq!(seed, Argb(0xFF6750A4));
/// assert_eq!(seed.to_string(), "#FF6750A4");
/// # Ok::<(), md3_palette::Error>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black.
    pub const BLACK: Argb = Argb(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    /// Creates an opaque color from its red, green and blue channels.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Alpha channel, `0xFF` is opaque.
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Unpacks into per-channel form.
    #[inline]
    pub const fn to_rgba(self) -> Rgba {
        Rgba::new(self.red(), self.green(), self.blue(), self.alpha())
    }
}

impl From<u32> for Argb {
    #[inline]
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<Argb> for u32 {
    #[inline]
    fn from(argb: Argb) -> Self {
        argb.0
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Accepts `RRGGBB` or `AARRGGBB`, optionally prefixed by `#` or `0x`.
/// Six-digit input is treated as opaque.
impl FromStr for Argb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        let invalid = || Error::InvalidHex {
            input: s.to_string(),
        };

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        match digits.len() {
            6 => Ok(Argb(0xFF00_0000 | value)),
            8 => Ok(Argb(value)),
            _ => Err(invalid()),
        }
    }
}

/// A non-premultiplied color with 8-bit channels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, `255` is opaque.
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    /// Creates a color from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packs back into `0xAARRGGBB`.
    #[inline]
    pub const fn to_argb(self) -> Argb {
        Argb((self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32)
    }

    /// Returns the channels normalized to `[0.0, 1.0]` in `r, g, b, a` order.
    #[inline]
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl From<Argb> for Rgba {
    #[inline]
    fn from(argb: Argb) -> Self {
        argb.to_rgba()
    }
}

impl From<Rgba> for Argb {
    #[inline]
    fn from(rgba: Rgba) -> Self {
        rgba.to_argb()
    }
}

impl From<[u8; 4]> for Rgba {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba> for [u8; 4] {
    #[inline]
    fn from(color: Rgba) -> Self {
        [color.r, color.g, color.b, color.a]
    }
}

impl From<Rgba> for [f32; 4] {
    #[inline]
    fn from(color: Rgba) -> Self {
        color.to_f32_array()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_argb(), f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Argb {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Argb {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.to_argb(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Argb as serde::Deserialize<'de>>::deserialize(deserializer).map(Rgba::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_channels() {
        let color = Argb(0x80_6750A4).to_rgba();
        assert_eq!(color, Rgba::new(0x67, 0x50, 0xA4, 0x80));
        assert_eq!(color.to_argb(), Argb(0x80_6750A4));
    }

    #[test]
    fn test_from_rgb_is_opaque() {
        assert_eq!(Argb::from_rgb(0x12, 0x34, 0x56), Argb(0xFF12_3456));
        assert_eq!(Argb::from_rgb(0, 0, 0), Argb::BLACK);
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!("#6750A4".parse::<Argb>(), Ok(Argb(0xFF6750A4)));
        assert_eq!("6750a4".parse::<Argb>(), Ok(Argb(0xFF6750A4)));
        assert_eq!("#806750A4".parse::<Argb>(), Ok(Argb(0x806750A4)));
        assert_eq!("0xFFB3261E".parse::<Argb>(), Ok(Argb(0xFFB3261E)));
        assert_eq!(" #FFFFFF ".parse::<Argb>(), Ok(Argb::WHITE));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "#", "#12345", "#1234567", "#GGGGGG", "+12345", "#FF6750A4FF"] {
            assert_eq!(
                input.parse::<Argb>(),
                Err(Error::InvalidHex {
                    input: input.to_string()
                }),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let seed = Argb(0x1A2B3C4D);
        assert_eq!(seed.to_string(), "#1A2B3C4D");
        assert_eq!(seed.to_string().parse::<Argb>(), Ok(seed));
    }

    #[test]
    fn test_normalized_channels() {
        assert_eq!(Rgba::WHITE.to_f32_array(), [1.0; 4]);
        assert_eq!(<[f32; 4]>::from(Rgba::TRANSPARENT), [0.0; 4]);
    }

    #[test]
    fn test_rgba_is_pod() {
        let colors = [Rgba::new(1, 2, 3, 4), Rgba::new(5, 6, 7, 8)];
        let bytes: &[u8] = bytemuck::cast_slice(&colors);
        assert_eq!(bytes, &[1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
