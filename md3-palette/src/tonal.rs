//! Tonal palettes: the seed-to-ramp collaborator schemes are built from.
//!
//! The perceptual math lives in `material-color-utilities`; this module only
//! adapts it to the [`TonalPaletteProvider`] contract the scheme builder
//! consumes, so tests and callers can substitute their own ramps.

use std::{fmt, sync::Arc};

use material_color_utilities::palettes::TonalPalette as HctTonalPalette;
use tracing::trace;

use crate::color::Argb;

/// Highest tone of a ramp (white). Tone `0` is black.
pub const MAX_TONE: u8 = 100;

/// A ramp of colors derived from one seed, indexed by tone.
///
/// Implementations must be deterministic: the same tone always yields the
/// same color.
pub trait TonalPaletteProvider: fmt::Debug + Send + Sync {
    /// Color at `tone`, where `0` is black and [`MAX_TONE`] is white.
    fn tone(&self, tone: u8) -> Argb;

    /// The canonical color the ramp was derived from.
    fn key_color(&self) -> Argb;
}

/// A palette shared between schemes and the preset catalog.
pub type SharedPalette = Arc<dyn TonalPaletteProvider>;

/// HCT tonal palette built from a single seed color.
///
/// All 101 tones are computed up front, so lookups are plain array reads and
/// the palette can be shared across threads.
pub struct TonalPalette {
    seed: Argb,
    tones: [Argb; MAX_TONE as usize + 1],
}

impl TonalPalette {
    /// Builds the ramp for `seed`. The seed's alpha channel does not affect
    /// the tones.
    pub fn from_argb(seed: Argb) -> Self {
        let palette = HctTonalPalette::from_int(seed.0);
        let mut tones = [Argb::BLACK; MAX_TONE as usize + 1];
        for tone in 0..=MAX_TONE {
            tones[usize::from(tone)] = Argb(palette.tone(tone));
        }
        Self { seed, tones }
    }

    /// Wraps the palette for sharing across schemes.
    pub fn shared(seed: Argb) -> SharedPalette {
        Arc::new(Self::from_argb(seed))
    }

    /// The seed exactly as given, alpha included.
    pub fn seed(&self) -> Argb {
        self.seed
    }
}

impl fmt::Debug for TonalPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TonalPalette")
            .field("seed", &self.seed)
            .finish()
    }
}

impl TonalPaletteProvider for TonalPalette {
    /// Tones above [`MAX_TONE`] are clamped to white.
    fn tone(&self, tone: u8) -> Argb {
        let clamped = tone.min(MAX_TONE);
        if clamped != tone {
            trace!(
                "Tone {tone} out of range for palette {}; clamped to {MAX_TONE}",
                self.seed
            );
        }
        self.tones[usize::from(clamped)]
    }

    /// The seed, forced opaque.
    fn key_color(&self) -> Argb {
        Argb(self.seed.0 | 0xFF00_0000)
    }
}

impl From<Argb> for TonalPalette {
    fn from(seed: Argb) -> Self {
        Self::from_argb(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extreme_tones_are_black_and_white() {
        let palette = TonalPalette::from_argb(Argb(0xFF6750A4));
        assert_eq!(palette.tone(0), Argb::BLACK);
        assert_eq!(palette.tone(MAX_TONE), Argb::WHITE);
    }

    #[test]
    fn test_tones_are_deterministic() {
        let a = TonalPalette::from_argb(Argb(0xFF00BCD4));
        let b = TonalPalette::from_argb(Argb(0xFF00BCD4));
        for tone in 0..=MAX_TONE {
            assert_eq!(a.tone(tone), b.tone(tone));
            assert_eq!(a.tone(tone), a.tone(tone));
        }
    }

    #[test]
    fn test_out_of_range_tone_clamps_to_white() {
        let palette = TonalPalette::from_argb(Argb(0xFFB3261E));
        assert_eq!(palette.tone(101), palette.tone(MAX_TONE));
        assert_eq!(palette.tone(u8::MAX), Argb::WHITE);
    }

    #[test]
    fn test_key_color_is_seed() {
        let palette = TonalPalette::shared(Argb(0xFF7D5260));
        assert_eq!(palette.key_color(), Argb(0xFF7D5260));
    }

    #[test]
    fn test_key_color_ignores_seed_alpha() {
        let palette = TonalPalette::from_argb(Argb(0x007D5260));
        assert_eq!(palette.seed(), Argb(0x007D5260));
        assert_eq!(palette.key_color(), Argb(0xFF7D5260));
        let opaque = TonalPalette::from_argb(Argb(0xFF7D5260));
        for tone in 0..=MAX_TONE {
            assert_eq!(palette.tone(tone), opaque.tone(tone));
        }
    }

    #[test]
    fn test_tones_are_opaque() {
        let palette = TonalPalette::from_argb(Argb(0xFF79747E));
        for tone in (0..=MAX_TONE).step_by(5) {
            assert_eq!(palette.tone(tone).alpha(), 0xFF, "tone {tone}");
        }
    }
}
