//! Built-in tonal palettes.
//!
//! The Material 2 hue set plus the six Material 3 baseline palettes. Each
//! palette is built once per process and shared by every scheme that asks
//! for it.

use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::{
    color::Argb,
    tonal::{SharedPalette, TonalPalette},
};

/// Tone at which presets are sampled to obtain a seed color.
pub const SEED_TONE: u8 = 50;

/// Number of Material 2 hues at the head of [`Preset::ALL`].
pub const HUE_COUNT: usize = 19;

/// A named preset palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Material 2 red.
    Red,
    /// Material 2 pink.
    Pink,
    /// Material 2 purple.
    Purple,
    /// Material 2 deep purple.
    DeepPurple,
    /// Material 2 indigo.
    Indigo,
    /// Material 2 blue.
    Blue,
    /// Material 2 light blue.
    LightBlue,
    /// Material 2 cyan.
    Cyan,
    /// Material 2 teal.
    Teal,
    /// Material 2 green.
    Green,
    /// Material 2 light green.
    LightGreen,
    /// Material 2 lime.
    Lime,
    /// Material 2 yellow.
    Yellow,
    /// Material 2 amber.
    Amber,
    /// Material 2 orange.
    Orange,
    /// Material 2 deep orange.
    DeepOrange,
    /// Material 2 brown.
    Brown,
    /// Material 2 grey.
    Grey,
    /// Material 2 blue grey.
    BlueGrey,
    /// Material 3 baseline primary.
    Primary,
    /// Material 3 baseline secondary.
    Secondary,
    /// Material 3 baseline tertiary.
    Tertiary,
    /// Material 3 baseline error.
    Error,
    /// Material 3 baseline neutral.
    Neutral,
    /// Material 3 baseline neutral variant.
    NeutralVariant,
}

impl Preset {
    /// Every preset, in catalog order.
    pub const ALL: [Preset; 25] = [
        Preset::Red,
        Preset::Pink,
        Preset::Purple,
        Preset::DeepPurple,
        Preset::Indigo,
        Preset::Blue,
        Preset::LightBlue,
        Preset::Cyan,
        Preset::Teal,
        Preset::Green,
        Preset::LightGreen,
        Preset::Lime,
        Preset::Yellow,
        Preset::Amber,
        Preset::Orange,
        Preset::DeepOrange,
        Preset::Brown,
        Preset::Grey,
        Preset::BlueGrey,
        Preset::Primary,
        Preset::Secondary,
        Preset::Tertiary,
        Preset::Error,
        Preset::Neutral,
        Preset::NeutralVariant,
    ];

    /// The Material 2 hues, excluding the Material 3 baselines.
    pub fn hues() -> &'static [Preset] {
        &Self::ALL[..HUE_COUNT]
    }

    /// The seed the preset palette is derived from.
    pub const fn seed(self) -> Argb {
        Argb(match self {
            Preset::Red => 0xFFF44336,
            Preset::Pink => 0xFFE91E63,
            Preset::Purple => 0xFF9C27B0,
            Preset::DeepPurple => 0xFF673AB7,
            Preset::Indigo => 0xFF3F51B5,
            Preset::Blue => 0xFF2196F3,
            Preset::LightBlue => 0xFF03A9F4,
            Preset::Cyan => 0xFF00BCD4,
            Preset::Teal => 0xFF009688,
            Preset::Green => 0xFF4CAF50,
            Preset::LightGreen => 0xFF8BC34A,
            Preset::Lime => 0xFFCDDC39,
            Preset::Yellow => 0xFFFFEB3B,
            Preset::Amber => 0xFFFFC107,
            Preset::Orange => 0xFFFF9800,
            Preset::DeepOrange => 0xFFFF5722,
            Preset::Brown => 0xFF795548,
            Preset::Grey => 0xFF9E9E9E,
            Preset::BlueGrey => 0xFF607D8B,
            Preset::Primary => 0xFF6750A4,
            Preset::Secondary => 0xFF625B71,
            Preset::Tertiary => 0xFF7D5260,
            Preset::Error => 0xFFB3261E,
            Preset::Neutral => 0xFF787579,
            Preset::NeutralVariant => 0xFF79747E,
        })
    }

    /// The shared palette for this preset.
    pub fn palette(self) -> SharedPalette {
        Arc::clone(&catalog()[self as usize])
    }

    /// The preset palette sampled at [`SEED_TONE`].
    pub fn seed_tone(self) -> Argb {
        self.palette().tone(SEED_TONE)
    }
}

fn catalog() -> &'static [SharedPalette] {
    static CATALOG: OnceLock<Vec<SharedPalette>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        debug!("Building preset palette catalog ({} palettes)", Preset::ALL.len());
        Preset::ALL
            .iter()
            .map(|preset| TonalPalette::shared(preset.seed()))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_discriminants() {
        for (index, preset) in Preset::ALL.iter().enumerate() {
            assert_eq!(*preset as usize, index);
        }
    }

    #[test]
    fn test_palette_is_shared() {
        let a = Preset::Teal.palette();
        let b = Preset::Teal.palette();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.key_color(), Preset::Teal.seed());
    }

    #[test]
    fn test_hues_exclude_baselines() {
        let hues = Preset::hues();
        assert_eq!(hues.len(), HUE_COUNT);
        assert_eq!(Preset::ALL[HUE_COUNT], Preset::Primary);
        assert_eq!(hues.first(), Some(&Preset::Red));
        assert_eq!(hues.last(), Some(&Preset::BlueGrey));
        assert!(!hues.contains(&Preset::Primary));
    }

    #[test]
    fn test_seeds_are_distinct() {
        for (i, a) in Preset::ALL.iter().enumerate() {
            for b in &Preset::ALL[i + 1..] {
                assert_ne!(a.seed(), b.seed(), "{a:?} and {b:?} share a seed");
            }
        }
    }

    #[test]
    fn test_seed_tone_samples_palette() {
        let preset = Preset::Primary;
        assert_eq!(preset.seed_tone(), preset.palette().tone(SEED_TONE));
    }
}
