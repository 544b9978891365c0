//! Light/dark scheme pairs with a switchable active mode.

use tracing::debug;

use crate::{
    color::Argb,
    config::SeedColors,
    scheme::{Scheme, SchemeBuilder},
    tonal::SharedPalette,
};

/// A light and a dark [`Scheme`] built from the same seeds.
///
/// Exactly one of the two is active at a time. Switching modes only flips
/// which scheme [`Palette::active`] returns; neither scheme is rebuilt.
///
/// ```
/// use md3_palette::Palette;
///
/// let mut palette = Palette::default();
/// assert!(std::ptr::eq(palette.active(), palette.light()));
///
/// palette.switch_mode(true);
/// assert!(palette.is_dark());
/// assert!(std::ptr::eq(palette.active(), palette.dark()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    light: Scheme,
    dark: Scheme,
    is_dark: bool,
}

impl Palette {
    /// Builds both schemes from five seed colors. The light scheme starts
    /// active.
    pub fn from_seed_colors(
        primary: Argb,
        secondary: Argb,
        tertiary: Argb,
        neutral: Argb,
        neutral_variant: Argb,
    ) -> Self {
        Self::from_seeds(&SeedColors::new(
            primary,
            secondary,
            tertiary,
            neutral,
            neutral_variant,
        ))
    }

    /// Builds both schemes from a seed configuration, including its optional
    /// custom accent.
    pub fn from_seeds(seeds: &SeedColors) -> Self {
        Self::from_builder(&SchemeBuilder::from_seeds(seeds))
    }

    /// Builds both schemes from the same set of palettes.
    pub fn from_builder(builder: &SchemeBuilder) -> Self {
        let palette = Self {
            light: builder.build(false),
            dark: builder.build(true),
            is_dark: false,
        };
        debug!("Palette built; light scheme active");
        palette
    }

    /// Makes the dark scheme active when `is_dark` is true, the light one
    /// otherwise.
    pub fn switch_mode(&mut self, is_dark: bool) {
        if self.is_dark != is_dark {
            debug!("Switching palette to {} mode", if is_dark { "dark" } else { "light" });
        }
        self.is_dark = is_dark;
    }

    /// Applies a custom accent palette to both schemes.
    pub fn with_custom_palette(&mut self, palette: SharedPalette) -> &mut Self {
        self.light.with_custom_tonal_palette(Some(palette.clone()), false);
        self.dark.with_custom_tonal_palette(Some(palette), true);
        self
    }

    /// The scheme for the current mode.
    pub fn active(&self) -> &Scheme {
        if self.is_dark { &self.dark } else { &self.light }
    }

    /// Whether the dark scheme is active.
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// The light scheme, active or not.
    pub fn light(&self) -> &Scheme {
        &self.light
    }

    /// The dark scheme, active or not.
    pub fn dark(&self) -> &Scheme {
        &self.dark
    }

    /// Mutable access for per-role overrides of the light scheme.
    pub fn light_mut(&mut self) -> &mut Scheme {
        &mut self.light
    }

    /// Mutable access for per-role overrides of the dark scheme.
    pub fn dark_mut(&mut self) -> &mut Scheme {
        &mut self.dark
    }
}

/// The Material 3 baseline palette.
impl Default for Palette {
    fn default() -> Self {
        Self::from_seeds(&SeedColors::default())
    }
}

/// Builds the Material 3 baseline palette, seeded from the built-in preset
/// palettes sampled at tone 50.
pub fn default_palette() -> Palette {
    Palette::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::Preset,
        color::Rgba,
        role::ColorRole,
        tonal::{TonalPalette, TonalPaletteProvider},
    };

    #[test]
    fn test_starts_in_light_mode() {
        let palette = default_palette();
        assert!(!palette.is_dark());
        assert!(std::ptr::eq(palette.active(), palette.light()));
        assert!(!palette.light().is_dark);
        assert!(palette.dark().is_dark);
    }

    #[test]
    fn test_switch_round_trip_keeps_identity() {
        let mut palette = default_palette();
        let light: *const Scheme = palette.light();
        let dark: *const Scheme = palette.dark();

        palette.switch_mode(true);
        assert!(palette.is_dark());
        assert!(std::ptr::eq(palette.active(), dark));

        palette.switch_mode(false);
        assert!(!palette.is_dark());
        assert!(std::ptr::eq(palette.active(), light));
    }

    #[test]
    fn test_switch_does_not_rebuild() {
        let mut palette = default_palette();
        palette.light_mut().with_primary(Argb(0xFF010203));
        palette.switch_mode(true);
        palette.switch_mode(false);
        assert_eq!(palette.active().primary, Rgba::new(1, 2, 3, 0xFF));
    }

    #[test]
    fn test_repeated_switch_is_stable() {
        let mut palette = default_palette();
        palette.switch_mode(true);
        palette.switch_mode(true);
        assert!(std::ptr::eq(palette.active(), palette.dark()));
    }

    #[test]
    fn test_from_seed_colors() {
        let seeds = [0xFF6750A4, 0xFF625B71, 0xFF7D5260, 0xFF787579, 0xFF79747E].map(Argb);
        let palette = Palette::from_seed_colors(seeds[0], seeds[1], seeds[2], seeds[3], seeds[4]);
        let primary = TonalPalette::from_argb(seeds[0]);
        let neutral = TonalPalette::from_argb(seeds[3]);

        assert_eq!(palette.light().primary, primary.tone(40).to_rgba());
        assert_eq!(palette.dark().primary, primary.tone(80).to_rgba());
        assert_eq!(palette.light().surface, neutral.tone(98).to_rgba());
        assert_eq!(palette.dark().surface, neutral.tone(6).to_rgba());

        let error = Preset::Error.palette();
        assert_eq!(palette.light().error, error.tone(40).to_rgba());
        assert_eq!(palette.dark().error, error.tone(80).to_rgba());
    }

    #[test]
    fn test_default_palette_uses_baseline_seeds() {
        let palette = default_palette();
        let expected = Palette::from_seed_colors(
            Preset::Primary.seed_tone(),
            Preset::Secondary.seed_tone(),
            Preset::Tertiary.seed_tone(),
            Preset::Neutral.seed_tone(),
            Preset::NeutralVariant.seed_tone(),
        );
        assert_eq!(palette, expected);
    }

    #[test]
    fn test_every_non_custom_role_is_opaque() {
        let palette = default_palette();
        for scheme in [palette.light(), palette.dark()] {
            for role in ColorRole::ALL.iter().filter(|r| !r.is_custom()) {
                assert_eq!(scheme.get(*role).a, 0xFF, "{role}");
            }
        }
    }

    #[test]
    fn test_every_preset_seed_yields_opaque_roles() {
        let seeds = Preset::ALL
            .iter()
            .map(|preset| preset.seed())
            .chain([Argb(0x006750A4)]);
        for seed in seeds {
            let palette = Palette::from_seed_colors(seed, seed, seed, seed, seed);
            for scheme in [palette.light(), palette.dark()] {
                for role in ColorRole::ALL.iter().filter(|r| !r.is_custom()) {
                    assert_eq!(scheme.get(*role).a, 0xFF, "{role} for seed {seed}");
                }
                for role in ColorRole::ALL.iter().filter(|r| r.is_custom()) {
                    assert_eq!(scheme.get(*role), Rgba::TRANSPARENT, "{role} for seed {seed}");
                }
            }
        }
    }

    #[test]
    fn test_custom_palette_applies_to_both_modes() {
        let mut palette = default_palette();
        let accent = Preset::Amber.palette();
        palette.with_custom_palette(accent.clone());

        assert_eq!(palette.light().custom, accent.tone(40).to_rgba());
        assert_eq!(palette.dark().custom, accent.tone(80).to_rgba());
        assert_eq!(palette.light().custom_tone, palette.dark().custom_tone);
    }

    #[test]
    fn test_custom_seed_from_config() {
        let seeds = SeedColors::default().with_custom(Preset::Cyan.seed());
        let palette = Palette::from_seeds(&seeds);
        let cyan = Preset::Cyan.palette();
        assert_eq!(palette.light().on_custom_container, cyan.tone(10).to_rgba());
        assert_eq!(palette.dark().on_custom_container, cyan.tone(90).to_rgba());
    }
}
