//! Material 3 color schemes assembled from tonal palettes.
//!
//! A [`Scheme`] is filled by reading fixed tones from one palette per role
//! family. The tone table is the Material 3 baseline: accents use tone 40 for
//! the base role in light mode and tone 80 in dark mode, surfaces sit near
//! the white end of the neutral ramp in light mode and near the black end in
//! dark mode.
//!
//! ```
//! use md3_palette::{Argb, SchemeBuilder, SeedColors};
//!
//! let seeds = SeedColors {
//!     primary: Argb(0xFF6750A4),
//!     ..SeedColors::default()
//! };
//! let mut scheme = SchemeBuilder::from_seeds(&seeds).build(false);
//! scheme.with_primary(Argb(0xFF00FF00));
//! assert_eq!(scheme.primary.g, 0xFF);
//! ```

use tracing::debug;

use crate::{
    catalog::Preset,
    color::Rgba,
    config::SeedColors,
    role::ColorRole,
    tonal::{SharedPalette, TonalPalette, TonalPaletteProvider},
};

/// Tone sampled for the mode-independent `*_tone` preview fields.
pub const MID_TONE: u8 = 50;

/// Tones of an accent family: base, on-base, container, on-container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentTones {
    /// Tone of the family's base role, e.g. `primary`.
    pub base: u8,
    /// Tone of content on the base role.
    pub on_base: u8,
    /// Tone of the container role.
    pub container: u8,
    /// Tone of content on the container role.
    pub on_container: u8,
}

impl AccentTones {
    /// Accent tones of a light scheme.
    pub const LIGHT: AccentTones = AccentTones {
        base: 40,
        on_base: 100,
        container: 90,
        on_container: 10,
    };
    /// Accent tones of a dark scheme.
    pub const DARK: AccentTones = AccentTones {
        base: 80,
        on_base: 20,
        container: 30,
        on_container: 90,
    };

    /// The accent tones for a light or dark scheme.
    pub const fn for_mode(is_dark: bool) -> &'static AccentTones {
        if is_dark { &Self::DARK } else { &Self::LIGHT }
    }
}

/// Tone of `inverse-primary`, which mirrors the base tone of the other mode.
pub const fn inverse_primary_tone(is_dark: bool) -> u8 {
    AccentTones::for_mode(!is_dark).base
}

/// Tones read from the neutral palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeutralTones {
    /// Tone of `surface`.
    pub surface: u8,
    /// Tone of `surface-dim`.
    pub surface_dim: u8,
    /// Tone of `surface-bright`.
    pub surface_bright: u8,
    /// Tone of `surface-container-lowest`.
    pub surface_container_lowest: u8,
    /// Tone of `surface-container-low`.
    pub surface_container_low: u8,
    /// Tone of `surface-container`.
    pub surface_container: u8,
    /// Tone of `surface-container-high`.
    pub surface_container_high: u8,
    /// Tone of `surface-container-highest`.
    pub surface_container_highest: u8,
    /// Tone of `on-surface`.
    pub on_surface: u8,
    /// Tone of `inverse-surface`.
    pub inverse_surface: u8,
    /// Tone of `inverse-on-surface`.
    pub inverse_on_surface: u8,
    /// Tone of `background`.
    pub background: u8,
    /// Tone of `on-background`.
    pub on_background: u8,
    /// Tone of `shadow`.
    pub shadow: u8,
    /// Tone of `scrim`.
    pub scrim: u8,
}

impl NeutralTones {
    /// Neutral tones of a light scheme.
    pub const LIGHT: NeutralTones = NeutralTones {
        surface: 98,
        surface_dim: 87,
        surface_bright: 98,
        surface_container_lowest: 100,
        surface_container_low: 96,
        surface_container: 94,
        surface_container_high: 92,
        surface_container_highest: 90,
        on_surface: 0,
        inverse_surface: 20,
        inverse_on_surface: 95,
        background: 98,
        on_background: 0,
        shadow: 0,
        scrim: 0,
    };
    /// Neutral tones of a dark scheme.
    pub const DARK: NeutralTones = NeutralTones {
        surface: 6,
        surface_dim: 6,
        surface_bright: 24,
        surface_container_lowest: 4,
        surface_container_low: 10,
        surface_container: 12,
        surface_container_high: 17,
        surface_container_highest: 22,
        on_surface: 90,
        inverse_surface: 90,
        inverse_on_surface: 20,
        background: 6,
        on_background: 90,
        shadow: 0,
        scrim: 0,
    };

    /// The neutral tones for a light or dark scheme.
    pub const fn for_mode(is_dark: bool) -> &'static NeutralTones {
        if is_dark { &Self::DARK } else { &Self::LIGHT }
    }
}

/// Tones read from the neutral-variant palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeutralVariantTones {
    /// Tone of `surface-variant`.
    pub surface_variant: u8,
    /// Tone of `on-surface-variant`.
    pub on_surface_variant: u8,
    /// Tone of `outline`.
    pub outline: u8,
    /// Tone of `outline-variant`.
    pub outline_variant: u8,
}

impl NeutralVariantTones {
    /// Neutral-variant tones of a light scheme.
    pub const LIGHT: NeutralVariantTones = NeutralVariantTones {
        surface_variant: 90,
        on_surface_variant: 30,
        outline: 50,
        outline_variant: 80,
    };
    /// Neutral-variant tones of a dark scheme.
    pub const DARK: NeutralVariantTones = NeutralVariantTones {
        surface_variant: 30,
        on_surface_variant: 80,
        outline: 60,
        outline_variant: 30,
    };

    /// The neutral-variant tones for a light or dark scheme.
    pub const fn for_mode(is_dark: bool) -> &'static NeutralVariantTones {
        if is_dark { &Self::DARK } else { &Self::LIGHT }
    }
}

/// Colors of one accent family, sampled from its palette.
struct AccentColors {
    base: Rgba,
    on_base: Rgba,
    container: Rgba,
    on_container: Rgba,
    mid: Rgba,
}

impl AccentColors {
    fn sample(palette: &dyn TonalPaletteProvider, is_dark: bool) -> Self {
        let tones = AccentTones::for_mode(is_dark);
        Self {
            base: tone(palette, tones.base),
            on_base: tone(palette, tones.on_base),
            container: tone(palette, tones.container),
            on_container: tone(palette, tones.on_container),
            mid: tone(palette, MID_TONE),
        }
    }
}

fn tone(palette: &dyn TonalPaletteProvider, tone: u8) -> Rgba {
    palette.tone(tone).to_rgba()
}

/// The palettes a scheme was derived from, kept for later re-derivation.
///
/// A slot is `None` until the matching family setter has run.
#[derive(Debug, Clone, Default)]
pub struct SchemePalettes {
    /// Source of the primary family.
    pub primary: Option<SharedPalette>,
    /// Source of the secondary family.
    pub secondary: Option<SharedPalette>,
    /// Source of the tertiary family.
    pub tertiary: Option<SharedPalette>,
    /// Source of the custom accent family, if any.
    pub custom: Option<SharedPalette>,
    /// Source of the surface and background roles.
    pub neutral: Option<SharedPalette>,
    /// Source of the surface-variant and outline roles.
    pub neutral_variant: Option<SharedPalette>,
    /// Source of the error family.
    pub error: Option<SharedPalette>,
}

/// A full set of Material 3 color roles for one display mode.
///
/// Schemes come out of [`SchemeBuilder::build`] with every role assigned.
/// The custom accent roles stay transparent unless a custom palette was
/// supplied. Fields can be adjusted afterwards either per family
/// (`with_*_tonal_palette`) or per role (`with_<role>`, [`Scheme::set`]).
#[derive(Clone, Debug)]
pub struct Scheme {
    /// The mode the scheme was built for: dark (`true`) or light (`false`).
    ///
    /// Family setters take their own `is_dark` argument and never change
    /// this flag, so a scheme re-derived with the other mode's tones still
    /// reports the mode it was built in.
    pub is_dark: bool,

    /// Key color for prominent components such as FABs and filled buttons.
    pub primary: Rgba,
    /// Color used for content on top of `primary`.
    pub on_primary: Rgba,
    /// A container color for `primary`.
    pub primary_container: Rgba,
    /// Color used for content on top of `primary_container`.
    pub on_primary_container: Rgba,
    /// `primary` as it appears on an `inverse_surface`.
    pub inverse_primary: Rgba,

    /// Less prominent accent, e.g. filter chips.
    pub secondary: Rgba,
    /// Color used for content on top of `secondary`.
    pub on_secondary: Rgba,
    /// A container color for `secondary`.
    pub secondary_container: Rgba,
    /// Color used for content on top of `secondary_container`.
    pub on_secondary_container: Rgba,

    /// Contrasting accent used to balance primary and secondary.
    pub tertiary: Rgba,
    /// Color used for content on top of `tertiary`.
    pub on_tertiary: Rgba,
    /// A container color for `tertiary`.
    pub tertiary_container: Rgba,
    /// Color used for content on top of `tertiary_container`.
    pub on_tertiary_container: Rgba,

    /// Optional application-defined accent.
    pub custom: Rgba,
    /// Color used for content on top of `custom`.
    pub on_custom: Rgba,
    /// A container color for `custom`.
    pub custom_container: Rgba,
    /// Color used for content on top of `custom_container`.
    pub on_custom_container: Rgba,

    /// Indicates errors, e.g. invalid text field input.
    pub error: Rgba,
    /// Color used for content on top of `error`.
    pub on_error: Rgba,
    /// A container color for `error`.
    pub error_container: Rgba,
    /// Color used for content on top of `error_container`.
    pub on_error_container: Rgba,

    /// The default surface color.
    pub surface: Rgba,
    /// Dimmest surface in either mode.
    pub surface_dim: Rgba,
    /// Brightest surface in either mode.
    pub surface_bright: Rgba,
    /// Lowest-emphasis surface container.
    pub surface_container_lowest: Rgba,
    /// Low-emphasis surface container.
    pub surface_container_low: Rgba,
    /// Default surface container, e.g. navigation bars.
    pub surface_container: Rgba,
    /// High-emphasis surface container.
    pub surface_container_high: Rgba,
    /// Highest-emphasis surface container.
    pub surface_container_highest: Rgba,
    /// Alternative surface for differentiated content.
    pub surface_variant: Rgba,
    /// Color used for content on top of any surface.
    pub on_surface: Rgba,
    /// Medium-emphasis content on top of `surface_variant`.
    pub on_surface_variant: Rgba,
    /// Surface contrasting with `surface`, e.g. snackbars.
    pub inverse_surface: Rgba,
    /// Color used for content on top of `inverse_surface`.
    pub inverse_on_surface: Rgba,

    /// The app background behind scrollable content.
    pub background: Rgba,
    /// Color used for content on top of `background`.
    pub on_background: Rgba,

    /// Borders and dividers with contrast requirements.
    pub outline: Rgba,
    /// Decorative borders.
    pub outline_variant: Rgba,
    /// Shadow color for elevated components.
    pub shadow: Rgba,
    /// Tint for elevated surfaces; always the primary key color.
    pub shadow_tint: Rgba,
    /// Overlay behind modal components.
    pub scrim: Rgba,

    /// Tone 50 of each family, identical in light and dark schemes. Used for
    /// mode-independent swatches.
    pub primary_tone: Rgba,
    /// Tone 50 of the secondary palette.
    pub secondary_tone: Rgba,
    /// Tone 50 of the tertiary palette.
    pub tertiary_tone: Rgba,
    /// Tone 50 of the custom palette; transparent without one.
    pub custom_tone: Rgba,
    /// Tone 50 of the neutral palette.
    pub neutral_tone: Rgba,
    /// Tone 50 of the neutral-variant palette.
    pub neutral_variant_tone: Rgba,
    /// Tone 50 of the error palette.
    pub error_tone: Rgba,

    palettes: SchemePalettes,
}

impl Scheme {
    /// Builds a light scheme from seed colors.
    pub fn light(seeds: &SeedColors) -> Self {
        SchemeBuilder::from_seeds(seeds).build(false)
    }

    /// Builds a dark scheme from seed colors.
    pub fn dark(seeds: &SeedColors) -> Self {
        SchemeBuilder::from_seeds(seeds).build(true)
    }

    fn blank(is_dark: bool) -> Self {
        let t = Rgba::TRANSPARENT;
        Self {
            is_dark,
            primary: t,
            on_primary: t,
            primary_container: t,
            on_primary_container: t,
            inverse_primary: t,
            secondary: t,
            on_secondary: t,
            secondary_container: t,
            on_secondary_container: t,
            tertiary: t,
            on_tertiary: t,
            tertiary_container: t,
            on_tertiary_container: t,
            custom: t,
            on_custom: t,
            custom_container: t,
            on_custom_container: t,
            error: t,
            on_error: t,
            error_container: t,
            on_error_container: t,
            surface: t,
            surface_dim: t,
            surface_bright: t,
            surface_container_lowest: t,
            surface_container_low: t,
            surface_container: t,
            surface_container_high: t,
            surface_container_highest: t,
            surface_variant: t,
            on_surface: t,
            on_surface_variant: t,
            inverse_surface: t,
            inverse_on_surface: t,
            background: t,
            on_background: t,
            outline: t,
            outline_variant: t,
            shadow: t,
            shadow_tint: t,
            scrim: t,
            primary_tone: t,
            secondary_tone: t,
            tertiary_tone: t,
            custom_tone: t,
            neutral_tone: t,
            neutral_variant_tone: t,
            error_tone: t,
            palettes: SchemePalettes::default(),
        }
    }

    /// The palettes this scheme's families were derived from.
    pub fn palettes(&self) -> &SchemePalettes {
        &self.palettes
    }

    /// Re-derives the primary family, `inverse_primary` and `shadow_tint`.
    pub fn with_primary_tonal_palette(
        &mut self,
        palette: SharedPalette,
        is_dark: bool,
    ) -> &mut Self {
        let accent = AccentColors::sample(palette.as_ref(), is_dark);
        self.primary = accent.base;
        self.on_primary = accent.on_base;
        self.primary_container = accent.container;
        self.on_primary_container = accent.on_container;
        self.inverse_primary = tone(palette.as_ref(), inverse_primary_tone(is_dark));
        self.shadow_tint = palette.key_color().to_rgba();
        self.primary_tone = accent.mid;
        self.palettes.primary = Some(palette);
        self
    }

    /// Re-derives the secondary family.
    pub fn with_secondary_tonal_palette(
        &mut self,
        palette: SharedPalette,
        is_dark: bool,
    ) -> &mut Self {
        let accent = AccentColors::sample(palette.as_ref(), is_dark);
        self.secondary = accent.base;
        self.on_secondary = accent.on_base;
        self.secondary_container = accent.container;
        self.on_secondary_container = accent.on_container;
        self.secondary_tone = accent.mid;
        self.palettes.secondary = Some(palette);
        self
    }

    /// Re-derives the tertiary family.
    pub fn with_tertiary_tonal_palette(
        &mut self,
        palette: SharedPalette,
        is_dark: bool,
    ) -> &mut Self {
        let accent = AccentColors::sample(palette.as_ref(), is_dark);
        self.tertiary = accent.base;
        self.on_tertiary = accent.on_base;
        self.tertiary_container = accent.container;
        self.on_tertiary_container = accent.on_container;
        self.tertiary_tone = accent.mid;
        self.palettes.tertiary = Some(palette);
        self
    }

    /// Derives the custom accent family. Passing `None` leaves the scheme
    /// untouched.
    pub fn with_custom_tonal_palette(
        &mut self,
        palette: Option<SharedPalette>,
        is_dark: bool,
    ) -> &mut Self {
        let Some(palette) = palette else {
            return self;
        };
        let accent = AccentColors::sample(palette.as_ref(), is_dark);
        self.custom = accent.base;
        self.on_custom = accent.on_base;
        self.custom_container = accent.container;
        self.on_custom_container = accent.on_container;
        self.custom_tone = accent.mid;
        self.palettes.custom = Some(palette);
        self
    }

    /// Re-derives the surface, background, shadow and scrim roles.
    pub fn with_neutral_tonal_palette(
        &mut self,
        palette: SharedPalette,
        is_dark: bool,
    ) -> &mut Self {
        let tones = NeutralTones::for_mode(is_dark);
        let p = palette.as_ref();
        self.surface = tone(p, tones.surface);
        self.surface_dim = tone(p, tones.surface_dim);
        self.surface_bright = tone(p, tones.surface_bright);
        self.surface_container_lowest = tone(p, tones.surface_container_lowest);
        self.surface_container_low = tone(p, tones.surface_container_low);
        self.surface_container = tone(p, tones.surface_container);
        self.surface_container_high = tone(p, tones.surface_container_high);
        self.surface_container_highest = tone(p, tones.surface_container_highest);
        self.on_surface = tone(p, tones.on_surface);
        self.inverse_surface = tone(p, tones.inverse_surface);
        self.inverse_on_surface = tone(p, tones.inverse_on_surface);
        self.background = tone(p, tones.background);
        self.on_background = tone(p, tones.on_background);
        self.shadow = tone(p, tones.shadow);
        self.scrim = tone(p, tones.scrim);
        self.neutral_tone = tone(p, MID_TONE);
        self.palettes.neutral = Some(palette);
        self
    }

    /// Re-derives `surface_variant`, `on_surface_variant` and the outlines.
    pub fn with_neutral_variant_tonal_palette(
        &mut self,
        palette: SharedPalette,
        is_dark: bool,
    ) -> &mut Self {
        let tones = NeutralVariantTones::for_mode(is_dark);
        let p = palette.as_ref();
        self.surface_variant = tone(p, tones.surface_variant);
        self.on_surface_variant = tone(p, tones.on_surface_variant);
        self.outline = tone(p, tones.outline);
        self.outline_variant = tone(p, tones.outline_variant);
        self.neutral_variant_tone = tone(p, MID_TONE);
        self.palettes.neutral_variant = Some(palette);
        self
    }

    /// Re-derives the error family.
    pub fn with_error_tonal_palette(
        &mut self,
        palette: SharedPalette,
        is_dark: bool,
    ) -> &mut Self {
        let accent = AccentColors::sample(palette.as_ref(), is_dark);
        self.error = accent.base;
        self.on_error = accent.on_base;
        self.error_container = accent.container;
        self.on_error_container = accent.on_container;
        self.error_tone = accent.mid;
        self.palettes.error = Some(palette);
        self
    }

    /// Returns the matching content color for a background color in this
    /// scheme.
    ///
    /// When the background color does not match a known scheme color, this
    /// returns `None`.
    pub fn content_color_for(&self, background: Rgba) -> Option<Rgba> {
        if background == self.primary {
            Some(self.on_primary)
        } else if background == self.secondary {
            Some(self.on_secondary)
        } else if background == self.tertiary {
            Some(self.on_tertiary)
        } else if background == self.background {
            Some(self.on_background)
        } else if background == self.error {
            Some(self.on_error)
        } else if background == self.primary_container {
            Some(self.on_primary_container)
        } else if background == self.secondary_container {
            Some(self.on_secondary_container)
        } else if background == self.tertiary_container {
            Some(self.on_tertiary_container)
        } else if background == self.error_container {
            Some(self.on_error_container)
        } else if self.palettes.custom.is_some() && background == self.custom {
            Some(self.on_custom)
        } else if self.palettes.custom.is_some() && background == self.custom_container {
            Some(self.on_custom_container)
        } else if background == self.inverse_surface {
            Some(self.inverse_on_surface)
        } else if background == self.surface {
            Some(self.on_surface)
        } else if background == self.surface_variant {
            Some(self.on_surface_variant)
        } else if background == self.surface_bright
            || background == self.surface_container
            || background == self.surface_container_high
            || background == self.surface_container_highest
            || background == self.surface_container_low
            || background == self.surface_container_lowest
            || background == self.surface_dim
        {
            Some(self.on_surface)
        } else {
            None
        }
    }
}

/// Schemes compare by their recorded [`Scheme::is_dark`] and role colors;
/// the palettes they came from are not part of equality.
impl PartialEq for Scheme {
    fn eq(&self, other: &Self) -> bool {
        self.is_dark == other.is_dark
            && ColorRole::ALL
                .iter()
                .all(|role| self.get(*role) == other.get(*role))
    }
}

impl Eq for Scheme {}

/// Assembles a [`Scheme`] from one palette per role family.
///
/// The error family defaults to the Material 3 baseline error palette and
/// the custom accent is absent unless set.
#[derive(Debug, Clone)]
pub struct SchemeBuilder {
    primary: SharedPalette,
    secondary: SharedPalette,
    tertiary: SharedPalette,
    neutral: SharedPalette,
    neutral_variant: SharedPalette,
    error: SharedPalette,
    custom: Option<SharedPalette>,
}

impl SchemeBuilder {
    /// Starts from the five required palettes, the baseline error palette
    /// and no custom accent.
    pub fn new(
        primary: SharedPalette,
        secondary: SharedPalette,
        tertiary: SharedPalette,
        neutral: SharedPalette,
        neutral_variant: SharedPalette,
    ) -> Self {
        Self {
            primary,
            secondary,
            tertiary,
            neutral,
            neutral_variant,
            error: Preset::Error.palette(),
            custom: None,
        }
    }

    /// Derives one palette per seed. The custom seed, when present, becomes
    /// the custom accent family.
    pub fn from_seeds(seeds: &SeedColors) -> Self {
        Self {
            custom: seeds.custom.map(TonalPalette::shared),
            ..Self::new(
                TonalPalette::shared(seeds.primary),
                TonalPalette::shared(seeds.secondary),
                TonalPalette::shared(seeds.tertiary),
                TonalPalette::shared(seeds.neutral),
                TonalPalette::shared(seeds.neutral_variant),
            )
        }
    }

    /// Replaces the error palette.
    pub fn error(mut self, palette: SharedPalette) -> Self {
        self.error = palette;
        self
    }

    /// Sets the custom accent palette.
    pub fn custom(mut self, palette: SharedPalette) -> Self {
        self.custom = Some(palette);
        self
    }

    /// Builds the scheme for the requested mode.
    pub fn build(&self, is_dark: bool) -> Scheme {
        debug!(
            "Building {} scheme (custom accent: {})",
            if is_dark { "dark" } else { "light" },
            self.custom.is_some()
        );
        let mut scheme = Scheme::blank(is_dark);
        scheme
            .with_primary_tonal_palette(self.primary.clone(), is_dark)
            .with_secondary_tonal_palette(self.secondary.clone(), is_dark)
            .with_tertiary_tonal_palette(self.tertiary.clone(), is_dark)
            .with_custom_tonal_palette(self.custom.clone(), is_dark)
            .with_neutral_tonal_palette(self.neutral.clone(), is_dark)
            .with_neutral_variant_tonal_palette(self.neutral_variant.clone(), is_dark)
            .with_error_tonal_palette(self.error.clone(), is_dark);
        scheme
    }
}
