//! Seed configuration for palettes.

use crate::{catalog::Preset, color::Argb};

/// The seeds a [`Palette`](crate::Palette) is derived from.
///
/// `Default` samples the Material 3 baseline presets at tone 50. With the
/// `serde` feature the struct can be read from application config; colors
/// are written as hex strings and missing fields fall back to the defaults:
///
/// ```json
/// { "primary": "#006A6A", "custom": "#FFB300" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SeedColors {
    /// Seed of the primary accent family.
    pub primary: Argb,
    /// Seed of the secondary accent family.
    pub secondary: Argb,
    /// Seed of the tertiary accent family.
    pub tertiary: Argb,
    /// Seed of the surface and background roles.
    pub neutral: Argb,
    /// Seed of the surface-variant and outline roles.
    pub neutral_variant: Argb,
    /// Optional accent for the custom role family.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub custom: Option<Argb>,
}

impl SeedColors {
    /// Seeds from explicit colors, without a custom accent.
    pub fn new(
        primary: Argb,
        secondary: Argb,
        tertiary: Argb,
        neutral: Argb,
        neutral_variant: Argb,
    ) -> Self {
        Self {
            primary,
            secondary,
            tertiary,
            neutral,
            neutral_variant,
            custom: None,
        }
    }

    /// Adds a custom accent seed.
    pub fn with_custom(mut self, custom: Argb) -> Self {
        self.custom = Some(custom);
        self
    }
}

impl Default for SeedColors {
    fn default() -> Self {
        Self::new(
            Preset::Primary.seed_tone(),
            Preset::Secondary.seed_tone(),
            Preset::Tertiary.seed_tone(),
            Preset::Neutral.seed_tone(),
            Preset::NeutralVariant.seed_tone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_samples_baseline_presets() {
        let seeds = SeedColors::default();
        assert_eq!(seeds.primary, Preset::Primary.seed_tone());
        assert_eq!(seeds.neutral_variant, Preset::NeutralVariant.seed_tone());
        assert_eq!(seeds.custom, None);
    }

    #[test]
    fn test_with_custom() {
        let seeds = SeedColors::default().with_custom(Argb(0xFFFFB300));
        assert_eq!(seeds.custom, Some(Argb(0xFFFFB300)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_config() -> serde_json::Result<()> {
        let seeds: SeedColors =
            serde_json::from_str(r##"{ "primary": "#006A6A", "custom": "FFB300" }"##)?;
        assert_eq!(seeds.primary, Argb(0xFF006A6A));
        assert_eq!(seeds.custom, Some(Argb(0xFFFFB300)));
        assert_eq!(seeds.secondary, SeedColors::default().secondary);
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_bad_hex() {
        let result = serde_json::from_str::<SeedColors>(r#"{ "primary": "purple" }"#);
        assert!(result.is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_as_hex() -> serde_json::Result<()> {
        let seeds = SeedColors::new(Argb(0xFF000001), Argb(2), Argb(3), Argb(4), Argb(5));
        let json = serde_json::to_value(seeds)?;
        assert_eq!(json["primary"], "#FF000001");
        assert_eq!(json["neutral_variant"], "#00000005");
        assert!(json.get("custom").is_none());
        Ok(())
    }
}
