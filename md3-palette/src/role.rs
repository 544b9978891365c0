//! Named color roles and by-name access to scheme fields.
//!
//! Rendering code usually addresses colors by role name (`"on-primary"`,
//! `"surface-container-high"`, ...). [`ColorRole`] is the typed form of those
//! names; [`Scheme::get`] and [`Scheme::set`] read and write the matching
//! field, and every field also gets its own `with_<field>` override.

use std::{fmt, str::FromStr};

use crate::{
    color::Rgba,
    error::{Error, Result},
    scheme::Scheme,
};

macro_rules! color_roles {
    ($($variant:ident => $field:ident, $with:ident, $name:literal;)*) => {
        /// A named color role of a [`Scheme`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ColorRole {
            $(
                #[doc = concat!("The `", $name, "` role.")]
                $variant,
            )*
        }

        impl ColorRole {
            /// Every role, in scheme field order.
            pub const ALL: &'static [ColorRole] = &[$(ColorRole::$variant,)*];

            /// The kebab-case name of the role.
            pub const fn name(self) -> &'static str {
                match self {
                    $(ColorRole::$variant => $name,)*
                }
            }
        }

        impl Scheme {
            /// Returns the color assigned to `role`.
            pub fn get(&self, role: ColorRole) -> Rgba {
                match role {
                    $(ColorRole::$variant => self.$field,)*
                }
            }

            /// Assigns `color` to `role`, leaving every other field untouched.
            pub fn set(&mut self, role: ColorRole, color: impl Into<Rgba>) -> &mut Self {
                let color = color.into();
                match role {
                    $(ColorRole::$variant => self.$field = color,)*
                }
                self
            }

            $(
                #[doc = concat!("Overrides `", $name, "` with an explicit color, bypassing the tone table.")]
                pub fn $with(&mut self, color: impl Into<Rgba>) -> &mut Self {
                    self.$field = color.into();
                    self
                }
            )*
        }
    };
}

color_roles! {
    Primary => primary, with_primary, "primary";
    OnPrimary => on_primary, with_on_primary, "on-primary";
    PrimaryContainer => primary_container, with_primary_container, "primary-container";
    OnPrimaryContainer => on_primary_container, with_on_primary_container, "on-primary-container";
    InversePrimary => inverse_primary, with_inverse_primary, "inverse-primary";
    Secondary => secondary, with_secondary, "secondary";
    OnSecondary => on_secondary, with_on_secondary, "on-secondary";
    SecondaryContainer => secondary_container, with_secondary_container, "secondary-container";
    OnSecondaryContainer => on_secondary_container, with_on_secondary_container, "on-secondary-container";
    Tertiary => tertiary, with_tertiary, "tertiary";
    OnTertiary => on_tertiary, with_on_tertiary, "on-tertiary";
    TertiaryContainer => tertiary_container, with_tertiary_container, "tertiary-container";
    OnTertiaryContainer => on_tertiary_container, with_on_tertiary_container, "on-tertiary-container";
    Custom => custom, with_custom, "custom";
    OnCustom => on_custom, with_on_custom, "on-custom";
    CustomContainer => custom_container, with_custom_container, "custom-container";
    OnCustomContainer => on_custom_container, with_on_custom_container, "on-custom-container";
    Error => error, with_error, "error";
    OnError => on_error, with_on_error, "on-error";
    ErrorContainer => error_container, with_error_container, "error-container";
    OnErrorContainer => on_error_container, with_on_error_container, "on-error-container";
    Surface => surface, with_surface, "surface";
    SurfaceDim => surface_dim, with_surface_dim, "surface-dim";
    SurfaceBright => surface_bright, with_surface_bright, "surface-bright";
    SurfaceContainerLowest => surface_container_lowest, with_surface_container_lowest, "surface-container-lowest";
    SurfaceContainerLow => surface_container_low, with_surface_container_low, "surface-container-low";
    SurfaceContainer => surface_container, with_surface_container, "surface-container";
    SurfaceContainerHigh => surface_container_high, with_surface_container_high, "surface-container-high";
    SurfaceContainerHighest => surface_container_highest, with_surface_container_highest, "surface-container-highest";
    SurfaceVariant => surface_variant, with_surface_variant, "surface-variant";
    OnSurface => on_surface, with_on_surface, "on-surface";
    OnSurfaceVariant => on_surface_variant, with_on_surface_variant, "on-surface-variant";
    InverseSurface => inverse_surface, with_inverse_surface, "inverse-surface";
    InverseOnSurface => inverse_on_surface, with_inverse_on_surface, "inverse-on-surface";
    Background => background, with_background, "background";
    OnBackground => on_background, with_on_background, "on-background";
    Outline => outline, with_outline, "outline";
    OutlineVariant => outline_variant, with_outline_variant, "outline-variant";
    Shadow => shadow, with_shadow, "shadow";
    ShadowTint => shadow_tint, with_shadow_tint, "shadow-tint";
    Scrim => scrim, with_scrim, "scrim";
    PrimaryTone => primary_tone, with_primary_tone, "primary-tone";
    SecondaryTone => secondary_tone, with_secondary_tone, "secondary-tone";
    TertiaryTone => tertiary_tone, with_tertiary_tone, "tertiary-tone";
    CustomTone => custom_tone, with_custom_tone, "custom-tone";
    NeutralTone => neutral_tone, with_neutral_tone, "neutral-tone";
    NeutralVariantTone => neutral_variant_tone, with_neutral_variant_tone, "neutral-variant-tone";
    ErrorTone => error_tone, with_error_tone, "error-tone";
}

impl ColorRole {
    /// Roles of the optional custom accent family.
    pub fn is_custom(self) -> bool {
        matches!(
            self,
            ColorRole::Custom
                | ColorRole::OnCustom
                | ColorRole::CustomContainer
                | ColorRole::OnCustomContainer
                | ColorRole::CustomTone
        )
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses kebab-case role names. Matching ignores ASCII case and accepts
/// `_` in place of `-`, so `"ON_PRIMARY"` names [`ColorRole::OnPrimary`].
impl FromStr for ColorRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        ColorRole::ALL
            .iter()
            .copied()
            .find(|role| role.name() == normalized)
            .ok_or_else(|| Error::UnknownRole {
                name: s.to_string(),
            })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ColorRole {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ColorRole {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_role_names_are_unique() {
        let names: HashSet<_> = ColorRole::ALL.iter().map(|role| role.name()).collect();
        assert_eq!(names.len(), ColorRole::ALL.len());
        assert_eq!(ColorRole::ALL.len(), 48);
    }

    #[test]
    fn test_parse_round_trips_every_name() {
        for role in ColorRole::ALL {
            assert_eq!(role.to_string().parse::<ColorRole>(), Ok(*role));
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_separator() {
        assert_eq!("ON_PRIMARY".parse::<ColorRole>(), Ok(ColorRole::OnPrimary));
        assert_eq!(
            " surface_container-high ".parse::<ColorRole>(),
            Ok(ColorRole::SurfaceContainerHigh)
        );
    }

    #[test]
    fn test_parse_unknown_role() {
        assert_eq!(
            "primary-fixed".parse::<ColorRole>(),
            Err(Error::UnknownRole {
                name: "primary-fixed".to_string()
            })
        );
    }

    #[test]
    fn test_custom_roles() {
        let custom: Vec<_> = ColorRole::ALL.iter().filter(|r| r.is_custom()).collect();
        assert_eq!(custom.len(), 5);
        assert!(!ColorRole::Primary.is_custom());
    }
}
