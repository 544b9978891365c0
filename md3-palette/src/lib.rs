//! Material 3 color schemes derived from seed colors.
//!
//! md3-palette turns five seed colors (primary, secondary, tertiary, neutral
//! and neutral variant) into light and dark [`Scheme`]s holding every
//! Material 3 color role. Each seed is expanded into a [`TonalPalette`] by
//! `material-color-utilities`, and each role reads a fixed tone from its
//! family's palette.
//!
//! # Usage
//!
//! ```
//! use md3_palette::{Argb, ColorRole, Palette};
//!
//! let mut palette = Palette::from_seed_colors(
//!     Argb(0xFF6750A4),
//!     Argb(0xFF625B71),
//!     Argb(0xFF7D5260),
//!     Argb(0xFF787579),
//!     Argb(0xFF79747E),
//! );
//!
//! let surface = palette.active().get("surface".parse::<ColorRole>()?);
//! palette.switch_mode(true);
//! assert_ne!(palette.active().surface, surface);
//! # Ok::<(), md3_palette::Error>(())
//! ```
//!
//! # Tonal palettes
//!
//! Schemes only depend on the [`TonalPaletteProvider`] trait, so any ramp
//! can stand in for the HCT palettes, and a family can be re-derived on an
//! existing scheme with the `with_*_tonal_palette` setters. The
//! [`Preset`] catalog holds the Material 2 hues and the Material 3 baseline
//! palettes.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod catalog;
pub mod color;
pub mod config;
mod error;
pub mod palette;
pub mod role;
pub mod scheme;
pub mod tonal;

pub use crate::{
    catalog::Preset,
    color::{Argb, Rgba},
    config::SeedColors,
    error::{Error, Result},
    palette::{Palette, default_palette},
    role::ColorRole,
    scheme::{Scheme, SchemeBuilder, SchemePalettes},
    tonal::{SharedPalette, TonalPalette, TonalPaletteProvider},
};
