use thiserror::Error;

/// Errors raised at the textual edges of the crate.
///
/// Building schemes and palettes never fails; only parsing seed colors and
/// role names from strings does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A seed color string is not `RRGGBB` or `AARRGGBB` hex.
    #[error("invalid hex color `{input}`: expected 6 or 8 hex digits")]
    InvalidHex {
        /// The rejected input.
        input: String,
    },
    /// A role name does not match any [`ColorRole`](crate::ColorRole).
    #[error("unknown color role `{name}`")]
    UnknownRole {
        /// The rejected name.
        name: String,
    },
}

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
