//! Error types for the catalog and collection engine.

use thiserror::Error;

use crate::catalog::Rarity;

/// Result type for gacha operations.
pub type GachaResult<T> = Result<T, GachaError>;

/// Errors that can occur while building a catalog or drawing from it.
///
/// Everything except [`GachaError::CreatureNotFound`] and
/// [`GachaError::NotReady`] is a configuration error: it points at broken
/// catalog data and retrying the same call will fail the same way.
#[derive(Debug, Error)]
pub enum GachaError {
    /// The catalog contains no creatures.
    #[error("catalog is empty")]
    EmptyCatalog,

    /// Two catalog entries share the same identifier.
    #[error("duplicate creature id: \"{0}\"")]
    DuplicateCreature(String),

    /// A rarity weight is zero, negative, or not a finite number.
    #[error("invalid weight {weight} for rarity {rarity}")]
    InvalidWeight {
        /// The rarity the weight belongs to.
        rarity: Rarity,
        /// The offending weight.
        weight: f64,
    },

    /// No creature with the given identifier exists in the catalog.
    #[error("creature not found: \"{0}\"")]
    CreatureNotFound(String),

    /// A rarity name could not be parsed.
    #[error("unknown rarity: {0}")]
    UnknownRarity(String),

    /// An element name could not be parsed.
    #[error("unknown element: {0}")]
    UnknownElement(String),

    /// The weighted selection found no populated rarity with a positive weight.
    #[error("no drawable rarity: every populated rarity has zero weight")]
    NoDrawableRarity,

    /// A draw was attempted before persisted state finished loading.
    #[error("collection has not been loaded yet")]
    NotReady,

    /// Catalog JSON could not be decoded.
    #[error("invalid catalog data: {0}")]
    InvalidCatalog(#[from] serde_json::Error),
}

impl GachaError {
    /// Whether this error indicates broken catalog or weight data.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, Self::CreatureNotFound(_) | Self::NotReady)
    }
}
