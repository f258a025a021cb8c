//! Creature records, rarity tiers, and elemental tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GachaError;

/// Rarity tier of a creature.
///
/// The variant order is the order weights are registered in, and therefore
/// the order the weighted draw walks the tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    /// The most frequent tier.
    Common,
    /// Uncommon creatures.
    Rare,
    /// Notably scarce creatures.
    Epic,
    /// Very scarce creatures.
    Legendary,
    /// The scarcest tier.
    Mythical,
}

impl Rarity {
    /// Every rarity, in registration order.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythical,
    ];

    /// Lower-case name used in data files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
            Self::Mythical => "mythical",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = GachaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == lower)
            .ok_or_else(|| GachaError::UnknownRarity(s.to_string()))
    }
}

/// Elemental affinity of a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// Fire.
    Fire,
    /// Water.
    Water,
    /// Earth.
    Earth,
    /// Wind.
    Wind,
    /// Lightning.
    Lightning,
    /// No elemental affinity (`"none"` in data files).
    #[serde(rename = "none")]
    Neutral,
}

impl Element {
    /// Lower-case name used in data files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Earth => "earth",
            Self::Wind => "wind",
            Self::Lightning => "lightning",
            Self::Neutral => "none",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Element {
    type Err = GachaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fire" => Ok(Self::Fire),
            "water" => Ok(Self::Water),
            "earth" => Ok(Self::Earth),
            "wind" => Ok(Self::Wind),
            "lightning" => Ok(Self::Lightning),
            "none" | "neutral" => Ok(Self::Neutral),
            _ => Err(GachaError::UnknownElement(s.to_string())),
        }
    }
}

/// A collectible creature definition. Owned by the [`Catalog`](super::Catalog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    /// Unique key, e.g. `"nine-tailed-fox"`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Native (Chinese) name.
    pub name_cn: String,
    /// Rarity tier used for weighted selection.
    pub rarity: Rarity,
    /// Reference to the creature artwork.
    #[serde(default)]
    pub image: String,
    /// One-line flavour description.
    #[serde(default)]
    pub description: String,
    /// Longer lore passage.
    #[serde(default)]
    pub lore: String,
    /// Place of origin.
    #[serde(default)]
    pub origin: String,
    /// Ability names.
    #[serde(default)]
    pub abilities: Vec<String>,
    /// Elemental tag.
    pub element: Element,
}

impl Creature {
    /// Create a creature with only the fields the draw engine cares about.
    pub fn new(id: impl Into<String>, name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_cn: String::new(),
            rarity,
            image: String::new(),
            description: String::new(),
            lore: String::new(),
            origin: String::new(),
            abilities: Vec::new(),
            element: Element::Neutral,
        }
    }

    /// Set the native name.
    pub fn with_name_cn(mut self, name_cn: impl Into<String>) -> Self {
        self.name_cn = name_cn.into();
        self
    }

    /// Set the elemental tag.
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }
}
