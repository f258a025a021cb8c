//! The immutable creature catalog and its rarity weight table.
//!
//! A [`Catalog`] is validated once when it is built: it must not be empty,
//! ids must be unique, and every rarity weight must be a positive finite
//! number. Creatures are grouped into rarity tiers up front, so the weighted
//! draw never has to look at unpopulated tiers.

pub mod creature;
pub mod weights;

use std::collections::HashMap;

use rand::Rng;
use serde::Deserialize;

pub use creature::{Creature, Element, Rarity};
pub use weights::RarityWeights;

use crate::error::{GachaError, GachaResult};
use crate::weighted::pick_weighted;

/// Embedded data for the built-in Shan Hai Jing catalog.
const BUILTIN_CATALOG: &str = include_str!("../../data/shanhaijing.json");

/// On-disk catalog layout: a weight table plus the ordered creature list.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    weights: RarityWeights,
    creatures: Vec<Creature>,
}

/// Indices of the creatures belonging to one populated rarity.
#[derive(Debug, Clone)]
struct Tier {
    rarity: Rarity,
    members: Vec<usize>,
}

/// The ordered, read-only list of obtainable creatures.
#[derive(Debug, Clone)]
pub struct Catalog {
    creatures: Vec<Creature>,
    weights: RarityWeights,
    by_id: HashMap<String, usize>,
    /// Populated tiers in rarity registration order.
    tiers: Vec<Tier>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists, duplicate ids, and bad weights.
    pub fn new(creatures: Vec<Creature>, weights: RarityWeights) -> GachaResult<Self> {
        if creatures.is_empty() {
            return Err(GachaError::EmptyCatalog);
        }
        weights.validate()?;

        let mut by_id = HashMap::with_capacity(creatures.len());
        for (idx, creature) in creatures.iter().enumerate() {
            if by_id.insert(creature.id.clone(), idx).is_some() {
                return Err(GachaError::DuplicateCreature(creature.id.clone()));
            }
        }

        let tiers = Rarity::ALL
            .into_iter()
            .filter_map(|rarity| {
                let members: Vec<usize> = creatures
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| c.rarity == rarity)
                    .map(|(idx, _)| idx)
                    .collect();
                (!members.is_empty()).then_some(Tier { rarity, members })
            })
            .collect();

        Ok(Self {
            creatures,
            weights,
            by_id,
            tiers,
        })
    }

    /// Parse a catalog from JSON of the form `{ "weights": {..}, "creatures": [..] }`.
    pub fn from_json(json: &str) -> GachaResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.creatures, file.weights)
    }

    /// The built-in Shan Hai Jing catalog.
    pub fn builtin() -> GachaResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// All creatures in catalog order.
    pub fn all_creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Look up a creature by id.
    pub fn creature_by_id(&self, id: &str) -> GachaResult<&Creature> {
        self.by_id
            .get(id)
            .map(|&idx| &self.creatures[idx])
            .ok_or_else(|| GachaError::CreatureNotFound(id.to_string()))
    }

    /// Whether an id belongs to the catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Catalog position of an id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// The configured weight of a rarity.
    pub fn rarity_weight(&self, rarity: Rarity) -> f64 {
        self.weights.get(rarity)
    }

    /// The full weight table.
    pub fn weights(&self) -> &RarityWeights {
        &self.weights
    }

    /// Number of creatures.
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Always false for a successfully built catalog.
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Creatures of one rarity, in catalog order.
    pub fn members(&self, rarity: Rarity) -> impl Iterator<Item = &Creature> {
        self.creatures.iter().filter(move |c| c.rarity == rarity)
    }

    /// Rarities with at least one creature, in registration order.
    pub fn populated_rarities(&self) -> impl Iterator<Item = Rarity> + '_ {
        self.tiers.iter().map(|t| t.rarity)
    }

    /// Chance of each populated rarity being selected, as percentages.
    pub fn rarity_odds(&self) -> Vec<(Rarity, f64)> {
        let total: f64 = self
            .populated_rarities()
            .map(|r| self.rarity_weight(r))
            .sum();
        self.populated_rarities()
            .map(|r| (r, self.rarity_weight(r) / total * 100.0))
            .collect()
    }

    /// Run one weighted selection: pick a populated rarity by weight, then a
    /// member of it uniformly.
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> GachaResult<&Creature> {
        if self.creatures.is_empty() {
            return Err(GachaError::EmptyCatalog);
        }
        let entries: Vec<(&Tier, f64)> = self
            .tiers
            .iter()
            .map(|t| (t, self.rarity_weight(t.rarity)))
            .collect();
        let tier = pick_weighted(&entries, rng).ok_or(GachaError::NoDrawableRarity)?;
        let pick = rng.random_range(0..tier.members.len());
        Ok(&self.creatures[tier.members[pick]])
    }
}
