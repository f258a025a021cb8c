//! Bestiary browsing: catalog rows filtered by rarity and name search.

use crate::catalog::{Creature, Rarity};

/// Filter for [`CollectionEngine::bestiary`](crate::CollectionEngine::bestiary).
#[derive(Debug, Clone, Default)]
pub struct BestiaryFilter {
    /// Only show this rarity.
    pub rarity: Option<Rarity>,
    /// Substring of the English name (case-insensitive) or the native name.
    pub search: Option<String>,
}

impl BestiaryFilter {
    /// A filter that matches every creature.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one rarity.
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = Some(rarity);
        self
    }

    /// Restrict to names containing `query`.
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// Whether a creature passes the filter.
    pub fn matches(&self, creature: &Creature) -> bool {
        if self.rarity.is_some_and(|r| r != creature.rarity) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                creature
                    .name
                    .to_lowercase()
                    .contains(&query.to_lowercase())
                    || creature.name_cn.contains(query)
            }
        }
    }
}

/// One bestiary row.
#[derive(Debug, Clone, Copy)]
pub struct BestiaryEntry<'a> {
    /// The catalog record.
    pub creature: &'a Creature,
    /// Whether the collection has discovered it.
    pub unlocked: bool,
}
