//! The collection engine: weighted draws over a catalog plus the persisted
//! record of what has been discovered.
//!
//! `CollectionEngine` is the only writer of [`CollectionState`]. Every
//! mutating call takes `&mut self` and finishes its state update before
//! returning, so the unlocked set, draw counter, and timestamp always change
//! together. The engine saves after each mutation; a failed save is logged
//! and leaves the in-memory state authoritative.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::bestiary::{BestiaryEntry, BestiaryFilter};
use crate::catalog::{Catalog, Creature};
use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::error::{GachaError, GachaResult};
use crate::state::CollectionState;
use crate::store::CollectionStore;

/// The outcome of one draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawResult {
    /// The creature drawn.
    pub creature: Creature,
    /// Whether this draw unlocked it for the first time.
    pub is_new: bool,
}

/// Draws creatures from a [`Catalog`] and tracks the collection.
pub struct CollectionEngine<S: CollectionStore, R: Rng = StdRng> {
    catalog: Catalog,
    store: S,
    rng: R,
    clock: Box<dyn Clock>,
    config: EngineConfig,
    state: CollectionState,
    unlocked: HashSet<String>,
    ready: bool,
    dirty: bool,
}

impl<S: CollectionStore> CollectionEngine<S, StdRng> {
    /// Create an engine that has not loaded persisted state yet.
    ///
    /// The RNG is seeded from `config.seed`, or from the OS when unset.
    pub fn new(catalog: Catalog, store: S, config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(catalog, store, rng, config)
    }

    /// Create an engine and load persisted state in one step.
    pub fn open(catalog: Catalog, store: S, config: EngineConfig) -> Self {
        let mut engine = Self::new(catalog, store, config);
        engine.load();
        engine
    }
}

impl<S: CollectionStore, R: Rng> CollectionEngine<S, R> {
    /// Create an unloaded engine with an explicit random source.
    pub fn with_rng(catalog: Catalog, store: S, rng: R, config: EngineConfig) -> Self {
        Self {
            catalog,
            store,
            rng,
            clock: Box::new(SystemClock),
            config,
            state: CollectionState::default(),
            unlocked: HashSet::new(),
            ready: false,
            dirty: false,
        }
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Load persisted state, falling back to the empty state if the store is
    /// empty or unreadable. Marks the engine ready.
    pub fn load(&mut self) {
        let state = match self.store.load() {
            Ok(Some(value)) => {
                let state = CollectionState::from_value(&value);
                info!(
                    unlocked = state.unlocked_creatures.len(),
                    draws = state.draw_count,
                    "loaded collection"
                );
                state
            }
            Ok(None) => CollectionState::default(),
            Err(e) => {
                warn!(error = %e, "could not load collection, starting empty");
                CollectionState::default()
            }
        };
        self.unlocked = state.unlocked_creatures.iter().cloned().collect();
        self.state = state;
        self.ready = true;
    }

    /// Whether persisted state has finished loading.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Whether the latest save failed and the store is behind memory.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Draw one creature.
    pub fn draw(&mut self) -> GachaResult<DrawResult> {
        self.ensure_ready()?;
        let creature = self.catalog.select(&mut self.rng)?.clone();
        let is_new = self.unlock(&creature.id);
        self.state.draw_count = self.state.draw_count.saturating_add(1);
        self.state.last_draw_time = Some(self.clock.now_millis());

        debug!(
            creature = %creature.id,
            rarity = %creature.rarity,
            is_new,
            draws = self.state.draw_count,
            "draw"
        );
        self.persist();
        Ok(DrawResult { creature, is_new })
    }

    /// Draw `count` creatures as one batch.
    ///
    /// Selections are independent of the collection. A creature drawn twice in
    /// the same batch is only flagged new the first time. The state update and
    /// save happen once, after every selection succeeded. A count of zero
    /// returns an empty list and changes nothing.
    pub fn draw_multiple(&mut self, count: usize) -> GachaResult<Vec<DrawResult>> {
        self.ensure_ready()?;
        if count == 0 {
            return Ok(Vec::new());
        }

        let picks = (0..count)
            .map(|_| self.catalog.select(&mut self.rng).cloned())
            .collect::<GachaResult<Vec<Creature>>>()?;

        let results: Vec<DrawResult> = picks
            .into_iter()
            .map(|creature| {
                let is_new = self.unlock(&creature.id);
                DrawResult { creature, is_new }
            })
            .collect();
        let added = u64::try_from(count).unwrap_or(u64::MAX);
        self.state.draw_count = self.state.draw_count.saturating_add(added);
        self.state.last_draw_time = Some(self.clock.now_millis());

        debug!(
            count,
            new = results.iter().filter(|r| r.is_new).count(),
            draws = self.state.draw_count,
            "batch draw"
        );
        self.persist();
        Ok(results)
    }

    /// Draw a batch of the configured size.
    pub fn draw_batch(&mut self) -> GachaResult<Vec<DrawResult>> {
        self.draw_multiple(self.config.batch_size)
    }

    /// Restore the empty initial state and persist it.
    pub fn reset(&mut self) {
        self.state = CollectionState::default();
        self.unlocked.clear();
        info!("collection reset");
        self.persist();
    }

    /// Unlocked creatures in catalog order.
    pub fn unlocked_creatures(&self) -> Vec<&Creature> {
        self.catalog
            .all_creatures()
            .iter()
            .filter(|c| self.unlocked.contains(&c.id))
            .collect()
    }

    /// Whether a catalog creature is unlocked. Ids outside the catalog never
    /// are, even if the persisted state still lists them.
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.catalog.contains(id) && self.unlocked.contains(id)
    }

    /// Number of catalog creatures unlocked.
    pub fn unlocked_count(&self) -> usize {
        self.catalog
            .all_creatures()
            .iter()
            .filter(|c| self.unlocked.contains(&c.id))
            .count()
    }

    /// Percentage of the catalog unlocked, rounded half up.
    ///
    /// 0 only when nothing is unlocked and 100 only when everything is; a
    /// partial collection is kept within 1..=99.
    pub fn progress_percent(&self) -> u8 {
        let total = self.catalog.len();
        let unlocked = self.unlocked_count();
        if total == 0 || unlocked == 0 {
            return 0;
        }
        if unlocked >= total {
            return 100;
        }
        let rounded = (unlocked * 200 + total) / (total * 2);
        rounded.clamp(1, 99) as u8
    }

    /// Every catalog creature that passes `filter`, with its unlocked flag.
    pub fn bestiary(&self, filter: &BestiaryFilter) -> Vec<BestiaryEntry<'_>> {
        self.catalog
            .all_creatures()
            .iter()
            .filter(|c| filter.matches(c))
            .map(|creature| BestiaryEntry {
                creature,
                unlocked: self.unlocked.contains(&creature.id),
            })
            .collect()
    }

    /// Look up a creature in the catalog.
    pub fn creature_by_id(&self, id: &str) -> GachaResult<&Creature> {
        self.catalog.creature_by_id(id)
    }

    /// The catalog being drawn from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current collection state.
    pub fn state(&self) -> &CollectionState {
        &self.state
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of creatures in the catalog.
    pub fn total_creatures(&self) -> usize {
        self.catalog.len()
    }

    /// Total draws made.
    pub fn draw_count(&self) -> u64 {
        self.state.draw_count
    }

    /// Time of the most recent draw.
    pub fn last_draw_time(&self) -> Option<DateTime<Utc>> {
        self.state.last_draw_at()
    }

    fn ensure_ready(&self) -> GachaResult<()> {
        if self.ready {
            Ok(())
        } else {
            Err(GachaError::NotReady)
        }
    }

    /// Add an id to the unlocked set; true if it was not there before.
    fn unlock(&mut self, id: &str) -> bool {
        if self.unlocked.contains(id) {
            return false;
        }
        self.unlocked.insert(id.to_string());
        self.state.unlocked_creatures.push(id.to_string());
        true
    }

    fn persist(&mut self) {
        match self.store.save(&self.state) {
            Ok(()) => self.dirty = false,
            Err(e) => {
                warn!(error = %e, "could not save collection");
                self.dirty = true;
            }
        }
    }
}
