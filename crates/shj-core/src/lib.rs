//! Draw and collection engine for the Shan Hai Jing creature gacha.
//!
//! A [`Catalog`] holds the fixed list of mythological creatures and the
//! relative weight of each rarity tier. A [`CollectionEngine`] draws from it
//! (weighted by rarity, uniform within a tier), records which creatures have
//! been discovered, and persists that record through a [`CollectionStore`].

pub mod bestiary;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;
pub mod store;
pub mod weighted;

pub use bestiary::{BestiaryEntry, BestiaryFilter};
pub use catalog::{Catalog, Creature, Element, Rarity, RarityWeights};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::EngineConfig;
pub use engine::{CollectionEngine, DrawResult};
pub use error::{GachaError, GachaResult};
pub use state::CollectionState;
pub use store::{CollectionStore, JsonFileStore, MemoryStore, StoreError, StoreResult};
