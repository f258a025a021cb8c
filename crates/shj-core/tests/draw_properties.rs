//! Statistical and property checks for the weighted draw and collection state.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use shj_core::{
    Catalog, CollectionEngine, CollectionState, Creature, EngineConfig, FixedClock, MemoryStore,
    Rarity, RarityWeights,
};

fn one_to_three() -> Catalog {
    // Epic, legendary, and mythical keep their default weights but have no
    // members, so they must not take part.
    Catalog::new(
        vec![
            Creature::new("huan", "Huan", Rarity::Common),
            Creature::new("taotie", "Taotie", Rarity::Rare),
        ],
        RarityWeights::default()
            .with(Rarity::Common, 1.0)
            .with(Rarity::Rare, 3.0),
    )
    .unwrap()
}

fn open(catalog: Catalog, store: MemoryStore, seed: u64) -> CollectionEngine<MemoryStore> {
    CollectionEngine::open(catalog, store, EngineConfig::default().with_seed(seed))
        .with_clock(FixedClock(1_700_000_000_000))
}

// ---------------------------------------------------------------------------
// weighting
// ---------------------------------------------------------------------------

#[test]
fn weights_converge_to_one_to_three() {
    let catalog = one_to_three();
    let mut rng = StdRng::seed_from_u64(2024);
    let n = 100_000;
    let commons = (0..n)
        .filter(|_| catalog.select(&mut rng).unwrap().rarity == Rarity::Common)
        .count();
    let share = commons as f64 / n as f64;
    assert!((share - 0.25).abs() < 0.01, "common share was {share}");
}

#[test]
fn engine_batches_follow_the_same_weights() {
    let mut engine = open(one_to_three(), MemoryStore::new(), 99);
    let results = engine.draw_multiple(20_000).unwrap();
    let rares = results
        .iter()
        .filter(|r| r.creature.rarity == Rarity::Rare)
        .count();
    let share = rares as f64 / results.len() as f64;
    assert!((share - 0.75).abs() < 0.02, "rare share was {share}");
    assert_eq!(engine.draw_count(), 20_000);
}

#[test]
fn builtin_odds_match_reference_table() {
    let catalog = Catalog::builtin().unwrap();
    let odds: HashMap<Rarity, f64> = catalog.rarity_odds().into_iter().collect();
    assert_eq!(odds[&Rarity::Common], 40.0);
    assert_eq!(odds[&Rarity::Mythical], 2.0);
    let total: f64 = odds.values().sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn every_creature_is_reachable() {
    let catalog = Catalog::builtin().unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let seen: HashSet<String> = (0..20_000)
        .map(|_| catalog.select(&mut rng).unwrap().id.clone())
        .collect();
    for creature in catalog.all_creatures() {
        assert!(seen.contains(&creature.id), "{} never drawn", creature.id);
    }
}

#[test]
fn uniform_within_a_tier() {
    let catalog = Catalog::builtin().unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..50_000 {
        let c = catalog.select(&mut rng).unwrap();
        if c.rarity == Rarity::Epic {
            *counts.entry(c.id.clone()).or_default() += 1;
        }
    }
    let bifang = counts["bifang"] as f64;
    let dijiang = counts["dijiang"] as f64;
    let ratio = bifang / dijiang;
    assert!((ratio - 1.0).abs() < 0.1, "bifang/dijiang ratio was {ratio}");
}

// ---------------------------------------------------------------------------
// new-flag and persistence
// ---------------------------------------------------------------------------

#[test]
fn batch_with_forced_repeat_flags_first_only() {
    let catalog = Catalog::new(
        vec![Creature::new("qilin", "Qilin", Rarity::Mythical)],
        RarityWeights::default(),
    )
    .unwrap();
    let mut engine = open(catalog, MemoryStore::new(), 1);
    let results = engine.draw_multiple(5).unwrap();
    assert!(results[0].is_new);
    assert!(!results[1].is_new);
    assert_eq!(engine.state().unlocked_creatures, vec!["qilin"]);
}

#[test]
fn persisted_state_snapshot() {
    let catalog = Catalog::new(
        vec![Creature::new("kun", "Kun", Rarity::Epic)],
        RarityWeights::default(),
    )
    .unwrap();
    let store = MemoryStore::new();
    let mut engine = open(catalog, store.clone(), 3);
    engine.draw().unwrap();
    engine.draw_multiple(2).unwrap();

    let saved = CollectionState::from_value(&store.value().unwrap());
    let saved = serde_json::to_string(&saved).unwrap();
    insta::assert_snapshot!(saved, @r#"{"unlockedCreatures":["kun"],"drawCount":3,"lastDrawTime":1700000000000}"#);

    engine.reset();
    let saved = serde_json::to_string(engine.state()).unwrap();
    insta::assert_snapshot!(saved, @r#"{"unlockedCreatures":[],"drawCount":0,"lastDrawTime":null}"#);
}

#[test]
fn reopening_restores_state() {
    let store = MemoryStore::new();
    let before = {
        let mut engine = open(Catalog::builtin().unwrap(), store.clone(), 8);
        engine.draw_multiple(12).unwrap();
        engine.state().clone()
    };
    let engine = open(Catalog::builtin().unwrap(), store, 8);
    assert_eq!(engine.state(), &before);
}

#[test]
fn corrupt_shapes_do_not_block_startup() {
    let store = MemoryStore::with_value(json!("garbage"));
    let mut engine = open(Catalog::builtin().unwrap(), store, 4);
    assert!(engine.is_ready());
    assert!(engine.state().is_initial());
    assert!(engine.draw().is_ok());
}

// ---------------------------------------------------------------------------
// properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn draw_count_is_sum_of_counts(counts in prop::collection::vec(0usize..6, 0..20), seed in any::<u64>()) {
        let mut engine = open(Catalog::builtin().unwrap(), MemoryStore::new(), seed);
        let mut expected = 0u64;
        for count in counts {
            let previous = engine.draw_count();
            let results = engine.draw_multiple(count).unwrap();
            prop_assert_eq!(results.len(), count);
            expected += count as u64;
            prop_assert!(engine.draw_count() >= previous);
            prop_assert_eq!(engine.draw_count(), expected);
        }
    }

    #[test]
    fn progress_stays_in_bounds(mask in prop::collection::vec(any::<bool>(), 8)) {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<String> = catalog
            .all_creatures()
            .iter()
            .zip(&mask)
            .filter(|(_, keep)| **keep)
            .map(|(c, _)| c.id.clone())
            .collect();
        let unlocked = ids.len();
        let store = MemoryStore::with_value(json!({ "unlockedCreatures": ids }));
        let engine = open(catalog, store, 0);
        let progress = engine.progress_percent();
        match unlocked {
            0 => prop_assert_eq!(progress, 0),
            8 => prop_assert_eq!(progress, 100),
            _ => prop_assert!(progress > 0 && progress < 100),
        }
    }

    #[test]
    fn state_value_round_trip(
        ids in prop::collection::hash_set("[a-z-]{1,12}", 0..10),
        draw_count in any::<u64>(),
        last in proptest::option::of(any::<i64>()),
    ) {
        let state = CollectionState {
            unlocked_creatures: ids.into_iter().collect(),
            draw_count,
            last_draw_time: last,
        };
        prop_assert_eq!(CollectionState::from_value(&state.to_value()), state.clone());

        let mut extended = state.to_value();
        extended["schemaVersion"] = json!(2);
        prop_assert_eq!(CollectionState::from_value(&extended), state);
    }
}
