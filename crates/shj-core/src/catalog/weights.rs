//! Relative draw weight per rarity tier.

use serde::{Deserialize, Serialize};

use super::Rarity;
use crate::error::{GachaError, GachaResult};

/// A weight for every [`Rarity`] variant.
///
/// Missing fields in data files fall back to the default weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RarityWeights {
    /// Weight of [`Rarity::Common`].
    pub common: f64,
    /// Weight of [`Rarity::Rare`].
    pub rare: f64,
    /// Weight of [`Rarity::Epic`].
    pub epic: f64,
    /// Weight of [`Rarity::Legendary`].
    pub legendary: f64,
    /// Weight of [`Rarity::Mythical`].
    pub mythical: f64,
}

impl Default for RarityWeights {
    fn default() -> Self {
        Self {
            common: 40.0,
            rare: 30.0,
            epic: 20.0,
            legendary: 8.0,
            mythical: 2.0,
        }
    }
}

impl RarityWeights {
    /// The weight registered for a rarity.
    pub fn get(&self, rarity: Rarity) -> f64 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Rare => self.rare,
            Rarity::Epic => self.epic,
            Rarity::Legendary => self.legendary,
            Rarity::Mythical => self.mythical,
        }
    }

    /// Replace the weight of one rarity.
    pub fn with(mut self, rarity: Rarity, weight: f64) -> Self {
        let slot = match rarity {
            Rarity::Common => &mut self.common,
            Rarity::Rare => &mut self.rare,
            Rarity::Epic => &mut self.epic,
            Rarity::Legendary => &mut self.legendary,
            Rarity::Mythical => &mut self.mythical,
        };
        *slot = weight;
        self
    }

    /// Rarity/weight pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (Rarity, f64)> + '_ {
        Rarity::ALL.into_iter().map(|r| (r, self.get(r)))
    }

    /// Check that every weight is finite and strictly positive.
    pub fn validate(&self) -> GachaResult<()> {
        for (rarity, weight) in self.iter() {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(GachaError::InvalidWeight { rarity, weight });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_table() {
        let w = RarityWeights::default();
        let pairs: Vec<_> = w.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Rarity::Common, 40.0),
                (Rarity::Rare, 30.0),
                (Rarity::Epic, 20.0),
                (Rarity::Legendary, 8.0),
                (Rarity::Mythical, 2.0),
            ]
        );
        assert!(w.validate().is_ok());
    }

    #[test]
    fn with_replaces_single_weight() {
        let w = RarityWeights::default().with(Rarity::Epic, 5.5);
        assert_eq!(w.get(Rarity::Epic), 5.5);
        assert_eq!(w.get(Rarity::Common), 40.0);
    }

    #[test]
    fn rejects_non_positive_and_nan() {
        let zero = RarityWeights::default().with(Rarity::Rare, 0.0);
        assert!(matches!(
            zero.validate(),
            Err(GachaError::InvalidWeight {
                rarity: Rarity::Rare,
                ..
            })
        ));
        let nan = RarityWeights::default().with(Rarity::Mythical, f64::NAN);
        assert!(nan.validate().is_err());
        let inf = RarityWeights::default().with(Rarity::Common, f64::INFINITY);
        assert!(inf.validate().is_err());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let w: RarityWeights = serde_json::from_str(r#"{"common": 1, "rare": 3}"#).unwrap();
        assert_eq!(w.common, 1.0);
        assert_eq!(w.rare, 3.0);
        assert_eq!(w.mythical, 2.0);
    }
}
