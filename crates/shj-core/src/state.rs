//! The persisted collection record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which creatures have been unlocked, how many draws were made, and when
/// the last one happened.
///
/// Serialises as `{"unlockedCreatures": [..], "drawCount": n, "lastDrawTime": ms|null}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionState {
    /// Unlocked creature ids in unlock order, without duplicates.
    pub unlocked_creatures: Vec<String>,
    /// Total number of single draws ever made.
    pub draw_count: u64,
    /// Epoch milliseconds of the most recent draw.
    pub last_draw_time: Option<i64>,
}

impl CollectionState {
    /// The empty initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a stored value field by field.
    ///
    /// Fields that are missing or have the wrong shape keep their default,
    /// unknown fields are ignored, and non-string or repeated ids are dropped.
    /// A value that is not an object decodes to the empty state.
    pub fn from_value(value: &Value) -> Self {
        let mut state = Self::default();
        let Some(obj) = value.as_object() else {
            return state;
        };

        if let Some(Value::Array(items)) = obj.get("unlockedCreatures") {
            for id in items.iter().filter_map(Value::as_str) {
                if !state.unlocked_creatures.iter().any(|u| u == id) {
                    state.unlocked_creatures.push(id.to_string());
                }
            }
        }
        if let Some(count) = obj.get("drawCount").and_then(Value::as_u64) {
            state.draw_count = count;
        }
        if let Some(ms) = obj.get("lastDrawTime").and_then(Value::as_i64) {
            state.last_draw_time = Some(ms);
        }
        state
    }

    /// Encode for storage.
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "unlockedCreatures": self.unlocked_creatures,
            "drawCount": self.draw_count,
            "lastDrawTime": self.last_draw_time,
        })
    }

    /// The last draw time as a UTC timestamp.
    pub fn last_draw_at(&self) -> Option<DateTime<Utc>> {
        self.last_draw_time.and_then(DateTime::from_timestamp_millis)
    }

    /// Whether this equals the initial state.
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_is_empty() {
        let s = CollectionState::new();
        assert!(s.unlocked_creatures.is_empty());
        assert_eq!(s.draw_count, 0);
        assert_eq!(s.last_draw_time, None);
        assert!(s.is_initial());
    }

    #[test]
    fn value_round_trip() {
        let s = CollectionState {
            unlocked_creatures: vec!["qilin".to_string(), "huan".to_string()],
            draw_count: 12,
            last_draw_time: Some(1_700_000_000_000),
        };
        assert_eq!(CollectionState::from_value(&s.to_value()), s);
    }

    #[test]
    fn serde_matches_to_value() {
        let s = CollectionState {
            unlocked_creatures: vec!["bifang".to_string()],
            draw_count: 1,
            last_draw_time: None,
        };
        assert_eq!(serde_json::to_value(&s).unwrap(), s.to_value());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let s = CollectionState::from_value(&json!({ "drawCount": 4 }));
        assert!(s.unlocked_creatures.is_empty());
        assert_eq!(s.draw_count, 4);
        assert_eq!(s.last_draw_time, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let s = CollectionState::from_value(&json!({
            "unlockedCreatures": ["taotie"],
            "drawCount": 2,
            "lastDrawTime": 5,
            "favourite": "taotie",
        }));
        assert_eq!(s.unlocked_creatures, vec!["taotie"]);
        assert_eq!(s.draw_count, 2);
        assert_eq!(s.last_draw_time, Some(5));
    }

    #[test]
    fn wrong_shapes_fall_back_per_field() {
        let s = CollectionState::from_value(&json!({
            "unlockedCreatures": "qilin",
            "drawCount": -3,
            "lastDrawTime": "yesterday",
        }));
        assert!(s.is_initial());

        let s = CollectionState::from_value(&json!({
            "unlockedCreatures": ["qilin", 7, null, "qilin", "huan"],
            "drawCount": 2.5,
        }));
        assert_eq!(s.unlocked_creatures, vec!["qilin", "huan"]);
        assert_eq!(s.draw_count, 0);
    }

    #[test]
    fn non_object_decodes_to_initial() {
        assert!(CollectionState::from_value(&json!([1, 2, 3])).is_initial());
        assert!(CollectionState::from_value(&Value::Null).is_initial());
    }

    #[test]
    fn last_draw_at_converts_millis() {
        let s = CollectionState {
            last_draw_time: Some(1_700_000_000_123),
            ..Default::default()
        };
        let at = s.last_draw_at().unwrap();
        assert_eq!(at.timestamp_millis(), 1_700_000_000_123);
    }
}
