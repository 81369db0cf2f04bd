//! Save/load and catalog merge.
//!
//! ## Compatibility policy
//!
//! The wire format is the one the original web build wrote, camelCase field
//! names included, so existing saves keep working:
//!
//! - building counts travel under `upgrades` (historical field name);
//! - purchased one-shot upgrades travel as an id list under `storeUpgrades`,
//!   with `cursorUpgrades` accepted as a legacy fallback;
//! - ids absent from the current catalog are dropped on load, and catalog
//!   entries absent from the save default to zero/unpurchased. The catalog
//!   is the source of truth for what exists.
//!
//! A save that fails to parse is discarded (and the stale key removed) and
//! the game starts fresh; corruption never aborts startup.

use serde::{Deserialize, Serialize};

use crate::state::GameState;
use crate::storage::KvStore;

/// Fixed key in the durable store.
pub const STORAGE_KEY: &str = "biscoito_clicker_save_v3";

/// One building's saved count.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SavedBuilding {
    pub id: String,
    pub count: u32,
}

/// The persisted record. Exactly the §6 wire shape.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct SaveData {
    pub cookies: f64,
    #[serde(rename = "lifetimeCookies")]
    pub lifetime_cookies: f64,
    /// Written as "now" at every save despite the name. Informational only.
    #[serde(rename = "startTime")]
    pub start_time: f64,
    /// Building counts (wire name is historical).
    pub upgrades: Vec<SavedBuilding>,
    /// Ids of purchased store upgrades.
    #[serde(rename = "storeUpgrades", skip_serializing_if = "Option::is_none")]
    pub store_upgrades: Option<Vec<String>>,
    /// Legacy name for `storeUpgrades`; read when the primary is absent.
    #[serde(rename = "cursorUpgrades", skip_serializing_if = "Option::is_none")]
    pub cursor_upgrades: Option<Vec<String>>,
}

impl SaveData {
    /// Purchased-upgrade ids, preferring the current field name.
    fn purchased_ids(&self) -> &[String] {
        match (&self.store_upgrades, &self.cursor_upgrades) {
            (Some(ids), _) => ids,
            (None, Some(legacy)) => {
                log::info!("save uses legacy cursorUpgrades field");
                legacy
            }
            (None, None) => &[],
        }
    }
}

/// Build the wire record from live state. `now_ms` becomes `startTime`.
pub fn extract_save(state: &GameState, now_ms: f64) -> SaveData {
    SaveData {
        cookies: state.cookies,
        lifetime_cookies: state.lifetime_cookies,
        start_time: now_ms,
        upgrades: state
            .buildings
            .iter()
            .map(|b| SavedBuilding {
                id: b.id.to_string(),
                count: b.count,
            })
            .collect(),
        store_upgrades: Some(
            state
                .store_upgrades
                .iter()
                .filter(|u| u.purchased)
                .map(|u| u.id.to_string())
                .collect(),
        ),
        cursor_upgrades: None,
    }
}

/// Reconcile a loaded snapshot with the current catalog.
///
/// Every catalog building gets its saved count or 0; saved ids not in the
/// catalog are dropped. Same rule for purchased upgrades.
pub fn merge_save(save: &SaveData) -> GameState {
    let mut state = GameState::new();
    state.cookies = save.cookies.max(0.0);
    state.lifetime_cookies = save.lifetime_cookies.max(0.0);
    state.saved_at_ms = save.start_time;

    for building in &mut state.buildings {
        if let Some(saved) = save.upgrades.iter().find(|s| s.id == building.id) {
            building.count = saved.count;
        }
    }

    let purchased = save.purchased_ids();
    for upgrade in &mut state.store_upgrades {
        upgrade.purchased = purchased.iter().any(|id| id == upgrade.id);
    }

    state
}

/// Serialize and persist. On success updates the state's last-save
/// timestamp; on failure logs and leaves everything as it was (the next
/// autosave retries).
pub fn save_game<S: KvStore>(store: &mut S, state: &mut GameState, now_ms: f64) -> bool {
    let record = extract_save(state, now_ms);
    let json = match serde_json::to_string(&record) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("save serialization failed: {e}");
            return false;
        }
    };
    match store.set(STORAGE_KEY, &json) {
        Ok(()) => {
            state.saved_at_ms = now_ms;
            true
        }
        Err(e) => {
            log::warn!("save skipped: {e}");
            false
        }
    }
}

/// Load and merge the persisted snapshot. `None` means "no usable save":
/// key absent, or contents unparseable (in which case the key is removed).
pub fn load_game<S: KvStore>(store: &mut S) -> Option<GameState> {
    let json = store.get(STORAGE_KEY)?;
    match serde_json::from_str::<SaveData>(&json) {
        Ok(save) => Some(merge_save(&save)),
        Err(e) => {
            log::warn!("discarding unparseable save: {e}");
            store.remove(STORAGE_KEY);
            None
        }
    }
}

/// Remove the persisted snapshot entirely.
pub fn erase_save<S: KvStore>(store: &mut S) {
    store.remove(STORAGE_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::storage::MemoryStore;

    fn purchased_count(state: &GameState) -> usize {
        state.store_upgrades.iter().filter(|u| u.purchased).count()
    }

    fn populated_state() -> GameState {
        let mut state = GameState::new();
        state.cookies = 1_234.5;
        state.lifetime_cookies = 99_999.0;
        state.saved_at_ms = 1_700_000_000_000.0;
        state.building_mut("cursor").unwrap().count = 10;
        state.building_mut("grandma").unwrap().count = 4;
        state
            .store_upgrades
            .iter_mut()
            .find(|u| u.id == "reinforcedIndexFinger")
            .unwrap()
            .purchased = true;
        state
    }

    #[test]
    fn extract_then_merge_roundtrips() {
        let state = populated_state();
        let record = extract_save(&state, state.saved_at_ms);
        let json = serde_json::to_string(&record).unwrap();
        let parsed: SaveData = serde_json::from_str(&json).unwrap();
        let restored = merge_save(&parsed);
        assert_eq!(restored, state);
    }

    #[test]
    fn wire_format_field_names() {
        let record = extract_save(&populated_state(), 123.0);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"lifetimeCookies\""));
        assert!(json.contains("\"startTime\""));
        assert!(json.contains("\"storeUpgrades\""));
        assert!(json.contains("\"upgrades\""));
        assert!(!json.contains("cursorUpgrades"));
    }

    #[test]
    fn merge_drops_unknown_building() {
        let json = r#"{
            "cookies": 50.0,
            "lifetimeCookies": 60.0,
            "startTime": 0,
            "upgrades": [
                { "id": "cursor", "count": 3 },
                { "id": "antimatterCondenser", "count": 999 }
            ],
            "storeUpgrades": []
        }"#;
        let save: SaveData = serde_json::from_str(json).unwrap();
        let state = merge_save(&save);
        assert_eq!(state.building_count("cursor"), 3);
        // The unknown id is gone and every catalog building has an entry.
        assert_eq!(state.buildings.len(), catalog::BUILDINGS.len());
        assert!(state.buildings.iter().all(|b| b.count <= 3));
    }

    #[test]
    fn merge_defaults_missing_building_to_zero() {
        let json = r#"{
            "cookies": 0,
            "lifetimeCookies": 0,
            "startTime": 0,
            "upgrades": [ { "id": "grandma", "count": 7 } ],
            "storeUpgrades": []
        }"#;
        let save: SaveData = serde_json::from_str(json).unwrap();
        let state = merge_save(&save);
        assert_eq!(state.building_count("grandma"), 7);
        assert_eq!(state.building_count("cursor"), 0);
        assert_eq!(state.building_count("lab"), 0);
    }

    #[test]
    fn merge_reads_legacy_cursor_upgrades_field() {
        let json = r#"{
            "cookies": 10,
            "lifetimeCookies": 10,
            "startTime": 0,
            "upgrades": [ { "id": "cursor", "count": 1 } ],
            "cursorUpgrades": ["reinforcedIndexFinger", "noSuchUpgrade"]
        }"#;
        let save: SaveData = serde_json::from_str(json).unwrap();
        let state = merge_save(&save);
        assert!(state.is_purchased("reinforcedIndexFinger"));
        assert_eq!(purchased_count(&state), 1);
    }

    #[test]
    fn primary_field_wins_over_legacy() {
        let json = r#"{
            "storeUpgrades": ["forwardsFromGrandma"],
            "cursorUpgrades": ["reinforcedIndexFinger"]
        }"#;
        let save: SaveData = serde_json::from_str(json).unwrap();
        let state = merge_save(&save);
        assert!(state.is_purchased("forwardsFromGrandma"));
        assert!(!state.is_purchased("reinforcedIndexFinger"));
    }

    #[test]
    fn merge_defaults_absent_scalars_to_zero() {
        let save: SaveData = serde_json::from_str("{}").unwrap();
        let state = merge_save(&save);
        assert_eq!(state.cookies, 0.0);
        assert_eq!(state.lifetime_cookies, 0.0);
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn merge_clamps_negative_currency() {
        let save: SaveData =
            serde_json::from_str(r#"{ "cookies": -5.0, "lifetimeCookies": -1.0 }"#).unwrap();
        let state = merge_save(&save);
        assert_eq!(state.cookies, 0.0);
        assert_eq!(state.lifetime_cookies, 0.0);
    }

    #[test]
    fn load_missing_key_is_none() {
        let mut store = MemoryStore::new();
        assert!(load_game(&mut store).is_none());
    }

    #[test]
    fn load_discards_corrupt_save() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "{ not json").unwrap();
        assert!(load_game(&mut store).is_none());
        // The stale key was cleaned up.
        assert!(store.get(STORAGE_KEY).is_none());
    }

    #[test]
    fn save_then_load_through_store() {
        let mut store = MemoryStore::new();
        let mut state = populated_state();
        assert!(save_game(&mut store, &mut state, 42.0));
        assert_eq!(state.saved_at_ms, 42.0);
        let loaded = load_game(&mut store).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn erase_removes_key() {
        let mut store = MemoryStore::new();
        let mut state = GameState::new();
        save_game(&mut store, &mut state, 0.0);
        erase_save(&mut store);
        assert!(store.get(STORAGE_KEY).is_none());
    }
}
