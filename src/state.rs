//! Mestre do Biscoito game state definitions.
//!
//! `GameState` is the aggregate root. It is only mutated through the
//! operations in `logic` (and hydrated by `save::merge_save`); the catalog
//! itself never changes at runtime.

use crate::catalog;
use crate::formula;

/// Owned count for one catalog building. One entry exists per catalog
/// building, in catalog order; counts start at 0 and only grow (no selling).
#[derive(Clone, Debug, PartialEq)]
pub struct BuildingState {
    pub id: &'static str,
    pub count: u32,
}

/// Purchase flag for one catalog store upgrade. Monotonic false → true.
#[derive(Clone, Debug, PartialEq)]
pub struct StoreUpgradeState {
    pub id: &'static str,
    pub purchased: bool,
}

/// Full simulation state.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Spendable cookies. Never negative; fractional — production accrues
    /// continuously.
    pub cookies: f64,
    /// Cookies earned all-time. Only increases; spending does not reduce it.
    pub lifetime_cookies: f64,
    /// Epoch ms written at the last save. Informational only; the wire field
    /// is called `startTime` for historical reasons.
    pub saved_at_ms: f64,
    /// One entry per catalog building, in catalog order.
    pub buildings: Vec<BuildingState>,
    /// One entry per catalog store upgrade, in catalog order.
    pub store_upgrades: Vec<StoreUpgradeState>,
}

impl GameState {
    /// Fresh state: zero cookies, zero counts, nothing purchased.
    pub fn new() -> Self {
        Self {
            cookies: 0.0,
            lifetime_cookies: 0.0,
            saved_at_ms: 0.0,
            buildings: catalog::BUILDINGS
                .iter()
                .map(|b| BuildingState { id: b.id, count: 0 })
                .collect(),
            store_upgrades: catalog::STORE_UPGRADES
                .iter()
                .map(|u| StoreUpgradeState {
                    id: u.id,
                    purchased: false,
                })
                .collect(),
        }
    }

    pub fn building(&self, id: &str) -> Option<&BuildingState> {
        self.buildings.iter().find(|b| b.id == id)
    }

    pub fn building_mut(&mut self, id: &str) -> Option<&mut BuildingState> {
        self.buildings.iter_mut().find(|b| b.id == id)
    }

    /// Owned count of a building; 0 for unknown ids.
    pub fn building_count(&self, id: &str) -> u32 {
        self.building(id).map_or(0, |b| b.count)
    }

    pub fn is_purchased(&self, id: &str) -> bool {
        self.store_upgrades
            .iter()
            .any(|u| u.id == id && u.purchased)
    }

    /// Whether a store upgrade's building-count gate is met.
    pub fn is_unlocked(&self, upgrade: &catalog::StoreUpgrade) -> bool {
        self.building_count(upgrade.trigger_id) >= upgrade.req_count
    }

    /// Current aggregate production rate (cookies per second).
    pub fn total_cps(&self) -> f64 {
        formula::total_cps(&self.buildings, &self.store_upgrades)
    }

    /// Current cookies granted per manual click.
    pub fn click_power(&self) -> f64 {
        formula::click_power(&self.buildings, &self.store_upgrades)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
