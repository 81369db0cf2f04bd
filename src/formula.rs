//! Pure purchase-cost and production math. No side effects, fully testable.

use crate::catalog::{self, SpecialRole, UpgradeEffect};
use crate::state::{BuildingState, StoreUpgradeState};

/// Cookies granted by one manual click before multipliers.
pub const BASE_CLICK: f64 = 1.0;

/// Per-unit price growth factor for buildings.
const COST_GROWTH: f64 = 1.15;

/// Cost of the next unit of a building: `ceil(base × 1.15^owned)`.
///
/// Strictly increasing in `owned`. This is the only cost-scaling law in the
/// game; store upgrades have fixed prices.
pub fn cost(base_cost: f64, owned: u32) -> f64 {
    (base_cost * COST_GROWTH.powi(owned as i32)).ceil()
}

/// Aggregate effect of all purchased store upgrades.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Multipliers {
    /// Applied to manual clicks.
    pub click: f64,
    /// Applied to the cursor building's per-unit rate.
    pub cursor: f64,
    /// Applied to the grandma building's per-unit rate.
    pub grandma: f64,
    /// Flat cookies added per owned non-cursor building, to both clicks and
    /// each cursor unit's rate.
    pub flat_per_building: f64,
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            click: 1.0,
            cursor: 1.0,
            grandma: 1.0,
            flat_per_building: 0.0,
        }
    }
}

/// Fold purchased upgrades into a single `Multipliers`.
///
/// Walks the catalog in declaration order, so a `FlatMultiplier` scales
/// whatever flat bonus the entries before it accumulated. Catalog order is
/// canonical here; reordering entries would change the result.
pub fn aggregate_multipliers(upgrades: &[StoreUpgradeState]) -> Multipliers {
    let mut m = Multipliers::default();
    for def in catalog::STORE_UPGRADES {
        let purchased = upgrades
            .iter()
            .any(|u| u.id == def.id && u.purchased);
        if !purchased {
            continue;
        }
        match def.effect {
            UpgradeEffect::CursorMultiplier(v) => {
                m.click *= v;
                m.cursor *= v;
            }
            UpgradeEffect::GrandmaMultiplier(v) => m.grandma *= v,
            UpgradeEffect::FlatPerBuilding(v) => m.flat_per_building += v,
            UpgradeEffect::FlatMultiplier(v) => m.flat_per_building *= v,
        }
    }
    m
}

/// Total owned units of every building except the cursor.
pub fn non_cursor_count(buildings: &[BuildingState]) -> u32 {
    buildings
        .iter()
        .filter(|b| catalog::special_role(b.id) != Some(SpecialRole::Cursor))
        .map(|b| b.count)
        .sum()
}

/// Cookies granted per manual click:
/// `base × clickMultiplier + flatBonus × nonCursorCount`.
pub fn click_power(buildings: &[BuildingState], upgrades: &[StoreUpgradeState]) -> f64 {
    let m = aggregate_multipliers(upgrades);
    BASE_CLICK * m.click + m.flat_per_building * non_cursor_count(buildings) as f64
}

/// Total cookies per second from all owned buildings.
///
/// Cursors get their multiplier plus the flat bonus per non-cursor building;
/// grandmas get their multiplier; everything else runs at base rate.
pub fn total_cps(buildings: &[BuildingState], upgrades: &[StoreUpgradeState]) -> f64 {
    let m = aggregate_multipliers(upgrades);
    let helpers = non_cursor_count(buildings) as f64;

    buildings
        .iter()
        .map(|b| {
            let def = match catalog::building(b.id) {
                Some(d) => d,
                None => return 0.0,
            };
            let per_unit = match catalog::special_role(b.id) {
                Some(SpecialRole::Cursor) => {
                    def.base_cps * m.cursor + m.flat_per_building * helpers
                }
                Some(SpecialRole::Grandma) => def.base_cps * m.grandma,
                None => def.base_cps,
            };
            per_unit * b.count as f64
        })
        .sum()
}
