//! Static content catalog: buildings and one-shot store upgrades.
//!
//! The catalog is data, not logic. It is never mutated at runtime and it is
//! the source of truth for which buildings/upgrades exist: saved state is
//! merged onto it at load time (see `save`). Slice order is display order,
//! and for store upgrades it is also the fold order of the formula engine.

/// A passive-income building type (catalog entry).
#[derive(Clone, Debug)]
pub struct Building {
    /// Unique identifier, also the foreign key used in save data.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Cost of the first unit; later units scale by 1.15 per owned unit.
    pub base_cost: f64,
    /// Cookies per second per owned unit, before upgrade multipliers.
    pub base_cps: f64,
    pub icon: &'static str,
}

/// What a store upgrade does once purchased.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UpgradeEffect {
    /// Multiplies both click power and the cursor building's rate.
    CursorMultiplier(f64),
    /// Multiplies the grandma building's rate.
    GrandmaMultiplier(f64),
    /// Adds a flat bonus per owned non-cursor building ("thousand fingers").
    FlatPerBuilding(f64),
    /// Multiplies the accumulated flat bonus ("million fingers").
    /// Order matters: applied in catalog order, after any FlatPerBuilding
    /// entries declared before it.
    FlatMultiplier(f64),
}

/// A one-time purchasable upgrade (catalog entry).
///
/// Cost is fixed — unlike buildings, it does not scale with purchases.
#[derive(Clone, Debug)]
pub struct StoreUpgrade {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub flavor_text: Option<&'static str>,
    pub cost: f64,
    /// Building whose owned count gates this upgrade.
    pub trigger_id: &'static str,
    /// Required owned count of the trigger building.
    pub req_count: u32,
    pub effect: UpgradeEffect,
    pub icon: &'static str,
}

pub const BUILDINGS: &[Building] = &[
    Building {
        id: "cursor",
        name: "Cursor Automático",
        description: "Clica automaticamente uma vez a cada 10 segundos.",
        base_cost: 15.0,
        base_cps: 0.1,
        icon: "👆",
    },
    Building {
        id: "grandma",
        name: "Vovó",
        description: "Uma vovó simpática para assar mais biscoitos.",
        base_cost: 100.0,
        base_cps: 1.0,
        icon: "👵",
    },
    Building {
        id: "farm",
        name: "Fazenda de Biscoitos",
        description: "Cultive biscoitos diretamente da terra.",
        base_cost: 1_100.0,
        base_cps: 8.0,
        icon: "🚜",
    },
    Building {
        id: "bakery",
        name: "Fábrica",
        description: "Produção em massa de biscoitos deliciosos.",
        base_cost: 12_000.0,
        base_cps: 47.0,
        icon: "🏭",
    },
    Building {
        id: "mine",
        name: "Mina de Chocolate",
        description: "Extração de chocolate puro do subsolo.",
        base_cost: 130_000.0,
        base_cps: 260.0,
        icon: "⛏️",
    },
    Building {
        id: "lab",
        name: "Laboratório de Alquimia",
        description: "Transforma ouro em biscoitos.",
        base_cost: 1_400_000.0,
        base_cps: 1_400.0,
        icon: "🧪",
    },
];

pub const STORE_UPGRADES: &[StoreUpgrade] = &[
    // ── Cursor upgrades ─────────────────────────────────────────
    StoreUpgrade {
        id: "reinforcedIndexFinger",
        name: "Indicador Reforçado",
        description: "O mouse e os cursores são duas vezes mais eficientes.",
        flavor_text: Some("prod prod"),
        cost: 100.0,
        trigger_id: "cursor",
        req_count: 1,
        effect: UpgradeEffect::CursorMultiplier(2.0),
        icon: "☝️",
    },
    StoreUpgrade {
        id: "carpalTunnelPreventionCream",
        name: "Creme Anti-Túnel do Carpo",
        description: "O mouse e os cursores são duas vezes mais eficientes.",
        flavor_text: Some("it... it hurts to click..."),
        cost: 500.0,
        trigger_id: "cursor",
        req_count: 1,
        effect: UpgradeEffect::CursorMultiplier(2.0),
        icon: "🧴",
    },
    StoreUpgrade {
        id: "ambidextrous",
        name: "Ambidestro",
        description: "O mouse e os cursores são duas vezes mais eficientes.",
        flavor_text: Some("Look ma, both hands!"),
        cost: 10_000.0,
        trigger_id: "cursor",
        req_count: 10,
        effect: UpgradeEffect::CursorMultiplier(2.0),
        icon: "👐",
    },
    StoreUpgrade {
        id: "thousandFingers",
        name: "Mil Dedos",
        description: "O mouse e os cursores ganham +0.1 cookies para cada prédio que não seja cursor.",
        flavor_text: Some("clickity"),
        cost: 100_000.0,
        trigger_id: "cursor",
        req_count: 25,
        effect: UpgradeEffect::FlatPerBuilding(0.1),
        icon: "🖐️",
    },
    StoreUpgrade {
        id: "millionFingers",
        name: "Um Milhão de Dedos",
        description: "Multiplica o ganho de Mil Dedos por 5.",
        flavor_text: Some("clickityclickity"),
        cost: 10_000_000.0,
        trigger_id: "cursor",
        req_count: 50,
        effect: UpgradeEffect::FlatMultiplier(5.0),
        icon: "🙌",
    },
    // ── Grandma upgrades ────────────────────────────────────────
    StoreUpgrade {
        id: "forwardsFromGrandma",
        name: "Encaminhados da Vovó",
        description: "Vovós são duas vezes mais eficientes.",
        flavor_text: Some("RE: RE: RE: olha esse biscoito"),
        cost: 1_000.0,
        trigger_id: "grandma",
        req_count: 1,
        effect: UpgradeEffect::GrandmaMultiplier(2.0),
        icon: "👵",
    },
    StoreUpgrade {
        id: "steelPlatedRollingPins",
        name: "Rolos de Aço",
        description: "Vovós são duas vezes mais eficientes.",
        flavor_text: Some("Duro na queda."),
        cost: 5_000.0,
        trigger_id: "grandma",
        req_count: 5,
        effect: UpgradeEffect::GrandmaMultiplier(2.0),
        icon: "👵",
    },
    StoreUpgrade {
        id: "lubricatedDentures",
        name: "Dentaduras Lubrificadas",
        description: "Vovós são duas vezes mais eficientes.",
        flavor_text: Some("Para aquela mastigada suave."),
        cost: 50_000.0,
        trigger_id: "grandma",
        req_count: 25,
        effect: UpgradeEffect::GrandmaMultiplier(2.0),
        icon: "👵",
    },
    StoreUpgrade {
        id: "pruneJuice",
        name: "Suco de Ameixa",
        description: "Vovós são duas vezes mais eficientes.",
        flavor_text: Some("Mantém tudo fluindo."),
        cost: 5_000_000.0,
        trigger_id: "grandma",
        req_count: 50,
        effect: UpgradeEffect::GrandmaMultiplier(2.0),
        icon: "👵",
    },
];

/// Look up a building definition by id.
pub fn building(id: &str) -> Option<&'static Building> {
    BUILDINGS.iter().find(|b| b.id == id)
}

/// Look up a store upgrade definition by id.
pub fn store_upgrade(id: &str) -> Option<&'static StoreUpgrade> {
    STORE_UPGRADES.iter().find(|u| u.id == id)
}

/// Buildings the formula engine treats specially.
///
/// The formulas hard-code behavior for these two ids (a deliberate match for
/// a small fixed catalog). Adding another special building means extending
/// this lookup and the formula engine together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialRole {
    /// Receives the cursor multiplier and the per-building flat bonus.
    Cursor,
    /// Receives the grandma multiplier.
    Grandma,
}

/// The single place where catalog ids map to formula special cases.
pub fn special_role(id: &str) -> Option<SpecialRole> {
    match id {
        "cursor" => Some(SpecialRole::Cursor),
        "grandma" => Some(SpecialRole::Grandma),
        _ => None,
    }
}
