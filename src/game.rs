//! Game session: state + clock + persistence + audio, wired together.
//!
//! `CookieGame` is what a shell embeds. The shell owns the frame loop and
//! calls `update(now_ms)` each frame; the session turns elapsed time into
//! ticks, accrues production, and autosaves every 10 seconds. Player input
//! arrives as `click` / `buy_*` calls between frames, so all mutation happens
//! on the caller's single thread and no operation ever observes a half-applied
//! purchase.

use crate::audio::{AudioHook, SoundEffect};
use crate::catalog;
use crate::formula;
use crate::logic;
use crate::save;
use crate::state::GameState;
use crate::storage::KvStore;
use crate::time::{epoch_now_ms, ticks_to_secs, IntervalTimer, TickClock, TICKS_PER_SEC};

/// Ticks between automatic saves (10 seconds at the 100ms cadence).
pub const AUTOSAVE_TICKS: u32 = 10 * TICKS_PER_SEC;

/// A running game session.
pub struct CookieGame<S: KvStore, A: AudioHook> {
    state: GameState,
    storage: S,
    audio: A,
    clock: TickClock,
    autosave: IntervalTimer,
}

impl<S: KvStore, A: AudioHook> CookieGame<S, A> {
    /// Start a session: hydrate from the persisted save if one exists,
    /// otherwise begin fresh. The clock starts only once `update` is first
    /// called, so no production can accrue before hydration.
    pub fn new(mut storage: S, audio: A) -> Self {
        let state = match save::load_game(&mut storage) {
            Some(state) => {
                log::info!("resumed save with {} cookies", state.cookies);
                state
            }
            None => GameState::new(),
        };
        Self {
            state,
            storage,
            audio,
            clock: TickClock::new(),
            autosave: IntervalTimer::new(AUTOSAVE_TICKS),
        }
    }

    /// Advance the simulation to `now_ms` (a monotonic timestamp). Accrues
    /// production for the elapsed whole ticks and fires the autosave when its
    /// interval completes. Call once per frame.
    pub fn update(&mut self, now_ms: f64) {
        let ticks = self.clock.advance(now_ms);
        if ticks == 0 {
            return;
        }
        logic::apply_production(&mut self.state, ticks_to_secs(ticks));
        if self.autosave.advance(ticks) {
            self.save();
        }
    }

    /// A manual cookie click.
    pub fn click(&mut self) {
        logic::earn(&mut self.state, 1.0);
        self.audio.play_effect(SoundEffect::Click);
    }

    /// Buy one unit of a building. On success the purchase is persisted
    /// immediately; on failure (unknown id, can't afford) nothing changes.
    pub fn buy_building(&mut self, id: &str) -> bool {
        let bought = logic::buy_building(&mut self.state, id);
        if bought {
            self.audio.play_effect(SoundEffect::Purchase);
            self.save();
        }
        bought
    }

    /// Buy a one-shot store upgrade. Same persistence rule as buildings.
    pub fn buy_store_upgrade(&mut self, id: &str) -> bool {
        let bought = logic::buy_store_upgrade(&mut self.state, id);
        if bought {
            self.audio.play_effect(SoundEffect::Purchase);
            self.save();
        }
        bought
    }

    /// Persist now, stamping the record with wall-clock epoch ms (the wire
    /// `startTime` field). Also restarts the autosave countdown so a manual
    /// save isn't followed by an automatic one moments later.
    pub fn save(&mut self) -> bool {
        let ok = save::save_game(&mut self.storage, &mut self.state, epoch_now_ms());
        if ok {
            self.autosave.reset();
        }
        ok
    }

    /// Wipe all progress and the persisted save. This is irreversible; the
    /// shell is expected to confirm with the player before calling.
    pub fn reset(&mut self) {
        self.state = GameState::new();
        save::erase_save(&mut self.storage);
        self.autosave.reset();
        log::info!("progress reset");
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Tear down the session, handing the storage back (e.g. to start a new
    /// session against the same backend).
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Epoch ms of the last successful save, 0 if never saved.
    pub fn last_save_ms(&self) -> f64 {
        self.state.saved_at_ms
    }

    /// Read-only view of everything a shell renders in one frame.
    pub fn snapshot(&self) -> Snapshot {
        let cookies = self.state.cookies;
        Snapshot {
            cookies,
            lifetime_cookies: self.state.lifetime_cookies,
            cps: self.state.total_cps(),
            click_power: self.state.click_power(),
            buildings: catalog::BUILDINGS
                .iter()
                .map(|def| {
                    let count = self.state.building_count(def.id);
                    let next_cost = formula::cost(def.base_cost, count);
                    BuildingView {
                        id: def.id,
                        name: def.name,
                        icon: def.icon,
                        count,
                        next_cost,
                        affordable: cookies >= next_cost,
                    }
                })
                .collect(),
            upgrades: catalog::STORE_UPGRADES
                .iter()
                .map(|def| UpgradeView {
                    id: def.id,
                    name: def.name,
                    description: def.description,
                    flavor_text: def.flavor_text,
                    icon: def.icon,
                    cost: def.cost,
                    purchased: self.state.is_purchased(def.id),
                    unlocked: self.state.is_unlocked(def),
                    affordable: cookies >= def.cost,
                })
                .collect(),
        }
    }
}

/// One frame's render data.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub cookies: f64,
    pub lifetime_cookies: f64,
    pub cps: f64,
    pub click_power: f64,
    pub buildings: Vec<BuildingView>,
    pub upgrades: Vec<UpgradeView>,
}

/// One building row in the shop, with the price of the next unit.
#[derive(Clone, Debug)]
pub struct BuildingView {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub count: u32,
    pub next_cost: f64,
    pub affordable: bool,
}

/// One store-upgrade row. `unlocked` gates visibility; `purchased` rows are
/// shown grayed out by the reference shell.
#[derive(Clone, Debug)]
pub struct UpgradeView {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub flavor_text: Option<&'static str>,
    pub icon: &'static str,
    pub cost: f64,
    pub purchased: bool,
    pub unlocked: bool,
    pub affordable: bool,
}
