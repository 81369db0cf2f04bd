//! Simulation core for Mestre do Biscoito, an idle cookie clicker.
//!
//! Everything here is shell-agnostic: the crate owns the catalog, the
//! production and cost math, the tick clock, and persistence, while the
//! embedding shell (the reference one runs in a browser) owns rendering,
//! input, and the frame loop. A typical embedding:
//!
//! ```
//! use biscoito_core::audio::NullAudio;
//! use biscoito_core::game::CookieGame;
//! use biscoito_core::storage::MemoryStore;
//!
//! let mut game = CookieGame::new(MemoryStore::new(), NullAudio);
//! game.update(0.0);
//! game.click();
//! game.update(1_000.0);
//! let snapshot = game.snapshot();
//! assert!(snapshot.cookies >= 1.0);
//! ```

pub mod audio;
pub mod catalog;
pub mod formula;
pub mod game;
pub mod logic;
pub mod save;
pub mod state;
pub mod storage;
pub mod time;

pub use game::{BuildingView, CookieGame, Snapshot, UpgradeView};
pub use state::GameState;
