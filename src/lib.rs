//! # outbreak-engine
//!
//! Rules engine and session state machine for a cooperative outbreak board
//! game: players move across a map of connected locations, treat and cure
//! four diseases, and lose when outbreaks, disease supply or the location
//! deck run out.
//!
//! ## Design Principles
//!
//! 1. **Atomic Actions**: `GameState::apply` either applies a whole action or
//!    leaves the state untouched. Defeat and victory end an action early and
//!    come back as a full state projection.
//!
//! 2. **Deterministic**: every random choice goes through the seeded
//!    `GameRng` stored in the state, so a seed and an action list always
//!    replay to the same game.
//!
//! 3. **Configuration Over Convention**: limits, rates and deck sizes live in
//!    `Rules`; the board lives in `MapCatalog`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: `im` collections make `GameState`
//!   clones cheap; rollback and undo are plain clones.
//!
//! - **Deltas**: each action reports the fields it touched as a `FieldSet`,
//!   projected into a `StateDelta` for clients.
//!
//! ## Modules
//!
//! - `core`: players, rules, state, actions, phases, deltas, errors, RNG
//! - `map`: diseases, location catalog, the built-in world map
//! - `cards`: cards, deck construction, hand operations
//! - `rules`: setup, preconditions, action handlers, infection and cures
//! - `session`: live games with undo, room registry, repository boundary
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use outbreak_engine::{standard_map, GameAction, GameState, Role, RoomSetup};
//!
//! let setup = RoomSetup::new(Arc::new(standard_map().unwrap()), 42)
//!     .with_seat("ann", Role::Medic)
//!     .with_seat("bob", Role::Dispatcher);
//! let mut state = GameState::start(&setup).unwrap();
//!
//! let player = state.current_player.clone();
//! let delta = state.apply(&player, &GameAction::move_to("Chicago")).unwrap();
//! assert_eq!(delta.player_actions, Some(1));
//! ```

pub mod cards;
pub mod core;
pub mod map;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    events, ActionRecord, DefeatCause, EventAction, Field, FieldSet, GameAction, GameError,
    GameRng, GameState, Phase, PlayerId, Result, Role, RoomSetup, Rules, Seat, StateDelta,
};

pub use crate::map::{
    standard_map, Disease, DiseaseCounts, DiseaseStatus, LocationId, MapCatalog, MapCatalogBuilder,
};

pub use crate::cards::{Card, EventCard};

pub use crate::rules::{GameResult, Precondition};

pub use crate::session::{Game, InMemoryRepository, Repository, RoomId, SessionRegistry};
