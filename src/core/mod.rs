//! Core engine types: players, rules, state, actions, phases, errors, RNG.
//!
//! Everything else operates on these types; the rules themselves live in
//! `rules` and `cards`.

pub mod action;
pub mod config;
pub mod delta;
pub mod error;
pub mod phase;
pub mod player;
pub mod rng;
pub mod setup;
pub mod state;

pub use action::{ActionRecord, EventAction, GameAction};
pub use config::Rules;
pub use delta::{events, DiseaseCount, DiseaseReport, Field, FieldSet, LocationDiseases, StateDelta};
pub use error::{DefeatCause, GameError, Result};
pub use phase::Phase;
pub use player::{PlayerId, Role};
pub use rng::GameRng;
pub use setup::{RoomSetup, Seat};
pub use state::GameState;
