//! Game rules.
//!
//! Everything here is implemented on `GameState`:
//! - `setup`: roster validation, the deal, initial infections
//! - `preconditions`: ordered checks run before every action
//! - `actions`: one handler per action kind
//! - `infection`: infection, outbreak chains, epidemics
//! - `disease`: treatment, cures, eradication, victory
//! - `engine`: the atomic `apply` boundary
//!
//! Callers only need `GameState::start` and `GameState::apply`.

pub mod actions;
pub mod disease;
pub mod engine;
pub mod infection;
pub mod preconditions;
pub mod setup;

pub use engine::GameResult;
pub use preconditions::{check_all, Precondition};
