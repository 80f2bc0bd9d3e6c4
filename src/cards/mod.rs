//! Card system: card kinds, deck construction, and hand operations.
//!
//! ## Key Types
//!
//! - `Card`: a location, epidemic or event card
//! - `EventCard`: the four one-shot events
//! - `Deal`: starting hands plus the seeded location deck
//!
//! Hand operations (`draw`, `discard`, `give`, hand limit) are implemented
//! on `GameState` in `hand`.

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, EventCard};
pub use deck::{build_infection_deck, deal_location_deck, insert_epidemics, Deal};
