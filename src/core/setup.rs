//! Everything needed to start a game in one room.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::config::Rules;
use super::player::{PlayerId, Role};
use crate::map::MapCatalog;

/// One seated player and the role they picked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub player: PlayerId,
    pub role: Option<Role>,
}

/// Rules, map, roster and seed for one room.
///
/// Seats are listed in joining order; the actual turn order is decided at
/// start from the dealt hands.
#[derive(Clone, Debug)]
pub struct RoomSetup {
    pub rules: Arc<Rules>,
    pub map: Arc<MapCatalog>,
    pub seats: Vec<Seat>,
    pub seed: u64,
}

impl RoomSetup {
    /// Default rules, no seats.
    #[must_use]
    pub fn new(map: Arc<MapCatalog>, seed: u64) -> Self {
        Self {
            rules: Arc::new(Rules::default()),
            map,
            seats: Vec::new(),
            seed,
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = Arc::new(rules);
        self
    }

    /// Seat a player with a role.
    #[must_use]
    pub fn with_seat(mut self, player: impl Into<String>, role: Role) -> Self {
        self.seats.push(Seat {
            player: PlayerId::new(player),
            role: Some(role),
        });
        self
    }

    /// Seat a player who has not picked a role yet.
    #[must_use]
    pub fn with_unassigned_seat(mut self, player: impl Into<String>) -> Self {
        self.seats.push(Seat {
            player: PlayerId::new(player),
            role: None,
        });
        self
    }
}
