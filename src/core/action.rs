//! Player requests.
//!
//! `GameAction` is the closed set of requests a seated player can make.
//! Arguments are already typed; parsing free text into actions happens
//! outside the engine.
//!
//! Every action except `EndTurn` is cancellable: it can be undone within the
//! turn by replaying the turn's log without it.
//!
//! ## Example
//!
//! ```
//! use outbreak_engine::core::GameAction;
//! use outbreak_engine::cards::Card;
//!
//! let cure = GameAction::cure([
//!     Card::location("Paris"),
//!     Card::location("London"),
//!     Card::location("Madrid"),
//!     Card::location("Essen"),
//!     Card::location("Milan"),
//! ]);
//! assert!(cure.cancellable());
//! assert!(!GameAction::EndTurn.cancellable());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::{Card, EventCard};
use crate::map::{Disease, LocationId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum GameAction {
    /// Drive to an adjacent location, or shuttle between research centres.
    /// A dispatcher may name another player to move.
    Move {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        player: Option<PlayerId>,
        to: LocationId,
    },
    /// Remove disease units at the player's location. Without a colour, the
    /// location's own colour is preferred.
    Heal {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        disease: Option<Disease>,
    },
    EndTurn,
    /// Discard while over the hand limit.
    DumpCard { cards: SmallVec<[Card; 2]> },
    /// Discard the destination's card to fly there.
    MoveToLocation { to: LocationId },
    /// Expert only: discard any location card to fly anywhere.
    MoveToLocationExpert { to: LocationId, card: Card },
    /// Discard the current location's card to fly anywhere.
    MoveFromLocationCard { to: LocationId },
    BuildResearchCenter,
    /// Remove a research centre when there are too many.
    DestroyResearchCenter { location: LocationId },
    CureDisease { cards: SmallVec<[Card; 5]> },
    GiveCard { from: PlayerId, to: PlayerId, card: Card },
    PlayEvent(EventAction),
}

/// Event card plays with their arguments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventAction {
    Airlift { player: PlayerId, to: LocationId },
    GovernmentGrant { location: LocationId },
    QuietNight,
    ResilientPopulation { card: LocationId },
}

impl EventAction {
    /// Card consumed by this play.
    #[must_use]
    pub fn card(&self) -> EventCard {
        match self {
            EventAction::Airlift { .. } => EventCard::Airlift,
            EventAction::GovernmentGrant { .. } => EventCard::GovernmentGrant,
            EventAction::QuietNight => EventCard::QuietNight,
            EventAction::ResilientPopulation { .. } => EventCard::ResilientPopulation,
        }
    }
}

impl GameAction {
    // === Constructors ===

    #[must_use]
    pub fn move_to(to: impl Into<String>) -> Self {
        GameAction::Move {
            player: None,
            to: LocationId::new(to),
        }
    }

    /// Dispatcher moving someone else.
    #[must_use]
    pub fn move_player(player: impl Into<String>, to: impl Into<String>) -> Self {
        GameAction::Move {
            player: Some(PlayerId::new(player)),
            to: LocationId::new(to),
        }
    }

    #[must_use]
    pub fn heal(disease: Option<Disease>) -> Self {
        GameAction::Heal { disease }
    }

    #[must_use]
    pub fn dump(cards: impl IntoIterator<Item = Card>) -> Self {
        GameAction::DumpCard {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn cure(cards: impl IntoIterator<Item = Card>) -> Self {
        GameAction::CureDisease {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn give(from: impl Into<String>, to: impl Into<String>, card: Card) -> Self {
        GameAction::GiveCard {
            from: PlayerId::new(from),
            to: PlayerId::new(to),
            card,
        }
    }

    #[must_use]
    pub fn event(event: EventAction) -> Self {
        GameAction::PlayEvent(event)
    }

    // === Properties ===

    /// Whether the action may be undone within the turn.
    #[must_use]
    pub fn cancellable(&self) -> bool {
        !matches!(self, GameAction::EndTurn)
    }

    /// Short name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameAction::Move { .. } => "move",
            GameAction::Heal { .. } => "heal",
            GameAction::EndTurn => "end_turn",
            GameAction::DumpCard { .. } => "dump_card",
            GameAction::MoveToLocation { .. } => "move_to_location",
            GameAction::MoveToLocationExpert { .. } => "move_to_location_expert",
            GameAction::MoveFromLocationCard { .. } => "move_from_location_card",
            GameAction::BuildResearchCenter => "build_research_center",
            GameAction::DestroyResearchCenter { .. } => "destroy_research_center",
            GameAction::CureDisease { .. } => "cure_disease",
            GameAction::GiveCard { .. } => "give_card",
            GameAction::PlayEvent(_) => "play_event",
        }
    }
}

/// An applied action and who made it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub action: GameAction,
    /// Turn rotation count when the action was applied.
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: GameAction, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
        }
    }
}
