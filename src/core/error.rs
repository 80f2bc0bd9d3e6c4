//! Engine error type.
//!
//! `GameError` covers three families:
//!
//! - **Validation**: the request is illegal in the current state. The state
//!   is left exactly as it was before the request.
//! - **Terminal**: `Defeat` / `Victory`. Raised from deep inside an action,
//!   after the phase has already been set, and converted into a full state
//!   projection at the action boundary.
//! - **Consistency**: bad static data or setup (unknown location, a deck too
//!   small for the deal, an unknown room).

use thiserror::Error;

use crate::core::player::{PlayerId, Role};
use crate::map::{Disease, LocationId};

/// Why the players lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefeatCause {
    TooManyOutbreaks,
    DiseaseSupplyExhausted(Disease),
    LocationDeckExhausted,
}

impl std::fmt::Display for DefeatCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefeatCause::TooManyOutbreaks => f.write_str("too many outbreaks"),
            DefeatCause::DiseaseSupplyExhausted(d) => write!(f, "{d} disease supply exhausted"),
            DefeatCause::LocationDeckExhausted => f.write_str("no location cards left"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    // --- Validation ---
    #[error("action not allowed in the current phase")]
    InvalidGamePhase,
    #[error("it is not your turn")]
    NotYourTurn,
    #[error("no action points left this turn")]
    RequireAction,
    #[error("you still have action points to spend")]
    ActionRemaining,
    #[error("you cannot move other players")]
    CannotMoveOthers,
    #[error("destination is not reachable from here")]
    NotANeighbor,
    #[error("card not in hand or pile")]
    NoSuchCard,
    #[error("you need the card of your current location")]
    NeedCurrentLocationCard,
    #[error("you are not over the hand limit")]
    CannotDumpCard,
    #[error("only location cards can be given")]
    NotALocationCard,
    #[error("both players must be at the same location")]
    NotInTheSamePlace,
    #[error("the card must match the giver's location")]
    NotInTheRightPlace,
    #[error("invalid player {0}")]
    InvalidPlayer(PlayerId),
    #[error("only the {0} can do that")]
    RoleRequired(Role),
    #[error("there is already a research center here")]
    ResearchCenterAlreadyPresent,
    #[error("there is no research center here")]
    NoResearchCenterPresent,
    #[error("no disease to treat here")]
    NoDiseaseToCure,
    #[error("disease already cured")]
    DiseaseAlreadyCured,
    #[error("not enough location cards to cure")]
    LocationCardsAreMissing,
    #[error("cure cards must all share one colour")]
    LocationCardsNotMatching,
    #[error("too many cards given for a cure")]
    TooManyCards,
    #[error("game is over")]
    GameOver,
    #[error("game has not started")]
    GameHasNotStarted,
    #[error("player {0} has no role")]
    PlayerHasNoRole(PlayerId),
    #[error("role already taken by another player")]
    RoleAlreadyTaken,
    #[error("player {0} is seated twice")]
    PlayerAlreadySeated(PlayerId),
    #[error("too many players")]
    TooManyPlayers,

    // --- Terminal ---
    #[error("defeat: {0}")]
    Defeat(DefeatCause),
    #[error("victory: every disease is cured")]
    Victory,

    // --- Consistency ---
    #[error("unknown location {0}")]
    NoSuchLocation(LocationId),
    #[error("unknown room {0}")]
    RoomNotFound(String),
    #[error("inconsistent game data: {0}")]
    Consistency(String),
}

impl GameError {
    /// Defeat or victory.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameError::Defeat(_) | GameError::Victory)
    }

    /// Errors caused by static data or setup rather than by the request.
    #[must_use]
    pub fn is_consistency(&self) -> bool {
        matches!(
            self,
            GameError::NoSuchLocation(_) | GameError::RoomNotFound(_) | GameError::Consistency(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
