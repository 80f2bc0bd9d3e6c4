//! Declarative action preconditions.
//!
//! Each action kind carries an ordered list of checks, evaluated before the
//! action body runs. The first failing check decides the error.

use crate::core::action::GameAction;
use crate::core::error::{GameError, Result};
use crate::core::phase::Phase;
use crate::core::player::{PlayerId, Role};
use crate::core::state::GameState;

use Precondition::{ActionPoint, CurrentPlayer, GameLive, Seated};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precondition {
    /// Started and not over.
    GameLive,
    /// The requesting player is seated in this game.
    Seated,
    /// Current phase is one of these.
    Phase(&'static [Phase]),
    /// Requesting player is the current player.
    CurrentPlayer,
    /// An action point is left this turn. Consumes one on success.
    ActionPoint,
    /// Requesting player holds this role.
    Role(Role),
}

impl Precondition {
    pub fn check(self, state: &GameState, player: &PlayerId) -> Result<()> {
        match self {
            Precondition::GameLive => {
                if state.phase.is_terminal() {
                    return Err(GameError::GameOver);
                }
                if state.phase == Phase::NotStarted {
                    return Err(GameError::GameHasNotStarted);
                }
            }
            Precondition::Seated => {
                if !state.is_seated(player) {
                    return Err(GameError::InvalidPlayer(player.clone()));
                }
            }
            Precondition::Phase(phases) => {
                if !phases.contains(&state.phase) {
                    return Err(GameError::InvalidGamePhase);
                }
            }
            Precondition::CurrentPlayer => {
                if *player != state.current_player {
                    return Err(GameError::NotYourTurn);
                }
            }
            Precondition::ActionPoint => {
                if state.player_actions >= state.rules().max_actions {
                    return Err(GameError::RequireAction);
                }
            }
            Precondition::Role(role) => {
                if !state.has_role(player, role) {
                    return Err(GameError::RoleRequired(role));
                }
            }
        }
        Ok(())
    }
}

/// Run checks in order.
pub fn check_all(preconditions: &[Precondition], state: &GameState, player: &PlayerId) -> Result<()> {
    preconditions
        .iter()
        .try_for_each(|precondition| precondition.check(state, player))
}

const PLAYER_ACTION: &[Phase] = &[Phase::PlayerAction];
const END_TURN: &[Phase] = &[Phase::PlayerAction, Phase::EndTurn, Phase::SolveEpidemic];
const EVENT: &[Phase] = &[
    Phase::PlayerAction,
    Phase::DumpCard,
    Phase::EndTurn,
    Phase::SolveEpidemic,
];

const TURN_ACTION: &[Precondition] = &[
    GameLive,
    Seated,
    Precondition::Phase(PLAYER_ACTION),
    CurrentPlayer,
    ActionPoint,
];
const EXPERT_MOVE: &[Precondition] = &[
    GameLive,
    Seated,
    Precondition::Phase(PLAYER_ACTION),
    CurrentPlayer,
    ActionPoint,
    Precondition::Role(Role::Expert),
];
const GIVE_CARD: &[Precondition] = &[
    GameLive,
    Seated,
    Precondition::Phase(PLAYER_ACTION),
    ActionPoint,
];
const DESTROY: &[Precondition] = &[
    GameLive,
    Seated,
    Precondition::Phase(&[Phase::DestroyResearchCenter]),
    CurrentPlayer,
];
const DUMP: &[Precondition] = &[GameLive, Seated, Precondition::Phase(&[Phase::DumpCard])];
const END: &[Precondition] = &[GameLive, Seated, Precondition::Phase(END_TURN), CurrentPlayer];
const PLAY_EVENT: &[Precondition] = &[GameLive, Seated, Precondition::Phase(EVENT)];

impl GameAction {
    /// Checks run before this action applies.
    #[must_use]
    pub fn preconditions(&self) -> &'static [Precondition] {
        match self {
            GameAction::Move { .. }
            | GameAction::Heal { .. }
            | GameAction::MoveToLocation { .. }
            | GameAction::MoveFromLocationCard { .. }
            | GameAction::BuildResearchCenter
            | GameAction::CureDisease { .. } => TURN_ACTION,
            GameAction::MoveToLocationExpert { .. } => EXPERT_MOVE,
            GameAction::GiveCard { .. } => GIVE_CARD,
            GameAction::DestroyResearchCenter { .. } => DESTROY,
            GameAction::DumpCard { .. } => DUMP,
            GameAction::EndTurn => END,
            GameAction::PlayEvent(_) => PLAY_EVENT,
        }
    }

    /// Whether a successful application spends an action point.
    #[must_use]
    pub fn uses_action_point(&self) -> bool {
        self.preconditions().contains(&ActionPoint)
    }
}
