//! Action application boundary.
//!
//! `GameState::apply` is the only entry point that mutates a live state on
//! behalf of a player:
//! - Preconditions are checked in order before the handler runs
//! - A rejected action leaves the state exactly as it was
//! - A terminal signal (defeat or victory) ends the action early and is
//!   turned into a full projection of the final state
//! - The spent action point is counted after the handler succeeds

use crate::core::action::GameAction;
use crate::core::delta::{events, FieldSet, StateDelta};
use crate::core::error::{GameError, Result};
use crate::core::phase::Phase;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::rules::preconditions::check_all;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Victory,
    Defeat,
}

impl GameState {
    /// Outcome, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::Victory => Some(GameResult::Victory),
            Phase::Defeat => Some(GameResult::Defeat),
            _ => None,
        }
    }

    /// Validate and apply one action atomically.
    ///
    /// Returns the fields the action touched, or the full state if the game
    /// ended during the action.
    pub fn apply(&mut self, player: &PlayerId, action: &GameAction) -> Result<StateDelta> {
        let before = self.clone();
        match self.run(player, action) {
            Ok(fields) => Ok(self.project(fields)),
            Err(signal) if signal.is_terminal() => {
                log::info!("{} by {player} ended the game: {signal}", action.kind());
                Ok(self.serialize())
            }
            Err(err) => {
                *self = before;
                log::warn!("rejected {} from {player}: {err}", action.kind());
                Err(err)
            }
        }
    }

    fn run(&mut self, player: &PlayerId, action: &GameAction) -> Result<FieldSet> {
        check_all(action.preconditions(), self, player)?;
        let mut fields = self.dispatch(player, action)?;
        if action.uses_action_point() {
            self.player_actions += 1;
        }
        fields.extend(events::PROGRESS);
        log::debug!("{player} applied {} ({} actions spent)", action.kind(), self.player_actions);
        Ok(fields)
    }

    /// Reject anything but the phase a caller expects.
    pub(crate) fn expect_phase(&self, phase: Phase) -> Result<()> {
        if self.phase.is_terminal() {
            return Err(GameError::GameOver);
        }
        if self.phase != phase {
            return Err(GameError::InvalidGamePhase);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::{Rules, Role};
    use crate::map::{Disease, LocationId, MapCatalog};
    use std::sync::Arc;

    fn state() -> GameState {
        let map = MapCatalog::builder("line")
            .location("A", Disease::Blue, 1)
            .location("B", Disease::Blue, 1)
            .location("C", Disease::Red, 1)
            .link("A", "B")
            .link("B", "C")
            .starting_location("A")
            .build()
            .unwrap();
        let mut state = GameState::new(Arc::new(Rules::default()), Arc::new(map), 1);
        state.add_player(PlayerId::new("ann"), Role::Scientist);
        state.add_player(PlayerId::new("bob"), Role::Dispatcher);
        state.begin().unwrap();
        state
    }

    #[test]
    fn test_apply_counts_action_point() {
        let mut state = state();
        let ann = PlayerId::new("ann");

        let delta = state.apply(&ann, &GameAction::move_to("B")).unwrap();

        assert_eq!(state.player_actions, 1);
        assert_eq!(delta.player_actions, Some(1));
        assert_eq!(delta.phase, Some(Phase::PlayerAction));
        assert_eq!(
            delta.player_locations.unwrap().get(&ann),
            Some(&LocationId::new("B"))
        );
        assert!(delta.player_hands.is_none());
    }

    #[test]
    fn test_rejected_action_rolls_back() {
        let mut state = state();
        let ann = PlayerId::new("ann");
        state
            .player_hands
            .get_mut(&ann)
            .unwrap()
            .push_back(Card::location("B"));

        // dump outside the dump phase
        let err = state.apply(&ann, &GameAction::dump([Card::location("B")])).unwrap_err();
        assert_eq!(err, GameError::InvalidGamePhase);
        assert_eq!(state.hand(&ann).unwrap().len(), 1);

        // not adjacent
        let err = state.apply(&ann, &GameAction::move_to("C")).unwrap_err();
        assert_eq!(err, GameError::NotANeighbor);
        assert_eq!(state.player_actions, 0);
        assert_eq!(state.location_of(&ann).unwrap(), &LocationId::new("A"));
    }

    #[test]
    fn test_game_over_rejects_everything() {
        let mut state = state();
        state.phase = Phase::Defeat;
        assert_eq!(state.result(), Some(GameResult::Defeat));

        let err = state
            .apply(&PlayerId::new("ann"), &GameAction::move_to("B"))
            .unwrap_err();
        assert_eq!(err, GameError::GameOver);
        assert_eq!(state.expect_phase(Phase::PlayerAction), Err(GameError::GameOver));
    }

    #[test]
    fn test_terminal_returns_full_state() {
        let mut state = state();
        let ann = PlayerId::new("ann");
        state.player_actions = 4;
        // empty location deck: the end-of-turn draw loses
        let delta = state.apply(&ann, &GameAction::EndTurn).unwrap();

        assert_eq!(delta.phase, Some(Phase::Defeat));
        assert!(delta.players.is_some());
        assert!(delta.locations_types.is_some());
        assert_eq!(state.result(), Some(GameResult::Defeat));
    }
}
