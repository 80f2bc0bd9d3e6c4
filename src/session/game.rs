//! One live game with single-level undo.
//!
//! ## Cancellation
//!
//! `Game` keeps a backup snapshot and the log of cancellable actions applied
//! since. Cancelling drops the last logged action, restores the snapshot and
//! replays the rest. Every `GameState` carries its own RNG, so replay lands
//! on exactly the state the surviving actions produced the first time.
//!
//! A snapshot is taken at game start, after every non-cancellable action and
//! after any action that rotates the turn or ends the game. Undo therefore
//! never crosses a turn boundary.

use crate::core::action::{ActionRecord, GameAction};
use crate::core::delta::StateDelta;
use crate::core::error::{GameError, Result};
use crate::core::phase::Phase;
use crate::core::player::PlayerId;
use crate::core::setup::RoomSetup;
use crate::core::state::GameState;

#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    backup: GameState,
    actions: Vec<ActionRecord>,
}

impl Game {
    /// Start a fresh game for `setup`.
    pub fn start(setup: &RoomSetup) -> Result<Self> {
        GameState::start(setup).map(Self::from_state)
    }

    /// Wrap an existing state; the backup is taken from it.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self {
            backup: state.clone(),
            state,
            actions: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Cancellable actions applied since the last snapshot, oldest first.
    #[must_use]
    pub fn pending_actions(&self) -> &[ActionRecord] {
        &self.actions
    }

    /// Apply `action` and record it for undo.
    ///
    /// The returned delta carries `cancellable` for the action just applied.
    pub fn register_action(&mut self, player: &PlayerId, action: GameAction) -> Result<StateDelta> {
        let turn = self.state.turn;
        let mut delta = self.state.apply(player, &action)?;
        let cancellable = action.cancellable();
        delta.cancellable = Some(cancellable);

        if cancellable && self.state.turn == turn && !self.state.is_over() {
            log::debug!("{player} registered {} ({} pending)", action.kind(), self.actions.len() + 1);
            self.actions.push(ActionRecord::new(player.clone(), action, turn));
        } else {
            self.snapshot();
        }
        Ok(delta)
    }

    /// Undo the last cancellable action of the current turn.
    ///
    /// Only the current player may cancel, and only during `PlayerAction`.
    /// With nothing logged this just restores the snapshot.
    pub fn cancel_last_action(&mut self, player: &PlayerId) -> Result<StateDelta> {
        self.state.expect_phase(Phase::PlayerAction)?;
        if *player != self.state.current_player {
            return Err(GameError::NotYourTurn);
        }

        let dropped = self.actions.pop();
        let mut state = self.backup.clone();
        for record in &self.actions {
            state.apply(&record.player, &record.action)?;
        }
        self.state = state;

        if let Some(record) = dropped {
            log::debug!("{player} cancelled {} ({} pending)", record.action.kind(), self.actions.len());
        }
        let mut delta = self.state.serialize();
        delta.cancellable = Some(!self.actions.is_empty());
        Ok(delta)
    }

    /// Full projection of the current state.
    #[must_use]
    pub fn get_state(&self) -> StateDelta {
        self.state.serialize()
    }

    fn snapshot(&mut self) {
        self.actions.clear();
        self.backup = self.state.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::{Role, Rules};
    use crate::map::{Disease, LocationId, MapCatalog};
    use std::sync::Arc;

    fn game() -> Game {
        let map = MapCatalog::builder("line")
            .location("A", Disease::Blue, 1)
            .location("B", Disease::Blue, 1)
            .location("C", Disease::Blue, 1)
            .link("A", "B")
            .link("B", "C")
            .starting_location("A")
            .build()
            .unwrap();
        let mut state = GameState::new(Arc::new(Rules::default()), Arc::new(map), 1);
        state.add_player(PlayerId::new("ann"), Role::Scientist);
        state.add_player(PlayerId::new("bob"), Role::Medic);
        state.begin().unwrap();
        Game::from_state(state)
    }

    fn ann() -> PlayerId {
        PlayerId::new("ann")
    }

    #[test]
    fn test_register_logs_cancellable() {
        let mut game = game();
        let delta = game.register_action(&ann(), GameAction::move_to("B")).unwrap();

        assert_eq!(delta.cancellable, Some(true));
        assert_eq!(game.pending_actions().len(), 1);
        assert_eq!(game.pending_actions()[0].player, ann());
    }

    #[test]
    fn test_cancel_restores_previous_state() {
        let mut game = game();
        let start = game.get_state();
        game.register_action(&ann(), GameAction::move_to("B")).unwrap();
        game.register_action(&ann(), GameAction::move_to("C")).unwrap();

        let delta = game.cancel_last_action(&ann()).unwrap();
        assert_eq!(delta.cancellable, Some(true));
        assert_eq!(game.state().location_of(&ann()).unwrap(), &LocationId::new("B"));
        assert_eq!(game.state().player_actions, 1);

        let delta = game.cancel_last_action(&ann()).unwrap();
        assert_eq!(delta.cancellable, Some(false));
        assert_eq!(game.get_state(), start);
    }

    #[test]
    fn test_cancel_then_redo_matches_direct_play() {
        let mut replayed = game();
        replayed.register_action(&ann(), GameAction::move_to("B")).unwrap();
        replayed.register_action(&ann(), GameAction::move_to("A")).unwrap();
        replayed.cancel_last_action(&ann()).unwrap();
        replayed.register_action(&ann(), GameAction::move_to("C")).unwrap();

        let mut direct = game();
        direct.register_action(&ann(), GameAction::move_to("B")).unwrap();
        direct.register_action(&ann(), GameAction::move_to("C")).unwrap();

        assert_eq!(replayed.get_state(), direct.get_state());
    }

    #[test]
    fn test_cancel_rejected_for_other_player() {
        let mut game = game();
        game.register_action(&ann(), GameAction::move_to("B")).unwrap();

        let err = game.cancel_last_action(&PlayerId::new("bob")).unwrap_err();
        assert_eq!(err, GameError::NotYourTurn);
        assert_eq!(game.pending_actions().len(), 1);
    }

    #[test]
    fn test_rejected_action_is_not_logged() {
        let mut game = game();
        let err = game.register_action(&ann(), GameAction::move_to("C")).unwrap_err();
        assert_eq!(err, GameError::NotANeighbor);
        assert!(game.pending_actions().is_empty());
    }

    #[test]
    fn test_end_turn_takes_snapshot() {
        let mut game = game();
        for _ in 0..4 {
            game.register_action(&ann(), GameAction::move_to("B")).unwrap();
            game.register_action(&ann(), GameAction::move_to("A")).unwrap();
            if game.state().player_actions == 4 {
                break;
            }
        }
        assert_eq!(game.pending_actions().len(), 4);

        let mut state = game.state().clone();
        state.location_deck.extend([Card::location("C"), Card::location("B")]);
        state.infection_deck.extend([LocationId::new("A"), LocationId::new("B")]);
        let mut game = Game::from_state(state);

        let delta = game.register_action(&ann(), GameAction::EndTurn).unwrap();
        assert_eq!(delta.cancellable, Some(false));
        assert!(game.pending_actions().is_empty());
        assert_eq!(game.state().current_player, PlayerId::new("bob"));

        // ann can no longer undo; bob has nothing to undo
        assert_eq!(game.cancel_last_action(&ann()).unwrap_err(), GameError::NotYourTurn);
        let before = game.get_state();
        game.cancel_last_action(&PlayerId::new("bob")).unwrap();
        assert_eq!(game.get_state(), before);
    }
}
