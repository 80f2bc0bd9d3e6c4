//! Room to live game mapping.
//!
//! The room table sits behind one `RwLock`; each game behind its own
//! `Mutex`. Actions on different rooms never wait on each other, and actions
//! on one room are applied one at a time. Rooms are loaded from the
//! repository outside the table lock; when two openers race, the first
//! insert wins and the other game is dropped.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use crate::core::action::GameAction;
use crate::core::delta::StateDelta;
use crate::core::error::{GameError, Result};
use crate::core::player::PlayerId;

use super::game::Game;
use super::repository::{Repository, RoomId};

type Room = Arc<Mutex<Game>>;

/// Manages live games and their lifecycles.
pub struct SessionRegistry {
    repository: Arc<dyn Repository>,
    sessions: RwLock<HashMap<RoomId, Room>>,
}

impl SessionRegistry {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self {
            repository,
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl SessionRegistry {
    /// Full state of `room`, starting its game from the repository if needed.
    pub fn get_or_start(&self, room: &RoomId) -> Result<StateDelta> {
        let game = self.open(room)?;
        let state = lock(&game)?.get_state();
        Ok(state)
    }

    /// Apply an action in a live room.
    pub fn register_action(&self, room: &RoomId, player: &PlayerId, action: GameAction) -> Result<StateDelta> {
        let game = self.live(room)?;
        let mut game = lock(&game)?;
        game.register_action(player, action)
    }

    /// Undo the last cancellable action in a live room.
    pub fn cancel_last(&self, room: &RoomId, player: &PlayerId) -> Result<StateDelta> {
        let game = self.live(room)?;
        let mut game = lock(&game)?;
        game.cancel_last_action(player)
    }

    /// Full state of a live room.
    pub fn get_state(&self, room: &RoomId) -> Result<StateDelta> {
        let game = self.live(room)?;
        let state = lock(&game)?.get_state();
        Ok(state)
    }

    /// Drop the game of `room`.
    pub fn close(&self, room: &RoomId) -> Result<()> {
        self.sessions
            .write()
            .map_err(|_| poisoned())?
            .remove(room)
            .map(|_| log::info!("[registry] room {room} closed"))
            .ok_or_else(|| GameError::RoomNotFound(room.to_string()))
    }

    #[must_use]
    pub fn is_live(&self, room: &RoomId) -> bool {
        self.sessions
            .read()
            .map(|sessions| sessions.contains_key(room))
            .unwrap_or(false)
    }

    /// Number of live rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().map(|sessions| sessions.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn live(&self, room: &RoomId) -> Result<Room> {
        self.sessions
            .read()
            .map_err(|_| poisoned())?
            .get(room)
            .cloned()
            .ok_or(GameError::GameHasNotStarted)
    }

    fn open(&self, room: &RoomId) -> Result<Room> {
        if let Ok(game) = self.live(room) {
            return Ok(game);
        }
        // load and deal without holding the table lock
        let setup = self.repository.load_room(room)?;
        let started = Arc::new(Mutex::new(Game::start(&setup)?));
        let mut sessions = self.sessions.write().map_err(|_| poisoned())?;
        let live = sessions.len();
        let game = sessions.entry(room.clone()).or_insert_with(|| {
            log::info!("[registry] room {room} opened ({} live)", live + 1);
            started
        });
        Ok(Arc::clone(game))
    }
}

fn lock(game: &Room) -> Result<MutexGuard<'_, Game>> {
    game.lock().map_err(|_| poisoned())
}

fn poisoned() -> GameError {
    GameError::Consistency("session lock poisoned".to_string())
}
