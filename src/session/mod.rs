//! Live sessions: one `Game` per room, undo, and the room registry.
//!
//! ## Key Types
//!
//! - `Game`: a running game with its backup snapshot and undo log
//! - `SessionRegistry`: room name to live game, thread-safe
//! - `Repository`: where room setups come from

pub mod game;
pub mod registry;
pub mod repository;

pub use game::Game;
pub use registry::SessionRegistry;
pub use repository::{InMemoryRepository, Repository, RoomId};
