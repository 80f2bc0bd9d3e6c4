//! Player identification and roles.
//!
//! ## PlayerId
//!
//! Players are identified by their seat name.
//!
//! ## Role
//!
//! Each seated player holds exactly one of seven roles; no two players share
//! a role.

use serde::{Deserialize, Serialize};

/// Player identifier (seat name).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Player role. Roles alter specific rules:
///
/// - `Medic`: heals every unit of a colour; auto-heals cured colours where it stands.
/// - `Planner`: event cards do not count toward its hand limit.
/// - `Dispatcher`: may move other players, and to any location holding a player.
/// - `Scientist`: cures with one card fewer.
/// - `Expert`: builds without a card; may fly anywhere by discarding any location card.
/// - `Specialist`: protects its location and neighbours from infection draws.
/// - `Researcher`: may give any location card regardless of where it stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Medic,
    Planner,
    Dispatcher,
    Scientist,
    Expert,
    Specialist,
    Researcher,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Medic,
        Role::Planner,
        Role::Dispatcher,
        Role::Scientist,
        Role::Expert,
        Role::Specialist,
        Role::Researcher,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Medic => "medic",
            Role::Planner => "planner",
            Role::Dispatcher => "dispatcher",
            Role::Scientist => "scientist",
            Role::Expert => "expert",
            Role::Specialist => "specialist",
            Role::Researcher => "researcher",
        }
    }

    pub fn from_name(name: &str) -> Option<Role> {
        Role::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
