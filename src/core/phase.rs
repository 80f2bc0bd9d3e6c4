//! Session phases.
//!
//! ```text
//! not_started -> player_action -> end_turn -> solve_epidemic -> player_action
//!                     |  ^            |
//!                     v  |            v
//!          dump_card / destroy_research_center (held, depth 1)
//!
//! any -> defeat | victory (absorbing)
//! ```

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    NotStarted,
    PlayerAction,
    DumpCard,
    EndTurn,
    SolveEpidemic,
    DestroyResearchCenter,
    Defeat,
    Victory,
}

impl Phase {
    /// Absorbing end states.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Defeat | Phase::Victory)
    }

    /// Forced-interaction phases that suspend another phase.
    #[must_use]
    pub fn is_forced(self) -> bool {
        matches!(self, Phase::DumpCard | Phase::DestroyResearchCenter)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::NotStarted => "not_started",
            Phase::PlayerAction => "player_action",
            Phase::DumpCard => "dump_card",
            Phase::EndTurn => "end_turn",
            Phase::SolveEpidemic => "solve_epidemic",
            Phase::DestroyResearchCenter => "destroy_research_center",
            Phase::Defeat => "defeat",
            Phase::Victory => "victory",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(Phase::Defeat.is_terminal());
        assert!(Phase::Victory.is_terminal());
        assert!(!Phase::PlayerAction.is_terminal());
        assert!(Phase::DumpCard.is_forced());
        assert!(Phase::DestroyResearchCenter.is_forced());
        assert!(!Phase::EndTurn.is_forced());
    }

    #[test]
    fn test_display_matches_serde() {
        let json = serde_json::to_string(&Phase::DestroyResearchCenter).unwrap();
        assert_eq!(json, format!("\"{}\"", Phase::DestroyResearchCenter));
    }
}
