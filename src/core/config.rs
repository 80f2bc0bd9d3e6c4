//! Rule constants.
//!
//! `Rules` carries every numeric policy of the game. Defaults match the
//! standard game; rooms may override individual values with the `with_*`
//! builders or by deserializing a partial document (missing keys keep their
//! default).
//!
//! ```
//! use outbreak_engine::core::Rules;
//!
//! let rules = Rules::default().with_epidemic_cards(4).with_max_outbreaks(7);
//! assert_eq!(rules.epidemic_cards, 4);
//! assert_eq!(rules.infection_rate(0), 2);
//! assert_eq!(rules.infection_rate(99), 4);
//! ```

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Hand size above which a discard is forced.
    pub max_hand_cards: usize,
    /// Action points per turn.
    pub max_actions: u32,
    /// Same-colour location cards needed for a cure (scientist needs one less).
    pub cards_to_cure: usize,
    /// Units of one colour a location can hold before it outbreaks.
    pub max_infections: u8,
    /// Outbreaks tolerated; one more loses the game.
    pub max_outbreaks: u32,
    /// Units of one colour the board can hold; one more loses the game.
    pub max_diseases: u32,
    /// Research centres on the board before one must be removed.
    pub max_research_centers: usize,
    /// Epidemic cards shuffled into the location deck.
    pub epidemic_cards: usize,
    /// Each player is dealt `starting_hand_total - player_count` cards.
    pub starting_hand_total: usize,
    pub max_players: usize,
    /// Location cards drawn at the end of each turn.
    pub cards_per_turn: usize,
    /// Infection cards drawn per turn, indexed by epidemics drawn so far.
    pub infection_rates: Vec<usize>,
    /// Units placed by each round of the initial infection.
    pub initial_infections: Vec<u8>,
    /// Infection cards drawn per initial round.
    pub initial_infection_cards: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_hand_cards: 7,
            max_actions: 4,
            cards_to_cure: 5,
            max_infections: 3,
            max_outbreaks: 3,
            max_diseases: 24,
            max_research_centers: 6,
            epidemic_cards: 5,
            starting_hand_total: 6,
            max_players: 4,
            cards_per_turn: 2,
            infection_rates: vec![2, 2, 3, 3, 3, 4, 4],
            initial_infections: vec![3, 2, 1],
            initial_infection_cards: 3,
        }
    }
}

impl Rules {
    /// Infection cards to draw after `epidemics` epidemics.
    ///
    /// The last rate is reused once the table is exhausted.
    #[must_use]
    pub fn infection_rate(&self, epidemics: u32) -> usize {
        let index = (epidemics as usize).min(self.infection_rates.len().saturating_sub(1));
        self.infection_rates.get(index).copied().unwrap_or(0)
    }

    /// Starting hand size for a game with `player_count` players.
    ///
    /// `None` when the table leaves nothing to deal.
    #[must_use]
    pub fn cards_per_player(&self, player_count: usize) -> Option<usize> {
        self.starting_hand_total
            .checked_sub(player_count)
            .filter(|&n| n > 0)
    }

    // === Builders ===

    #[must_use]
    pub fn with_max_hand_cards(mut self, n: usize) -> Self {
        self.max_hand_cards = n;
        self
    }

    #[must_use]
    pub fn with_max_actions(mut self, n: u32) -> Self {
        self.max_actions = n;
        self
    }

    #[must_use]
    pub fn with_cards_to_cure(mut self, n: usize) -> Self {
        self.cards_to_cure = n;
        self
    }

    #[must_use]
    pub fn with_max_outbreaks(mut self, n: u32) -> Self {
        self.max_outbreaks = n;
        self
    }

    #[must_use]
    pub fn with_max_diseases(mut self, n: u32) -> Self {
        self.max_diseases = n;
        self
    }

    #[must_use]
    pub fn with_max_research_centers(mut self, n: usize) -> Self {
        self.max_research_centers = n;
        self
    }

    #[must_use]
    pub fn with_epidemic_cards(mut self, n: usize) -> Self {
        self.epidemic_cards = n;
        self
    }

    #[must_use]
    pub fn with_infection_rates(mut self, rates: Vec<usize>) -> Self {
        self.infection_rates = rates;
        self
    }

    #[must_use]
    pub fn with_initial_infections(mut self, rounds: Vec<u8>, cards_per_round: usize) -> Self {
        self.initial_infections = rounds;
        self.initial_infection_cards = cards_per_round;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rules = Rules::default();
        assert_eq!(rules.max_hand_cards, 7);
        assert_eq!(rules.max_actions, 4);
        assert_eq!(rules.max_research_centers, 6);
        assert_eq!(rules.epidemic_cards, 5);
    }

    #[test]
    fn test_infection_rate_clamps() {
        let rules = Rules::default();
        assert_eq!(rules.infection_rate(0), 2);
        assert_eq!(rules.infection_rate(2), 3);
        assert_eq!(rules.infection_rate(6), 4);
        assert_eq!(rules.infection_rate(40), 4);

        let empty = Rules::default().with_infection_rates(Vec::new());
        assert_eq!(empty.infection_rate(3), 0);
    }

    #[test]
    fn test_cards_per_player() {
        let rules = Rules::default();
        assert_eq!(rules.cards_per_player(2), Some(4));
        assert_eq!(rules.cards_per_player(4), Some(2));
        assert_eq!(rules.cards_per_player(6), None);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let rules: Rules = serde_json::from_str(r#"{"max_outbreaks": 5}"#).unwrap();
        assert_eq!(rules.max_outbreaks, 5);
        assert_eq!(rules.max_hand_cards, 7);
        assert_eq!(rules.infection_rates, vec![2, 2, 3, 3, 3, 4, 4]);
    }
}
