//! Hand operations: draw, discard, give, hand limit.

use crate::cards::card::Card;
use crate::core::error::{DefeatCause, GameError, Result};
use crate::core::phase::Phase;
use crate::core::player::{PlayerId, Role};
use crate::core::state::GameState;

impl GameState {
    /// Draw `n` cards from the top of the location deck.
    ///
    /// Too few cards left loses the game.
    pub(crate) fn draw_location_cards(&mut self, n: usize) -> Result<Vec<Card>> {
        if self.location_deck.len() < n {
            return Err(self.defeat(DefeatCause::LocationDeckExhausted));
        }
        Ok((0..n).filter_map(|_| self.location_deck.pop_back()).collect())
    }

    /// Put drawn cards into a hand. Epidemics are set aside, discarded and
    /// counted as pending. Returns the number of epidemics.
    pub(crate) fn receive_cards(&mut self, player: &PlayerId, cards: Vec<Card>) -> Result<u32> {
        let hand = self
            .player_hands
            .get_mut(player)
            .ok_or_else(|| GameError::InvalidPlayer(player.clone()))?;

        let mut epidemics = 0;
        for card in cards {
            if card.is_epidemic() {
                epidemics += 1;
                self.location_dump.push_back(card);
            } else {
                hand.push_back(card);
            }
        }
        self.epidemics += epidemics;
        self.epidemics_to_solve += epidemics;
        Ok(epidemics)
    }

    #[must_use]
    pub fn holds(&self, player: &PlayerId, card: &Card) -> bool {
        self.player_hands
            .get(player)
            .is_some_and(|hand| hand.contains(card))
    }

    /// Cards counting toward the hand limit. The planner's events are exempt.
    #[must_use]
    pub fn hand_load(&self, player: &PlayerId) -> usize {
        let Some(hand) = self.player_hands.get(player) else {
            return 0;
        };
        if self.has_role(player, Role::Planner) {
            hand.iter().filter(|card| !card.is_event()).count()
        } else {
            hand.len()
        }
    }

    #[must_use]
    pub fn over_hand_limit(&self, player: &PlayerId) -> bool {
        self.hand_load(player) > self.rules().max_hand_cards
    }

    #[must_use]
    pub fn any_over_hand_limit(&self) -> bool {
        self.players.iter().any(|player| self.over_hand_limit(player))
    }

    /// Move cards from a hand to the discard pile.
    ///
    /// All cards are checked before any is removed; a missing card fails
    /// with `NoSuchCard` and leaves the hand untouched.
    pub(crate) fn discard_cards(&mut self, player: &PlayerId, cards: &[Card]) -> Result<()> {
        let mut remaining = self.hand(player)?.clone();
        for card in cards {
            let index = remaining.index_of(card).ok_or(GameError::NoSuchCard)?;
            remaining.remove(index);
        }
        self.player_hands.insert(player.clone(), remaining);
        self.location_dump.extend(cards.iter().cloned());
        Ok(())
    }

    pub(crate) fn discard_card(&mut self, player: &PlayerId, card: &Card) -> Result<()> {
        self.discard_cards(player, std::slice::from_ref(card))
    }

    /// Move one card between hands.
    pub(crate) fn transfer_card(&mut self, from: &PlayerId, to: &PlayerId, card: &Card) -> Result<()> {
        if !self.player_hands.contains_key(to) {
            return Err(GameError::InvalidPlayer(to.clone()));
        }
        let mut giver = self.hand(from)?.clone();
        let index = giver.index_of(card).ok_or(GameError::NoSuchCard)?;
        giver.remove(index);
        self.player_hands.insert(from.clone(), giver);
        if let Some(receiver) = self.player_hands.get_mut(to) {
            receiver.push_back(card.clone());
        }
        Ok(())
    }

    /// Leave `dump_card` once nobody is over the limit.
    ///
    /// Returns the resumed phase, or `None` if the discard phase continues
    /// (or was not active).
    pub(crate) fn settle_dump_phase(&mut self) -> Option<Phase> {
        if self.phase == Phase::DumpCard && !self.any_over_hand_limit() {
            Some(self.resume_phase())
        } else {
            None
        }
    }
}
