//! Game start: validate the roster, deal, seed the board, pick the first
//! player.

use std::cmp::Reverse;
use std::sync::Arc;

use im::Vector;

use crate::cards::{build_infection_deck, deal_location_deck, Card};
use crate::core::error::{GameError, Result};
use crate::core::player::{PlayerId, Role};
use crate::core::setup::RoomSetup;
use crate::core::state::GameState;
use crate::map::MapCatalog;

impl GameState {
    /// Start a game for `setup`.
    ///
    /// Turn order follows the highest population among each starting hand's
    /// location cards, largest first; seat order breaks ties.
    pub fn start(setup: &RoomSetup) -> Result<Self> {
        let roster = validate_roster(setup)?;
        let rules = Arc::clone(&setup.rules);
        let map = Arc::clone(&setup.map);

        let mut state = GameState::new(Arc::clone(&rules), Arc::clone(&map), setup.seed);
        let deal = deal_location_deck(&map, &rules, roster.len(), &mut state.rng)?;
        state.location_deck = deal.location_deck.into_iter().collect();
        state.infection_deck = build_infection_deck(&map, &mut state.rng).into_iter().collect();

        let mut seats: Vec<(PlayerId, Role, Vec<Card>)> = roster
            .into_iter()
            .zip(deal.hands)
            .map(|((player, role), hand)| (player, role, hand))
            .collect();
        seats.sort_by_key(|(_, _, hand)| Reverse(highest_population(&map, hand)));

        for (player, role, hand) in seats {
            state.add_player(player.clone(), role);
            state.player_hands.insert(player, hand.into_iter().collect::<Vector<Card>>());
        }
        state
            .locations_research_center
            .insert(map.starting_location().clone());

        for &amount in &rules.initial_infections {
            let drawn = state.draw_infection_cards(rules.initial_infection_cards);
            state.infect(&drawn, amount, None)?;
        }

        state.begin()?;
        log::info!(
            "game started on {} with {} players, {} to play first",
            map.name(),
            state.players.len(),
            state.current_player
        );
        Ok(state)
    }
}

/// Seats with their roles, in seat order.
fn validate_roster(setup: &RoomSetup) -> Result<Vec<(PlayerId, Role)>> {
    if setup.seats.is_empty() {
        return Err(GameError::Consistency("no players seated".to_string()));
    }
    if setup.seats.len() > setup.rules.max_players {
        return Err(GameError::TooManyPlayers);
    }

    let mut roster: Vec<(PlayerId, Role)> = Vec::with_capacity(setup.seats.len());
    for seat in &setup.seats {
        let role = seat
            .role
            .ok_or_else(|| GameError::PlayerHasNoRole(seat.player.clone()))?;
        if roster.iter().any(|(player, _)| *player == seat.player) {
            return Err(GameError::PlayerAlreadySeated(seat.player.clone()));
        }
        if roster.iter().any(|&(_, taken)| taken == role) {
            return Err(GameError::RoleAlreadyTaken);
        }
        roster.push((seat.player.clone(), role));
    }
    Ok(roster)
}

fn highest_population(map: &MapCatalog, hand: &[Card]) -> u64 {
    hand.iter()
        .filter_map(Card::as_location)
        .map(|location| map.population(location))
        .max()
        .unwrap_or(0)
}
