//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use outbreak_engine::{Card, Disease, GameState, LocationId, MapCatalog, PlayerId, Role, Rules};

/// A - B - C - D - E - F - G, coloured blue, blue, blue, red, red, yellow,
/// black. Start at A.
pub fn line_map() -> Arc<MapCatalog> {
    let map = MapCatalog::builder("line")
        .location("A", Disease::Blue, 100)
        .location("B", Disease::Blue, 200)
        .location("C", Disease::Blue, 300)
        .location("D", Disease::Red, 400)
        .location("E", Disease::Red, 500)
        .location("F", Disease::Yellow, 600)
        .location("G", Disease::Black, 700)
        .link("A", "B")
        .link("B", "C")
        .link("C", "D")
        .link("D", "E")
        .link("E", "F")
        .link("F", "G")
        .starting_location("A")
        .build()
        .unwrap();
    Arc::new(map)
}

/// Started game on the line map: players seated in order, empty hands and
/// decks, clean board, no research centres.
pub fn table(players: &[(&str, Role)]) -> GameState {
    table_with(Rules::default(), players)
}

pub fn table_with(rules: Rules, players: &[(&str, Role)]) -> GameState {
    let mut state = GameState::new(Arc::new(rules), line_map(), 7);
    for &(name, role) in players {
        state.add_player(pid(name), role);
    }
    state.begin().unwrap();
    state
}

pub fn pid(name: &str) -> PlayerId {
    PlayerId::new(name)
}

pub fn loc(name: &str) -> LocationId {
    LocationId::new(name)
}

/// Append cards to a hand.
pub fn deal(state: &mut GameState, player: &str, cards: &[Card]) {
    state
        .player_hands
        .get_mut(&pid(player))
        .unwrap()
        .extend(cards.iter().cloned());
}

pub fn cards(names: &[&str]) -> Vec<Card> {
    names.iter().map(|name| Card::location(*name)).collect()
}

pub fn place(state: &mut GameState, player: &str, location: &str) {
    state.player_locations.insert(pid(player), loc(location));
}

/// Enough harmless cards for a few end-of-turn draws: location cards on the
/// location deck, the far end of the line on the infection deck.
pub fn stock_decks(state: &mut GameState) {
    state.location_deck.extend(cards(&["B", "C", "D", "E", "F", "G"]));
    state
        .infection_deck
        .extend(["G", "F", "G", "F", "G", "F"].into_iter().map(loc));
}

/// Spend every action point of the current turn.
pub fn exhaust_actions(state: &mut GameState) {
    state.player_actions = state.rules().max_actions;
}
