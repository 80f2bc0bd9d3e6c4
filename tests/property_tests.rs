//! Property tests for deck construction, outbreak cascades and disease
//! status.

mod common;

use std::sync::Arc;

use proptest::prelude::*;

use common::{loc, pid, table};
use outbreak_engine::cards::deal_location_deck;
use outbreak_engine::{
    standard_map, Card, Disease, DiseaseStatus, GameAction, GameRng, GameState, MapCatalog, Role,
    Rules,
};

// =============================================================================
// Deck bands
// =============================================================================

proptest! {
    /// Test that every band of the location deck holds exactly one epidemic
    /// and no card is lost, for 2 to 4 players.
    #[test]
    fn prop_epidemic_bands(players in 2usize..=4, seed in any::<u64>()) {
        let map = standard_map().unwrap();
        let rules = Rules::default();
        let mut rng = GameRng::new(seed);

        let deal = deal_location_deck(&map, &rules, players, &mut rng).unwrap();

        let per_player = 6 - players;
        prop_assert_eq!(deal.hands.len(), players);
        prop_assert!(deal.hands.iter().all(|hand| hand.len() == per_player));
        prop_assert!(deal.hands.iter().flatten().all(|card| !card.is_epidemic()));

        let catalog = map.len() + 4;
        let rest = catalog - per_player * players;
        prop_assert_eq!(deal.location_deck.len(), rest + rules.epidemic_cards);

        // draw order: top first
        let draw: Vec<Card> = deal.location_deck.iter().rev().cloned().collect();
        let band = rest / rules.epidemic_cards + 1;
        for i in 0..rules.epidemic_cards {
            let epidemics = draw[i * band..(i + 1) * band]
                .iter()
                .filter(|card| card.is_epidemic())
                .count();
            prop_assert_eq!(epidemics, 1, "band {}", i);
        }
        prop_assert!(draw[rules.epidemic_cards * band..].iter().all(|card| !card.is_epidemic()));
    }
}

// =============================================================================
// Outbreak cascades
// =============================================================================

const NAMES: [&str; 6] = ["N0", "N1", "N2", "N3", "N4", "N5"];

/// Graph over the first `size` names with the given edges.
fn graph(size: usize, edges: &[(usize, usize)]) -> Arc<MapCatalog> {
    let mut builder = MapCatalog::builder("graph");
    for name in &NAMES[..size] {
        builder = builder.location(name, Disease::Blue, 1);
    }
    for &(a, b) in edges {
        let (a, b) = (a % size, b % size);
        if a != b {
            builder = builder.link(NAMES[a], NAMES[b]);
        }
    }
    Arc::new(builder.starting_location(NAMES[0]).build().unwrap())
}

fn board(map: Arc<MapCatalog>, counts: &[u8]) -> GameState {
    let rules = Rules::default().with_max_outbreaks(100).with_max_diseases(1000);
    let mut state = GameState::new(Arc::new(rules), Arc::clone(&map), 1);
    state.add_player(pid("ann"), Role::Scientist);
    state.begin().unwrap();
    for (name, &count) in NAMES.iter().zip(counts) {
        if map.contains(&loc(name)) {
            state.set_disease_count(&loc(name), Disease::Blue, count);
        }
    }
    state
}

proptest! {
    /// Test that a cascade never outbreaks a location twice and never
    /// exceeds the per-location cap, whatever the graph.
    #[test]
    fn prop_cascade_bounded(
        size in 3usize..=6,
        edges in prop::collection::vec((0usize..6, 0usize..6), 0..15),
        counts in prop::collection::vec(0u8..=3, 6),
        amount in 1u8..=3,
    ) {
        let map = graph(size, &edges);
        let mut state = board(map, &counts);

        state.infect(&[loc("N0")], amount, None).unwrap();

        prop_assert!(state.outbreaks as usize <= size);
        for name in &NAMES[..size] {
            prop_assert!(state.disease_count(&loc(name), Disease::Blue) <= 3);
        }
        let start = counts[0];
        if u16::from(start) + u16::from(amount) > 3 {
            prop_assert!(state.outbreaks >= 1);
        } else {
            prop_assert_eq!(state.outbreaks, 0);
            prop_assert_eq!(state.disease_count(&loc("N0"), Disease::Blue), start + amount);
        }
    }

    /// Test that a saturated cycle outbreaks once per location.
    #[test]
    fn prop_saturated_cycle(size in 3usize..=6) {
        let edges: Vec<(usize, usize)> = (0..size).map(|i| (i, (i + 1) % size)).collect();
        let map = graph(size, &edges);
        let mut state = board(map, &[3; 6]);

        state.infect(&[loc("N0")], 1, None).unwrap();

        prop_assert_eq!(state.outbreaks as usize, size);
        for name in &NAMES[..size] {
            prop_assert_eq!(state.disease_count(&loc(name), Disease::Blue), 3);
        }
    }
}

/// Test the three-cycle case explicitly: one outbreak per location, and
/// each neighbour reached once per cascade.
#[test]
fn test_three_cycle_single_outbreak() {
    let map = graph(3, &[(0, 1), (1, 2), (2, 0)]);
    let mut state = board(map, &[3, 0, 0]);

    state.infect(&[loc("N0")], 1, None).unwrap();

    assert_eq!(state.outbreaks, 1);
    assert_eq!(state.disease_count(&loc("N1"), Disease::Blue), 1);
    assert_eq!(state.disease_count(&loc("N2"), Disease::Blue), 1);
}

// =============================================================================
// Disease status
// =============================================================================

fn status_rank(status: DiseaseStatus) -> u8 {
    match status {
        DiseaseStatus::Ongoing => 0,
        DiseaseStatus::Cured => 1,
        DiseaseStatus::Eradicated => 2,
    }
}

#[derive(Clone, Debug)]
enum Step {
    Infect(usize),
    Heal(usize),
    Cure,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0usize..7).prop_map(Step::Infect),
        (0usize..7).prop_map(Step::Heal),
        Just(Step::Cure),
    ]
}

const LINE: [&str; 7] = ["A", "B", "C", "D", "E", "F", "G"];

proptest! {
    /// Test that no sequence of infections, heals and cures moves a colour
    /// back to an earlier status.
    #[test]
    fn prop_status_never_regresses(steps in prop::collection::vec(step(), 1..40)) {
        let mut state = table(&[("ann", Role::Medic)]);
        let mut seen = [0u8; 4];

        for step in steps {
            match step {
                Step::Infect(i) => {
                    let _ = state.infect(&[loc(LINE[i])], 1, None);
                }
                Step::Heal(i) => {
                    state.player_locations.insert(pid("ann"), loc(LINE[i]));
                    state.player_actions = 0;
                    let _ = state.apply(&pid("ann"), &GameAction::heal(None));
                }
                Step::Cure => {
                    // cure blue with five blue cards
                    let hand: Vec<Card> = (0..5).map(|_| Card::location("A")).collect();
                    state.player_hands.insert(pid("ann"), hand.iter().cloned().collect());
                    state.player_actions = 0;
                    let _ = state.apply(&pid("ann"), &GameAction::cure(hand));
                }
            }
            if state.is_over() {
                break;
            }
            for disease in Disease::ALL {
                let rank = status_rank(state.status(disease));
                prop_assert!(rank >= seen[disease.index()]);
                seen[disease.index()] = rank;
                if state.is_eradicated(disease) {
                    prop_assert_eq!(state.disease_total(disease), 0);
                }
            }
        }
    }
}
