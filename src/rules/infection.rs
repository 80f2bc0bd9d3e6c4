//! Infection engine: infection draws, outbreaks, epidemics.
//!
//! ## Outbreak cascade
//!
//! Adding units past `Rules::max_infections` clamps the location at the
//! maximum, counts one outbreak and spreads one unit of the same colour to
//! every neighbour. Each location outbreaks at most once per cascade: the
//! cascade carries a visited set, so cycles in the map terminate.
//!
//! ## Specialist
//!
//! The specialist's location and its neighbours are seeded into the visited
//! set of each infection-draw card, so they are neither infected nor
//! reached by a cascade from that card.

use rustc_hash::FxHashSet;

use crate::core::error::{DefeatCause, Result};
use crate::core::player::Role;
use crate::core::state::GameState;
use crate::map::{Disease, LocationId};

impl GameState {
    /// Add `amount` units to each location.
    ///
    /// Without a colour, each location gets its own colour. All locations of
    /// one call share one cascade.
    pub fn infect(&mut self, locations: &[LocationId], amount: u8, disease: Option<Disease>) -> Result<()> {
        let mut visited = FxHashSet::default();
        for location in locations {
            self.infect_location(location, amount, disease, &mut visited)?;
        }
        Ok(())
    }

    fn infect_location(
        &mut self,
        location: &LocationId,
        amount: u8,
        disease: Option<Disease>,
        visited: &mut FxHashSet<LocationId>,
    ) -> Result<()> {
        if visited.contains(location) {
            return Ok(());
        }
        let disease = match disease {
            Some(disease) => disease,
            None => self.map().disease_of(location)?,
        };
        if self.is_eradicated(disease) {
            return Ok(());
        }

        let max = self.rules().max_infections;
        let current = self.disease_count(location, disease);
        if u16::from(current) + u16::from(amount) <= u16::from(max) {
            self.set_disease_count(location, disease, current + amount);
            return self.check_supply(disease);
        }

        self.set_disease_count(location, disease, max);
        self.check_supply(disease)?;
        self.outbreaks += 1;
        log::warn!("outbreak of {disease} in {location} ({} so far)", self.outbreaks);
        if self.outbreaks > self.rules().max_outbreaks {
            return Err(self.defeat(DefeatCause::TooManyOutbreaks));
        }

        visited.insert(location.clone());
        let map = self.map_handle();
        for neighbor in map.neighbors(location)? {
            self.infect_location(neighbor, 1, Some(disease), visited)?;
        }
        Ok(())
    }

    /// More units of one colour on the board than the supply holds loses.
    fn check_supply(&mut self, disease: Disease) -> Result<()> {
        if self.disease_total(disease) > self.rules().max_diseases {
            return Err(self.defeat(DefeatCause::DiseaseSupplyExhausted(disease)));
        }
        Ok(())
    }

    /// Locations the specialist protects: its own and its neighbours.
    #[must_use]
    pub fn protected_locations(&self) -> FxHashSet<LocationId> {
        let mut protected = FxHashSet::default();
        let Some(location) = self
            .player_with_role(Role::Specialist)
            .and_then(|specialist| self.player_locations.get(specialist))
        else {
            return protected;
        };
        if let Ok(neighbors) = self.map().neighbors(location) {
            protected.extend(neighbors.iter().cloned());
        }
        protected.insert(location.clone());
        protected
    }

    /// Move up to `n` cards from the top of the infection deck to its
    /// discard pile.
    pub(crate) fn draw_infection_cards(&mut self, n: usize) -> Vec<LocationId> {
        let drawn: Vec<LocationId> = (0..n)
            .filter_map(|_| self.infection_deck.pop_back())
            .collect();
        self.infection_dump.extend(drawn.iter().cloned());
        drawn
    }

    /// End-of-turn infection: draw at the current rate, one unit each.
    ///
    /// The whole draw is one cascade: a location that outbroke on an
    /// earlier card is not infected again.
    pub(crate) fn infection_draw(&mut self) -> Result<()> {
        let rate = self.rules().infection_rate(self.epidemics);
        let drawn = self.draw_infection_cards(rate);
        let mut visited = self.protected_locations();
        for location in &drawn {
            self.infect_location(location, 1, None, &mut visited)?;
        }
        Ok(())
    }

    /// Resolve one pending epidemic.
    ///
    /// The bottom infection card takes a full load of its colour and is
    /// discarded; the discard pile is then shuffled back onto the deck.
    pub(crate) fn solve_epidemic(&mut self) -> Result<()> {
        if self.epidemics_to_solve == 0 {
            return Ok(());
        }
        self.epidemics_to_solve -= 1;

        if let Some(location) = self.infection_deck.pop_front() {
            log::info!("epidemic in {location}");
            self.infection_dump.push_back(location.clone());
            let amount = self.rules().max_infections;
            self.infect(&[location], amount, None)?;
        }
        self.intensify();
        Ok(())
    }

    /// Shuffle the infection discard pile onto the top of the deck.
    pub(crate) fn intensify(&mut self) {
        let mut dump: Vec<LocationId> = std::mem::take(&mut self.infection_dump).into_iter().collect();
        self.rng.shuffle(&mut dump);
        self.infection_deck.extend(dump);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameError, Phase, PlayerId, Rules};
    use crate::map::{DiseaseStatus, MapCatalog};
    use std::sync::Arc;

    /// Triangle A-B-C (all blue) plus D (red) hanging off C.
    fn state(rules: Rules) -> GameState {
        let map = MapCatalog::builder("triangle")
            .location("A", Disease::Blue, 1)
            .location("B", Disease::Blue, 1)
            .location("C", Disease::Blue, 1)
            .location("D", Disease::Red, 1)
            .link("A", "B")
            .link("B", "C")
            .link("C", "A")
            .link("C", "D")
            .starting_location("A")
            .build()
            .unwrap();
        let mut state = GameState::new(Arc::new(rules), Arc::new(map), 1);
        state.add_player(PlayerId::new("ann"), Role::Medic);
        state.begin().unwrap();
        state
    }

    fn loc(name: &str) -> LocationId {
        LocationId::new(name)
    }

    #[test]
    fn test_infect_adds_units() {
        let mut state = state(Rules::default());
        state.infect(&[loc("A")], 2, None).unwrap();
        assert_eq!(state.disease_count(&loc("A"), Disease::Blue), 2);
        assert_eq!(state.outbreaks, 0);
    }

    #[test]
    fn test_infect_explicit_colour() {
        let mut state = state(Rules::default());
        state.infect(&[loc("A")], 1, Some(Disease::Red)).unwrap();
        assert_eq!(state.disease_count(&loc("A"), Disease::Red), 1);
        assert_eq!(state.disease_count(&loc("A"), Disease::Blue), 0);
    }

    #[test]
    fn test_outbreak_clamps_and_spreads() {
        let mut state = state(Rules::default());
        state.set_disease_count(&loc("C"), Disease::Blue, 3);

        state.infect(&[loc("C")], 1, None).unwrap();

        assert_eq!(state.disease_count(&loc("C"), Disease::Blue), 3);
        assert_eq!(state.outbreaks, 1);
        assert_eq!(state.disease_count(&loc("A"), Disease::Blue), 1);
        assert_eq!(state.disease_count(&loc("B"), Disease::Blue), 1);
        // spreads the outbreaking colour, not the neighbour's own
        assert_eq!(state.disease_count(&loc("D"), Disease::Blue), 1);
        assert_eq!(state.disease_count(&loc("D"), Disease::Red), 0);
    }

    #[test]
    fn test_cycle_outbreaks_once_each() {
        let mut state = state(Rules::default().with_max_outbreaks(10));
        for name in ["A", "B", "C"] {
            state.set_disease_count(&loc(name), Disease::Blue, 3);
        }

        state.infect(&[loc("A")], 1, None).unwrap();

        assert_eq!(state.outbreaks, 3);
        for name in ["A", "B", "C"] {
            assert_eq!(state.disease_count(&loc(name), Disease::Blue), 3);
        }
        assert_eq!(state.disease_count(&loc("D"), Disease::Blue), 1);
    }

    #[test]
    fn test_too_many_outbreaks_is_defeat() {
        let mut state = state(Rules::default().with_max_outbreaks(1));
        state.set_disease_count(&loc("A"), Disease::Blue, 3);
        state.set_disease_count(&loc("B"), Disease::Blue, 3);

        let err = state.infect(&[loc("A")], 1, None).unwrap_err();

        assert_eq!(err, GameError::Defeat(DefeatCause::TooManyOutbreaks));
        assert_eq!(state.phase, Phase::Defeat);
        assert_eq!(state.outbreaks, 2);
    }

    #[test]
    fn test_supply_exhausted_is_defeat() {
        let mut state = state(Rules::default().with_max_diseases(4));
        state.set_disease_count(&loc("A"), Disease::Blue, 3);
        state.set_disease_count(&loc("B"), Disease::Blue, 1);

        let err = state.infect(&[loc("C")], 1, None).unwrap_err();
        assert_eq!(err, GameError::Defeat(DefeatCause::DiseaseSupplyExhausted(Disease::Blue)));
        assert_eq!(state.phase, Phase::Defeat);
    }

    #[test]
    fn test_eradicated_colour_is_skipped() {
        let mut state = state(Rules::default());
        state.disease_status.insert(Disease::Blue, DiseaseStatus::Eradicated);

        state.infect(&[loc("A")], 3, None).unwrap();
        assert_eq!(state.disease_total(Disease::Blue), 0);
    }

    #[test]
    fn test_specialist_protection() {
        let mut state = state(Rules::default());
        state.add_player(PlayerId::new("sam"), Role::Specialist);
        state
            .player_locations
            .insert(PlayerId::new("sam"), loc("D"));
        state.infection_deck.push_back(loc("B"));
        state.infection_deck.push_back(loc("C"));
        state.infection_deck.push_back(loc("D"));

        // rate 2 draws D then C, both protected
        state.infection_draw().unwrap();

        assert_eq!(state.disease_total(Disease::Red), 0);
        assert_eq!(state.disease_total(Disease::Blue), 0);
        assert_eq!(state.infection_dump.len(), 2);
        assert_eq!(state.infection_deck.len(), 1);
    }

    #[test]
    fn test_draw_shares_one_cascade() {
        let mut state = state(Rules::default());
        state.set_disease_count(&loc("A"), Disease::Blue, 3);
        state.set_disease_count(&loc("B"), Disease::Blue, 3);
        state.infection_deck.push_back(loc("B"));
        state.infection_deck.push_back(loc("A"));

        // A outbreaks into B, then B's own card finds it already visited
        state.infection_draw().unwrap();

        assert_eq!(state.outbreaks, 2);
        assert_eq!(state.phase, Phase::PlayerAction);
        // C neighbours both and takes one unit from each outbreak
        assert_eq!(state.disease_count(&loc("C"), Disease::Blue), 2);
        assert_eq!(state.infection_dump.len(), 2);
    }

    #[test]
    fn test_epidemic_infects_bottom_and_reshuffles() {
        let mut state = state(Rules::default());
        state.infection_deck.push_back(loc("D"));
        state.infection_deck.push_back(loc("A"));
        state.infection_dump.push_back(loc("B"));
        state.epidemics_to_solve = 1;

        state.solve_epidemic().unwrap();

        assert_eq!(state.epidemics_to_solve, 0);
        assert_eq!(state.disease_count(&loc("D"), Disease::Red), 3);
        assert!(state.infection_dump.is_empty());
        assert_eq!(state.infection_deck.len(), 3);
        // A stays at the bottom, the reshuffled pile goes on top
        assert_eq!(state.infection_deck.front(), Some(&loc("A")));
    }

    #[test]
    fn test_draw_more_than_deck() {
        let mut state = state(Rules::default());
        state.infection_deck.push_back(loc("A"));
        let drawn = state.draw_infection_cards(3);
        assert_eq!(drawn, vec![loc("A")]);
        assert!(state.infection_deck.is_empty());
    }
}
