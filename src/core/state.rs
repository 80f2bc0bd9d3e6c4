//! Game state.
//!
//! ## GameState
//!
//! The complete mutable aggregate of one session:
//! - Players, roles, locations and hands
//! - Disease units per location, research centres, disease status
//! - Location and infection decks with their discard piles
//! - Phase, suspended phase, counters, current player
//! - RNG
//!
//! Collections use `im` persistent data structures, so `clone()` is
//! structural and cheap. Snapshots for cancellation and rollback on rejected
//! actions are plain clones.
//!
//! Decks are stored bottom-first: the top card is the last element.

use std::sync::Arc;

use im::{OrdMap, OrdSet, Vector};

use super::config::Rules;
use super::error::{DefeatCause, GameError, Result};
use super::phase::Phase;
use super::player::{PlayerId, Role};
use super::rng::GameRng;
use crate::cards::Card;
use crate::map::{Disease, DiseaseCounts, DiseaseStatus, LocationId, MapCatalog};

#[derive(Clone, Debug)]
pub struct GameState {
    rules: Arc<Rules>,
    map: Arc<MapCatalog>,
    pub(crate) rng: GameRng,

    // === Players ===
    /// Turn order.
    pub players: Vector<PlayerId>,
    pub player_roles: OrdMap<PlayerId, Role>,
    pub player_locations: OrdMap<PlayerId, LocationId>,
    pub player_hands: OrdMap<PlayerId, Vector<Card>>,

    // === Board ===
    /// Locations with no entry hold no disease.
    pub locations_disease_count: OrdMap<LocationId, DiseaseCounts>,
    pub locations_research_center: OrdSet<LocationId>,
    pub disease_status: OrdMap<Disease, DiseaseStatus>,

    // === Decks ===
    pub location_deck: Vector<Card>,
    pub infection_deck: Vector<LocationId>,
    pub location_dump: Vector<Card>,
    pub infection_dump: Vector<LocationId>,

    // === Progression ===
    pub phase: Phase,
    /// Phase suspended by a forced interaction (depth 1).
    pub phase_on_hold: Option<Phase>,
    /// Epidemics drawn so far; drives the infection rate.
    pub epidemics: u32,
    pub outbreaks: u32,
    /// Drawn epidemics not yet resolved.
    pub epidemics_to_solve: u32,
    /// Action points spent this turn.
    pub player_actions: u32,
    pub current_player: PlayerId,
    /// Skip the next infection draw.
    pub quiet_night: bool,
    /// Completed turn rotations.
    pub turn: u32,
}

impl GameState {
    /// Empty, not-started state: no players, no cards, clean board.
    #[must_use]
    pub fn new(rules: Arc<Rules>, map: Arc<MapCatalog>, seed: u64) -> Self {
        let disease_status = Disease::ALL
            .into_iter()
            .map(|d| (d, DiseaseStatus::Ongoing))
            .collect();

        Self {
            rules,
            map,
            rng: GameRng::new(seed),
            players: Vector::new(),
            player_roles: OrdMap::new(),
            player_locations: OrdMap::new(),
            player_hands: OrdMap::new(),
            locations_disease_count: OrdMap::new(),
            locations_research_center: OrdSet::new(),
            disease_status,
            location_deck: Vector::new(),
            infection_deck: Vector::new(),
            location_dump: Vector::new(),
            infection_dump: Vector::new(),
            phase: Phase::NotStarted,
            phase_on_hold: None,
            epidemics: 0,
            outbreaks: 0,
            epidemics_to_solve: 0,
            player_actions: 0,
            current_player: PlayerId::default(),
            quiet_night: false,
            turn: 0,
        }
    }

    /// Seat a player at the starting location with an empty hand.
    ///
    /// Appended to the end of the turn order.
    pub fn add_player(&mut self, player: PlayerId, role: Role) {
        let start = self.map.starting_location().clone();
        if !self.player_roles.contains_key(&player) {
            self.players.push_back(player.clone());
        }
        self.player_roles.insert(player.clone(), role);
        self.player_locations.insert(player.clone(), start);
        self.player_hands.insert(player, Vector::new());
    }

    /// Enter `player_action` with the first player in turn order.
    pub fn begin(&mut self) -> Result<()> {
        let first = self
            .players
            .front()
            .cloned()
            .ok_or_else(|| GameError::Consistency("no players seated".to_string()))?;
        self.current_player = first;
        self.player_actions = 0;
        self.phase = Phase::PlayerAction;
        self.phase_on_hold = None;
        Ok(())
    }

    // === Static data ===

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub fn map(&self) -> &MapCatalog {
        &self.map
    }

    /// Shared handle to the map, for iterating it while mutating the state.
    #[must_use]
    pub(crate) fn map_handle(&self) -> Arc<MapCatalog> {
        Arc::clone(&self.map)
    }

    // === Players ===

    #[must_use]
    pub fn is_seated(&self, player: &PlayerId) -> bool {
        self.player_roles.contains_key(player)
    }

    #[must_use]
    pub fn role_of(&self, player: &PlayerId) -> Option<Role> {
        self.player_roles.get(player).copied()
    }

    #[must_use]
    pub fn has_role(&self, player: &PlayerId, role: Role) -> bool {
        self.role_of(player) == Some(role)
    }

    /// The player holding `role`, if seated.
    #[must_use]
    pub fn player_with_role(&self, role: Role) -> Option<&PlayerId> {
        self.player_roles
            .iter()
            .find(|(_, r)| **r == role)
            .map(|(player, _)| player)
    }

    pub fn location_of(&self, player: &PlayerId) -> Result<&LocationId> {
        self.player_locations
            .get(player)
            .ok_or_else(|| GameError::InvalidPlayer(player.clone()))
    }

    pub fn hand(&self, player: &PlayerId) -> Result<&Vector<Card>> {
        self.player_hands
            .get(player)
            .ok_or_else(|| GameError::InvalidPlayer(player.clone()))
    }

    /// Players standing on `location`.
    pub fn players_at<'a>(&'a self, location: &'a LocationId) -> impl Iterator<Item = &'a PlayerId> + 'a {
        self.player_locations
            .iter()
            .filter(move |(_, at)| *at == location)
            .map(|(player, _)| player)
    }

    /// Player after the current one in turn order.
    #[must_use]
    pub fn next_player(&self) -> PlayerId {
        let index = self
            .players
            .index_of(&self.current_player)
            .map_or(0, |i| (i + 1) % self.players.len().max(1));
        self.players.get(index).cloned().unwrap_or_default()
    }

    // === Board ===

    #[must_use]
    pub fn disease_count(&self, location: &LocationId, disease: Disease) -> u8 {
        self.locations_disease_count
            .get(location)
            .map_or(0, |counts| counts.get(disease))
    }

    pub fn set_disease_count(&mut self, location: &LocationId, disease: Disease, count: u8) {
        let mut counts = self
            .locations_disease_count
            .get(location)
            .copied()
            .unwrap_or_default();
        counts.set(disease, count);
        self.locations_disease_count.insert(location.clone(), counts);
    }

    /// Units of `disease` on the whole board.
    #[must_use]
    pub fn disease_total(&self, disease: Disease) -> u32 {
        self.locations_disease_count
            .values()
            .map(|counts| u32::from(counts.get(disease)))
            .sum()
    }

    #[must_use]
    pub fn status(&self, disease: Disease) -> DiseaseStatus {
        self.disease_status.get(&disease).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn is_cured(&self, disease: Disease) -> bool {
        self.status(disease).is_cured()
    }

    #[must_use]
    pub fn is_eradicated(&self, disease: Disease) -> bool {
        self.status(disease) == DiseaseStatus::Eradicated
    }

    #[must_use]
    pub fn has_research_center(&self, location: &LocationId) -> bool {
        self.locations_research_center.contains(location)
    }

    // === Phases ===

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Suspend the current phase and enter a forced-interaction phase.
    ///
    /// Only one phase can be suspended at a time.
    pub(crate) fn hold_phase(&mut self, phase: Phase) -> Result<()> {
        if self.phase_on_hold.is_some() {
            return Err(GameError::InvalidGamePhase);
        }
        self.phase_on_hold = Some(self.phase);
        self.phase = phase;
        Ok(())
    }

    /// Leave the forced-interaction phase and restore the suspended one.
    pub(crate) fn resume_phase(&mut self) -> Phase {
        self.phase = self.phase_on_hold.take().unwrap_or(Phase::PlayerAction);
        self.phase
    }

    /// Hand the turn to the next player.
    pub(crate) fn rotate_turn(&mut self) {
        self.current_player = self.next_player();
        self.player_actions = 0;
        self.phase = Phase::PlayerAction;
        self.turn += 1;
        log::debug!("turn {} starts for {}", self.turn, self.current_player);
    }

    /// Enter `defeat` and build the terminal signal.
    pub(crate) fn defeat(&mut self, cause: DefeatCause) -> GameError {
        self.phase = Phase::Defeat;
        self.phase_on_hold = None;
        log::info!("game lost: {cause}");
        GameError::Defeat(cause)
    }

    /// Enter `victory` and build the terminal signal.
    pub(crate) fn victory(&mut self) -> GameError {
        self.phase = Phase::Victory;
        self.phase_on_hold = None;
        log::info!("game won");
        GameError::Victory
    }
}
