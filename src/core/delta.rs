//! State projections sent back to clients.
//!
//! ## Field / FieldSet
//!
//! Every action reports which parts of the state it touched as a `FieldSet`.
//! Each action kind has a named event group in [`events`]; an action's set
//! is the union of its groups.
//!
//! ## StateDelta
//!
//! Projection of a `GameState` onto a `FieldSet`. Only selected fields are
//! present; `GameState::serialize()` selects all of them. Decks are reported
//! as counts, never as contents.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::phase::Phase;
use super::player::{PlayerId, Role};
use super::state::GameState;
use crate::cards::Card;
use crate::map::{Disease, DiseaseStatus, LocationId};

/// One projectable part of the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Players,
    PlayerRoles,
    PlayerLocations,
    PlayerHands,
    LocationsDiseaseCount,
    LocationsResearchCenter,
    DiseaseStatus,
    LocationDeckCount,
    InfectionDeckCount,
    LocationDump,
    InfectionDump,
    Epidemics,
    Outbreaks,
    Phase,
    EpidemicsToSolve,
    PlayerActions,
    CurrentPlayer,
    LocationsTypes,
    QuietNight,
}

impl Field {
    pub const ALL: [Field; 19] = [
        Field::Players,
        Field::PlayerRoles,
        Field::PlayerLocations,
        Field::PlayerHands,
        Field::LocationsDiseaseCount,
        Field::LocationsResearchCenter,
        Field::DiseaseStatus,
        Field::LocationDeckCount,
        Field::InfectionDeckCount,
        Field::LocationDump,
        Field::InfectionDump,
        Field::Epidemics,
        Field::Outbreaks,
        Field::Phase,
        Field::EpidemicsToSolve,
        Field::PlayerActions,
        Field::CurrentPlayer,
        Field::LocationsTypes,
        Field::QuietNight,
    ];

    const fn bit(self) -> u32 {
        1 << self as u32
    }
}

/// Set of `Field`s, stored as a bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldSet(u32);

impl FieldSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub fn all() -> Self {
        Self::empty().with(&Field::ALL)
    }

    /// This set plus `fields`.
    #[must_use]
    pub fn with(mut self, fields: &[Field]) -> Self {
        self.extend(fields);
        self
    }

    pub fn insert(&mut self, field: Field) {
        self.0 |= field.bit();
    }

    pub fn extend(&mut self, fields: &[Field]) {
        for &field in fields {
            self.insert(field);
        }
    }

    pub fn union(&mut self, other: FieldSet) {
        self.0 |= other.0;
    }

    #[must_use]
    pub fn contains(self, field: Field) -> bool {
        self.0 & field.bit() != 0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Field> {
        Field::ALL.into_iter().filter(move |&f| self.contains(f))
    }
}

/// Named field groups, one per kind of change.
pub mod events {
    use super::Field;

    pub const MOVE: &[Field] = &[Field::PlayerLocations];
    pub const HEAL: &[Field] = &[Field::LocationsDiseaseCount, Field::DiseaseStatus];
    pub const INFECTION: &[Field] = &[
        Field::LocationsDiseaseCount,
        Field::DiseaseStatus,
        Field::InfectionDeckCount,
        Field::InfectionDump,
        Field::Outbreaks,
        Field::Epidemics,
        Field::EpidemicsToSolve,
    ];
    pub const DRAWN_LOCATION: &[Field] = &[
        Field::PlayerHands,
        Field::LocationDeckCount,
        Field::Epidemics,
        Field::EpidemicsToSolve,
    ];
    pub const DUMP_LOCATION: &[Field] = &[Field::PlayerHands, Field::LocationDump];
    pub const BUILD: &[Field] = &[Field::LocationsResearchCenter];
    pub const CURE: &[Field] = &[Field::DiseaseStatus];
    pub const GIVE_CARD: &[Field] = &[Field::PlayerHands];
    pub const EVENT: &[Field] = &[Field::QuietNight];
    pub const END_TURN: &[Field] = &[
        Field::CurrentPlayer,
        Field::PlayerActions,
        Field::QuietNight,
    ];
    /// Sent with every successful action.
    pub const PROGRESS: &[Field] = &[Field::Phase, Field::PlayerActions];
}

/// Units of one colour at one location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseCount {
    #[serde(rename = "type")]
    pub disease: Disease,
    pub count: u8,
}

/// All present colours at one location. An empty list means a clean location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDiseases {
    pub location: LocationId,
    pub diseases: Vec<DiseaseCount>,
}

/// Board total and status of one colour.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseReport {
    #[serde(rename = "type")]
    pub disease: Disease,
    pub count: u32,
    pub status: DiseaseStatus,
}

/// Projection of the state onto a set of fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDelta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<PlayerId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_roles: Option<OrdMap<PlayerId, Role>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_locations: Option<OrdMap<PlayerId, LocationId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_hands: Option<OrdMap<PlayerId, Vector<Card>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations_disease_count: Option<Vec<LocationDiseases>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations_research_center: Option<Vec<LocationId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease_status: Option<Vec<DiseaseReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_deck_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infection_deck_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_dump: Option<Vector<Card>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infection_dump: Option<Vector<LocationId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epidemics: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbreaks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<Phase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epidemics_to_solve: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_actions: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_player: Option<PlayerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations_types: Option<OrdMap<LocationId, Disease>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiet_night: Option<bool>,
    /// Whether a cancel request would currently undo something.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellable: Option<bool>,
}

impl GameState {
    /// Project the selected fields.
    #[must_use]
    pub fn project(&self, fields: FieldSet) -> StateDelta {
        let mut delta = StateDelta::default();
        for field in fields.iter() {
            match field {
                Field::Players => delta.players = Some(self.players.iter().cloned().collect()),
                Field::PlayerRoles => delta.player_roles = Some(self.player_roles.clone()),
                Field::PlayerLocations => {
                    delta.player_locations = Some(self.player_locations.clone());
                }
                Field::PlayerHands => delta.player_hands = Some(self.player_hands.clone()),
                Field::LocationsDiseaseCount => {
                    delta.locations_disease_count = Some(self.disease_count_report());
                }
                Field::LocationsResearchCenter => {
                    delta.locations_research_center =
                        Some(self.locations_research_center.iter().cloned().collect());
                }
                Field::DiseaseStatus => delta.disease_status = Some(self.disease_status_report()),
                Field::LocationDeckCount => delta.location_deck_count = Some(self.location_deck.len()),
                Field::InfectionDeckCount => {
                    delta.infection_deck_count = Some(self.infection_deck.len());
                }
                Field::LocationDump => delta.location_dump = Some(self.location_dump.clone()),
                Field::InfectionDump => delta.infection_dump = Some(self.infection_dump.clone()),
                Field::Epidemics => delta.epidemics = Some(self.epidemics),
                Field::Outbreaks => delta.outbreaks = Some(self.outbreaks),
                Field::Phase => delta.phase = Some(self.phase),
                Field::EpidemicsToSolve => delta.epidemics_to_solve = Some(self.epidemics_to_solve),
                Field::PlayerActions => delta.player_actions = Some(self.player_actions),
                Field::CurrentPlayer => delta.current_player = Some(self.current_player.clone()),
                Field::LocationsTypes => {
                    delta.locations_types = Some(
                        self.map()
                            .locations()
                            .map(|info| (info.id.clone(), info.disease))
                            .collect(),
                    );
                }
                Field::QuietNight => delta.quiet_night = Some(self.quiet_night),
            }
        }
        delta
    }

    /// Full projection.
    #[must_use]
    pub fn serialize(&self) -> StateDelta {
        self.project(FieldSet::all())
    }

    /// Every map location with its present colours, in map order.
    fn disease_count_report(&self) -> Vec<LocationDiseases> {
        self.map()
            .location_ids()
            .iter()
            .map(|location| LocationDiseases {
                location: location.clone(),
                diseases: self
                    .locations_disease_count
                    .get(location)
                    .map(|counts| {
                        counts
                            .present()
                            .map(|(disease, count)| DiseaseCount { disease, count })
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect()
    }

    fn disease_status_report(&self) -> Vec<DiseaseReport> {
        Disease::ALL
            .into_iter()
            .map(|disease| DiseaseReport {
                disease,
                count: self.disease_total(disease),
                status: self.status(disease),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use crate::map::MapCatalog;
    use std::sync::Arc;

    fn state() -> GameState {
        let map = MapCatalog::builder("pair")
            .location("A", Disease::Blue, 1)
            .location("B", Disease::Red, 2)
            .link("A", "B")
            .starting_location("A")
            .build()
            .unwrap();
        let mut state = GameState::new(Arc::new(Rules::default()), Arc::new(map), 1);
        state.add_player(PlayerId::new("ann"), Role::Medic);
        state.begin().unwrap();
        state
    }

    #[test]
    fn test_field_set() {
        let mut set = FieldSet::empty().with(events::MOVE);
        assert!(set.contains(Field::PlayerLocations));
        assert!(!set.contains(Field::Phase));

        set.union(FieldSet::empty().with(events::PROGRESS));
        let fields: Vec<_> = set.iter().collect();
        assert_eq!(fields, vec![Field::PlayerLocations, Field::Phase, Field::PlayerActions]);
        assert_eq!(FieldSet::all().iter().count(), Field::ALL.len());
    }

    #[test]
    fn test_project_selected_only() {
        let state = state();
        let delta = state.project(FieldSet::empty().with(events::MOVE));

        assert!(delta.player_locations.is_some());
        assert!(delta.phase.is_none());
        assert!(delta.player_hands.is_none());
    }

    #[test]
    fn test_serialize_reports_counts_not_decks() {
        let mut state = state();
        state.location_deck.push_back(Card::location("A"));
        state.location_deck.push_back(Card::Epidemic);
        state.set_disease_count(&LocationId::new("B"), Disease::Red, 2);

        let delta = state.serialize();
        assert_eq!(delta.location_deck_count, Some(2));
        assert_eq!(delta.phase, Some(Phase::PlayerAction));

        let report = delta.locations_disease_count.unwrap();
        assert_eq!(report.len(), 2);
        assert!(report[0].diseases.is_empty());
        assert_eq!(report[1].diseases, vec![DiseaseCount { disease: Disease::Red, count: 2 }]);

        let status = delta.disease_status.unwrap();
        let red = status.iter().find(|r| r.disease == Disease::Red).unwrap();
        assert_eq!(red.count, 2);
        assert_eq!(red.status, DiseaseStatus::Ongoing);
    }

    #[test]
    fn test_json_omits_absent_fields() {
        let state = state();
        let json = serde_json::to_value(state.project(FieldSet::empty().with(&[Field::Outbreaks])))
            .unwrap();
        assert_eq!(json, serde_json::json!({ "outbreaks": 0 }));
    }
}
