//! Action handlers.
//!
//! Each handler validates what its preconditions cannot express, mutates the
//! state and reports the touched fields. Handlers may leave partial changes
//! behind on error; `GameState::apply` rolls those back.

use crate::cards::Card;
use crate::core::action::{EventAction, GameAction};
use crate::core::delta::{events, FieldSet};
use crate::core::error::{GameError, Result};
use crate::core::phase::Phase;
use crate::core::player::{PlayerId, Role};
use crate::core::state::GameState;
use crate::map::LocationId;

impl GameState {
    /// Run the handler for `action` on behalf of `player`.
    pub(crate) fn dispatch(&mut self, player: &PlayerId, action: &GameAction) -> Result<FieldSet> {
        match action {
            GameAction::Move { player: moving, to } => {
                self.move_player(player, moving.as_ref().unwrap_or(player), to)
            }
            GameAction::Heal { disease } => {
                self.heal(player, *disease)?;
                Ok(FieldSet::empty().with(events::HEAL))
            }
            GameAction::EndTurn => self.end_turn(player),
            GameAction::DumpCard { cards } => self.dump_cards(player, cards),
            GameAction::MoveToLocation { to } => self.fly_to(player, to),
            GameAction::MoveToLocationExpert { to, card } => self.expert_fly(player, to, card),
            GameAction::MoveFromLocationCard { to } => self.charter_flight(player, to),
            GameAction::BuildResearchCenter => self.build_research_center(player),
            GameAction::DestroyResearchCenter { location } => self.destroy_research_center(location),
            GameAction::CureDisease { cards } => {
                self.cure(player, cards)?;
                Ok(FieldSet::empty()
                    .with(events::DUMP_LOCATION)
                    .with(events::CURE)
                    .with(events::HEAL))
            }
            GameAction::GiveCard { from, to, card } => self.give_card(player, from, to, card),
            GameAction::PlayEvent(event) => self.play_event(player, event),
        }
    }

    // === Movement ===

    fn move_player(&mut self, actor: &PlayerId, moving: &PlayerId, to: &LocationId) -> Result<FieldSet> {
        self.map().location(to)?;
        let from = self.location_of(moving)?.clone();
        let dispatcher = self.has_role(actor, Role::Dispatcher);
        if moving != actor && !dispatcher {
            return Err(GameError::CannotMoveOthers);
        }

        let reachable = self.map().is_adjacent(&from, to)
            || (from != *to && self.has_research_center(&from) && self.has_research_center(to))
            || (dispatcher && self.players_at(to).any(|p| p != moving));
        if !reachable {
            return Err(GameError::NotANeighbor);
        }
        self.relocate(moving, to)
    }

    /// Discard the destination's card and fly there.
    fn fly_to(&mut self, actor: &PlayerId, to: &LocationId) -> Result<FieldSet> {
        self.map().location(to)?;
        self.discard_card(actor, &Card::Location(to.clone()))?;
        Ok(self.relocate(actor, to)?.with(events::DUMP_LOCATION))
    }

    /// Discard the current location's card and fly anywhere.
    fn charter_flight(&mut self, actor: &PlayerId, to: &LocationId) -> Result<FieldSet> {
        self.map().location(to)?;
        let from = self.location_of(actor)?.clone();
        self.discard_location_card(actor, &from)?;
        Ok(self.relocate(actor, to)?.with(events::DUMP_LOCATION))
    }

    /// Expert: discard any location card and fly anywhere.
    fn expert_fly(&mut self, actor: &PlayerId, to: &LocationId, card: &Card) -> Result<FieldSet> {
        card.as_location().ok_or(GameError::NotALocationCard)?;
        self.map().location(to)?;
        self.discard_card(actor, card)?;
        Ok(self.relocate(actor, to)?.with(events::DUMP_LOCATION))
    }

    /// Place a player. A medic clears cured colours on arrival.
    pub(crate) fn relocate(&mut self, player: &PlayerId, to: &LocationId) -> Result<FieldSet> {
        self.player_locations.insert(player.clone(), to.clone());
        let mut fields = FieldSet::empty().with(events::MOVE);
        if self.has_role(player, Role::Medic) {
            self.clear_cured(to)?;
            fields.extend(events::HEAL);
        }
        Ok(fields)
    }

    fn discard_location_card(&mut self, player: &PlayerId, location: &LocationId) -> Result<()> {
        self.discard_card(player, &Card::Location(location.clone()))
            .map_err(|err| match err {
                GameError::NoSuchCard => GameError::NeedCurrentLocationCard,
                other => other,
            })
    }

    // === Research centres ===

    fn build_research_center(&mut self, actor: &PlayerId) -> Result<FieldSet> {
        let location = self.location_of(actor)?.clone();
        if self.has_research_center(&location) {
            return Err(GameError::ResearchCenterAlreadyPresent);
        }
        let mut fields = FieldSet::empty().with(events::BUILD);
        if !self.has_role(actor, Role::Expert) {
            self.discard_location_card(actor, &location)?;
            fields.extend(events::DUMP_LOCATION);
        }
        self.place_research_center(&location)?;
        Ok(fields)
    }

    /// Reaching the cap suspends play until one centre is removed.
    fn place_research_center(&mut self, location: &LocationId) -> Result<()> {
        self.locations_research_center.insert(location.clone());
        if self.locations_research_center.len() >= self.rules().max_research_centers {
            self.hold_phase(Phase::DestroyResearchCenter)?;
        }
        Ok(())
    }

    fn destroy_research_center(&mut self, location: &LocationId) -> Result<FieldSet> {
        if self.locations_research_center.remove(location).is_none() {
            return Err(GameError::NoResearchCenterPresent);
        }
        if self.locations_research_center.len() < self.rules().max_research_centers {
            self.resume_phase();
        }
        Ok(FieldSet::empty().with(events::BUILD))
    }

    // === Cards ===

    fn give_card(&mut self, actor: &PlayerId, from: &PlayerId, to: &PlayerId, card: &Card) -> Result<FieldSet> {
        if actor != from && actor != to {
            return Err(GameError::InvalidPlayer(actor.clone()));
        }
        if self.current_player != *from && self.current_player != *to {
            return Err(GameError::NotYourTurn);
        }
        if from == to {
            return Err(GameError::InvalidPlayer(to.clone()));
        }
        let giver_at = self.location_of(from)?.clone();
        let receiver_at = self.location_of(to)?;
        let location = card.as_location().ok_or(GameError::NotALocationCard)?;
        if giver_at != *receiver_at {
            return Err(GameError::NotInTheSamePlace);
        }
        if !self.has_role(from, Role::Researcher) && *location != giver_at {
            return Err(GameError::NotInTheRightPlace);
        }

        self.transfer_card(from, to, card)?;
        if self.over_hand_limit(to) {
            self.hold_phase(Phase::DumpCard)?;
        }
        Ok(FieldSet::empty().with(events::GIVE_CARD))
    }

    /// Discard until back under the limit. Extra cards are kept.
    fn dump_cards(&mut self, actor: &PlayerId, cards: &[Card]) -> Result<FieldSet> {
        if cards.is_empty() {
            return Err(GameError::NoSuchCard);
        }
        if !self.over_hand_limit(actor) {
            return Err(GameError::CannotDumpCard);
        }
        for card in cards {
            if !self.over_hand_limit(actor) {
                break;
            }
            self.discard_card(actor, card)?;
        }

        let mut fields = FieldSet::empty().with(events::DUMP_LOCATION);
        if self.settle_dump_phase() == Some(Phase::EndTurn) {
            fields.union(self.finish_turn()?);
        }
        Ok(fields)
    }

    // === Turn ===

    fn end_turn(&mut self, player: &PlayerId) -> Result<FieldSet> {
        let mut fields = FieldSet::empty();
        if self.phase == Phase::PlayerAction {
            if self.player_actions < self.rules().max_actions {
                return Err(GameError::ActionRemaining);
            }
            let count = self.rules().cards_per_turn;
            let drawn = self.draw_location_cards(count)?;
            self.receive_cards(player, drawn)?;
            self.phase = Phase::EndTurn;
            fields.extend(events::DRAWN_LOCATION);
        }
        fields.union(self.finish_turn()?);
        Ok(fields)
    }

    /// Everything after the end-of-turn draw: forced discards, epidemics,
    /// infection draw, rotation.
    pub(crate) fn finish_turn(&mut self) -> Result<FieldSet> {
        let mut fields = FieldSet::empty().with(events::END_TURN);
        if self.any_over_hand_limit() {
            self.hold_phase(Phase::DumpCard)?;
            return Ok(fields);
        }

        while self.epidemics_to_solve > 0 {
            self.phase = Phase::SolveEpidemic;
            self.solve_epidemic()?;
        }
        if self.quiet_night {
            self.quiet_night = false;
        } else {
            self.infection_draw()?;
        }
        fields.extend(events::INFECTION);
        self.rotate_turn();
        Ok(fields)
    }

    // === Events ===

    fn play_event(&mut self, actor: &PlayerId, event: &EventAction) -> Result<FieldSet> {
        match event {
            EventAction::Airlift { player, to } => {
                self.map().location(to)?;
                self.location_of(player)?;
            }
            EventAction::GovernmentGrant { location } => {
                self.map().location(location)?;
                if self.has_research_center(location) {
                    return Err(GameError::ResearchCenterAlreadyPresent);
                }
            }
            EventAction::QuietNight => {}
            EventAction::ResilientPopulation { card } => {
                if !self.infection_dump.contains(card) {
                    return Err(GameError::NoSuchCard);
                }
            }
        }

        self.discard_card(actor, &Card::Event(event.card()))?;
        let mut fields = FieldSet::empty().with(events::DUMP_LOCATION);
        let resumed = self.settle_dump_phase();

        match event {
            EventAction::Airlift { player, to } => fields.union(self.relocate(player, to)?),
            EventAction::GovernmentGrant { location } => {
                self.place_research_center(location)?;
                fields.extend(events::BUILD);
            }
            EventAction::QuietNight => {
                self.quiet_night = true;
                fields.extend(events::EVENT);
            }
            EventAction::ResilientPopulation { card } => {
                if let Some(index) = self.infection_dump.index_of(card) {
                    self.infection_dump.remove(index);
                }
                fields.extend(events::INFECTION);
            }
        }

        if resumed == Some(Phase::EndTurn) && self.phase == Phase::EndTurn {
            fields.union(self.finish_turn()?);
        }
        Ok(fields)
    }
}
