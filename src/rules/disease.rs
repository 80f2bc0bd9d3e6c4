//! Treatment, cures, eradication and victory.

use crate::cards::Card;
use crate::core::error::{GameError, Result};
use crate::core::player::{PlayerId, Role};
use crate::core::state::GameState;
use crate::map::{Disease, DiseaseStatus, LocationId};

impl GameState {
    /// Colour a heal at `location` would treat.
    ///
    /// Without a request, the location's own colour is preferred, then any
    /// present colour. A requested colour must be present.
    pub fn disease_to_heal(&self, location: &LocationId, requested: Option<Disease>) -> Result<Disease> {
        match requested {
            Some(disease) if self.disease_count(location, disease) > 0 => Ok(disease),
            Some(_) => Err(GameError::NoDiseaseToCure),
            None => {
                let own = self.map().disease_of(location)?;
                if self.disease_count(location, own) > 0 {
                    return Ok(own);
                }
                Disease::ALL
                    .into_iter()
                    .find(|&d| self.disease_count(location, d) > 0)
                    .ok_or(GameError::NoDiseaseToCure)
            }
        }
    }

    /// Treat one colour where `player` stands.
    ///
    /// Removes every unit when the player is the medic or the colour is
    /// cured, otherwise one.
    pub(crate) fn heal(&mut self, player: &PlayerId, requested: Option<Disease>) -> Result<Disease> {
        let location = self.location_of(player)?.clone();
        let disease = self.disease_to_heal(&location, requested)?;
        let current = self.disease_count(&location, disease);
        let removed = if self.has_role(player, Role::Medic) || self.is_cured(disease) {
            current
        } else {
            1
        };
        self.set_disease_count(&location, disease, current - removed);
        self.check_eradication(disease)?;
        Ok(disease)
    }

    /// Clear every cured colour at `location`.
    pub(crate) fn clear_cured(&mut self, location: &LocationId) -> Result<()> {
        for disease in Disease::ALL {
            if self.is_cured(disease) && self.disease_count(location, disease) > 0 {
                self.set_disease_count(location, disease, 0);
                self.check_eradication(disease)?;
            }
        }
        Ok(())
    }

    /// Medic's passive: clear cured colours wherever the medic stands.
    pub(crate) fn medic_auto_heal(&mut self) -> Result<()> {
        let Some(location) = self
            .player_with_role(Role::Medic)
            .and_then(|medic| self.player_locations.get(medic))
            .cloned()
        else {
            return Ok(());
        };
        self.clear_cured(&location)
    }

    /// Cards `player` must discard for a cure.
    #[must_use]
    pub fn cards_to_cure(&self, player: &PlayerId) -> usize {
        let needed = self.rules().cards_to_cure;
        if self.has_role(player, Role::Scientist) {
            needed.saturating_sub(1)
        } else {
            needed
        }
    }

    /// Check that `cards` can cure a colour for `player`.
    ///
    /// Checked in order: card count, colour not yet cured, a single colour,
    /// every card held.
    pub fn cure_colour(&self, player: &PlayerId, cards: &[Card]) -> Result<Disease> {
        let needed = self.cards_to_cure(player);
        if cards.len() < needed {
            return Err(GameError::LocationCardsAreMissing);
        }
        if cards.len() > needed {
            return Err(GameError::TooManyCards);
        }

        let mut colours = Vec::with_capacity(cards.len());
        for card in cards {
            let location = card.as_location().ok_or(GameError::LocationCardsNotMatching)?;
            colours.push(self.map().disease_of(location)?);
        }
        let Some(&disease) = colours.first() else {
            return Err(GameError::LocationCardsAreMissing);
        };
        if self.is_cured(disease) {
            return Err(GameError::DiseaseAlreadyCured);
        }
        if colours.iter().any(|&c| c != disease) {
            return Err(GameError::LocationCardsNotMatching);
        }
        for card in cards {
            if !self.holds(player, card) {
                return Err(GameError::NoSuchCard);
            }
        }
        Ok(disease)
    }

    /// Discard the cards and cure their colour.
    pub(crate) fn cure(&mut self, player: &PlayerId, cards: &[Card]) -> Result<Disease> {
        let disease = self.cure_colour(player, cards)?;
        self.discard_cards(player, cards)?;
        self.disease_status.insert(disease, DiseaseStatus::Cured);
        log::info!("{player} cured {disease}");

        self.medic_auto_heal()?;
        self.check_eradication(disease)?;
        self.check_victory()?;
        Ok(disease)
    }

    /// A cured colour with no units left is eradicated.
    fn check_eradication(&mut self, disease: Disease) -> Result<()> {
        if self.status(disease) == DiseaseStatus::Cured && self.disease_total(disease) == 0 {
            self.disease_status.insert(disease, DiseaseStatus::Eradicated);
            log::info!("{disease} eradicated");
            self.check_victory()?;
        }
        Ok(())
    }

    /// Every colour cured or eradicated wins.
    fn check_victory(&mut self) -> Result<()> {
        if Disease::ALL.into_iter().all(|d| self.is_cured(d)) {
            return Err(self.victory());
        }
        Ok(())
    }
}
