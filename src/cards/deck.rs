//! Deck construction.
//!
//! ## Location deck
//!
//! 1. Every event card and one card per map location are shuffled.
//! 2. Each player is dealt `Rules::cards_per_player` cards from the top.
//! 3. The rest is cut into `Rules::epidemic_cards` bands of equal size, top
//!    band first. Cards left over by the division stay at the bottom.
//! 4. One epidemic card is inserted at a uniform offset inside each band.
//!
//! ## Infection deck
//!
//! One card per map location, shuffled.
//!
//! Returned decks are bottom-first, matching `GameState`.

use crate::cards::card::{Card, EventCard};
use crate::core::config::Rules;
use crate::core::error::{GameError, Result};
use crate::core::rng::GameRng;
use crate::map::{LocationId, MapCatalog};

/// Result of the initial deal.
#[derive(Clone, Debug)]
pub struct Deal {
    /// One starting hand per seat, in seat order.
    pub hands: Vec<Vec<Card>>,
    /// Remaining location deck with epidemics, bottom-first.
    pub location_deck: Vec<Card>,
}

/// Shuffle, deal starting hands, and seed the remainder with epidemics.
pub fn deal_location_deck(
    map: &MapCatalog,
    rules: &Rules,
    player_count: usize,
    rng: &mut GameRng,
) -> Result<Deal> {
    let mut cards: Vec<Card> = EventCard::ALL
        .into_iter()
        .map(Card::Event)
        .chain(map.location_ids().iter().cloned().map(Card::Location))
        .collect();
    rng.shuffle(&mut cards);

    let per_player = rules.cards_per_player(player_count).ok_or_else(|| {
        GameError::Consistency(format!("no starting hand for {player_count} players"))
    })?;
    let dealt = per_player * player_count;
    if dealt > cards.len() {
        return Err(GameError::Consistency(format!(
            "cannot deal {dealt} cards from a deck of {}",
            cards.len()
        )));
    }

    // `cards` is in draw order here: index 0 is drawn first.
    let rest = cards.split_off(dealt);
    let hands = cards.chunks(per_player).map(<[Card]>::to_vec).collect();

    let mut location_deck = insert_epidemics(rest, rules.epidemic_cards, rng)?;
    location_deck.reverse();

    Ok(Deal { hands, location_deck })
}

/// Insert one epidemic into each of `bands` equal bands of `cards`.
///
/// Input and output are in draw order. Band `i` occupies positions
/// `i * (size + 1) .. (i + 1) * (size + 1)` of the output, where `size` is
/// `cards.len() / bands`.
pub fn insert_epidemics(cards: Vec<Card>, bands: usize, rng: &mut GameRng) -> Result<Vec<Card>> {
    if bands == 0 {
        return Ok(cards);
    }
    let band_size = cards.len() / bands;
    if band_size == 0 {
        return Err(GameError::Consistency(format!(
            "{} cards cannot hold {bands} epidemics",
            cards.len()
        )));
    }

    let mut out = Vec::with_capacity(cards.len() + bands);
    let mut rest = cards.into_iter();
    for _ in 0..bands {
        let offset = rng.offset(band_size);
        for (i, card) in rest.by_ref().take(band_size).enumerate() {
            if i == offset {
                out.push(Card::Epidemic);
            }
            out.push(card);
        }
        if offset == band_size {
            out.push(Card::Epidemic);
        }
    }
    out.extend(rest);
    Ok(out)
}

/// Shuffled infection deck, bottom-first.
pub fn build_infection_deck(map: &MapCatalog, rng: &mut GameRng) -> Vec<LocationId> {
    let mut cards = map.location_ids().to_vec();
    rng.shuffle(&mut cards);
    cards
}
