//! Player cards.

use serde::{Deserialize, Serialize};

use crate::map::LocationId;

/// One-shot event cards. Playing one costs no action point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCard {
    /// Move any player to any location.
    Airlift,
    /// Build a research centre anywhere.
    GovernmentGrant,
    /// Skip the next infection draw.
    QuietNight,
    /// Remove one card from the infection discard pile.
    ResilientPopulation,
}

impl EventCard {
    pub const ALL: [EventCard; 4] = [
        EventCard::Airlift,
        EventCard::GovernmentGrant,
        EventCard::QuietNight,
        EventCard::ResilientPopulation,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            EventCard::Airlift => "Airlift",
            EventCard::GovernmentGrant => "Government Grant",
            EventCard::QuietNight => "One Quiet Night",
            EventCard::ResilientPopulation => "Resilient Population",
        }
    }
}

/// A card of the location (player) deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Card {
    Location(LocationId),
    Epidemic,
    Event(EventCard),
}

impl Card {
    #[must_use]
    pub fn location(name: impl Into<String>) -> Self {
        Card::Location(LocationId::new(name))
    }

    #[must_use]
    pub fn as_location(&self) -> Option<&LocationId> {
        match self {
            Card::Location(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_epidemic(&self) -> bool {
        matches!(self, Card::Epidemic)
    }

    #[must_use]
    pub fn is_event(&self) -> bool {
        matches!(self, Card::Event(_))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Location(id) => write!(f, "{id}"),
            Card::Epidemic => f.write_str("Epidemic"),
            Card::Event(event) => f.write_str(event.title()),
        }
    }
}
