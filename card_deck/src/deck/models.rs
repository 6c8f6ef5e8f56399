//! Deck entity.

use crate::cards::Card;
use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};

/// Deck identifier
pub type DeckId = String;

/// An ordered pile of cards. The front of `cards` is the top of the deck.
///
/// `remaining` is never stored: it is always the length of the card list,
/// and `shuffled` has no setter once the deck exists.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "DeckRepr")]
pub struct Deck {
    id: DeckId,
    shuffled: bool,
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(id: DeckId, shuffled: bool, cards: Vec<Card>) -> Self {
        Self {
            id,
            shuffled,
            cards,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn shuffled(&self) -> bool {
        self.shuffled
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_exhausted(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove up to `amount` cards from the top, returned top-first.
    pub fn draw(&mut self, amount: usize) -> Vec<Card> {
        let amount = amount.min(self.cards.len());
        self.cards.drain(..amount).collect()
    }
}

impl Serialize for Deck {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Deck", 4)?;
        state.serialize_field("deck_id", &self.id)?;
        state.serialize_field("shuffled", &self.shuffled)?;
        state.serialize_field("remaining", &self.remaining())?;
        state.serialize_field("cards", &self.cards)?;
        state.end()
    }
}

#[derive(Deserialize)]
struct DeckRepr {
    deck_id: DeckId,
    shuffled: bool,
    remaining: usize,
    cards: Vec<Card>,
}

impl TryFrom<DeckRepr> for Deck {
    type Error = String;

    fn try_from(repr: DeckRepr) -> Result<Self, Self::Error> {
        if repr.remaining != repr.cards.len() {
            return Err(format!(
                "remaining is {} but the deck holds {} cards",
                repr.remaining,
                repr.cards.len()
            ));
        }
        Ok(Deck::new(repr.deck_id, repr.shuffled, repr.cards))
    }
}
