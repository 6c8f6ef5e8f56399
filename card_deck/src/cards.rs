//! Playing cards and the fixed 52-card catalog.
//!
//! The catalog is ordered suit-major (spades, diamonds, clubs, hearts) and
//! rank-ascending within a suit (ace, 2..10, jack, queen, king). Every deck
//! is built from a subsequence of it.

use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Suit {
    Spades,
    Diamonds,
    Clubs,
    Hearts,
}

impl Suit {
    /// All suits in catalog order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

    /// Single-letter suit code used as the card code suffix.
    pub const fn code(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Hearts => 'H',
        }
    }

    fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|suit| suit.code() == code)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Spades => "SPADES",
            Self::Diamonds => "DIAMONDS",
            Self::Clubs => "CLUBS",
            Self::Hearts => "HEARTS",
        };
        write!(f, "{repr}")
    }
}

/// Card value. Serialized with the names clients see ("ACE", "2", ..., "KING").
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Rank {
    #[serde(rename = "ACE")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "JACK")]
    Jack,
    #[serde(rename = "QUEEN")]
    Queen,
    #[serde(rename = "KING")]
    King,
}

impl Rank {
    /// All ranks in catalog order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Rank prefix of the card code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.code() == code)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Ace => "ACE",
            Self::Jack => "JACK",
            Self::Queen => "QUEEN",
            Self::King => "KING",
            other => other.code(),
        };
        write!(f, "{repr}")
    }
}

/// Errors produced when turning text into a [`Card`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardParseError {
    #[error("Invalid card code: {0:?}")]
    InvalidCode(String),

    #[error("Card code {code} does not match {value} of {suit}")]
    CodeMismatch { code: String, value: Rank, suit: Suit },
}

/// A playing card. The short code ("AS", "10D", ...) is derived from the
/// value and suit, so the three can never disagree.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(into = "CardRepr", try_from = "CardRepr")]
pub struct Card {
    pub value: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Rank, suit: Suit) -> Self {
        Self { value, suit }
    }

    pub fn code(&self) -> String {
        format!("{}{}", self.value.code(), self.suit.code())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.value.code(), self.suit.code())
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardParseError::InvalidCode(s.to_string());
        let suit_code = s.chars().last().ok_or_else(invalid)?;
        let rank_code = &s[..s.len() - suit_code.len_utf8()];
        let suit = Suit::from_code(suit_code).ok_or_else(invalid)?;
        let value = Rank::from_code(rank_code).ok_or_else(invalid)?;
        Ok(Card::new(value, suit))
    }
}

/// Wire form of a card: `{"value": "ACE", "suit": "SPADES", "code": "AS"}`.
#[derive(Deserialize, Serialize)]
struct CardRepr {
    value: Rank,
    suit: Suit,
    code: String,
}

impl From<Card> for CardRepr {
    fn from(card: Card) -> Self {
        Self {
            value: card.value,
            suit: card.suit,
            code: card.code(),
        }
    }
}

impl TryFrom<CardRepr> for Card {
    type Error = CardParseError;

    fn try_from(repr: CardRepr) -> Result<Self, Self::Error> {
        let card = Card::new(repr.value, repr.suit);
        if card.code() != repr.code {
            return Err(CardParseError::CodeMismatch {
                code: repr.code,
                value: repr.value,
                suit: repr.suit,
            });
        }
        Ok(card)
    }
}

/// Number of cards in the catalog.
pub const CATALOG_SIZE: usize = 52;

/// Every standard playing card in canonical order.
pub const CATALOG: [Card; CATALOG_SIZE] = build_catalog();

const fn build_catalog() -> [Card; CATALOG_SIZE] {
    let mut cards = [Card::new(Rank::Ace, Suit::Spades); CATALOG_SIZE];
    let mut s = 0;
    while s < Suit::ALL.len() {
        let mut r = 0;
        while r < Rank::ALL.len() {
            cards[s * Rank::ALL.len() + r] = Card::new(Rank::ALL[r], Suit::ALL[s]);
            r += 1;
        }
        s += 1;
    }
    cards
}

/// Picks the catalog cards named by `codes`.
///
/// An empty request selects the whole catalog. Otherwise the result keeps
/// catalog order, ignores codes that name no card, and lists each card at
/// most once no matter how often its code repeats.
pub fn select<S: AsRef<str>>(codes: &[S]) -> Vec<Card> {
    if codes.is_empty() {
        return CATALOG.to_vec();
    }

    let wanted: HashSet<&str> = codes.iter().map(AsRef::as_ref).collect();
    CATALOG
        .iter()
        .filter(|card| wanted.contains(card.code().as_str()))
        .copied()
        .collect()
}
