//! # Card Deck
//!
//! Standard 52-card playing decks with a small lifecycle: create a deck
//! (the full catalog or a chosen subset, optionally shuffled), look it up by
//! id, and draw cards from its top until it runs out.
//!
//! ## Core Modules
//!
//! - [`cards`]: Card values, suits, codes and the ordered catalog
//! - [`deck`]: Deck entity, storage contract, shuffling and the deck manager
//!
//! ## Example
//!
//! ```
//! use card_deck::cards::{self, CATALOG};
//!
//! let cards = cards::select(&["KH", "AS"]);
//! assert_eq!(cards, vec![CATALOG[0], CATALOG[51]]);
//! ```

pub mod cards;
pub use cards::{CATALOG, Card, CardParseError, Rank, Suit};

pub mod deck;
pub use deck::{
    Deck, DeckError, DeckManager, DeckResult, DeckStore, InMemoryDeckStore, SeededShuffler,
    Shuffler, StoreError, StoreResult, ThreadRngShuffler,
};
