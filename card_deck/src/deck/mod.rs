//! Deck module: the deck entity, its storage, and the manager that owns
//! every deck state transition.
//!
//! This module implements:
//! - Deck creation from the full catalog or a filtered subset of card codes
//! - Optional shuffling through an injected [`Shuffler`]
//! - Retrieval of a deck's full state
//! - Drawing cards from the top of a deck
//!
//! ## Example
//!
//! ```
//! use card_deck::deck::{DeckManager, InMemoryDeckStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = DeckManager::new(Arc::new(InMemoryDeckStore::new()));
//!
//!     let deck = manager.create(false, &["AS", "2S"]).await;
//!     let drawn = manager.draw(deck.id(), 1).await?;
//!     assert_eq!(drawn[0].code(), "AS");
//!
//!     let deck = manager.retrieve(deck.id()).await?;
//!     assert_eq!(deck.remaining(), 1);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod manager;
pub mod models;
pub mod shuffle;
pub mod store;

pub use errors::{DeckError, DeckResult, StoreError, StoreResult};
pub use manager::DeckManager;
pub use models::{Deck, DeckId};
pub use shuffle::{SeededShuffler, Shuffler, ThreadRngShuffler};
pub use store::{DeckStore, InMemoryDeckStore};
