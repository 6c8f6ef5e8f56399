//! Deck persistence abstraction.
//!
//! The manager only needs point reads and upserts by id, so any key-value
//! backend can sit behind [`DeckStore`]. [`InMemoryDeckStore`] is the
//! single-process implementation.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{
    errors::{StoreError, StoreResult},
    models::{Deck, DeckId},
};

/// Trait for deck storage backends
#[async_trait]
pub trait DeckStore: Send + Sync {
    /// Insert or replace the deck stored under its id
    async fn save(&self, deck: Deck);

    /// Find a deck by id
    async fn get(&self, id: &str) -> StoreResult<Deck>;

    /// Number of stored decks
    async fn count(&self) -> usize;
}

/// Deck store backed by a lock-guarded map
#[derive(Debug, Default)]
pub struct InMemoryDeckStore {
    decks: RwLock<HashMap<DeckId, Deck>>,
}

impl InMemoryDeckStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DeckStore for InMemoryDeckStore {
    async fn save(&self, deck: Deck) {
        let mut decks = self.decks.write().await;
        decks.insert(deck.id().to_string(), deck);
    }

    async fn get(&self, id: &str) -> StoreResult<Deck> {
        self.decks
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn count(&self) -> usize {
        self.decks.read().await.len()
    }
}
