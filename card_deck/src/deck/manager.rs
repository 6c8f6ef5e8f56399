//! Deck manager: the single place where decks are created and changed.

use super::{
    errors::{DeckError, DeckResult, StoreError},
    models::Deck,
    shuffle::{Shuffler, ThreadRngShuffler},
    store::DeckStore,
};
use crate::cards::{self, Card};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Deck manager
pub struct DeckManager {
    /// Deck persistence
    store: Arc<dyn DeckStore>,

    /// Permutation source for shuffled decks
    shuffler: Arc<dyn Shuffler>,

    /// Serializes draw read-modify-write cycles against the store
    draw_lock: Mutex<()>,
}

impl DeckManager {
    /// Create a deck manager that shuffles with the thread-local RNG
    pub fn new(store: Arc<dyn DeckStore>) -> Self {
        Self::with_shuffler(store, Arc::new(ThreadRngShuffler))
    }

    /// Create a deck manager with an explicit shuffler
    ///
    /// # Arguments
    ///
    /// * `store` - Deck store
    /// * `shuffler` - Source of permutations for shuffled decks
    pub fn with_shuffler(store: Arc<dyn DeckStore>, shuffler: Arc<dyn Shuffler>) -> Self {
        Self {
            store,
            shuffler,
            draw_lock: Mutex::new(()),
        }
    }

    /// Create and store a new deck
    ///
    /// # Arguments
    ///
    /// * `shuffle` - Whether to shuffle the selected cards
    /// * `card_codes` - Codes of the cards to include; empty means the full catalog
    ///
    /// Unknown codes are ignored and repeated codes count once, so this
    /// never fails. A request matching no card yields an empty deck.
    pub async fn create<S: AsRef<str>>(&self, shuffle: bool, card_codes: &[S]) -> Deck {
        let mut cards = cards::select(card_codes);
        if shuffle {
            self.shuffler.shuffle(&mut cards);
        }

        let deck = Deck::new(Uuid::new_v4().to_string(), shuffle, cards);
        self.store.save(deck.clone()).await;

        log::info!(
            "Created deck {} with {} cards (shuffled: {})",
            deck.id(),
            deck.remaining(),
            deck.shuffled()
        );

        deck
    }

    /// Get the current state of a deck
    ///
    /// # Errors
    ///
    /// * `DeckError::NotFound` - No deck with this id
    /// * `DeckError::Unexpected` - Store failure
    pub async fn retrieve(&self, id: &str) -> DeckResult<Deck> {
        self.load(id).await
    }

    /// Draw cards from the top of a deck
    ///
    /// # Arguments
    ///
    /// * `id` - Deck id
    /// * `amount` - Number of cards to draw. Negative values draw one card;
    ///   values above the remaining count draw whatever is left.
    ///
    /// # Returns
    ///
    /// * `DeckResult<Vec<Card>>` - Drawn cards, top card first
    ///
    /// # Errors
    ///
    /// * `DeckError::NotFound` - No deck with this id
    /// * `DeckError::Unexpected` - Store failure
    pub async fn draw(&self, id: &str, amount: i64) -> DeckResult<Vec<Card>> {
        let _guard = self.draw_lock.lock().await;

        let mut deck = self.load(id).await?;
        let drawn = deck.draw(draw_count(amount, deck.remaining()));
        self.store.save(deck.clone()).await;

        log::debug!(
            "Drew {} cards from deck {} ({} remaining)",
            drawn.len(),
            id,
            deck.remaining()
        );

        Ok(drawn)
    }

    /// Number of decks currently stored
    pub async fn deck_count(&self) -> usize {
        self.store.count().await
    }

    async fn load(&self, id: &str) -> DeckResult<Deck> {
        self.store.get(id).await.map_err(|err| match err {
            StoreError::NotFound(_) => DeckError::NotFound(id.to_string()),
            other => {
                log::error!("Failed to load deck {id}: {other}");
                DeckError::Unexpected(other)
            }
        })
    }
}

/// Resolve a requested draw amount against the cards left in the deck.
fn draw_count(amount: i64, remaining: usize) -> usize {
    let requested = if amount < 0 {
        1
    } else {
        usize::try_from(amount).unwrap_or(usize::MAX)
    };
    requested.min(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CATALOG, Rank, Suit};
    use crate::deck::errors::StoreResult;
    use crate::deck::store::InMemoryDeckStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Store whose reads always fail with the given error
    struct FailingStore(StoreError);

    #[async_trait]
    impl DeckStore for FailingStore {
        async fn save(&self, _deck: Deck) {}

        async fn get(&self, _id: &str) -> StoreResult<Deck> {
            Err(self.0.clone())
        }

        async fn count(&self) -> usize {
            0
        }
    }

    /// Shuffler that only records that it ran
    #[derive(Default)]
    struct RecordingShuffler {
        called: AtomicBool,
    }

    impl Shuffler for RecordingShuffler {
        fn shuffle(&self, _cards: &mut [Card]) {
            self.called.store(true, Ordering::SeqCst);
        }
    }

    /// Shuffler that reverses the deck
    struct ReversingShuffler;

    impl Shuffler for ReversingShuffler {
        fn shuffle(&self, cards: &mut [Card]) {
            cards.reverse();
        }
    }

    fn manager() -> DeckManager {
        DeckManager::new(Arc::new(InMemoryDeckStore::new()))
    }

    #[test]
    fn test_draw_count() {
        assert_eq!(draw_count(1, 52), 1);
        assert_eq!(draw_count(0, 52), 0);
        assert_eq!(draw_count(60, 52), 52);
        assert_eq!(draw_count(-1, 52), 1);
        assert_eq!(draw_count(-100, 52), 1);
        assert_eq!(draw_count(-1, 0), 0);
        assert_eq!(draw_count(i64::MAX, 3), 3);
    }

    #[tokio::test]
    async fn test_create_full_deck() {
        let manager = manager();
        let none: [&str; 0] = [];
        let deck = manager.create(false, &none).await;

        assert!(!deck.id().is_empty());
        assert!(!deck.shuffled());
        assert_eq!(deck.remaining(), 52);
        assert_eq!(deck.cards(), &CATALOG[..]);
    }

    #[tokio::test]
    async fn test_create_custom_deck() {
        let manager = manager();
        let deck = manager.create(false, &["AS", "2S"]).await;

        assert_eq!(deck.remaining(), 2);
        assert_eq!(
            deck.cards(),
            &[
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::Two, Suit::Spades)
            ]
        );
    }

    #[tokio::test]
    async fn test_create_ignores_unknown_codes() {
        let manager = manager();
        let deck = manager.create(false, &["AS", "bad code", "2S"]).await;
        assert_eq!(deck.remaining(), 2);

        let empty = manager.create(false, &["bad", "worse"]).await;
        assert_eq!(empty.remaining(), 0);
        assert!(empty.is_exhausted());
    }

    #[tokio::test]
    async fn test_create_uses_shuffler_only_when_asked() {
        let shuffler = Arc::new(RecordingShuffler::default());
        let manager =
            DeckManager::with_shuffler(Arc::new(InMemoryDeckStore::new()), shuffler.clone());

        let none: [&str; 0] = [];
        let deck = manager.create(false, &none).await;
        assert!(!shuffler.called.load(Ordering::SeqCst));
        assert!(!deck.shuffled());

        let deck = manager.create(true, &none).await;
        assert!(shuffler.called.load(Ordering::SeqCst));
        assert!(deck.shuffled());
    }

    #[tokio::test]
    async fn test_create_persists_shuffled_order() {
        let manager = DeckManager::with_shuffler(
            Arc::new(InMemoryDeckStore::new()),
            Arc::new(ReversingShuffler),
        );

        let deck = manager.create(true, &["AS", "2S", "3S"]).await;
        let codes: Vec<String> = deck.cards().iter().map(Card::code).collect();
        assert_eq!(codes, vec!["3S", "2S", "AS"]);

        let stored = manager.retrieve(deck.id()).await.unwrap();
        assert_eq!(stored, deck);
    }

    #[tokio::test]
    async fn test_create_generates_unique_ids() {
        let manager = manager();
        let none: [&str; 0] = [];
        let a = manager.create(false, &none).await;
        let b = manager.create(false, &none).await;

        assert_ne!(a.id(), b.id());
        assert_eq!(manager.deck_count().await, 2);
    }

    #[tokio::test]
    async fn test_retrieve_not_found() {
        let manager = manager();
        assert_eq!(
            manager.retrieve("missing").await,
            Err(DeckError::NotFound("missing".to_string()))
        );
    }

    #[tokio::test]
    async fn test_retrieve_passes_through_backend_error() {
        let backend = StoreError::Backend("disk on fire".to_string());
        let manager = DeckManager::new(Arc::new(FailingStore(backend.clone())));

        assert_eq!(
            manager.retrieve("id").await,
            Err(DeckError::Unexpected(backend))
        );
    }

    #[tokio::test]
    async fn test_not_found_carries_requested_id() {
        // Store reports a different id than the caller asked for
        let manager = DeckManager::new(Arc::new(FailingStore(StoreError::NotFound(
            "internal-key".to_string(),
        ))));

        assert_eq!(
            manager.draw("requested", 1).await,
            Err(DeckError::NotFound("requested".to_string()))
        );
    }

    #[tokio::test]
    async fn test_draw_one() {
        let manager = manager();
        let none: [&str; 0] = [];
        let deck = manager.create(false, &none).await;

        let drawn = manager.draw(deck.id(), 1).await.unwrap();
        assert_eq!(drawn, vec![Card::new(Rank::Ace, Suit::Spades)]);

        let deck = manager.retrieve(deck.id()).await.unwrap();
        assert_eq!(deck.remaining(), 51);
        assert_eq!(deck.cards()[0], Card::new(Rank::Two, Suit::Spades));
    }

    #[tokio::test]
    async fn test_draw_negative_draws_one() {
        let manager = manager();
        let deck = manager.create(false, &["AS", "2S"]).await;

        let drawn = manager.draw(deck.id(), -3).await.unwrap();
        assert_eq!(drawn, vec![Card::new(Rank::Ace, Suit::Spades)]);
        assert_eq!(manager.retrieve(deck.id()).await.unwrap().remaining(), 1);
    }

    #[tokio::test]
    async fn test_draw_negative_from_exhausted_deck() {
        let manager = manager();
        let deck = manager.create(false, &["AS"]).await;
        manager.draw(deck.id(), 1).await.unwrap();

        assert!(manager.draw(deck.id(), -1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_draw_zero_leaves_deck_alone() {
        let manager = manager();
        let deck = manager.create(false, &["AS", "2S"]).await;

        assert!(manager.draw(deck.id(), 0).await.unwrap().is_empty());
        assert_eq!(manager.retrieve(deck.id()).await.unwrap(), deck);
    }

    #[tokio::test]
    async fn test_draw_backend_error() {
        let backend = StoreError::Backend("timeout".to_string());
        let manager = DeckManager::new(Arc::new(FailingStore(backend.clone())));

        assert_eq!(
            manager.draw("id", 1).await,
            Err(DeckError::Unexpected(backend))
        );
    }
}
