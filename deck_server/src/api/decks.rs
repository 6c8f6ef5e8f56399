//! Deck API handlers.
//!
//! This module provides HTTP REST endpoints for deck operations:
//! - Creating a full or custom deck, optionally shuffled
//! - Opening a deck to see all of its remaining cards
//! - Drawing cards from the top of a deck
//!
//! # Examples
//!
//! Create a shuffled custom deck:
//! ```bash
//! curl -X POST "http://localhost:8080/v1/decks?shuffle=true&cards=AS,KD,AC,2C,KH"
//! ```
//!
//! Draw three cards:
//! ```bash
//! curl "http://localhost:8080/v1/decks/withdrawals/<deck_id>?amount=3"
//! ```

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use card_deck::{Card, Deck, DeckError};
use serde::{Deserialize, Serialize};

use super::{AppState, request_id::RequestId};
use crate::metrics;

/// Raw query string pairs, in request order.
///
/// Extracted as pairs rather than a struct so a repeated key never rejects
/// the request; the first occurrence wins.
type QueryPairs = Vec<(String, String)>;

fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// Query parameters for deck creation.
///
/// Kept as raw strings so malformed values fall back to defaults instead of
/// rejecting the request.
#[derive(Debug, Default)]
pub struct CreateDeckParams {
    pub shuffle: Option<String>,
    pub cards: Option<String>,
}

impl CreateDeckParams {
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        Self {
            shuffle: first_value(pairs, "shuffle"),
            cards: first_value(pairs, "cards"),
        }
    }

    /// Only the literal `true` turns shuffling on.
    pub fn shuffle(&self) -> bool {
        self.shuffle.as_deref() == Some("true")
    }

    /// Comma-separated card codes; missing or empty means the full deck.
    pub fn card_codes(&self) -> Vec<String> {
        match self.cards.as_deref() {
            Some(cards) if !cards.is_empty() => cards.split(',').map(str::to_string).collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateDeckResponse {
    pub deck_id: String,
    pub shuffled: bool,
    pub remaining: usize,
}

impl From<&Deck> for CreateDeckResponse {
    fn from(deck: &Deck) -> Self {
        Self {
            deck_id: deck.id().to_string(),
            shuffled: deck.shuffled(),
            remaining: deck.remaining(),
        }
    }
}

/// Query parameters for drawing.
#[derive(Debug, Default)]
pub struct DrawParams {
    pub amount: Option<String>,
}

impl DrawParams {
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        Self {
            amount: first_value(pairs, "amount"),
        }
    }

    /// Requested amount; defaults to 1 when missing or not an integer.
    pub fn amount(&self) -> i64 {
        self.amount
            .as_deref()
            .and_then(|amount| amount.parse().ok())
            .unwrap_or(1)
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DrawCardsResponse {
    pub cards: Vec<Card>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Deck error rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub DeckError);

impl From<DeckError> for ApiError {
    fn from(err: DeckError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = ErrorResponse {
            message: self.0.client_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Create a new deck.
///
/// # Query Parameters
///
/// - `shuffle`: `true` to shuffle the deck (default `false`)
/// - `cards`: Comma-separated card codes for a custom deck, e.g. `AS,2S`.
///   Unknown codes are ignored. If not sent, the regular 52-card deck is created.
///
/// # Response
///
/// Returns `201 Created`:
/// ```json
/// {"deck_id": "a251071b-662f-44b6-ba11-e24863039c59", "shuffled": false, "remaining": 2}
/// ```
pub async fn create_deck(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> (StatusCode, Json<CreateDeckResponse>) {
    let params = CreateDeckParams::from_query(&query);
    let deck = state
        .deck_manager
        .create(params.shuffle(), &params.card_codes())
        .await;

    metrics::decks_created_total(deck.shuffled());

    (StatusCode::CREATED, Json(CreateDeckResponse::from(&deck)))
}

/// Open a deck, showing all its remaining cards.
///
/// # Response
///
/// Returns `200 OK`:
/// ```json
/// {
///   "deck_id": "a251071b-662f-44b6-ba11-e24863039c59",
///   "shuffled": false,
///   "remaining": 1,
///   "cards": [{"value": "ACE", "suit": "SPADES", "code": "AS"}]
/// }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Deck doesn't exist
/// - `500 Internal Server Error`: Store failure
pub async fn open_deck(
    State(state): State<AppState>,
    request_id: RequestId,
    Path(deck_id): Path<String>,
) -> Result<Json<Deck>, ApiError> {
    match state.deck_manager.retrieve(&deck_id).await {
        Ok(deck) => Ok(Json(deck)),
        Err(e) => {
            tracing::debug!(request_id = %request_id.as_str(), error = %e, "Open deck failed");
            Err(e.into())
        }
    }
}

/// Draw cards from the top of a deck.
///
/// # Query Parameters
///
/// - `amount`: Number of cards to draw (default 1). Asking for more than
///   remain returns what is left; negative amounts draw one card.
///
/// # Response
///
/// Returns `200 OK`:
/// ```json
/// {"cards": [{"value": "ACE", "suit": "SPADES", "code": "AS"}]}
/// ```
///
/// # Errors
///
/// - `404 Not Found`: Deck doesn't exist
/// - `500 Internal Server Error`: Store failure
pub async fn draw_cards(
    State(state): State<AppState>,
    request_id: RequestId,
    Path(deck_id): Path<String>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<DrawCardsResponse>, ApiError> {
    let params = DrawParams::from_query(&query);
    match state.deck_manager.draw(&deck_id, params.amount()).await {
        Ok(cards) => {
            metrics::cards_drawn_total(cards.len());
            Ok(Json(DrawCardsResponse { cards }))
        }
        Err(e) => {
            tracing::debug!(request_id = %request_id.as_str(), error = %e, "Draw failed");
            Err(e.into())
        }
    }
}
