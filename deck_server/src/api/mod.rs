//! HTTP API for the deck server.
//!
//! # Architecture
//!
//! The API is built with:
//! - **Axum**: Async web framework for HTTP
//! - **Tower**: Middleware for CORS, request ids and response headers
//! - **DeckManager**: All deck state changes go through the shared manager
//!
//! # Modules
//!
//! - [`decks`]: Deck creation, retrieval and drawing
//! - [`request_id`]: Request id propagation, request logging and metrics
//!
//! # Endpoints Overview
//!
//! ```text
//! GET  /health                            - Server health status
//! POST /v1/decks?shuffle=&cards=          - Create a deck (trailing slash accepted)
//! GET  /v1/decks/{deck_id}                - Open a deck
//! GET  /v1/decks/withdrawals/{deck_id}    - Draw cards (?amount=, default 1)
//! ```
//!
//! Every response carries an `x-request-id` header and
//! `X-Content-Type-Options: nosniff`.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use card_deck::{DeckManager, InMemoryDeckStore};
//! use deck_server::api::{AppState, create_router};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState {
//!     deck_manager: Arc::new(DeckManager::new(Arc::new(InMemoryDeckStore::new()))),
//! };
//!
//! let app = create_router(state);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # CORS
//!
//! CORS is configured permissively. In production, configure
//! appropriate origins, methods, and headers.

pub mod decks;
pub mod request_id;

use axum::{
    Router,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Json},
    routing::{get, post},
};
use card_deck::DeckManager;
use serde_json::json;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer};

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request (cheap due to Arc wrappers).
#[derive(Clone)]
pub struct AppState {
    pub deck_manager: Arc<DeckManager>,
}

/// Create the complete API router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/v1", create_v1_router())
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Create API v1 router with all versioned endpoints.
fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/decks", post(decks::create_deck))
        .route("/decks/", post(decks::create_deck))
        .route("/decks/{deck_id}", get(decks::open_deck))
        .route("/decks/withdrawals/{deck_id}", get(decks::draw_cards))
}

/// Health check endpoint for monitoring and load balancers.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/health
/// # {"status":"healthy","version":"1.0.0","decks":3,"timestamp":"2026-10-19T10:30:00Z"}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let deck_count = state.deck_manager.deck_count().await;
    crate::metrics::decks_stored(deck_count);

    let response = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "decks": deck_count,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(response))
}
