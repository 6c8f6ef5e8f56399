//! # Deck Server
//!
//! HTTP front end for the [`card_deck`] library: configuration, logging,
//! metrics and the axum router exposing deck creation, retrieval and drawing.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
