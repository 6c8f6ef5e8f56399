//! Deck error types.

use thiserror::Error;

/// Errors raised by a [`DeckStore`](super::DeckStore) backend.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No deck is stored under this id
    #[error("deck not found with id {0}")]
    NotFound(String),

    /// Any other backend failure
    #[error("Deck store failure: {0}")]
    Backend(String),
}

/// Errors returned by the [`DeckManager`](super::DeckManager).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    /// The requested deck does not exist
    #[error("deck not found with id {0}")]
    NotFound(String),

    /// Store failure passed through untouched
    #[error(transparent)]
    Unexpected(StoreError),
}

impl DeckError {
    /// Whether the caller asked for something that isn't there, as opposed
    /// to the service failing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DeckError::NotFound(_))
    }

    /// Get a client-safe error message
    ///
    /// Backend failures are replaced with a generic message so storage
    /// details never reach the client.
    pub fn client_message(&self) -> String {
        match self {
            DeckError::Unexpected(_) => "Internal server error".to_string(),
            DeckError::NotFound(_) => self.to_string(),
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for deck operations
pub type DeckResult<T> = Result<T, DeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_carries_id() {
        let err = DeckError::NotFound("abc".to_string());
        assert_eq!(err.to_string(), "deck not found with id abc");
        assert_eq!(err.client_message(), "deck not found with id abc");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_unexpected_is_transparent_but_sanitized() {
        let err = DeckError::Unexpected(StoreError::Backend("connection reset".to_string()));
        assert_eq!(err.to_string(), "Deck store failure: connection reset");
        assert_eq!(err.client_message(), "Internal server error");
        assert!(!err.is_not_found());
    }
}
