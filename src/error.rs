//! Error types for card and deck operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The suit token is not one of the four recognized suits.
    #[error("unable to recognize suit type: {0}")]
    InvalidSuit(String),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}
