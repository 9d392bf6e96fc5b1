//! A card hand scoring engine with optional `no_std` support.
//!
//! Cards whose value is a range (an ace counts as 1 or 11) make a hand's
//! total ambiguous. [`ScoreResolver`] enumerates every reachable total and
//! picks the best one for a target: an exact hit wins, otherwise the highest
//! total that does not bust, otherwise the smallest overshoot.
//!
//! # Example
//!
//! ```
//! use handscore::{Card, Hand, Suit};
//!
//! let mut hand = Hand::new();
//! for face in [1, 1, 5, 7] {
//!     hand.receive_card(Card::new(Suit::Spade, face));
//! }
//! assert_eq!(hand.unique_possible_scores(), vec![14, 24, 34]);
//! assert_eq!(hand.score(), 14);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod rules;
pub mod score;

// Re-export main types
pub use card::{Card, DECK_SIZE, MAX_FACE, MIN_FACE, Suit, ValueRange};
pub use deck::Deck;
pub use error::{CardError, DealError};
pub use hand::Hand;
pub use rules::{BLACKJACK, BlackjackRules, FaceValueRules, ScoringRules};
pub use score::{ScoreResolver, ScoreSet, select_best};
