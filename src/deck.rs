//! Decks of cards.

extern crate alloc;

use alloc::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, MAX_FACE, MIN_FACE, Suit};
use crate::error::DealError;
use crate::hand::Hand;

/// An ordered pile of cards dealt from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    /// Cards in the deck, front first.
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a deck holding `cards` in order; the first card is dealt first.
    #[must_use]
    pub fn new<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Creates an unshuffled standard deck of 52 cards.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_decks(1)
    }

    /// Creates an unshuffled shoe with the specified number of standard decks.
    #[must_use]
    pub fn with_decks(num_decks: u8) -> Self {
        let mut cards = VecDeque::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for face in MIN_FACE..=MAX_FACE {
                    cards.push_back(Card::new(suit, face));
                }
            }
        }

        Self { cards }
    }

    /// Shuffles the remaining cards with the given random number generator.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
        log::debug!("shuffled deck of {} cards", self.cards.len());
    }

    /// Shuffles the remaining cards deterministically from a seed.
    ///
    /// # Example
    ///
    /// ```
    /// use handscore::Deck;
    ///
    /// let mut a = Deck::standard();
    /// let mut b = Deck::standard();
    /// a.shuffle_with_seed(7);
    /// b.shuffle_with_seed(7);
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffle_with_seed(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Deals the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards remain. The deck is left
    /// unchanged.
    pub fn deal_card(&mut self) -> Result<Card, DealError> {
        self.cards.pop_front().ok_or(DealError::EmptyDeck)
    }

    /// Deals the front card into `hand`.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards remain; the hand is left
    /// unchanged.
    pub fn deal_to(&mut self, hand: &mut Hand) -> Result<(), DealError> {
        hand.receive_card(self.deal_card()?);
        Ok(())
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining_cards(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards in dealing order.
    #[must_use]
    pub fn iter(&self) -> alloc::collections::vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = alloc::collections::vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
