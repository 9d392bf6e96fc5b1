//! Hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::rules::{BlackjackRules, ScoringRules};
use crate::score::ScoreResolver;

const STANDARD: ScoreResolver<BlackjackRules> = ScoreResolver::new(BlackjackRules::STANDARD);

/// An ordered collection of cards.
///
/// Cards are kept in the order they were received. Scoring methods without a
/// `_with` suffix use the default [`BlackjackRules`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards` in order.
    #[must_use]
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Adds a card to the end of the hand.
    pub fn receive_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Sum of the face values, with no flexible cards.
    #[must_use]
    pub fn face_total(&self) -> u32 {
        self.cards
            .iter()
            .map(|card| u32::from(card.face_value()))
            .sum()
    }

    /// The best score under the default rules.
    ///
    /// An empty hand scores 0.
    ///
    /// # Example
    ///
    /// ```
    /// use handscore::{Card, Hand, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.receive_card(Card::new(Suit::Club, 1));
    /// hand.receive_card(Card::new(Suit::Heart, 9));
    /// assert_eq!(hand.score(), 20);
    /// ```
    #[must_use]
    pub fn score(&self) -> u32 {
        STANDARD.resolve(&self.cards)
    }

    /// The best score under `rules`.
    #[must_use]
    pub fn score_with<R: ScoringRules>(&self, rules: R) -> u32 {
        ScoreResolver::new(rules).resolve(&self.cards)
    }

    /// The distinct totals this hand can reach under the default rules,
    /// in ascending order. An empty hand yields `[0]`.
    #[must_use]
    pub fn unique_possible_scores(&self) -> Vec<u32> {
        STANDARD.unique_possible_scores(&self.cards)
    }

    /// The distinct totals this hand can reach under `rules`, in ascending
    /// order.
    #[must_use]
    pub fn unique_possible_scores_with<R: ScoringRules>(&self, rules: R) -> Vec<u32> {
        ScoreResolver::new(rules).unique_possible_scores(&self.cards)
    }

    /// Returns whether every reachable total is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        STANDARD.is_bust(&self.cards)
    }

    /// Returns whether the score counts an ace as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        STANDARD.is_soft(&self.cards)
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == crate::rules::BLACKJACK
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}
