//! Score resolution for hands containing flexible-value cards.

extern crate alloc;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::Card;
use crate::rules::{BlackjackRules, ScoringRules};

/// Set of distinct totals a hand can reach.
pub type ScoreSet = HashSet<u32>;

/// Picks the best score from `scores` for the given target.
///
/// An exact match wins outright. Otherwise scores at or below the target are
/// preferred over busting scores, and within each side the score closest to
/// the target wins. Returns `None` only when `scores` is empty.
///
/// # Example
///
/// ```
/// use handscore::select_best;
///
/// assert_eq!(select_best([14, 24, 34], 21), Some(14));
/// assert_eq!(select_best([31, 41], 21), Some(31));
/// assert_eq!(select_best([], 21), None);
/// ```
#[must_use]
pub fn select_best<I>(scores: I, target: u32) -> Option<u32>
where
    I: IntoIterator<Item = u32>,
{
    let key = |score: u32| (score > target, score.abs_diff(target));

    let mut best: Option<u32> = None;
    for score in scores {
        if score == target {
            return Some(target);
        }
        if best.is_none_or(|current| key(score) < key(current)) {
            best = Some(score);
        }
    }
    best
}

/// Resolves the best attainable score of a list of cards under a set of
/// [`ScoringRules`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreResolver<R = BlackjackRules> {
    rules: R,
}

impl<R: ScoringRules> ScoreResolver<R> {
    /// Creates a resolver for the given rules.
    #[must_use]
    pub const fn new(rules: R) -> Self {
        Self { rules }
    }

    /// Returns the rules used by this resolver.
    #[must_use]
    pub const fn rules(&self) -> &R {
        &self.rules
    }

    /// Every distinct total reachable by choosing a low or high value for
    /// each card.
    ///
    /// Fixed cards shift every partial sum; flexible cards branch each partial
    /// sum into two. An empty list yields `{0}`.
    #[must_use]
    pub fn possible_scores(&self, cards: &[Card]) -> ScoreSet {
        let mut scores: ScoreSet = core::iter::once(0).collect();

        for card in cards {
            let range = self.rules.value_range(card);
            scores = if range.is_flexible() {
                scores
                    .iter()
                    .flat_map(|&s| [s.saturating_add(range.min()), s.saturating_add(range.max())])
                    .collect()
            } else {
                scores
                    .iter()
                    .map(|&s| s.saturating_add(range.min()))
                    .collect()
            };
        }

        scores
    }

    /// The distinct reachable totals in ascending order.
    #[must_use]
    pub fn unique_possible_scores(&self, cards: &[Card]) -> Vec<u32> {
        let mut scores: Vec<u32> = self.possible_scores(cards).into_iter().collect();
        scores.sort_unstable();
        scores
    }

    /// The best score for `cards`.
    ///
    /// # Example
    ///
    /// ```
    /// use handscore::{BlackjackRules, Card, ScoreResolver, Suit};
    ///
    /// let cards = [1, 1, 2, 7].map(|face| Card::new(Suit::Spade, face));
    /// let resolver = ScoreResolver::new(BlackjackRules::default());
    /// assert_eq!(resolver.resolve(&cards), 21);
    /// ```
    #[must_use]
    pub fn resolve(&self, cards: &[Card]) -> u32 {
        let target = self.rules.target();
        let scores = self.possible_scores(cards);
        let best = select_best(scores.iter().copied(), target).unwrap_or(0);
        log::trace!(
            "resolved {} cards: {} candidates, best {best} (target {target})",
            cards.len(),
            scores.len()
        );
        best
    }

    /// The total with every card at its lowest value.
    #[must_use]
    pub fn min_total(&self, cards: &[Card]) -> u32 {
        cards.iter().fold(0u32, |total, card| {
            total.saturating_add(self.rules.value_range(card).min())
        })
    }

    /// Returns whether every reachable total exceeds the target.
    #[must_use]
    pub fn is_bust(&self, cards: &[Card]) -> bool {
        self.min_total(cards) > self.rules.target()
    }

    /// Returns whether the best score counts a flexible card at a higher
    /// value than its minimum.
    #[must_use]
    pub fn is_soft(&self, cards: &[Card]) -> bool {
        self.resolve(cards) != self.min_total(cards)
    }
}
