//! Scoring rules.
//!
//! A [`ScoringRules`] implementation decides the target ceiling and the range
//! of values each card may contribute. The resolver in [`crate::score`] is
//! generic over it, so alternate games plug in without touching cards or
//! hands.

extern crate alloc;

use alloc::boxed::Box;

use crate::card::{Card, ValueRange};

/// Default target for blackjack scoring.
pub const BLACKJACK: u32 = 21;

/// Rules that map cards to value ranges and name the target score.
pub trait ScoringRules {
    /// The ceiling scores should approach without exceeding.
    fn target(&self) -> u32;

    /// The values `card` may contribute.
    fn value_range(&self, card: &Card) -> ValueRange;
}

impl<R: ScoringRules + ?Sized> ScoringRules for &R {
    fn target(&self) -> u32 {
        (**self).target()
    }

    fn value_range(&self, card: &Card) -> ValueRange {
        (**self).value_range(card)
    }
}

impl<R: ScoringRules + ?Sized> ScoringRules for Box<R> {
    fn target(&self) -> u32 {
        (**self).target()
    }

    fn value_range(&self, card: &Card) -> ValueRange {
        (**self).value_range(card)
    }
}

/// Blackjack scoring where aces may count low or high.
///
/// Use the builder pattern to customize the rules:
///
/// ```
/// use handscore::BlackjackRules;
///
/// let rules = BlackjackRules::default()
///     .with_target(31)
///     .with_face_cards_count_ten(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlackjackRules {
    /// Target score.
    pub target: u32,
    /// Value of an ace counted low.
    pub ace_low: u32,
    /// Value of an ace counted high.
    pub ace_high: u32,
    /// Whether Jack, Queen and King count as 10 instead of their face value.
    pub face_cards_count_ten: bool,
}

impl Default for BlackjackRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl BlackjackRules {
    /// Target 21, aces count 1 or 11, every other card its face value.
    pub const STANDARD: Self = Self {
        target: BLACKJACK,
        ace_low: 1,
        ace_high: 11,
        face_cards_count_ten: false,
    };

    /// Sets the target score.
    ///
    /// # Example
    ///
    /// ```
    /// use handscore::BlackjackRules;
    ///
    /// let rules = BlackjackRules::default().with_target(17);
    /// assert_eq!(rules.target, 17);
    /// ```
    #[must_use]
    pub const fn with_target(mut self, target: u32) -> Self {
        self.target = target;
        self
    }

    /// Sets the low and high values of an ace.
    ///
    /// # Example
    ///
    /// ```
    /// use handscore::BlackjackRules;
    ///
    /// let rules = BlackjackRules::default().with_ace_values(1, 14);
    /// assert_eq!(rules.ace_high, 14);
    /// ```
    #[must_use]
    pub const fn with_ace_values(mut self, low: u32, high: u32) -> Self {
        let range = ValueRange::new(low, high);
        self.ace_low = range.min();
        self.ace_high = range.max();
        self
    }

    /// Sets whether Jack, Queen and King count as 10.
    ///
    /// # Example
    ///
    /// ```
    /// use handscore::BlackjackRules;
    ///
    /// let rules = BlackjackRules::default().with_face_cards_count_ten(true);
    /// assert!(rules.face_cards_count_ten);
    /// ```
    #[must_use]
    pub const fn with_face_cards_count_ten(mut self, count_ten: bool) -> Self {
        self.face_cards_count_ten = count_ten;
        self
    }
}

impl ScoringRules for BlackjackRules {
    fn target(&self) -> u32 {
        self.target
    }

    fn value_range(&self, card: &Card) -> ValueRange {
        match card.face_value() {
            1 => ValueRange::new(self.ace_low, self.ace_high),
            11..=13 if self.face_cards_count_ten => ValueRange::fixed(10),
            face => ValueRange::fixed(u32::from(face)),
        }
    }
}

/// Every card counts as its face value; no card is flexible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceValueRules {
    /// Target score.
    pub target: u32,
}

impl Default for FaceValueRules {
    fn default() -> Self {
        Self { target: BLACKJACK }
    }
}

impl ScoringRules for FaceValueRules {
    fn target(&self) -> u32 {
        self.target
    }

    fn value_range(&self, card: &Card) -> ValueRange {
        ValueRange::fixed(u32::from(card.face_value()))
    }
}
