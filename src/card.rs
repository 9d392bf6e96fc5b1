//! Card types and value ranges.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs.
    Club,
    /// Diamonds.
    Diamond,
    /// Hearts.
    Heart,
    /// Spades.
    Spade,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Club, Self::Diamond, Self::Heart, Self::Spade];

    /// Returns the token this suit is parsed from.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Club => "Club",
            Self::Diamond => "Diamond",
            Self::Heart => "Heart",
            Self::Spade => "Spade",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.as_str() == s)
            .ok_or_else(|| CardError::InvalidSuit(s.to_string()))
    }
}

/// The values a single card may contribute to a total.
///
/// `min` never exceeds `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueRange {
    min: u32,
    max: u32,
}

impl ValueRange {
    /// Creates a range from two values, in either order.
    #[must_use]
    pub const fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Creates a range holding a single value.
    #[must_use]
    pub const fn fixed(value: u32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// The lowest value.
    #[must_use]
    pub const fn min(self) -> u32 {
        self.min
    }

    /// The highest value.
    #[must_use]
    pub const fn max(self) -> u32 {
        self.max
    }

    /// Returns whether the range spans more than one value.
    #[must_use]
    pub const fn is_flexible(self) -> bool {
        self.min != self.max
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    face_value: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the face value. Values outside
    /// `MIN_FACE..=MAX_FACE` are accepted and scored as their face value.
    #[must_use]
    pub const fn new(suit: Suit, face_value: u8) -> Self {
        Self { suit, face_value }
    }

    /// Creates a card from a suit token such as `"Spade"`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] if the token is not one of
    /// `Club`, `Diamond`, `Heart` or `Spade`.
    ///
    /// # Example
    ///
    /// ```
    /// use handscore::{Card, CardError, Suit};
    ///
    /// let card = Card::parse("Heart", 12).unwrap();
    /// assert_eq!(card.suit(), Suit::Heart);
    /// assert!(matches!(Card::parse("Star", 3), Err(CardError::InvalidSuit(_))));
    /// ```
    pub fn parse(suit: &str, face_value: u8) -> Result<Self, CardError> {
        Ok(Self::new(suit.parse()?, face_value))
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The face value (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn face_value(&self) -> u8 {
        self.face_value
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.face_value == 1
    }

    /// Values the card may take under the standard rules: an ace counts as
    /// 1 or 11, every other card as its face value.
    #[must_use]
    pub const fn value_range(&self) -> ValueRange {
        if self.is_ace() {
            ValueRange::new(1, 11)
        } else {
            ValueRange::fixed(self.face_value as u32)
        }
    }

    /// The lowest value this card can contribute.
    #[must_use]
    pub const fn min_value(&self) -> u32 {
        self.value_range().min()
    }

    /// The highest value this card can contribute.
    #[must_use]
    pub const fn max_value(&self) -> u32 {
        self.value_range().max()
    }

    /// Returns whether the card can contribute more than one value.
    #[must_use]
    pub const fn is_flexible(&self) -> bool {
        self.value_range().is_flexible()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face_value {
            1 => f.write_str("Ace")?,
            11 => f.write_str("Jack")?,
            12 => f.write_str("Queen")?,
            13 => f.write_str("King")?,
            n => write!(f, "{n}")?,
        }
        write!(f, " of {}", self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Lowest face value in a standard deck.
pub const MIN_FACE: u8 = 1;

/// Highest face value in a standard deck.
pub const MAX_FACE: u8 = 13;
