use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use super::card::parse_card;
use super::{Card, HandError};

/// Number of cards in an evaluated hand.
pub const HAND_SIZE: usize = 5;

/// Fail with the first card that shows up twice.
pub(crate) fn check_distinct(cards: &[Card]) -> Result<(), HandError> {
    // One bit per card.
    let mut seen: u64 = 0;
    for c in cards {
        let bit = 1u64 << (c.value as u8 * 4 + c.suit as u8);
        if seen & bit != 0 {
            return Err(HandError::DuplicateCard(*c));
        }
        seen |= bit;
    }
    Ok(())
}

/// Exactly five distinct cards.
///
/// A `Hand` can only be built through validation, so holding one means the
/// cardinality and uniqueness checks have already passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    /// Validate and build a hand.
    ///
    /// Cardinality is checked before duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_showdown::core::{Card, Hand, HandError, Suit, Value};
    ///
    /// let ace = Card::new(Value::Ace, Suit::Club);
    /// assert_eq!(Err(HandError::InvalidHand(1)), Hand::new(&[ace]));
    /// assert_eq!(
    ///     Err(HandError::DuplicateCard(ace)),
    ///     Hand::new(&[ace, ace, ace, ace, ace])
    /// );
    /// ```
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::InvalidHand(cards.len()))?;

        check_distinct(&cards)?;
        Ok(Self(cards))
    }

    /// Parse a hand from card notation, spaces and commas between the cards
    /// are optional.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_showdown::core::Hand;
    ///
    /// let a = Hand::new_from_str("AsKsQsJsTs").unwrap();
    /// let b = Hand::new_from_str("AS KS QS JS 10S").unwrap();
    /// assert_eq!(a.cards(), b.cards());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, HandError> {
        let mut chars = hand_string
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .peekable();
        let mut cards = Vec::with_capacity(HAND_SIZE);

        // Keep looping until we run out of chars
        while chars.peek().is_some() {
            cards.push(parse_card(&mut chars)?);
        }

        Self::new(&cards)
    }

    /// The cards in the order they were supplied.
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        HAND_SIZE
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Index<usize> for Hand {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.0[index]
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Self::new(cards)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::new(&cards)
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

impl AsRef<[Card]> for Hand {
    fn as_ref(&self) -> &[Card] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Hand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let cards = Vec::<Card>::deserialize(deserializer)?;
        Hand::new(&cards).map_err(serde::de::Error::custom)
    }
}
