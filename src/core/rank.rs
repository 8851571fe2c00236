use std::fmt;

use tracing::{event, Level};

use super::hand::check_distinct;
use super::{Card, CardIter, Hand, HandError, Value, HAND_SIZE};

/// All the different possible hand categories, weakest first.
///
/// The derived ordering is the poker ordering, so any hand in a higher
/// category beats every hand in a lower one.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum HandCategory {
    /// The lowest category.
    /// No matches
    HighCard,
    /// One Card matches another.
    OnePair,
    /// Two different pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
            HandCategory::RoyalFlush => "Royal flush",
        };
        write!(f, "{name}")
    }
}

/// The strength of a five card hand.
///
/// Scores compare by category first and then by the tie break values
/// element by element. Two scores that are equal are an exact tie.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct HandScore {
    category: HandCategory,
    tiebreak: Vec<Value>,
}

impl HandScore {
    /// The category of the hand.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Values used to order hands of the same category, most significant
    /// first.
    ///
    /// Full house is `[trips, pair]`, two pair is `[high pair, low pair,
    /// kicker]`, straights only keep their top card, and the wheel's top card
    /// is the five.
    pub fn tiebreak(&self) -> &[Value] {
        &self.tiebreak
    }

    /// Tie break as numeric ranks where the ace is 14.
    pub fn tiebreak_ranks(&self) -> Vec<u8> {
        self.tiebreak.iter().map(|v| v.rank()).collect()
    }
}

impl From<HandScore> for HandCategory {
    fn from(score: HandScore) -> Self {
        score.category
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category)?;
        for (i, v) in self.tiebreak.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

/// Given the distinct values of a hand, highest first, find the top card of
/// the straight they make, if any.
///
/// The wheel (A 2 3 4 5) plays the ace low so its top card is the five.
fn straight_top(values: &[Value]) -> Option<Value> {
    match values {
        [Value::Ace, Value::Five, Value::Four, Value::Three, Value::Two] => Some(Value::Five),
        [high, .., low] if values.len() == HAND_SIZE && high.rank() - low.rank() == 4 => {
            Some(*high)
        }
        _ => None,
    }
}

/// Classify exactly five distinct cards.
fn score_five(cards: &[Card]) -> HandScore {
    let mut value_to_count: [u8; 13] = [0; 13];
    let mut suit_set: u8 = 0;

    for c in cards {
        value_to_count[c.value as usize] += 1;
        suit_set |= 1 << (c.suit as u8);
    }

    // Group by value. Biggest groups first, higher values first within the
    // same group size. That is the tie break order for every category that
    // isn't a straight.
    let mut groups: Vec<(u8, Value)> = Value::values()
        .into_iter()
        .filter(|v| value_to_count[*v as usize] > 0)
        .map(|v| (value_to_count[v as usize], v))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let counts: Vec<u8> = groups.iter().map(|(n, _)| *n).collect();
    let values: Vec<Value> = groups.iter().map(|(_, v)| *v).collect();

    // Exactly one flush check and one straight check.
    let is_flush = suit_set.count_ones() == 1;
    let straight = straight_top(&values);

    let (category, tiebreak) = match (is_flush, straight, counts.as_slice()) {
        (true, Some(Value::Ace), _) => (HandCategory::RoyalFlush, vec![Value::Ace]),
        (true, Some(top), _) => (HandCategory::StraightFlush, vec![top]),
        (_, _, [4, 1]) => (HandCategory::FourOfAKind, values),
        (_, _, [3, 2]) => (HandCategory::FullHouse, values),
        (true, None, _) => (HandCategory::Flush, values),
        (false, Some(top), _) => (HandCategory::Straight, vec![top]),
        (false, None, [3, 1, 1]) => (HandCategory::ThreeOfAKind, values),
        (false, None, [2, 2, 1]) => (HandCategory::TwoPair, values),
        (false, None, [2, 1, 1, 1]) => (HandCategory::OnePair, values),
        (false, None, _) => (HandCategory::HighCard, values),
    };

    HandScore { category, tiebreak }
}

/// Can this turn into a hand score?
pub trait Rankable {
    /// Score the hand. This will not cache the value.
    fn rank(&self) -> HandScore;
}

/// Implementation for `Hand`
impl Rankable for Hand {
    /// A `Hand` is already validated, so ranking can't fail.
    ///
    /// ```
    /// use poker_showdown::core::{Hand, HandCategory, Rankable, Value};
    ///
    /// let score = Hand::new_from_str("3c3d3h7s7c").unwrap().rank();
    /// assert_eq!(HandCategory::FullHouse, score.category());
    /// assert_eq!(&[Value::Three, Value::Seven], score.tiebreak());
    /// ```
    fn rank(&self) -> HandScore {
        score_five(self.cards())
    }
}

/// Validate and score a five card hand.
///
/// Fails with `InvalidHand` when there aren't exactly five cards and with
/// `DuplicateCard` when a card repeats. Both are checked before any
/// classification runs.
///
/// ```
/// use poker_showdown::core::{evaluate, Card, HandCategory, HandError, Suit, Value};
///
/// let cards = [
///     Card::new(Value::Ace, Suit::Club),
///     Card::new(Value::Two, Suit::Diamond),
///     Card::new(Value::Three, Suit::Heart),
///     Card::new(Value::Four, Suit::Spade),
///     Card::new(Value::Five, Suit::Club),
/// ];
/// let score = evaluate(&cards).unwrap();
/// assert_eq!(HandCategory::Straight, score.category());
/// assert_eq!(vec![5], score.tiebreak_ranks());
///
/// assert_eq!(Err(HandError::InvalidHand(4)), evaluate(&cards[..4]));
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandScore, HandError> {
    let hand = Hand::new(cards)?;
    let score = hand.rank();
    event!(Level::TRACE, %hand, %score, "Evaluated hand");
    Ok(score)
}

/// Find the best five card hand out of five to seven distinct cards.
///
/// Every five card combination is scored and the best one is returned with
/// its score. When several combinations score the same the first one found
/// is kept.
///
/// ```
/// use poker_showdown::core::{evaluate_best, Card, HandCategory};
///
/// let seven: Vec<Card> = ["2h", "2d", "8d", "8s", "Kd", "6s", "Th"]
///     .iter()
///     .map(|c| c.parse().unwrap())
///     .collect();
///
/// let (score, best) = evaluate_best(&seven).unwrap();
/// assert_eq!(HandCategory::TwoPair, score.category());
/// assert_eq!(5, best.len());
/// ```
pub fn evaluate_best(cards: &[Card]) -> Result<(HandScore, Hand), HandError> {
    if !(HAND_SIZE..=7).contains(&cards.len()) {
        return Err(HandError::InvalidBestHandSize(cards.len()));
    }
    check_distinct(cards)?;

    let mut best: Option<(HandScore, Hand)> = None;
    for combo in CardIter::new(cards, HAND_SIZE) {
        let hand = Hand::new(&combo)?;
        let score = hand.rank();
        if best.as_ref().is_none_or(|(best_score, _)| score > *best_score) {
            best = Some((score, hand));
        }
    }

    let (score, hand) = best.ok_or(HandError::InvalidBestHandSize(cards.len()))?;
    event!(Level::TRACE, num_cards = cards.len(), %hand, %score, "Selected best hand");
    Ok((score, hand))
}
