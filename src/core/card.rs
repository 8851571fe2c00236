use std::fmt;
use std::str::FromStr;

use super::HandError;

/// Card rank or value.
/// The discriminant is the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Lowest numeric rank a card can have.
    pub const MIN_RANK: u8 = 2;
    /// Highest numeric rank a card can have (the ace).
    pub const MAX_RANK: u8 = 14;

    /// Get all of the `Value`'s that are possible, lowest first.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// Take a numeric rank in `2..=14` and convert it to a value.
    ///
    /// ```
    /// use poker_showdown::core::Value;
    ///
    /// assert_eq!(Some(Value::Jack), Value::from_rank(11));
    /// assert_eq!(Some(Value::Ace), Value::from_rank(14));
    /// assert_eq!(None, Value::from_rank(1));
    /// ```
    pub fn from_rank(rank: u8) -> Option<Value> {
        if (Self::MIN_RANK..=Self::MAX_RANK).contains(&rank) {
            Some(VALUES[usize::from(rank - Self::MIN_RANK)])
        } else {
            None
        }
    }

    /// The numeric rank of this value. Two is 2 and Ace is 14.
    pub fn rank(self) -> u8 {
        self as u8 + Self::MIN_RANK
    }

    /// Parse the single char notation of a value.
    /// Ten is `T`, the two char `10` form is handled by the card parser.
    pub fn from_char(c: char) -> Option<Value> {
        match c.to_ascii_uppercase() {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// The char used to print this value.
    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Parse a suit from either its letter (any case) or its symbol.
    ///
    /// ```
    /// use poker_showdown::core::Suit;
    ///
    /// assert_eq!(Some(Suit::Heart), Suit::from_char('H'));
    /// assert_eq!(Some(Suit::Club), Suit::from_char('♣'));
    /// assert_eq!(None, Suit::from_char('x'));
    /// ```
    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'd' | 'D' | '♦' | '♢' => Some(Suit::Diamond),
            's' | 'S' | '♠' | '♤' => Some(Suit::Spade),
            'h' | 'H' | '♥' | '♡' => Some(Suit::Heart),
            'c' | 'C' | '♣' | '♧' => Some(Suit::Club),
            _ => None,
        }
    }

    /// The lower case letter used to print this suit.
    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Club => 'c',
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The main value type of this library.
/// This is a carrier for Suit and Value combined.
///
/// Two cards are the same card only when both value and suit match. The
/// derived ordering sorts by value first and uses the suit only to keep
/// sorting total; hand strength never looks at suit order.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a card from its typed value and suit.
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Create a card from a numeric rank in `2..=14` and a suit symbol.
    ///
    /// ```
    /// use poker_showdown::core::{Card, HandError, Suit, Value};
    ///
    /// let card = Card::try_new(12, 's').unwrap();
    /// assert_eq!(Card::new(Value::Queen, Suit::Spade), card);
    ///
    /// assert!(matches!(Card::try_new(15, 's'), Err(HandError::InvalidCard { .. })));
    /// assert!(matches!(Card::try_new(9, 'x'), Err(HandError::InvalidCard { .. })));
    /// ```
    pub fn try_new(rank: u8, suit: char) -> Result<Self, HandError> {
        match (Value::from_rank(rank), Suit::from_char(suit)) {
            (Some(value), Some(suit)) => Ok(Self { value, suit }),
            _ => Err(HandError::InvalidCard { rank, suit }),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

impl FromStr for Card {
    type Err = HandError;

    /// Parse a single card such as `As`, `td`, `10H` or `K♣`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars().peekable();
        let card = parse_card(&mut chars)?;
        if chars.next().is_some() {
            return Err(HandError::UnparsedCharsRemaining);
        }
        Ok(card)
    }
}

/// Pull one card off of a char stream.
///
/// Accepts the two char `10` for ten as well as `T`.
pub(crate) fn parse_card<I>(chars: &mut std::iter::Peekable<I>) -> Result<Card, HandError>
where
    I: Iterator<Item = char>,
{
    let vc = chars.next().ok_or(HandError::TooFewChars)?;
    let value = if vc == '1' {
        match chars.next() {
            Some('0') => Value::Ten,
            Some(_) => return Err(HandError::UnexpectedValueChar),
            None => return Err(HandError::TooFewChars),
        }
    } else {
        Value::from_char(vc).ok_or(HandError::UnexpectedValueChar)?
    };
    let suit = chars
        .next()
        .ok_or(HandError::TooFewChars)
        .and_then(|sc| Suit::from_char(sc).ok_or(HandError::UnexpectedSuitChar))?;

    Ok(Card { value, suit })
}
