//! This is the core module. It exports the cards, hands, and the five card
//! hand evaluator. Nothing in here knows about players.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Error type for invalid cards and hands.
mod error;
/// Export `HandError`
pub use self::error::HandError;

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::{Hand, HAND_SIZE};

/// We want to be able to iterate over five card combinations.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::CardIter;

/// 5 Card hand ranking code.
mod rank;
/// Export the trait, the results, and the entry points.
pub use self::rank::{evaluate, evaluate_best, HandCategory, HandScore, Rankable};
