use thiserror::Error;

use super::Card;

/// This is the core error type for hand validation and evaluation.
/// It uses `thiserror` to provide readable error messages.
///
/// Every variant is an input problem found before any classification
/// runs, so no partial result ever accompanies one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum HandError {
    #[error("Invalid card: rank {rank} suit {suit:?}")]
    InvalidCard { rank: u8, suit: char },
    #[error("A hand must have exactly 5 cards, found {0}")]
    InvalidHand(usize),
    #[error("Card already added to hand {0}")]
    DuplicateCard(Card),
    #[error("Best hand selection needs 5 to 7 cards, found {0}")]
    InvalidBestHandSize(usize),
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
}
