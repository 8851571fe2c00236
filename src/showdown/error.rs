use thiserror::Error;

use crate::core::HandError;

/// A player's hand failed validation during a showdown.
///
/// The showdown never ranks around a bad hand; the caller decides whether to
/// drop the player and resolve again or abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Player {player}: {source}")]
pub struct ShowdownError {
    player: String,
    source: HandError,
}

impl ShowdownError {
    pub(crate) fn new(player: &impl std::fmt::Display, source: HandError) -> Self {
        Self {
            player: player.to_string(),
            source,
        }
    }

    /// The player whose hand was rejected.
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Why the hand was rejected.
    pub fn hand_error(&self) -> &HandError {
        &self.source
    }
}
