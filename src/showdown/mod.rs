//! Everything needed to rank a table of players against each other.

/// Error tagged with the player that caused it.
mod error;
/// Export `ShowdownError`
pub use self::error::ShowdownError;

/// Evaluate every player's hand then order and group them.
mod resolver;
/// Export the resolver entry points and result types.
pub use self::resolver::{
    evaluate_table, resolve, resolve_parallel, PlayerResult, Showdown, TieGroup,
};
