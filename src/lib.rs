//! Poker Showdown is a library for deciding who wins a hand of five card
//! poker. It is not the fastest hand ranking. However it is
//! clean well tested code.
//!
//! Every hand is classified into one of ten categories with a tie break
//! sequence, and the resulting scores have a total order:
//!
//! ```
//! use poker_showdown::core::{Hand, HandCategory, Rankable};
//!
//! let quads = Hand::new_from_str("2c 2d 2h 2s 5c").unwrap().rank();
//! let boat = Hand::new_from_str("Ac Ad Ah Ks Kc").unwrap().rank();
//!
//! assert_eq!(HandCategory::FourOfAKind, quads.category());
//! assert!(quads > boat);
//! ```
//!
//! A whole table is ranked with [`showdown::resolve`], which groups players
//! holding exactly equal hands:
//!
//! ```
//! use poker_showdown::core::Hand;
//! use poker_showdown::showdown::resolve;
//!
//! let table = vec![
//!     ("alice", Hand::new_from_str("Ts Js Qs Ks As").unwrap()),
//!     ("bob", Hand::new_from_str("Ac 2d 3h 4s 5c").unwrap()),
//! ];
//! let showdown = resolve(table).unwrap();
//! assert_eq!(vec!["alice"], showdown.winners().unwrap().players);
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to players and tables.
pub mod core;
/// Ranking a table of players against each other.
pub mod showdown;
