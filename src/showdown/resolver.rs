use std::fmt::Display;
use std::thread;

use tracing::{event, trace_span, Level};

use super::ShowdownError;
use crate::core::{evaluate, Card, HandScore};

/// One player's evaluated hand.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult<P> {
    /// Who held the hand.
    pub player: P,
    /// How strong it was.
    pub score: HandScore,
}

/// Players whose hands scored exactly the same.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TieGroup<P> {
    /// The score every player in the group shares.
    pub score: HandScore,
    /// Players in the order they were seated at the table.
    pub players: Vec<P>,
}

/// The final ordering of a table, best hands first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showdown<P> {
    groups: Vec<TieGroup<P>>,
}

impl<P> Showdown<P> {
    /// Order results by score, best first, and group exact ties.
    ///
    /// The sort is stable so tied players keep the order of `results`.
    pub fn from_results(mut results: Vec<PlayerResult<P>>) -> Self {
        results.sort_by(|a, b| b.score.cmp(&a.score));

        let mut groups: Vec<TieGroup<P>> = Vec::new();
        for PlayerResult { player, score } in results {
            if let Some(group) = groups.last_mut().filter(|g| g.score == score) {
                group.players.push(player);
            } else {
                groups.push(TieGroup {
                    score,
                    players: vec![player],
                });
            }
        }

        Self { groups }
    }

    /// The best group. `None` only for an empty table.
    pub fn winners(&self) -> Option<&TieGroup<P>> {
        self.groups.first()
    }

    /// Every group, best first.
    pub fn groups(&self) -> &[TieGroup<P>] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<TieGroup<P>> {
        self.groups
    }

    /// Number of distinct scores at the table.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TieGroup<P>> {
        self.groups.iter()
    }
}

impl<P> IntoIterator for Showdown<P> {
    type Item = TieGroup<P>;
    type IntoIter = std::vec::IntoIter<TieGroup<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a Showdown<P> {
    type Item = &'a TieGroup<P>;
    type IntoIter = std::slice::Iter<'a, TieGroup<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Evaluate every player's cards, keeping the table order.
///
/// Stops at the first player whose cards don't make a valid hand.
pub fn evaluate_table<P, C, I>(table: I) -> Result<Vec<PlayerResult<P>>, ShowdownError>
where
    I: IntoIterator<Item = (P, C)>,
    P: Display,
    C: AsRef<[Card]>,
{
    table
        .into_iter()
        .map(|(player, cards)| match evaluate(cards.as_ref()) {
            Ok(score) => {
                event!(Level::TRACE, %player, %score, "Scored player");
                Ok(PlayerResult { player, score })
            }
            Err(source) => {
                event!(Level::DEBUG, %player, error = %source, "Rejected hand");
                Err(ShowdownError::new(&player, source))
            }
        })
        .collect()
}

/// Rank a table of players from best hand to worst.
///
/// Players are seated in the iteration order of `table`, which is also the
/// order of players inside a tie group. Pass a `Vec` or an ordered map to keep
/// that deterministic. An empty table has no winners.
///
/// ```
/// use poker_showdown::core::Hand;
/// use poker_showdown::showdown::resolve;
///
/// let table = vec![
///     ("alice", Hand::new_from_str("Kc Kd 7h 7s 2c").unwrap()),
///     ("bob", Hand::new_from_str("Ac Qd 9h 5s 2d").unwrap()),
///     ("carol", Hand::new_from_str("Kh Ks 7c 7d 2d").unwrap()),
/// ];
///
/// let showdown = resolve(table).unwrap();
/// assert_eq!(vec!["alice", "carol"], showdown.winners().unwrap().players);
/// assert_eq!(2, showdown.len());
/// ```
pub fn resolve<P, C, I>(table: I) -> Result<Showdown<P>, ShowdownError>
where
    I: IntoIterator<Item = (P, C)>,
    P: Display,
    C: AsRef<[Card]>,
{
    let _span = trace_span!("resolve").entered();
    let results = evaluate_table(table)?;
    let num_players = results.len();
    let showdown = Showdown::from_results(results);
    log_resolved(&showdown, num_players);
    Ok(showdown)
}

/// Same as [`resolve`] but scores the hands on up to `num_tasks` threads.
///
/// Hands are split into contiguous chunks, one per thread. Scores are put
/// back in table order before sorting, so the result is identical to
/// `resolve`. If several hands are invalid the error is for the one seated
/// first.
pub fn resolve_parallel<P, C, I>(table: I, num_tasks: usize) -> Result<Showdown<P>, ShowdownError>
where
    I: IntoIterator<Item = (P, C)>,
    P: Display + Sync,
    C: AsRef<[Card]> + Sync,
{
    let _span = trace_span!("resolve_parallel", num_tasks).entered();
    let table: Vec<(P, C)> = table.into_iter().collect();
    let num_players = table.len();
    let chunk_size = num_players.div_ceil(num_tasks.max(1)).max(1);

    let scores: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = table
            .chunks(chunk_size)
            .map(|chunk| {
                s.spawn(move || {
                    chunk
                        .iter()
                        .map(|(_, cards)| evaluate(cards.as_ref()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    });

    let mut results = Vec::with_capacity(num_players);
    for ((player, _), score) in table.into_iter().zip(scores) {
        let score = score.map_err(|source| {
            event!(Level::DEBUG, %player, error = %source, "Rejected hand");
            ShowdownError::new(&player, source)
        })?;
        results.push(PlayerResult { player, score });
    }

    let showdown = Showdown::from_results(results);
    log_resolved(&showdown, num_players);
    Ok(showdown)
}

fn log_resolved<P>(showdown: &Showdown<P>, num_players: usize) {
    match showdown.winners() {
        Some(group) => event!(
            Level::DEBUG,
            num_players,
            num_winners = group.players.len(),
            score = %group.score,
            "Showdown resolved"
        ),
        None => event!(Level::DEBUG, "Showdown with no players"),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::core::{Hand, HandCategory, HandError, Suit, Value};

    fn hand(s: &str) -> Hand {
        Hand::new_from_str(s).unwrap()
    }

    fn names<'a>(group: &TieGroup<&'a str>) -> Vec<&'a str> {
        group.players.clone()
    }

    #[test_log::test]
    fn test_single_winner() {
        let table = vec![
            ("p1", hand("2c 5d 9h Js Kc")),
            ("p2", hand("3c 3d 3h 7s 7c")),
            ("p3", hand("Ad Ac 9d 9c Ts")),
        ];
        let showdown = resolve(table).unwrap();

        assert_eq!(3, showdown.len());
        let winners = showdown.winners().unwrap();
        assert_eq!(vec!["p2"], names(winners));
        assert_eq!(HandCategory::FullHouse, winners.score.category());

        let order: Vec<&str> = showdown.iter().flat_map(|g| g.players.clone()).collect();
        assert_eq!(vec!["p2", "p3", "p1"], order);
    }

    #[test_log::test]
    fn test_tied_winners() {
        let table = vec![
            ("north", hand("Kc Kd 7h 7s 2c")),
            ("east", hand("Ac Qd 9h 5s 2d")),
            ("south", hand("Kh Ks 7c 7d 2d")),
        ];
        let showdown = resolve(table).unwrap();
        assert_eq!(2, showdown.len());
        assert_eq!(vec!["north", "south"], names(&showdown.groups()[0]));
        assert_eq!(vec!["east"], names(&showdown.groups()[1]));
    }

    #[test]
    fn test_tie_group_keeps_seat_order() {
        let table = vec![
            ("d", hand("2c 5d 9h Js Kc")),
            ("c", hand("2d 5h 9c Jd Kd")),
            ("b", hand("2h 5c 9s Jh Kh")),
            ("a", hand("2s 5s 9d Jc Ks")),
        ];
        let showdown = resolve(table).unwrap();
        assert_eq!(1, showdown.len());
        assert_eq!(vec!["d", "c", "b", "a"], names(showdown.winners().unwrap()));
    }

    #[test]
    fn test_lower_groups_are_grouped_too() {
        let table = vec![
            ("a", hand("2c 3d 4h 5s 7c")),
            ("b", hand("Ts Js Qs Ks As")),
            ("c", hand("2d 3h 4c 5d 7h")),
        ];
        let groups = resolve(table).unwrap().into_groups();
        assert_eq!(2, groups.len());
        assert_eq!(vec!["b"], groups[0].players);
        assert_eq!(vec!["a", "c"], groups[1].players);
    }

    #[test]
    fn test_deterministic() {
        let table: BTreeMap<u32, Hand> = [
            (1, hand("Kc Kd 7h 7s 2c")),
            (2, hand("Kh Ks 7c 7d 2d")),
            (3, hand("Ac 2d 3h 4s 5c")),
            (4, hand("2c 3d 4h 5s 6c")),
        ]
        .into_iter()
        .collect();

        let first = resolve(table.clone()).unwrap();
        for _ in 0..10 {
            assert_eq!(first, resolve(table.clone()).unwrap());
        }
        let order: Vec<Vec<u32>> = first.into_iter().map(|g| g.players).collect();
        assert_eq!(vec![vec![4], vec![3], vec![1, 2]], order);
    }

    #[test]
    fn test_empty_table() {
        let table: Vec<(&str, Hand)> = vec![];
        let showdown = resolve(table).unwrap();
        assert!(showdown.is_empty());
        assert!(showdown.winners().is_none());
    }

    #[test_log::test]
    fn test_invalid_hand_names_player() {
        let good = hand("Kc Kd 7h 7s 2c");
        let short: Vec<Card> = good.cards()[..4].to_vec();
        let table = vec![
            ("ok", good.cards().to_vec()),
            ("short", short),
        ];

        let err = resolve(table).unwrap_err();
        assert_eq!("short", err.player());
        assert_eq!(&HandError::InvalidHand(4), err.hand_error());
        assert_eq!(
            "Player short: A hand must have exactly 5 cards, found 4",
            err.to_string()
        );
    }

    #[test]
    fn test_duplicate_card_names_player() {
        let ace = Card::new(Value::Ace, Suit::Spade);
        let mut cards = hand("Kc Kd 7h 7s 2c").cards().to_vec();
        cards[2] = ace;
        cards[3] = ace;
        let table = vec![(7, cards)];

        let err = resolve(table).unwrap_err();
        assert_eq!("7", err.player());
        assert_eq!(&HandError::DuplicateCard(ace), err.hand_error());
    }

    #[test]
    fn test_first_failure_is_reported() {
        let table = vec![
            ("a", hand("Kc Kd 7h 7s 2c").cards().to_vec()),
            ("b", vec![]),
            ("c", vec![Card::new(Value::Two, Suit::Club)]),
        ];
        assert_eq!("b", resolve(table).unwrap_err().player());
    }

    #[test]
    fn test_evaluate_table_keeps_order() {
        let table = vec![("x", hand("2c 5d 9h Js Kc")), ("y", hand("Ts Js Qs Ks As"))];
        let results = evaluate_table(table).unwrap();
        assert_eq!("x", results[0].player);
        assert_eq!(HandCategory::HighCard, results[0].score.category());
        assert_eq!("y", results[1].player);
        assert_eq!(HandCategory::RoyalFlush, results[1].score.category());
    }

    #[test_log::test]
    fn test_parallel_matches_serial() {
        let hands = [
            "2c 5d 9h Js Kc",
            "3c 3d 3h 7s 7c",
            "Ad Ac 9d 9c Ts",
            "Kc Kd 7h 7s 2c",
            "Kh Ks 7c 7d 2d",
            "Ac 2d 3h 4s 5c",
            "2c 3d 4h 5s 6c",
            "Ts Js Qs Ks As",
            "2h 5c 9s Jh Kh",
        ];
        let table: Vec<(usize, Hand)> = hands.iter().map(|h| hand(h)).enumerate().collect();

        let serial = resolve(table.clone()).unwrap();
        for num_tasks in [0, 1, 2, 3, 4, 9, 32] {
            assert_eq!(serial, resolve_parallel(table.clone(), num_tasks).unwrap());
        }
    }

    #[test]
    fn test_parallel_reports_first_failure() {
        let good = hand("Kc Kd 7h 7s 2c").cards().to_vec();
        let table = vec![
            ("a", good.clone()),
            ("b", good.clone()),
            ("c", good[..3].to_vec()),
            ("d", good.clone()),
            ("e", vec![]),
        ];
        let err = resolve_parallel(table, 3).unwrap_err();
        assert_eq!("c", err.player());
        assert_eq!(&HandError::InvalidHand(3), err.hand_error());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json() {
        let table = vec![("a", hand("Ts Js Qs Ks As")), ("b", hand("2c 5d 9h Js Kc"))];
        let showdown = resolve(table).unwrap();
        let json = serde_json::to_value(&showdown).unwrap();
        assert_eq!("RoyalFlush", json["groups"][0]["score"]["category"]);
        assert_eq!("a", json["groups"][0]["players"][0]);
        assert_eq!("HighCard", json["groups"][1]["score"]["category"]);
    }

    #[test]
    fn test_parallel_empty_table() {
        let table: Vec<(&str, Hand)> = vec![];
        assert!(resolve_parallel(table, 4).unwrap().is_empty());
    }
}
