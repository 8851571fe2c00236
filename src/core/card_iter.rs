use super::Card;

/// Iterator over every `num_cards` sized combination of a set of cards.
///
/// Combinations come out in lexicographic order of their positions in
/// `possible_cards`. Used to find the best five card hand out of more cards.
#[derive(Debug)]
pub struct CardIter<'a> {
    // All the possible cards that can be picked
    possible_cards: &'a [Card],

    // Positions making up the next combination.
    idx: Vec<usize>,

    // Set once the last combination has been handed out.
    done: bool,
}

impl<'a> CardIter<'a> {
    /// Create an iterator of `num_cards` sized combinations.
    ///
    /// If there are fewer possible cards than requested the iterator is empty.
    ///
    /// ```
    /// use poker_showdown::core::{Card, CardIter, Suit, Value};
    ///
    /// let cards: Vec<Card> = Value::values()[..7]
    ///     .iter()
    ///     .map(|v| Card::new(*v, Suit::Heart))
    ///     .collect();
    /// assert_eq!(21, CardIter::new(&cards, 5).count());
    /// ```
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> Self {
        Self {
            possible_cards,
            idx: (0..num_cards).collect(),
            done: num_cards > possible_cards.len(),
        }
    }

    /// Move `idx` to the next combination. Returns false when exhausted.
    fn advance(&mut self) -> bool {
        let n = self.possible_cards.len();
        let k = self.idx.len();

        // Find the right most position that can still move forward.
        let Some(level) = (0..k).rev().find(|&i| self.idx[i] < n - k + i) else {
            return false;
        };

        self.idx[level] += 1;
        // Everything after it restarts right behind it.
        for i in level + 1..k {
            self.idx[i] = self.idx[i - 1] + 1;
        }
        true
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.done {
            return None;
        }

        let result: Vec<Card> = self.idx.iter().map(|&i| self.possible_cards[i]).collect();
        self.done = !self.advance();
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};

    fn spades(n: usize) -> Vec<Card> {
        Value::values()[..n]
            .iter()
            .map(|v| Card::new(*v, Suit::Spade))
            .collect()
    }

    #[test]
    fn test_iter_one() {
        let cards = spades(1);
        for c in CardIter::new(&cards, 1) {
            assert_eq!(1, c.len());
        }
        assert_eq!(1, CardIter::new(&cards, 1).count());
    }

    #[test]
    fn test_iter_two() {
        let cards = spades(3);

        // Make sure that we get the correct number back.
        assert_eq!(3, CardIter::new(&cards, 2).count());

        // Make sure that everything has two cards and they are different.
        for c in CardIter::new(&cards, 2) {
            assert_eq!(2, c.len());
            assert!(c[0] != c[1]);
        }
    }

    #[test]
    fn test_iter_seven_choose_five() {
        let cards = spades(7);
        let combos: Vec<Vec<Card>> = CardIter::new(&cards, 5).collect();
        assert_eq!(21, combos.len());
        assert_eq!(cards[..5].to_vec(), combos[0]);
        assert_eq!(cards[2..].to_vec(), combos[20]);
    }

    #[test]
    fn test_iter_exact() {
        let cards = spades(5);
        assert_eq!(1, CardIter::new(&cards, 5).count());
    }

    #[test]
    fn test_iter_too_few() {
        let cards = spades(4);
        assert_eq!(0, CardIter::new(&cards, 5).count());
    }
}
