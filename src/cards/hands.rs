use super::card::Card;
use super::hand::Hand;

/// HandIterator enumerates every n-card subset of a fixed pool Hand.
/// it walks an index odometer over the pool's cards in card-id order,
/// so it is deterministic, restartable, recursion-free, and yields
/// exactly C(pool, n) hands. the pools in this crate are small (a
/// 13-card deal, an 8-card remainder), so state is a handful of indices.
pub struct HandIterator {
    pool: Vec<Card>,
    draw: Vec<usize>,
    done: bool,
}

impl HandIterator {
    /// Total number of combinations this iterator yields from a fresh start.
    pub fn combinations(&self) -> usize {
        let n = self.pool.len();
        let k = self.draw.len();
        if k > n {
            return 0;
        }
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }

    fn current(&self) -> Hand {
        self.draw
            .iter()
            .map(|i| self.pool[*i])
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }

    fn advance(&mut self) {
        let n = self.pool.len();
        let k = self.draw.len();
        match (0..k).rev().find(|i| self.draw[*i] < n - k + i) {
            None => self.done = true,
            Some(i) => {
                self.draw[i] += 1;
                for j in i + 1..k {
                    self.draw[j] = self.draw[j - 1] + 1;
                }
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            None
        } else {
            let hand = self.current();
            self.advance();
            Some(hand)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let combos = self.combinations();
        (combos, Some(combos))
    }
}

/// subset size and pool are immutable and must be decided at construction
impl From<(usize, Hand)> for HandIterator {
    fn from((n, pool): (usize, Hand)) -> Self {
        let pool = Vec::<Card>::from(pool);
        let done = n > pool.len();
        Self {
            draw: (0..n).collect(),
            pool,
            done,
        }
    }
}
