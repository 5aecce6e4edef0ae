use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;
use std::cmp::Ordering;

/// A fully-evaluated lane strength.
///
/// Combines a [`Ranking`] with its [`Kickers`] and the source cards.
/// Ordering is lexicographic: ranking, then kickers, then the raw card
/// bitset. The final step is the crate's documented convention for true
/// rank ties (identical rank composition in different suits): the hand
/// holding the higher card id wins, card ids being rank-major and
/// suit-minor. Comparisons therefore never tie unless the hands are the
/// same cards, which is what reproducible search and testing need.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
    cards: Hand,
}

impl Strength {
    pub fn value(&self) -> Ranking {
        self.value
    }
    pub fn kicks(&self) -> Kickers {
        self.kicks
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(e: Evaluator) -> Self {
        let value = e.find_ranking();
        let kicks = e.find_kickers(value);
        let cards = Hand::from(e);
        Self { value, kicks, cards }
    }
}

/// kicker-level construction for tests and sentinels; carries no cards
impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self {
            value,
            kicks,
            cards: Hand::empty(),
        }
    }
}

impl Ord for Strength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then(self.kicks.cmp(&other.kicks))
            .then(u64::from(self.cards).cmp(&u64::from(other.cards)))
    }
}
impl PartialOrd for Strength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.value, self.kicks)
    }
}
