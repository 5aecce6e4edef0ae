use super::arrangement::Arrangement;
use super::lane::Lane;
use super::water;
use crate::cards::evaluator::straight_high;
use crate::cards::rank::Rank;
use crate::cards::ranking::Ranking;
use crate::Water;

/// Whole-13-card bonus patterns (报到), scored independently of lane play.
///
/// Detection runs the patterns in fixed precedence and the first match
/// wins, so an arrangement carries at most one special. Weights come from
/// the canonical table in [`super::water`]; the tier fields record the
/// upgrades (quads among the six pairs, straight flushes among the
/// middle/back) that raise a pattern above its base weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialHand {
    Dragon { royal: bool },
    SixPairs { quads: usize },
    ThreeFlushes { straight_flushes: usize },
    ThreeStraights { straight_flushes: usize },
}

impl SpecialHand {
    pub fn detect(a: &Arrangement) -> Option<Self> {
        None.or_else(|| Self::dragon(a))
            .or_else(|| Self::six_pairs(a))
            .or_else(|| Self::three_flushes(a))
            .or_else(|| Self::three_straights(a))
    }

    pub fn weight(&self) -> Water {
        match self {
            Self::Dragon { royal: true } => water::ROYAL_DRAGON,
            Self::Dragon { royal: false } => water::DRAGON,
            Self::SixPairs { quads } => water::SIX_PAIRS + *quads as Water,
            Self::ThreeFlushes { straight_flushes } => {
                water::THREE_FLUSHES + *straight_flushes as Water
            }
            Self::ThreeStraights { straight_flushes } => {
                water::THREE_STRAIGHTS + *straight_flushes as Water
            }
        }
    }

    ///

    /// one of every rank; royal when the whole deal is one suit
    fn dragon(a: &Arrangement) -> Option<Self> {
        let cards = a.cards();
        if u16::from(cards) == Rank::mask() {
            Some(Self::Dragon {
                royal: cards.suited().is_some(),
            })
        } else {
            None
        }
    }

    /// six pairs and a kicker; a quad counts as two of the pairs
    fn six_pairs(a: &Arrangement) -> Option<Self> {
        let cards = a.cards();
        let pairs: usize = Rank::ALL.iter().map(|r| cards.count(*r) / 2).sum();
        if pairs == 6 {
            let quads = Rank::ALL.iter().filter(|r| cards.count(**r) == 4).count();
            Some(Self::SixPairs { quads })
        } else {
            None
        }
    }

    /// every lane single-suited
    fn three_flushes(a: &Arrangement) -> Option<Self> {
        if Lane::all().iter().all(|l| a.lane(*l).suited().is_some()) {
            Some(Self::ThreeFlushes {
                straight_flushes: Self::upgrades(a),
            })
        } else {
            None
        }
    }

    /// every lane a consecutive run, the front a 3-run (wheel allowed)
    fn three_straights(a: &Arrangement) -> Option<Self> {
        let front = straight_high(u16::from(a.lane(Lane::Front)), 3).is_some();
        let middle = Self::runs(a, Lane::Middle);
        let back = Self::runs(a, Lane::Back);
        if front && middle && back {
            Some(Self::ThreeStraights {
                straight_flushes: Self::upgrades(a),
            })
        } else {
            None
        }
    }

    fn runs(a: &Arrangement, lane: Lane) -> bool {
        matches!(
            a.strength(lane).value(),
            Ranking::Straight(_) | Ranking::StraightFlush(_)
        )
    }

    /// straight flushes among middle/back, the shared upgrade counter
    fn upgrades(a: &Arrangement) -> usize {
        [Lane::Middle, Lane::Back]
            .iter()
            .filter(|l| matches!(a.strength(**l).value(), Ranking::StraightFlush(_)))
            .count()
    }
}

impl std::fmt::Display for SpecialHand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Dragon { royal: true } => write!(f, "RoyalDragon"),
            Self::Dragon { royal: false } => write!(f, "Dragon"),
            Self::SixPairs { quads } => write!(f, "SixPairs+{}", quads),
            Self::ThreeFlushes { straight_flushes } => write!(f, "ThreeFlushes+{}", straight_flushes),
            Self::ThreeStraights { straight_flushes } => {
                write!(f, "ThreeStraights+{}", straight_flushes)
            }
        }
    }
}
