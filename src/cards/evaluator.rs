use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;

const WHEEL_FIVE: u16 = 0b_1000000001111;
const WHEEL_THREE: u16 = 0b_1000000000011;

/// A lazy evaluator for a lane's strength.
///
/// Works on the compact Hand representation: rank multiplicities come from
/// popcounts of 4-bit rank slabs, straights from shift-ANDs on the 13-bit
/// rank mask, flushes from per-suit popcounts. The search tries categories
/// in strict precedence order and stops at the first hit.
///
/// A 5-card lane walks the full 9-category ladder; a 3-card front can only
/// resolve to trips, pair, or high card, so its chain never consults the
/// straight or flush finders.
pub struct Evaluator(Hand);

impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}
impl From<Evaluator> for Hand {
    fn from(e: Evaluator) -> Self {
        e.0
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        match self.0.size() {
            5 => None
                .or_else(|| self.find_straight_flush())
                .or_else(|| self.find_4_oak())
                .or_else(|| self.find_full_house())
                .or_else(|| self.find_flush())
                .or_else(|| self.find_straight())
                .or_else(|| self.find_3_oak())
                .or_else(|| self.find_pairs())
                .or_else(|| self.find_high())
                .expect("five cards always rank"),
            3 => None
                .or_else(|| self.find_3_oak())
                .or_else(|| self.find_pairs())
                .or_else(|| self.find_high())
                .expect("three cards always rank"),
            n => panic!("lane hands hold 3 or 5 cards, got {}", n),
        }
    }

    pub fn find_kickers(&self, value: Ranking) -> Kickers {
        match value.n_kickers(self.0.size()) {
            0 => Kickers::default(),
            n => {
                let ranks = u16::from(self.0) & value.mask();
                assert!(ranks.count_ones() as usize == n);
                Kickers::from(ranks)
            }
        }
    }

    ///

    fn find_high(&self) -> Option<Ranking> {
        Some(Ranking::HighCard(Rank::from(u16::from(self.0))))
    }
    fn find_pairs(&self) -> Option<Ranking> {
        let mut pairs = Rank::ALL
            .iter()
            .rev()
            .copied()
            .filter(|r| self.0.count(*r) == 2);
        match (pairs.next(), pairs.next()) {
            (Some(hi), Some(lo)) => Some(Ranking::TwoPair(hi, lo)),
            (Some(hi), None) => Some(Ranking::OnePair(hi)),
            _ => None,
        }
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.rank_of_count(3).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.rank_of_count(4).map(Ranking::FourOAK)
    }
    fn find_full_house(&self) -> Option<Ranking> {
        self.rank_of_count(3).and_then(|trips| {
            self.rank_of_count(2)
                .map(|pair| Ranking::FullHouse(trips, pair))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        straight_high(u16::from(self.0), 5).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.0.suited().map(|suit| {
            let ranks = u16::from(self.0.of(suit));
            Ranking::Flush(Rank::from(ranks))
        })
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.0.suited().and_then(|suit| {
            straight_high(u16::from(self.0.of(suit)), 5).map(Ranking::StraightFlush)
        })
    }

    fn rank_of_count(&self, n: usize) -> Option<Rank> {
        Rank::ALL
            .iter()
            .rev()
            .copied()
            .find(|r| self.0.count(*r) == n)
    }
}

/// Highest rank of a `len`-long consecutive run in a rank mask, if any.
/// The wheel (ace playing low) is the lowest run of its length: A-2-3-4-5
/// tops out at Five, A-2-3 at Three.
pub fn straight_high(ranks: u16, len: usize) -> Option<Rank> {
    let (wheel, low) = match len {
        3 => (WHEEL_THREE, Rank::Three),
        5 => (WHEEL_FIVE, Rank::Five),
        n => panic!("runs are 3 or 5 cards, got {}", n),
    };
    let mut bits = ranks;
    for _ in 1..len {
        bits &= bits << 1;
    }
    if bits > 0 {
        Some(Rank::from(bits))
    } else if wheel == wheel & ranks {
        Some(low)
    } else {
        None
    }
}
