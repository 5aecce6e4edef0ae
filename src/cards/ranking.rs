use super::rank::Rank;

/// A lane's hand category plus its primary group ranks.
///
/// Variant order IS the 9-tier ladder: the derived Ord compares category
/// first, then payload ranks (count-descending groups carry their own
/// payload slots, e.g. full house is trips-then-pair). Kicker cards live
/// in [`super::kicks::Kickers`], found separately.
///
/// A 3-card front can only ever be HighCard, OnePair, or ThreeOAK; those
/// variants sit on the same rungs of this one ladder, which is what makes
/// front-versus-middle foul comparisons well-defined.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),
    OnePair(Rank),
    TwoPair(Rank, Rank),
    ThreeOAK(Rank),
    Straight(Rank),
    Flush(Rank),
    FullHouse(Rank, Rank),
    FourOAK(Rank),
    StraightFlush(Rank),
}

impl Ranking {
    /// How many kicker cards complete the tiebreak key. Depends on the
    /// lane size: a pair leaves three spare cards in a 5-card lane but
    /// only one in the front.
    pub fn n_kickers(&self, size: usize) -> usize {
        match self {
            Ranking::HighCard(_) => size - 1,
            Ranking::OnePair(_) => size - 2,
            Ranking::ThreeOAK(_) => size - 3,
            Ranking::TwoPair(_, _) | Ranking::FourOAK(_) => 1,
            Ranking::Flush(_) => 4,
            Ranking::Straight(_) | Ranking::FullHouse(_, _) | Ranking::StraightFlush(_) => 0,
        }
    }

    /// Rank-mask with the primary group ranks erased; what survives under
    /// it are the kickers.
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::ThreeOAK(hi)
            | Ranking::FourOAK(hi)
            | Ranking::Flush(hi) => !u16::from(hi),
            Ranking::Straight(_) | Ranking::FullHouse(_, _) | Ranking::StraightFlush(_) => {
                unreachable!()
            }
        }
    }

    /// Position on the 9-tier ladder, 0 = high card.
    pub fn ladder(&self) -> u8 {
        match self {
            Ranking::HighCard(_) => 0,
            Ranking::OnePair(_) => 1,
            Ranking::TwoPair(_, _) => 2,
            Ranking::ThreeOAK(_) => 3,
            Ranking::Straight(_) => 4,
            Ranking::Flush(_) => 5,
            Ranking::FullHouse(_, _) => 6,
            Ranking::FourOAK(_) => 7,
            Ranking::StraightFlush(_) => 8,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::TwoPair(hi, lo) => write!(f, "TwoPair       {}{}", hi, lo),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::FullHouse(t, p) => write!(f, "FullHouse     {}{}", t, p),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
        }
    }
}
