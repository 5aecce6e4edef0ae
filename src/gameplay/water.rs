//! The canonical scoring tables. Every water value and bonus weight in
//! the crate is looked up here and nowhere else.

use super::lane::Lane;
use crate::cards::ranking::Ranking;
use crate::Water;

/// How many arrangements the solver suggests per deal.
pub const SUGGESTIONS: usize = 3;

/// Scale applied to swings settled on special weight instead of lanes.
pub const SPECIAL_SCALE: Water = 1;

/// 一条龙: thirteen distinct ranks.
pub const DRAGON: Water = 13;
/// 至尊清龙: the dragon in a single suit.
pub const ROYAL_DRAGON: Water = 26;
/// 六对半 base; each four-of-a-kind among the pairs adds one.
pub const SIX_PAIRS: Water = 3;
/// 三同花 base; each straight flush among middle/back adds one.
pub const THREE_FLUSHES: Water = 3;
/// 三顺子 base; each straight flush among middle/back adds one.
pub const THREE_STRAIGHTS: Water = 4;

/// Water collected for winning a lane with the given category. Most wins
/// pay 1; the marquee categories pay more, scaled by how hard they are
/// to land in that lane.
pub fn water(lane: Lane, value: Ranking) -> Water {
    match (lane, value) {
        (Lane::Front, Ranking::OnePair(_)) => 2,
        (Lane::Front, Ranking::ThreeOAK(_)) => 3,
        (Lane::Middle, Ranking::FullHouse(_, _)) => 2,
        (Lane::Middle, Ranking::FourOAK(_)) => 8,
        (Lane::Middle, Ranking::StraightFlush(_)) => 10,
        (Lane::Back, Ranking::FourOAK(_)) => 4,
        (Lane::Back, Ranking::StraightFlush(_)) => 5,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;

    #[test]
    fn defaults_to_one() {
        assert_eq!(water(Lane::Front, Ranking::HighCard(Rank::Ace)), 1);
        assert_eq!(water(Lane::Back, Ranking::Flush(Rank::Ace)), 1);
    }

    #[test]
    fn middle_premiums_outpay_back() {
        let sf = Ranking::StraightFlush(Rank::Nine);
        let quads = Ranking::FourOAK(Rank::Nine);
        assert!(water(Lane::Middle, sf) > water(Lane::Back, sf));
        assert!(water(Lane::Middle, quads) > water(Lane::Back, quads));
    }
}
