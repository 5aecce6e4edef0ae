use super::arrangement::Arrangement;
use super::lane::Lane;
use super::special::SpecialHand;
use super::water;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::cards::strength::Strength;
use crate::Water;

/// Exhaustive arrangement search over one 13-card deal.
///
/// Enumerates every C(13,5) = 1287 back lane; for each, every C(8,5) = 56
/// middle from the remainder, pruning splits that would foul; keeps the
/// best split per back by composite score (so suggested backs are
/// distinct by construction); then ranks backs globally and returns the
/// strongest [`water::SUGGESTIONS`].
///
/// The per-back scan fans out across threads. Results are merged with a
/// full sort on (score, back bitset, middle bitset), all descending, so
/// thread scheduling never changes the suggestion list.
pub struct Solver(Hand);

impl From<Hand> for Solver {
    fn from(cards: Hand) -> Self {
        assert!(cards.size() == 13, "the solver arranges 13-card deals");
        Self(cards)
    }
}

struct Candidate {
    score: Water,
    arrangement: Arrangement,
}

impl Solver {
    pub fn suggest(&self) -> Vec<Arrangement> {
        use rayon::iter::IntoParallelIterator;
        use rayon::iter::ParallelIterator;
        let backs = HandIterator::from((5, self.0)).collect::<Vec<Hand>>();
        let mut candidates = backs
            .into_par_iter()
            .filter_map(|back| self.split(back))
            .collect::<Vec<Candidate>>();
        assert!(
            !candidates.is_empty(),
            "every 13-card deal admits a non-foul arrangement"
        );
        candidates.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| {
                    let a = u64::from(a.arrangement.lane(Lane::Back));
                    let b = u64::from(b.arrangement.lane(Lane::Back));
                    b.cmp(&a)
                })
                .then_with(|| {
                    let a = u64::from(a.arrangement.lane(Lane::Middle));
                    let b = u64::from(b.arrangement.lane(Lane::Middle));
                    b.cmp(&a)
                })
        });
        candidates.truncate(water::SUGGESTIONS);
        candidates.into_iter().map(|c| c.arrangement).collect()
    }

    /// best non-foul split keeping this back lane, if any
    fn split(&self, back: Hand) -> Option<Candidate> {
        let ceiling = Strength::from(back);
        let rest = self.0.minus(back);
        let mut best: Option<Candidate> = None;
        for middle in HandIterator::from((5, rest)) {
            if Strength::from(middle) > ceiling {
                continue;
            }
            let front = rest.minus(middle);
            if Strength::from(front) > Strength::from(middle) {
                continue;
            }
            let arrangement = Arrangement::try_from((front, middle, back))
                .expect("split lanes are sized and disjoint");
            let score = Self::heuristic(&arrangement);
            let better = match &best {
                None => true,
                Some(prior) => {
                    score > prior.score
                        || (score == prior.score
                            && u64::from(middle) > u64::from(prior.arrangement.lane(Lane::Middle)))
                }
            };
            if better {
                best = Some(Candidate { score, arrangement });
            }
        }
        best
    }

    /// Composite strength estimate: ladder position per lane, weighted
    /// toward the back, plus premiums mirroring the lane-water asymmetry
    /// (a full house, quads, or straight flush is worth much more landed
    /// in the middle) and any whole-hand special the split completes.
    fn heuristic(arrangement: &Arrangement) -> Water {
        let front = arrangement.strength(Lane::Front).value();
        let middle = arrangement.strength(Lane::Middle).value();
        let back = arrangement.strength(Lane::Back).value();
        let ladder = front.ladder() as Water
            + 2 * middle.ladder() as Water
            + 3 * back.ladder() as Water;
        let premium = 2 * (water::water(Lane::Middle, middle) - 1)
            + 2 * (water::water(Lane::Back, back) - 1);
        let special = SpecialHand::detect(arrangement)
            .map(|s| 2 * s.weight())
            .unwrap_or(0);
        ladder + premium + special
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn suggestions_are_valid_and_distinct() {
        let deal = Hand::random();
        let suggestions = Solver::from(deal).suggest();
        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= water::SUGGESTIONS);
        for arrangement in &suggestions {
            assert!(!arrangement.foul());
            assert_eq!(arrangement.cards(), deal);
        }
        for (i, a) in suggestions.iter().enumerate() {
            for b in suggestions.iter().skip(i + 1) {
                assert!(a.lane(Lane::Back) != b.lane(Lane::Back));
            }
        }
    }

    #[test]
    fn deterministic_across_runs() {
        let deal = Hand::random();
        let one = Solver::from(deal).suggest();
        let two = Solver::from(deal).suggest();
        assert_eq!(one, two);
    }

    #[test]
    fn all_clubs_splits_into_three_straight_flushes() {
        let deal = Hand::try_from("2c 3c 4c 5c 6c 7c 8c 9c Tc Jc Qc Kc Ac").unwrap();
        let best = Solver::from(deal).suggest().swap_remove(0);
        assert_eq!(best.lane(Lane::Back), Hand::try_from("Tc Jc Qc Kc Ac").unwrap());
        assert_eq!(best.lane(Lane::Middle), Hand::try_from("5c 6c 7c 8c 9c").unwrap());
        assert_eq!(best.lane(Lane::Front), Hand::try_from("2c 3c 4c").unwrap());
        assert_eq!(
            SpecialHand::detect(&best),
            Some(SpecialHand::Dragon { royal: true })
        );
    }

    #[test]
    fn quads_land_in_the_back() {
        use crate::cards::rank::Rank;
        use crate::cards::ranking::Ranking;
        let deal = Hand::try_from("9c 9d 9h 9s 2c 3d 5h 6s 8c Jd Qh Kc Ad").unwrap();
        let best = Solver::from(deal).suggest().swap_remove(0);
        assert_eq!(
            best.strength(Lane::Back).value(),
            Ranking::FourOAK(Rank::Nine)
        );
    }

    #[test]
    #[should_panic]
    fn rejects_short_deals() {
        let _ = Solver::from(Hand::try_from("2c 3c 4c").unwrap());
    }
}
