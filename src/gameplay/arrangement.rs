use super::lane::Lane;
use crate::cards::hand::Hand;
use crate::cards::strength::Strength;

/// One seat's split of a 13-card deal into front/middle/back.
///
/// Construction validates shape only: exact lane sizes and pairwise
/// disjoint lanes. Whether the union matches a particular deal is checked
/// where the deal is known, in [`super::submission::Submission`].
///
/// [`Arrangement::foul`] is the crate's single foul check; nothing else
/// re-derives the lane-ordering rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrangement {
    front: Hand,
    middle: Hand,
    back: Hand,
}

impl Arrangement {
    pub fn lane(&self, lane: Lane) -> Hand {
        match lane {
            Lane::Front => self.front,
            Lane::Middle => self.middle,
            Lane::Back => self.back,
        }
    }

    /// the 13-card union of the three lanes
    pub fn cards(&self) -> Hand {
        Hand::add(Hand::add(self.front, self.middle), self.back)
    }

    pub fn strength(&self, lane: Lane) -> Strength {
        Strength::from(self.lane(lane))
    }

    /// The foul (倒水) rule: strength must not decrease from front to
    /// back. The front's restricted ladder (trips > pair > high card) and
    /// the full 9-tier middle/back ladder are one and the same ordering
    /// here, because a 3-card front can only evaluate to categories that
    /// sit on the shared low rungs; ties within a category fall through
    /// to kickers and the suit ordinal per [`Strength`]'s total order.
    pub fn foul(&self) -> bool {
        let front = self.strength(Lane::Front);
        let middle = self.strength(Lane::Middle);
        let back = self.strength(Lane::Back);
        front > middle || middle > back
    }
}

impl TryFrom<(Hand, Hand, Hand)> for Arrangement {
    type Error = String;
    fn try_from((front, middle, back): (Hand, Hand, Hand)) -> Result<Self, Self::Error> {
        for (lane, hand) in [(Lane::Front, front), (Lane::Middle, middle), (Lane::Back, back)] {
            if hand.size() != lane.size() {
                return Err(format!(
                    "{} lane holds {} cards, needs {}",
                    lane,
                    hand.size(),
                    lane.size()
                ));
            }
        }
        if Hand::overlaps(&front, &middle)
            || Hand::overlaps(&front, &back)
            || Hand::overlaps(&middle, &back)
        {
            return Err("lanes share cards".to_string());
        }
        Ok(Self {
            front,
            middle,
            back,
        })
    }
}

/// str isomorphism, lanes joined by '|': "2s 2h 3c | 4c 5c ... | ..."
impl TryFrom<&str> for Arrangement {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let lanes = s.split('|').collect::<Vec<&str>>();
        match lanes.as_slice() {
            [front, middle, back] => Self::try_from((
                Hand::try_from(*front)?,
                Hand::try_from(*middle)?,
                Hand::try_from(*back)?,
            )),
            _ => Err(format!("expected 3 '|'-separated lanes: {}", s)),
        }
    }
}

impl std::fmt::Display for Arrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} | {} | {}", self.front, self.middle, self.back)
    }
}

/// a random deal auto-arranged by the solver; never fouls
impl crate::Arbitrary for Arrangement {
    fn random() -> Self {
        let deal = Hand::random();
        super::solver::Solver::from(deal).suggest().swap_remove(0)
    }
}
