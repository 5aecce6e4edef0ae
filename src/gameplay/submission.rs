use super::arrangement::Arrangement;
use super::lane::Lane;
use super::special::SpecialHand;
use crate::cards::hand::Hand;
use crate::cards::strength::Strength;
use crate::Seat;

/// One seat's locked-in play for a round.
///
/// Construction is the validation boundary: the dealt hand must be 13
/// cards and the arrangement must use exactly those cards. The facts the
/// scorer needs later (the foul flag and any special hand) are computed
/// here once and cached; a fouled seat forfeits its special.
#[derive(Debug, Clone, Copy)]
pub struct Submission {
    seat: Seat,
    arrangement: Arrangement,
    foul: bool,
    special: Option<SpecialHand>,
}

impl Submission {
    pub fn seat(&self) -> Seat {
        self.seat
    }
    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }
    pub fn foul(&self) -> bool {
        self.foul
    }
    pub fn special(&self) -> Option<SpecialHand> {
        self.special
    }
    pub fn strength(&self, lane: Lane) -> Strength {
        self.arrangement.strength(lane)
    }
}

impl TryFrom<(Seat, Hand, Arrangement)> for Submission {
    type Error = String;
    fn try_from((seat, dealt, arrangement): (Seat, Hand, Arrangement)) -> Result<Self, Self::Error> {
        if dealt.size() != 13 {
            return Err(format!("dealt {} cards, a deal is 13", dealt.size()));
        }
        if arrangement.cards() != dealt {
            return Err(format!(
                "arrangement [{}] does not use the dealt cards [{}] exactly",
                arrangement, dealt
            ));
        }
        let foul = arrangement.foul();
        let special = if foul {
            None
        } else {
            SpecialHand::detect(&arrangement)
        };
        Ok(Self {
            seat,
            arrangement,
            foul,
            special,
        })
    }
}

impl std::fmt::Display for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "seat {} [{}]", self.seat, self.arrangement)?;
        if self.foul {
            write!(f, " FOUL")?;
        }
        if let Some(special) = self.special {
            write!(f, " {}", special)?;
        }
        Ok(())
    }
}

/// a random deal, auto-arranged, at seat 0
impl crate::Arbitrary for Submission {
    fn random() -> Self {
        let dealt = Hand::random();
        let arrangement = super::solver::Solver::from(dealt).suggest().swap_remove(0);
        Self::try_from((0, dealt, arrangement)).expect("solver output covers the deal")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(seat: Seat, s: &str) -> Result<Submission, String> {
        let arrangement = Arrangement::try_from(s).unwrap();
        Submission::try_from((seat, arrangement.cards(), arrangement))
    }

    #[test]
    fn accepts_matching_deal() {
        let sub = submission(2, "2s 2h 3c | 4c 5c 6c 7c 8d | 9d 9c 9h 9s 2d").unwrap();
        assert_eq!(sub.seat(), 2);
        assert!(!sub.foul());
        assert!(sub.special().is_none());
    }

    #[test]
    fn rejects_foreign_cards() {
        let arrangement =
            Arrangement::try_from("2s 2h 3c | 4c 5c 6c 7c 8d | 9d 9c 9h 9s 2d").unwrap();
        let other = Hand::try_from("As Ah Ac Ad Ks Kh Kc Kd Qs Qh Qc Qd Js").unwrap();
        assert!(Submission::try_from((0, other, arrangement)).is_err());
    }

    #[test]
    fn rejects_short_deal() {
        let arrangement =
            Arrangement::try_from("2s 2h 3c | 4c 5c 6c 7c 8d | 9d 9c 9h 9s 2d").unwrap();
        let short = Hand::try_from("2s 2h 3c").unwrap();
        assert!(Submission::try_from((0, short, arrangement)).is_err());
    }

    #[test]
    fn foul_forfeits_special() {
        // six pairs, but the front pair of jacks outranks the middle pair
        // of fives
        let sub = submission(0, "Jc Jh Kh | 5c 5d 8c 8d Ts | Th 4c 4d 2s 2d").unwrap();
        assert!(sub.foul());
        assert!(sub.special().is_none());
    }

    #[test]
    fn special_attaches_at_construction() {
        let sub = submission(1, "4c 4d Kh | 5c 5d 8c 8d Js | Jc Th Td 2s 2d").unwrap();
        assert!(!sub.foul());
        assert_eq!(sub.special(), Some(SpecialHand::SixPairs { quads: 0 }));
    }
}
