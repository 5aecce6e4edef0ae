use super::lane::Lane;
use super::submission::Submission;
use super::water;
use crate::Water;
use std::cmp::Ordering;

/// One unordered pair of submissions, scored.
///
/// `swing` is the signed water exchanged, positive when the first
/// submission collects. `shot` records a 打枪, one side taking all three
/// lanes; the shoot doubling is already applied to the swing here, while
/// the home-run doubling on top of it is [`super::showdown::Showdown`]'s
/// job since it needs the whole table.
///
/// Resolution order: any special hand settles the pair on weights alone;
/// two fouls wash; a lone foul concedes a swept pair; otherwise the
/// lanes are compared one by one.
pub struct Duel {
    swing: Water,
    shot: Option<bool>,
}

impl From<(&Submission, &Submission)> for Duel {
    fn from((a, b): (&Submission, &Submission)) -> Self {
        if a.special().is_some() || b.special().is_some() {
            Self::special(a, b)
        } else if a.foul() && b.foul() {
            Self {
                swing: 0,
                shot: None,
            }
        } else if b.foul() {
            Self {
                swing: Self::sweep(a),
                shot: Some(true),
            }
        } else if a.foul() {
            Self {
                swing: -Self::sweep(b),
                shot: Some(false),
            }
        } else {
            Self::lanes(a, b)
        }
    }
}

impl Duel {
    pub fn swing(&self) -> Water {
        self.swing
    }

    /// Some(true) when the first submission shot the second.
    pub fn shot(&self) -> Option<bool> {
        self.shot
    }

    /// special weight trumps lane play; a fouled opponent weighs zero
    fn special(a: &Submission, b: &Submission) -> Self {
        let wa = a.special().map(|s| s.weight()).unwrap_or(0);
        let wb = b.special().map(|s| s.weight()).unwrap_or(0);
        Self {
            swing: (wa - wb) * water::SPECIAL_SCALE,
            shot: None,
        }
    }

    /// a foul concedes every lane at the winner's own lane values, and
    /// the sweep is a shoot, so it doubles
    fn sweep(winner: &Submission) -> Water {
        2 * Lane::all()
            .iter()
            .map(|l| water::water(*l, winner.strength(*l).value()))
            .sum::<Water>()
    }

    fn lanes(a: &Submission, b: &Submission) -> Self {
        let mut swing = 0;
        let mut wins = 0;
        for lane in Lane::all() {
            let sa = a.strength(lane);
            let sb = b.strength(lane);
            match sa.cmp(&sb) {
                Ordering::Greater => {
                    swing += water::water(lane, sa.value());
                    wins += 1;
                }
                Ordering::Less => {
                    swing -= water::water(lane, sb.value());
                }
                Ordering::Equal => {}
            }
        }
        match wins {
            3 => Self {
                swing: swing * 2,
                shot: Some(true),
            },
            0 if swing < 0 => Self {
                swing: swing * 2,
                shot: Some(false),
            },
            _ => Self {
                swing,
                shot: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::arrangement::Arrangement;
    use crate::Seat;

    fn submission(seat: Seat, s: &str) -> Submission {
        let arrangement = Arrangement::try_from(s).unwrap();
        Submission::try_from((seat, arrangement.cards(), arrangement)).unwrap()
    }

    #[test]
    fn split_lanes_exchange_their_values() {
        // first takes front (pair pays 2) and back (quads pay 4), loses
        // the middle (1): +2 -1 +4 = +5, no shoot
        let a = submission(0, "9s 9h 2c | As Ad Qh Js 8d | 5d 5c 5h 5s 3d");
        let b = submission(1, "8s 7h 2d | Kc Kd 2s 2h 4c | 6s 6h 6d Qc Ts");
        let duel = Duel::from((&a, &b));
        assert_eq!(duel.swing(), 5);
        assert_eq!(duel.shot(), None);
        let reversed = Duel::from((&b, &a));
        assert_eq!(reversed.swing(), -5);
    }

    #[test]
    fn sweep_doubles_and_records_the_shot() {
        let strong = submission(0, "As Ah Kc | Qs Qh Qd 3c 3d | Ks Kh Kd 2s 2h");
        let weak = submission(1, "7c 8d 9h | Jc Jd 4c 5d 6h | Tc Td Th 4d 5s");
        let duel = Duel::from((&strong, &weak));
        // front pair 2, middle full house 2, back full house 1, doubled
        assert_eq!(duel.swing(), 10);
        assert_eq!(duel.shot(), Some(true));
        assert_eq!(Duel::from((&weak, &strong)).swing(), -10);
        assert_eq!(Duel::from((&weak, &strong)).shot(), Some(false));
    }

    #[test]
    fn foul_concedes_a_doubled_sweep() {
        let fouled = submission(0, "Jc Jh Kh | 5c 5d 8c 8d Ts | Th 4c 4d 2s 2d");
        assert!(fouled.foul());
        let sober = submission(1, "7c 8h 9c | Ac Ad 4s 5h 6s | Tc Td 3h 3s Qs");
        let duel = Duel::from((&fouled, &sober));
        // winner's lanes: high card 1, pair 1, two pair 1, doubled
        assert_eq!(duel.swing(), -6);
        assert_eq!(duel.shot(), Some(false));
    }

    #[test]
    fn double_foul_washes() {
        let one = submission(0, "Jc Jh Kh | 5c 5d 8c 8d Ts | Th 4c 4d 2s 2d");
        let two = submission(1, "Qc Qh Ah | 6c 6d 9c 9d Js | Jd 3c 3d 2c 2h");
        assert!(one.foul() && two.foul());
        let duel = Duel::from((&one, &two));
        assert_eq!(duel.swing(), 0);
        assert_eq!(duel.shot(), None);
    }

    #[test]
    fn special_skips_the_lanes() {
        // six pairs (3 water) against a lane-superior but plain hand
        let special = submission(0, "4c 4d Kh | 5c 5d 8c 8d Js | Jc Th Td 2s 2d");
        let plain = submission(1, "As Ah 6c | Qs Qh Qd 3c 3d | Ks Kd Kc 6s 6h");
        let duel = Duel::from((&special, &plain));
        assert_eq!(duel.swing(), 3 * water::SPECIAL_SCALE);
        assert_eq!(duel.shot(), None);
    }

    #[test]
    fn dueling_specials_net_their_weights() {
        let six = submission(0, "4c 4d Kh | 5c 5d 8c 8d Js | Jc Th Td 2s 2d");
        let dragon = submission(1, "2c 3d 4h | 5s 6c 7d 8h 9c | Tc Jd Qh Ks Ad");
        let duel = Duel::from((&six, &dragon));
        assert_eq!(duel.swing(), (3 - 13) * water::SPECIAL_SCALE);
        assert_eq!(duel.shot(), None);
    }

    #[test]
    fn foul_against_special_pays_the_weight() {
        let fouled = submission(0, "Jc Jh Kh | 5c 5d 8c 8d Ts | Th 4c 4d 2s 2d");
        let dragon = submission(1, "2c 3d 4h | 5s 6c 7d 8h 9c | Tc Jd Qh Ks Ad");
        let duel = Duel::from((&fouled, &dragon));
        assert_eq!(duel.swing(), -13 * water::SPECIAL_SCALE);
        assert_eq!(duel.shot(), None);
    }
}
