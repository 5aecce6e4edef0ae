use super::duel::Duel;
use super::settlement::Settlement;
use super::submission::Submission;
use crate::Water;

/// Settles one table's round.
///
/// Every unordered pair of submissions duels; a seat that shot every
/// opponent (home run, 全垒打) doubles all of its pairwise swings again;
/// the signed swings then fold into per-seat [`Settlement`]s. Each
/// doubling applies to both sides of a pair, so the settlements always
/// sum to zero.
///
/// This is a pure function of its submissions: settling the same set
/// twice yields identical results, and the once-per-round discipline is
/// whatever room layer owns the submissions. A table with fewer than two
/// submissions is void and settles to all zeroes.
pub struct Showdown {
    entries: Vec<Submission>,
}

impl From<Vec<Submission>> for Showdown {
    fn from(entries: Vec<Submission>) -> Self {
        Self { entries }
    }
}

impl Showdown {
    pub fn settle(self) -> Vec<Settlement> {
        let n = self.entries.len();
        if n < 2 {
            log::debug!("void round with {} submission(s)", n);
            return self
                .entries
                .iter()
                .map(|s| Settlement::from((s.seat(), 0, 0)))
                .collect();
        }
        assert!(n <= 4, "a table seats 2 to 4, got {}", n);
        let mut swings = vec![0 as Water; n * n];
        let mut shots = vec![0usize; n];
        for i in 0..n {
            for j in i + 1..n {
                let duel = Duel::from((&self.entries[i], &self.entries[j]));
                swings[i * n + j] = duel.swing();
                swings[j * n + i] = -duel.swing();
                match duel.shot() {
                    Some(true) => shots[i] += 1,
                    Some(false) => shots[j] += 1,
                    None => {}
                }
            }
        }
        for i in 0..n {
            if shots[i] == n - 1 {
                log::debug!("seat {} home run", self.entries[i].seat());
                for j in 0..n {
                    swings[i * n + j] *= 2;
                    swings[j * n + i] *= 2;
                }
            }
        }
        (0..n)
            .map(|i| {
                let water = (0..n).map(|j| swings[i * n + j]).sum::<Water>();
                Settlement::from((self.entries[i].seat(), water, shots[i]))
            })
            .collect()
    }
}
