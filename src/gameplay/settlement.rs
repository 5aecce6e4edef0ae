use crate::{Seat, Water};

/// One seat's result for a settled round: net signed water and the number
/// of opponents it shot. Settlements for a table always sum to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Settlement {
    seat: Seat,
    water: Water,
    shots: usize,
}

impl Settlement {
    pub fn seat(&self) -> Seat {
        self.seat
    }
    pub fn water(&self) -> Water {
        self.water
    }
    pub fn shots(&self) -> usize {
        self.shots
    }
}

impl From<(Seat, Water, usize)> for Settlement {
    fn from((seat, water, shots): (Seat, Water, usize)) -> Self {
        Self { seat, water, shots }
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "seat {} {:>+4} water", self.seat, self.water)?;
        match self.shots {
            0 => Ok(()),
            n => write!(f, " ({} shot{})", n, if n == 1 { "" } else { "s" }),
        }
    }
}
