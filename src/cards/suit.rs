/// Card suit. The ordering (C < D < H < S) is arbitrary but fixed: it is
/// the final tiebreak between hands whose ranks are fully identical, so
/// every comparison in the crate lands on a strict total order.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const fn all() -> [Suit; 4] {
        [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade]
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Club,
            1 => Suit::Diamond,
            2 => Suit::Heart,
            3 => Suit::Spade,
            _ => panic!("invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 injection
///
/// The mask of all 13 cards of this suit in a Hand's bitstring.
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        match s {
            Suit::Club => 0x0001111111111111,
            Suit::Diamond => 0x0002222222222222,
            Suit::Heart => 0x0004444444444444,
            Suit::Spade => 0x0008888888888888,
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "c" | "♣" => Ok(Suit::Club),
            "d" | "♦" => Ok(Suit::Diamond),
            "h" | "♥" => Ok(Suit::Heart),
            "s" | "♠" => Ok(Suit::Spade),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "c",
                Suit::Diamond => "d",
                Suit::Heart => "h",
                Suit::Spade => "s",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let suit = Suit::Diamond;
        assert!(suit == Suit::from(u8::from(suit)));
    }

    #[test]
    fn injective_u64() {
        assert!(u64::from(Suit::Club) == 0b0001000100010001000100010001000100010001000100010001);
        assert!(u64::from(Suit::Spade) == 0b1000100010001000100010001000100010001000100010001000);
    }
}
