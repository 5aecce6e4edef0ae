#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51,
/// rank-major and suit-minor. this is the canonical card-id ordering
/// used for deterministic merges and the suit tiebreak.
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// u64 isomorphism
/// each card is just one bit turned on
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        Self {
            rank: Rank::from((n.trailing_zeros() / 4) as u8),
            suit: Suit::from((n.trailing_zeros() % 4) as u8),
        }
    }
}

/// str isomorphism, rank char then suit char ("As", "Td")
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        if s.len() != 2 {
            return Err(format!("invalid card str: {}", s));
        }
        Ok(Self {
            rank: Rank::try_from(&s[0..1])?,
            suit: Suit::try_from(&s[1..2])?,
        })
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

use super::rank::Rank;
use super::suit::Suit;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let card = Card::from((Rank::Ten, Suit::Spade));
        assert!(card == Card::from(u8::from(card)));
    }

    #[test]
    fn bijective_u64() {
        let card = Card::from((Rank::Two, Suit::Club));
        assert!(u64::from(card) == 1);
        assert!(card == Card::from(u64::from(card)));
    }

    #[test]
    fn bijective_str() {
        let card = Card::try_from("As").unwrap();
        assert!(card.rank() == Rank::Ace);
        assert!(card.suit() == Suit::Spade);
        assert!(card == Card::try_from(card.to_string().as_str()).unwrap());
    }

    #[test]
    fn id_is_rank_major() {
        let low = Card::try_from("9s").unwrap();
        let high = Card::try_from("Tc").unwrap();
        assert!(u8::from(low) < u8::from(high));
    }
}
