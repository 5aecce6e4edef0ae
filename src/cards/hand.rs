use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// Hand represents an unordered set of Cards stored as a single u64, one
/// bit per card in the LSB 52 bits. Every card collection in the crate is
/// one of these: a 3-card front, a 5-card middle or back, a 13-card deal,
/// a 52-card deck. Being a set, it is order-independent by construction,
/// and set algebra is single-instruction bitwise work.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }

    /// disjoint union. the two hands must not share cards
    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }

    /// set difference
    pub fn minus(&self, rhs: Self) -> Self {
        Self(self.0 & !rhs.0)
    }

    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0 & u64::from(card) != 0
    }

    pub fn overlaps(lhs: &Self, rhs: &Self) -> bool {
        lhs.0 & rhs.0 != 0
    }

    /// cards of one suit in this hand
    pub fn of(&self, suit: Suit) -> Hand {
        Self(self.0 & u64::from(suit))
    }

    /// how many cards of this rank the hand holds (0..=4)
    pub fn count(&self, rank: Rank) -> usize {
        (self.0 & u64::from(rank)).count_ones() as usize
    }

    /// the single suit this hand is drawn from, if any
    pub fn suited(&self) -> Option<Suit> {
        Suit::all().into_iter().find(|s| self.of(*s).size() == self.size())
    }

    pub(crate) const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(c: Card) -> Self {
        Self(u64::from(c))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation; this always comes out
/// sorted by card id, which is what makes evaluation order-independent)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        let mut bits = h.0;
        let mut cards = Vec::with_capacity(h.size());
        while bits > 0 {
            cards.push(Card::from(bits & bits.wrapping_neg()));
            bits &= bits - 1;
        }
        cards
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(
            cards
                .into_iter()
                .map(u64::from)
                .fold(0u64, |a, b| a | b),
        )
    }
}

/// one-way conversion to the u16 mask of ranks present
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        Rank::ALL
            .iter()
            .copied()
            .filter(|r| h.count(*r) > 0)
            .map(u16::from)
            .fold(0u16, |a, b| a | b)
    }
}

/// str isomorphism, whitespace-separated cards ("As Kh Qd")
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut hand = Self::empty();
        for token in s.split_whitespace() {
            let card = Card::try_from(token)?;
            if hand.contains(card) {
                return Err(format!("duplicate card: {}", token));
            }
            hand = Self(hand.0 | u64::from(card));
        }
        Ok(hand)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = Vec::<Card>::from(*self);
        let mut sep = "";
        for card in cards {
            write!(f, "{}{}", sep, card)?;
            sep = " ";
        }
        Ok(())
    }
}

/// a uniformly random 13-card deal, the hand size of the game
impl crate::Arbitrary for Hand {
    fn random() -> Self {
        super::deck::Deck::new().deal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_u64() {
        let hand = Hand::random();
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn bijective_str() {
        let hand = Hand::try_from("Jc Ts 2c Js").unwrap();
        assert_eq!(hand, Hand::try_from(hand.to_string().as_str()).unwrap());
    }

    #[test]
    fn insertion_order_irrelevant() {
        let forward = vec![
            Card::try_from("2c").unwrap(),
            Card::try_from("Ts").unwrap(),
            Card::try_from("Jc").unwrap(),
        ];
        let mut backward = forward.clone();
        backward.reverse();
        assert_eq!(Hand::from(forward), Hand::from(backward));
    }

    #[test]
    fn rejects_duplicates() {
        assert!(Hand::try_from("As As").is_err());
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert_eq!(u16::from(hand.of(Suit::Club)), 0b_1000100010001);
        assert_eq!(u16::from(hand.of(Suit::Diamond)), 0b_0001000100010);
        assert_eq!(u16::from(hand.of(Suit::Heart)), 0b_0010001000100);
        assert_eq!(u16::from(hand.of(Suit::Spade)), 0b_0100010001000);
    }

    #[test]
    fn rank_multiplicity() {
        let hand = Hand::try_from("9c 9d 9h Ks").unwrap();
        assert_eq!(hand.count(Rank::Nine), 3);
        assert_eq!(hand.count(Rank::King), 1);
        assert_eq!(hand.count(Rank::Two), 0);
    }

    #[test]
    fn suited_detection() {
        assert!(Hand::try_from("2h 7h Jh").unwrap().suited() == Some(Suit::Heart));
        assert!(Hand::try_from("2h 7h Js").unwrap().suited().is_none());
    }

    #[test]
    fn random_deal_size() {
        assert_eq!(Hand::random().size(), 13);
    }
}
