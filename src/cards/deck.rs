use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// The dealing shoe. Starts as all 52 cards; ::draw() removes a uniformly
/// random card, ::deal() removes a 13-card hand, so one Deck serves a
/// table of up to four seats.
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl Deck {
    pub fn new() -> Self {
        Self(Hand::from((1 << 52) - 1))
    }

    /// remove a uniformly random card from the deck
    pub fn draw(&mut self) -> Card {
        let n = self.0.size();
        assert!(n > 0);
        let i = rand::rng().random_range(0..n);
        let mut bits = u64::from(self.0);
        for _ in 0..i {
            bits &= bits - 1;
        }
        let card = Card::from(bits & bits.wrapping_neg());
        self.0 = self.0.minus(Hand::from(card));
        card
    }

    /// remove thirteen random cards, one seat's deal
    pub fn deal(&mut self) -> Hand {
        (0..13)
            .map(|_| self.draw())
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_deck() {
        assert_eq!(Hand::from(Deck::new()).size(), 52);
    }

    #[test]
    fn draws_are_distinct() {
        let mut deck = Deck::new();
        let mut seen = Hand::empty();
        for _ in 0..52 {
            let card = deck.draw();
            assert!(!seen.contains(card));
            seen = Hand::add(seen, Hand::from(card));
        }
        assert_eq!(Hand::from(deck).size(), 0);
    }

    #[test]
    fn four_disjoint_deals() {
        let mut deck = Deck::new();
        let deals = [deck.deal(), deck.deal(), deck.deal(), deck.deal()];
        for deal in &deals {
            assert_eq!(deal.size(), 13);
        }
        let union = deals.iter().copied().fold(Hand::empty(), Hand::add);
        assert_eq!(union.size(), 52);
    }
}
