use crate::cards::{Card, Suit};

/// Whether all five cards share one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let suit = cards[0].suit();
        if cards[1..].iter().all(|c| c.suit() == suit) {
            Self { is_flush: true, flush_suit: Some(suit) }
        } else {
            Self { is_flush: false, flush_suit: None }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Hand;

    #[test]
    fn all_one_suit_is_a_flush() {
        let hand: Hand = "2h 5h 8h Jh Kh".parse().unwrap();
        let info = SuitInfo::detect(hand.cards());
        assert!(info.is_flush);
        assert_eq!(info.flush_suit, Some(Suit::Hearts));
    }

    #[test]
    fn one_off_suit_breaks_the_flush() {
        let hand: Hand = "2h 5h 8h Jh Ks".parse().unwrap();
        let info = SuitInfo::detect(hand.cards());
        assert!(!info.is_flush);
        assert_eq!(info.flush_suit, None);
    }
}
