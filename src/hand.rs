use crate::cards::{parse_cards, Card, Rank};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly five cards, got {0}")]
    CardCount(usize),
    #[error("duplicate cards in hand")]
    DuplicateCards,
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Exactly five distinct cards, kept sorted ascending by rank (Ace low).
///
/// Hands are created per draw and discarded after classification; nothing
/// retains them.
///
/// ```
/// use poker_freq::hand::Hand;
///
/// let hand: Hand = "2s 3s 4s 5s 6s".parse().unwrap();
/// assert_eq!(hand.cards().len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    pub fn try_new(cards: [Card; 5]) -> Result<Self, HandError> {
        for i in 0..5 {
            for j in (i + 1)..5 {
                if cards[i] == cards[j] {
                    return Err(HandError::DuplicateCards);
                }
            }
        }
        Ok(Self::from_distinct(cards))
    }

    /// Caller guarantees the cards are distinct (deck draws are).
    pub(crate) fn from_distinct(mut cards: [Card; 5]) -> Self {
        cards.sort();
        Self { cards }
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        if slice.len() != 5 {
            return Err(HandError::CardCount(slice.len()));
        }
        Self::try_new([slice[0], slice[1], slice[2], slice[3], slice[4]])
    }

    /// The cards in ascending rank order.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The five ranks in ascending order.
    pub fn ranks(&self) -> [Rank; 5] {
        [
            self.cards[0].rank(),
            self.cards[1].rank(),
            self.cards[2].rank(),
            self.cards[3].rank(),
            self.cards[4].rank(),
        ]
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
