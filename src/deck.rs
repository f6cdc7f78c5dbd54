use crate::cards::{Card, Rank, Suit};
use crate::hand::Hand;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DECK_SIZE: usize = 52;

/// Source of uniformly distributed indices for the shuffle. Injected rather
/// than read from a global generator, so the draw loop owns its randomness
/// and tests can script exact sequences.
pub trait DrawSource {
    /// Uniformly distributed index in `[0, upper_bound)`.
    /// `upper_bound` is at least 1.
    fn next(&mut self, upper_bound: usize) -> usize;
}

/// Runs any `rand` generator as a [`DrawSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<ChaCha8Rng> {
    /// Deterministic source for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> DrawSource for RngSource<R> {
    fn next(&mut self, upper_bound: usize) -> usize {
        self.0.random_range(0..upper_bound)
    }
}

/// A standard 52-card deck: always exactly 52 distinct cards.
///
/// ```
/// use poker_freq::deck::{Deck, DECK_SIZE};
///
/// let deck = Deck::standard();
/// assert_eq!(deck.as_slice().len(), DECK_SIZE);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = [Card::new(Rank::Ace, Suit::Clubs); DECK_SIZE];
        let mut i = 0;
        for &suit in Suit::ALL.iter() {
            for &rank in Rank::ALL.iter() {
                cards[i] = Card::new(rank, suit);
                i += 1;
            }
        }
        Self { cards }
    }

    /// Fisher–Yates: walk from the last position down, swapping each with a
    /// uniformly drawn position at or below it. Every permutation of the 52
    /// cards is equally likely given a uniform source.
    pub fn shuffle(&mut self, source: &mut impl DrawSource) {
        for i in (1..DECK_SIZE).rev() {
            let j = source.next(i + 1);
            self.cards.swap(i, j);
        }
    }

    /// The five cards on top of the deck, as a hand.
    pub fn top_five(&self) -> Hand {
        Hand::from_distinct([
            self.cards[0],
            self.cards[1],
            self.cards[2],
            self.cards[3],
            self.cards[4],
        ])
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}
