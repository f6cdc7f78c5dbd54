use crate::cards::Rank;

/// Whether a hand's ranks form a straight, and whether the Ace plays high.
///
/// The Ace is low here, so A-2-3-4-5 is an ordinary consecutive run; the one
/// ace-high straight (10-J-Q-K-A) is the special case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub ace_high: bool,
}

impl StraightInfo {
    /// No straight; used when the grouping scan already found a pair or
    /// better, which rules the straight test out.
    pub fn none() -> Self {
        Self::default()
    }

    /// Detect a straight in `ranks`, which must be sorted ascending with no
    /// repeated rank.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let consecutive = (1..5).all(|i| ranks[i].value() == ranks[i - 1].value() + 1);
        if consecutive {
            return Self { is_straight: true, ace_high: false };
        }

        // Ace-high: the sorted hand begins Ace, Ten. With distinct ranks the
        // remaining three can only be Jack, Queen, King.
        if ranks[0] == Rank::Ace && ranks[1] == Rank::Ten {
            return Self { is_straight: true, ace_high: true };
        }

        Self::none()
    }
}
