pub(crate) mod profile;
pub(crate) mod rank_groups;
pub(crate) mod rules;
pub(crate) mod straight;
pub(crate) mod suit;

use crate::hand::Hand;
use std::fmt;

/// The ten mutually exclusive hand categories, most valuable first.
///
/// This is a closed scheme, not general poker scoring: a flush hand never
/// undergoes the pairing scan, and pairing categories outrank the
/// flush/straight shapes in the rule walk. Exactly one category applies to
/// any hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    RoyalFlush = 0,
    StraightFlush = 1,
    FourOfAKind = 2,
    FullHouse = 3,
    Flush = 4,
    Straight = 5,
    ThreeOfAKind = 6,
    TwoPair = 7,
    OnePair = 8,
    NoPair = 9,
}

impl Category {
    pub const COUNT: usize = 10;

    pub const ALL: [Category; Category::COUNT] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::OnePair,
        Category::NoPair,
    ];

    /// Stable index for table addressing.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::RoyalFlush => "Royal Flush",
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::OnePair => "One Pair",
            Category::NoPair => "No Pair",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a hand to its single category.
///
/// Builds the hand profile once, then walks the rule table in priority
/// order; the first matching rule decides.
///
/// ```
/// use poker_freq::classifier::{classify, Category};
/// use poker_freq::hand::Hand;
///
/// let hand: Hand = "As Ks Qs Js 10s".parse().unwrap();
/// assert_eq!(classify(&hand), Category::RoyalFlush);
/// ```
pub fn classify(hand: &Hand) -> Category {
    use profile::HandProfile;
    use rules::RULES;

    let profile = HandProfile::new(hand);

    for rule in RULES.iter() {
        if rule.matches(&profile) {
            return rule.category();
        }
    }

    // Unreachable: the NoPair rule always matches as fallback
    unreachable!("no category rule matched")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    #[test]
    fn classify_literal_hands() {
        assert_eq!(classify(&hand("As Ks Qs Js 10s")), Category::RoyalFlush);
        assert_eq!(classify(&hand("2s 3s 4s 5s 6s")), Category::StraightFlush);
        assert_eq!(classify(&hand("2s 2h 2d 2c 5s")), Category::FourOfAKind);
        assert_eq!(classify(&hand("2s 2h 2d 5c 5s")), Category::FullHouse);
        assert_eq!(classify(&hand("2h 5h 8h Jh Kh")), Category::Flush);
        assert_eq!(classify(&hand("4s 5h 6d 7c 8s")), Category::Straight);
        assert_eq!(classify(&hand("9s 9h 9d 4c Ks")), Category::ThreeOfAKind);
        assert_eq!(classify(&hand("9s 9h 4d 4c Ks")), Category::TwoPair);
        assert_eq!(classify(&hand("3s 3h 7d 9c Ks")), Category::OnePair);
        assert_eq!(classify(&hand("2s 5h 8d Jc Ks")), Category::NoPair);
    }

    #[test]
    fn ace_low_straight_is_a_straight() {
        assert_eq!(classify(&hand("As 2h 3d 4c 5s")), Category::Straight);
        assert_eq!(classify(&hand("As 2s 3s 4s 5s")), Category::StraightFlush);
    }

    #[test]
    fn ace_high_straight_without_flush_is_a_straight() {
        assert_eq!(classify(&hand("10s Jh Qd Kc As")), Category::Straight);
    }

    #[test]
    fn near_straight_with_ace_is_no_pair() {
        // Ace then Two: the ace-high case requires the second-lowest rank
        // to be a Ten.
        assert_eq!(classify(&hand("As 2h 3d 4c 6s")), Category::NoPair);
        assert_eq!(classify(&hand("As 10h Jd Qc 9s")), Category::NoPair);
    }

    #[test]
    fn category_display_names() {
        assert_eq!(Category::RoyalFlush.to_string(), "Royal Flush");
        assert_eq!(Category::NoPair.to_string(), "No Pair");
    }

    #[test]
    fn indices_are_stable_and_dense() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }
}
