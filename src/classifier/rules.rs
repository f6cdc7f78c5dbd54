use super::profile::HandProfile;
use super::Category;

/// One entry of the rule table: a predicate over the hand profile paired
/// with the category it yields.
pub trait CategoryRule {
    fn matches(&self, profile: &HandProfile) -> bool;
    fn category(&self) -> Category;
}

pub struct FullHouseRule;

impl CategoryRule for FullHouseRule {
    fn matches(&self, p: &HandProfile) -> bool {
        p.rank_groups.full_house()
    }
    fn category(&self) -> Category {
        Category::FullHouse
    }
}

pub struct TwoPairRule;

impl CategoryRule for TwoPairRule {
    fn matches(&self, p: &HandProfile) -> bool {
        p.rank_groups.two_pair()
    }
    fn category(&self) -> Category {
        Category::TwoPair
    }
}

pub struct ThreeOfAKindRule;

impl CategoryRule for ThreeOfAKindRule {
    fn matches(&self, p: &HandProfile) -> bool {
        p.rank_groups.three_of_a_kind()
    }
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }
}

pub struct OnePairRule;

impl CategoryRule for OnePairRule {
    fn matches(&self, p: &HandProfile) -> bool {
        p.rank_groups.one_pair()
    }
    fn category(&self) -> Category {
        Category::OnePair
    }
}

pub struct FourOfAKindRule;

impl CategoryRule for FourOfAKindRule {
    fn matches(&self, p: &HandProfile) -> bool {
        p.rank_groups.four_of_a_kind()
    }
    fn category(&self) -> Category {
        Category::FourOfAKind
    }
}

pub struct RoyalFlushRule;

impl CategoryRule for RoyalFlushRule {
    fn matches(&self, p: &HandProfile) -> bool {
        p.suit_info.is_flush && p.straight_info.is_straight && p.straight_info.ace_high
    }
    fn category(&self) -> Category {
        Category::RoyalFlush
    }
}

pub struct StraightFlushRule;

impl CategoryRule for StraightFlushRule {
    fn matches(&self, p: &HandProfile) -> bool {
        p.suit_info.is_flush && p.straight_info.is_straight
    }
    fn category(&self) -> Category {
        Category::StraightFlush
    }
}

pub struct StraightRule;

impl CategoryRule for StraightRule {
    fn matches(&self, p: &HandProfile) -> bool {
        p.straight_info.is_straight
    }
    fn category(&self) -> Category {
        Category::Straight
    }
}

pub struct FlushRule;

impl CategoryRule for FlushRule {
    fn matches(&self, p: &HandProfile) -> bool {
        p.suit_info.is_flush
    }
    fn category(&self) -> Category {
        Category::Flush
    }
}

/// Fallback: always matches.
pub struct NoPairRule;

impl CategoryRule for NoPairRule {
    fn matches(&self, _profile: &HandProfile) -> bool {
        true
    }
    fn category(&self) -> Category {
        Category::NoPair
    }
}

/// Fixed evaluation order; the first matching rule wins. Pairing categories
/// come first (they are exclusive with the flush/straight shapes by profile
/// construction), then the shapes from most to least valuable, then the
/// fallback.
pub const RULES: [&dyn CategoryRule; Category::COUNT] = [
    &FullHouseRule,
    &TwoPairRule,
    &ThreeOfAKindRule,
    &OnePairRule,
    &FourOfAKindRule,
    &RoyalFlushRule,
    &StraightFlushRule,
    &StraightRule,
    &FlushRule,
    &NoPairRule,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Hand;

    fn profile(s: &str) -> HandProfile {
        HandProfile::new(&s.parse::<Hand>().expect("valid hand"))
    }

    #[test]
    fn rule_order_matches_their_categories() {
        let order: Vec<Category> = RULES.iter().map(|r| r.category()).collect();
        assert_eq!(
            order,
            vec![
                Category::FullHouse,
                Category::TwoPair,
                Category::ThreeOfAKind,
                Category::OnePair,
                Category::FourOfAKind,
                Category::RoyalFlush,
                Category::StraightFlush,
                Category::Straight,
                Category::Flush,
                Category::NoPair,
            ]
        );
    }

    #[test]
    fn royal_flush_profile_matches_every_shape_rule() {
        // the rule walk disambiguates by order
        let p = profile("As Ks Qs Js 10s");
        assert!(RoyalFlushRule.matches(&p));
        assert!(StraightFlushRule.matches(&p));
        assert!(StraightRule.matches(&p));
        assert!(FlushRule.matches(&p));
        assert!(NoPairRule.matches(&p));
    }

    #[test]
    fn plain_straight_flush_is_not_royal() {
        let p = profile("2s 3s 4s 5s 6s");
        assert!(!RoyalFlushRule.matches(&p));
        assert!(StraightFlushRule.matches(&p));
    }

    #[test]
    fn full_house_profile_matches_no_other_pairing_rule() {
        let p = profile("2s 2h 2d 5c 5s");
        assert!(FullHouseRule.matches(&p));
        assert!(!TwoPairRule.matches(&p));
        assert!(!ThreeOfAKindRule.matches(&p));
        assert!(!OnePairRule.matches(&p));
        assert!(!FourOfAKindRule.matches(&p));
    }

    #[test]
    fn exactly_one_pairing_rule_matches_grouped_hands() {
        for (s, expected) in [
            ("3s 3h 7d 9c Ks", Category::OnePair),
            ("9s 9h 4d 4c Ks", Category::TwoPair),
            ("9s 9h 9d 4c Ks", Category::ThreeOfAKind),
            ("2s 2h 2d 5c 5s", Category::FullHouse),
            ("2s 2h 2d 2c 5s", Category::FourOfAKind),
        ] {
            let p = profile(s);
            let matched: Vec<Category> = [
                &FullHouseRule as &dyn CategoryRule,
                &TwoPairRule,
                &ThreeOfAKindRule,
                &OnePairRule,
                &FourOfAKindRule,
            ]
            .iter()
            .filter(|r| r.matches(&p))
            .map(|r| r.category())
            .collect();
            assert_eq!(matched, vec![expected], "hand {s}");
        }
    }
}
