use super::rank_groups::RankGroups;
use super::straight::StraightInfo;
use super::suit::SuitInfo;
use crate::cards::Rank;
use crate::hand::Hand;

/// Pre-computed facts about a hand, built once and shared by every rule.
///
/// The construction order encodes two rules of the closed ten-category
/// scheme:
/// - a flush hand skips the grouping scan, so flush and pairing categories
///   can never both apply;
/// - the straight test only runs when no group of size two or more exists.
#[derive(Debug, Clone, Copy)]
pub struct HandProfile {
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandProfile {
    pub fn new(hand: &Hand) -> Self {
        let ranks = hand.ranks();
        let suit_info = SuitInfo::detect(hand.cards());

        let rank_groups =
            if suit_info.is_flush { RankGroups::empty() } else { RankGroups::scan(&ranks) };

        let straight_info =
            if rank_groups.any() { StraightInfo::none() } else { StraightInfo::detect(&ranks) };

        Self { ranks, rank_groups, suit_info, straight_info }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(s: &str) -> HandProfile {
        HandProfile::new(&s.parse().expect("valid hand"))
    }

    #[test]
    fn royal_flush_profile() {
        let p = profile("As Ks Qs Js 10s");
        assert!(p.suit_info.is_flush);
        assert!(p.straight_info.is_straight);
        assert!(p.straight_info.ace_high);
        assert!(!p.rank_groups.any());
    }

    #[test]
    fn flush_skips_the_grouping_scan() {
        // ranks alone would not group anyway (distinct within one suit),
        // and the profile must report the scan as empty
        let p = profile("2h 5h 8h Jh Kh");
        assert!(p.suit_info.is_flush);
        assert!(!p.rank_groups.any());
        assert!(!p.straight_info.is_straight);
    }

    #[test]
    fn groups_suppress_the_straight_test() {
        let p = profile("3s 3h 7d 9c Ks");
        assert!(p.rank_groups.one_pair());
        assert!(!p.straight_info.is_straight);
    }

    #[test]
    fn plain_straight_profile() {
        let p = profile("4s 5h 6d 7c 8s");
        assert!(!p.suit_info.is_flush);
        assert!(!p.rank_groups.any());
        assert!(p.straight_info.is_straight);
        assert!(!p.straight_info.ace_high);
    }

    #[test]
    fn ranks_come_out_ascending() {
        let p = profile("Kd As 7h 2c 9s");
        assert_eq!(
            p.ranks,
            [Rank::Ace, Rank::Two, Rank::Seven, Rank::Nine, Rank::King]
        );
    }
}
