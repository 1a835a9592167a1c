// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and packed scores.
use serde::{Deserialize, Serialize};
use std::fmt;

use handrank_cards::Rank;

/// The hand category, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pairs, no straights and no flushes.
    HighCard = 0,
    /// Two cards of the same rank.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    Trips,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three cards of one rank and two of another.
    FullHouse,
    /// Four cards of the same rank.
    Quads,
    /// Five cards in sequence of the same suit.
    StraightFlush,
}

impl HandRank {
    /// The number of hand categories.
    pub const COUNT: usize = 9;

    /// Returns all categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            Pair,
            TwoPair,
            Trips,
            Straight,
            Flush,
            FullHouse,
            Quads,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category bits in a packed [Score].
    #[inline]
    pub const fn bits(&self) -> u32 {
        (*self as u32) << Score::CATEGORY_SHIFT
    }

    const fn from_index(index: u32) -> HandRank {
        match index {
            0 => HandRank::HighCard,
            1 => HandRank::Pair,
            2 => HandRank::TwoPair,
            3 => HandRank::Trips,
            4 => HandRank::Straight,
            5 => HandRank::Flush,
            6 => HandRank::FullHouse,
            7 => HandRank::Quads,
            8 => HandRank::StraightFlush,
            _ => panic!("Invalid hand rank index"),
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::Trips => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::Quads => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// A hand score, a higher score is a stronger hand.
///
/// The score packs the hand category and two 13 bits rank masks used to break
/// ties within a category:
///
/// ```text
///   31   30 29  26 25          13 12           0
///   +------+------+--------------+--------------+
///   |  00  | cat  |    major     |    minor     |
///   +------+------+--------------+--------------+
///   cat   = HandRank
///   major = quads, trips or pairs ranks
///   minor = kickers, flush or high card ranks, straight top rank
/// ```
///
/// Scores from 5 and 7 cards hands use the same layout.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Score(u32);

impl Score {
    pub(crate) const CATEGORY_SHIFT: u32 = 26;
    const MAJOR_SHIFT: u32 = 13;
    const RANKS_MASK: u32 = (1 << Rank::COUNT) - 1;

    /// Packs a category with its major and minor rank masks.
    #[inline]
    pub(crate) const fn new(rank: HandRank, major: u16, minor: u16) -> Score {
        Score(rank.bits() | ((major as u32) << Self::MAJOR_SHIFT) | minor as u32)
    }

    /// Wraps bits produced by the lookup tables.
    #[inline]
    pub(crate) const fn from_bits(bits: u32) -> Score {
        Score(bits)
    }

    /// The packed score value.
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// The hand category.
    #[inline]
    pub const fn rank(&self) -> HandRank {
        HandRank::from_index(self.0 >> Self::CATEGORY_SHIFT)
    }

    /// The ranks that define the category: the quads rank, the trips rank
    /// (full house and trips), or the pairs ranks. Zero for the other
    /// categories.
    #[inline]
    pub const fn major(&self) -> u16 {
        ((self.0 >> Self::MAJOR_SHIFT) & Self::RANKS_MASK) as u16
    }

    /// The kickers, the full house pair rank, the straight top rank, or the
    /// five flush and high card ranks.
    #[inline]
    pub const fn minor(&self) -> u16 {
        (self.0 & Self::RANKS_MASK) as u16
    }
}

/// Ranks in a rank mask from the highest to the lowest.
fn ranks_of(mask: u16) -> impl Iterator<Item = Rank> {
    Rank::ranks().rev().filter(move |r| mask & r.bit() != 0)
}

fn ranks_string(mask: u16) -> String {
    ranks_of(mask).map(|r| r.to_string()).collect()
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let major = ranks_string(self.major());
        let minor = ranks_string(self.minor());
        let high = ranks_of(self.minor())
            .next()
            .map(|r| r.to_string())
            .unwrap_or_default();

        match self.rank() {
            HandRank::HighCard => write!(f, "High Card ({minor})"),
            HandRank::Pair => write!(f, "Pair of {major}s ({minor})"),
            HandRank::TwoPair => {
                let pairs = ranks_of(self.major())
                    .map(|r| r.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Two Pair ({pairs} with {minor} kicker)")
            }
            HandRank::Trips => write!(f, "Three {major}s ({minor})"),
            HandRank::Straight => write!(f, "Straight ({high} high)"),
            HandRank::Flush => write!(f, "Flush ({minor})"),
            HandRank::FullHouse => write!(f, "Full House ({major}s full of {minor}s)"),
            HandRank::Quads => write!(f, "Four {major}s ({minor} kicker)"),
            HandRank::StraightFlush => write!(f, "Straight Flush ({high} high)"),
        }
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score({:#010x} {self})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_dominates_payload() {
        let all_ranks = (1 << Rank::COUNT) - 1;
        for (lo, hi) in HandRank::ranks().zip(HandRank::ranks().skip(1)) {
            assert!(lo < hi);
            assert!(Score::new(lo, all_ranks, all_ranks) < Score::new(hi, 0, 0));
        }
    }

    #[test]
    fn major_dominates_minor() {
        let kickers = Rank::Ace.bit() | Rank::King.bit();
        let low = Score::new(HandRank::Pair, Rank::Trey.bit(), kickers);
        let high = Score::new(HandRank::Pair, Rank::Four.bit(), Rank::Deuce.bit());
        assert!(low < high);
    }

    #[test]
    fn fields() {
        let score = Score::new(HandRank::FullHouse, Rank::Nine.bit(), Rank::Ace.bit());
        assert_eq!(score.rank(), HandRank::FullHouse);
        assert_eq!(score.major(), Rank::Nine.bit());
        assert_eq!(score.minor(), Rank::Ace.bit());
        assert_eq!(score.bits() >> 26, 6);
        assert_eq!(Score::from_bits(score.bits()), score);
    }

    #[test]
    fn hand_rank_names() {
        assert_eq!(HandRank::HighCard.to_string(), "High Card");
        assert_eq!(HandRank::Trips.to_string(), "Three of a Kind");
        assert_eq!(HandRank::StraightFlush.to_string(), "Straight Flush");
        assert_eq!(HandRank::ranks().count(), HandRank::COUNT);
    }

    #[test]
    fn score_names() {
        use Rank::*;
        let bits = |ranks: &[Rank]| ranks.iter().fold(0, |m, r| m | r.bit());

        let s = Score::new(HandRank::TwoPair, bits(&[Trey, Deuce]), bits(&[Seven]));
        assert_eq!(s.to_string(), "Two Pair (3, 2 with 7 kicker)");

        let s = Score::new(HandRank::Straight, 0, bits(&[Ace]));
        assert_eq!(s.to_string(), "Straight (A high)");

        let s = Score::new(HandRank::Flush, 0, bits(&[Ace, Ten, Nine, Four, Deuce]));
        assert_eq!(s.to_string(), "Flush (AT942)");
        assert_eq!(format!("{s:?}"), "Score(0x14001185 Flush (AT942))");
    }
}
