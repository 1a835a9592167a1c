// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lookup tables indexed by 13 bits rank masks.
use log::debug;
use std::{sync::LazyLock, time::Instant};

use handrank_cards::Rank;

use super::score::{HandRank, Score};

/// One entry for each 13 bits rank mask.
const TABLE_SIZE: usize = 1 << Rank::COUNT;

/// Bit mask for the wheel (Ace, two, three, four, five).
const WHEEL: u16 = 0b1_0000_0000_1111;

/// The process wide tables, built on first use.
static TABLES: LazyLock<Tables> = LazyLock::new(build_tables);

type Table<T> = Box<[T; TABLE_SIZE]>;

/// The evaluator lookup tables.
///
/// Every table is total over the 8192 rank masks even if the evaluator only
/// queries some of them. Tables are immutable after construction and can be
/// shared between threads.
pub struct Tables {
    nbits: Table<u8>,
    top1: Table<u16>,
    top2: Table<u16>,
    top3: Table<u16>,
    top5: Table<u16>,
    bottom: Table<u16>,
    straight: Table<u32>,
    flush: Table<u32>,
    unique: Table<u32>,
}

/// Builds the evaluator lookup tables.
pub fn build_tables() -> Tables {
    let now = Instant::now();

    let straight = make_table(|m| match straight_high(m) {
        0 => 0,
        high => HandRank::Straight.bits() | high as u32,
    });

    let flush = make_table(|m| match straight_high(m) {
        0 => HandRank::Flush.bits() | keep_highest(m, 5) as u32,
        high => HandRank::StraightFlush.bits() | high as u32,
    });

    let unique = make_table(|m| match straight[m as usize] {
        0 => HandRank::HighCard.bits() | keep_highest(m, 5) as u32,
        s => s,
    });

    let tables = Tables {
        nbits: make_table(|m| m.count_ones() as u8),
        top1: make_table(|m| keep_highest(m, 1)),
        top2: make_table(|m| keep_highest(m, 2)),
        top3: make_table(|m| keep_highest(m, 3)),
        top5: make_table(|m| keep_highest(m, 5)),
        bottom: make_table(|m| m & m.wrapping_neg()),
        straight,
        flush,
        unique,
    };

    debug!("Lookup tables built in {:?}", now.elapsed());
    tables
}

impl Tables {
    /// Returns the process wide tables used by [score5](super::score5) and
    /// [score7](super::score7).
    pub fn shared() -> &'static Tables {
        &TABLES
    }

    /// The number of ranks in a rank mask.
    #[inline]
    pub fn popcount(&self, ranks: u16) -> u32 {
        self.nbits[ranks as usize] as u32
    }

    /// The highest rank of a rank mask.
    #[inline]
    pub fn top1(&self, ranks: u16) -> u16 {
        self.top1[ranks as usize]
    }

    /// The two highest ranks of a rank mask.
    #[inline]
    pub fn top2(&self, ranks: u16) -> u16 {
        self.top2[ranks as usize]
    }

    /// The three highest ranks of a rank mask.
    #[inline]
    pub fn top3(&self, ranks: u16) -> u16 {
        self.top3[ranks as usize]
    }

    /// The five highest ranks of a rank mask.
    ///
    /// The top tables return the whole mask if it has fewer ranks.
    #[inline]
    pub fn top5(&self, ranks: u16) -> u16 {
        self.top5[ranks as usize]
    }

    /// The lowest rank of a rank mask, for two ranks masks the bottom of the pair.
    #[inline]
    pub fn bottom(&self, ranks: u16) -> u16 {
        self.bottom[ranks as usize]
    }

    /// The straight score for the best straight in a rank mask.
    #[inline]
    pub fn straight(&self, ranks: u16) -> Option<Score> {
        match self.straight[ranks as usize] {
            0 => None,
            s => Some(Score::from_bits(s)),
        }
    }

    /// The best flush or straight flush score for the ranks of a single suit.
    ///
    /// Only meaningful for masks with at least 5 ranks.
    #[inline]
    pub fn flush(&self, ranks: u16) -> Score {
        Score::from_bits(self.flush[ranks as usize])
    }

    /// The best straight or high card score for a mask of distinct ranks
    /// without a flush.
    ///
    /// Only meaningful for masks with at least 5 ranks.
    #[inline]
    pub fn unique(&self, ranks: u16) -> Score {
        Score::from_bits(self.unique[ranks as usize])
    }
}

fn make_table<T: Copy + Default>(f: impl Fn(u16) -> T) -> Table<T> {
    let mut table = Box::new([T::default(); TABLE_SIZE]);
    for (mask, entry) in table.iter_mut().enumerate() {
        *entry = f(mask as u16);
    }

    table
}

/// Keeps the n most significant bits.
///
/// This works by removing the least significant bits.
fn keep_highest(ranks: u16, n: u32) -> u16 {
    let mut result = ranks;
    while result.count_ones() > n {
        result &= result - 1;
    }

    result
}

/// Returns the top rank bit of the highest straight in a rank mask, the wheel
/// top rank is the five, zero if there are no straights.
fn straight_high(ranks: u16) -> u16 {
    // Keep the ranks that are at the top of five consecutive ranks.
    let tops = ranks & (ranks << 1) & (ranks << 2) & (ranks << 3) & (ranks << 4);
    if tops != 0 {
        1 << (u16::BITS - 1 - tops.leading_zeros())
    } else if ranks & WHEEL == WHEEL {
        Rank::Five.bit()
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(ranks: &[Rank]) -> u16 {
        ranks.iter().fold(0, |m, r| m | r.bit())
    }

    #[test]
    fn test_keep_highest() {
        assert_eq!(0b100, keep_highest(0b111, 1));
        assert_eq!(0b110, keep_highest(0b111, 2));
        assert_eq!(0b101, keep_highest(0b101, 5));
        assert_eq!(0, keep_highest(0, 3));
    }

    #[test]
    fn test_popcount() {
        let t = Tables::shared();
        for mask in 0..TABLE_SIZE as u16 {
            assert_eq!(t.popcount(mask), mask.count_ones());
        }
    }

    #[test]
    fn test_top() {
        use Rank::*;
        let t = Tables::shared();
        let ranks = bits(&[Deuce, Five, Nine, Jack, King, Ace]);

        assert_eq!(t.top1(ranks), bits(&[Ace]));
        assert_eq!(t.top2(ranks), bits(&[Ace, King]));
        assert_eq!(t.top3(ranks), bits(&[Ace, King, Jack]));
        assert_eq!(t.top5(ranks), bits(&[Ace, King, Jack, Nine, Five]));
        assert_eq!(t.top5(bits(&[Trey, Four])), bits(&[Trey, Four]));
        assert_eq!(t.top1(0), 0);

        for mask in 0..TABLE_SIZE as u16 {
            for (n, top) in [
                (1, t.top1(mask)),
                (2, t.top2(mask)),
                (3, t.top3(mask)),
                (5, t.top5(mask)),
            ] {
                assert_eq!(top & mask, top);
                assert_eq!(top.count_ones(), mask.count_ones().min(n));
            }
        }
    }

    #[test]
    fn test_bottom() {
        use Rank::*;
        let t = Tables::shared();
        assert_eq!(t.bottom(bits(&[Five, Queen])), bits(&[Five]));
        assert_eq!(t.bottom(bits(&[Deuce, Ace])), bits(&[Deuce]));
        assert_eq!(t.bottom(0), 0);
    }

    #[test]
    fn test_straight() {
        use Rank::*;
        let t = Tables::shared();

        let broadway = t.straight(bits(&[Ten, Jack, Queen, King, Ace])).unwrap();
        assert_eq!(broadway.rank(), HandRank::Straight);
        assert_eq!(broadway.minor(), Ace.bit());

        let wheel = t.straight(bits(&[Ace, Deuce, Trey, Four, Five])).unwrap();
        assert_eq!(wheel.minor(), Five.bit());

        let six_high = t.straight(bits(&[Deuce, Trey, Four, Five, Six])).unwrap();
        assert!(wheel < six_high);

        // The highest run wins, the ace is not used for the wheel here.
        let seven = t.straight(bits(&[Ace, Deuce, Trey, Four, Five, Six, Seven]));
        assert_eq!(seven.unwrap().minor(), Seven.bit());

        assert_eq!(t.straight(bits(&[Ace, King, Queen, Jack, Nine])), None);
        assert_eq!(t.straight(bits(&[King, Ace, Deuce, Trey, Four])), None);
        assert_eq!(t.straight(0), None);

        // Exactly 10 straights among 5 ranks masks.
        let count = (0..TABLE_SIZE as u16)
            .filter(|&m| m.count_ones() == 5 && t.straight(m).is_some())
            .count();
        assert_eq!(count, 10);
    }

    #[test]
    fn test_flush() {
        use Rank::*;
        let t = Tables::shared();

        let royal = t.flush(bits(&[Ten, Jack, Queen, King, Ace, Deuce]));
        assert_eq!(royal.rank(), HandRank::StraightFlush);
        assert_eq!(royal.minor(), Ace.bit());

        let flush = t.flush(bits(&[Deuce, Four, Six, Eight, Ten, Queen, Ace]));
        assert_eq!(flush.rank(), HandRank::Flush);
        assert_eq!(flush.minor(), bits(&[Ace, Queen, Ten, Eight, Six]));

        let steel_wheel = t.flush(bits(&[Ace, Deuce, Trey, Four, Five, King]));
        assert_eq!(steel_wheel.rank(), HandRank::StraightFlush);
        assert_eq!(steel_wheel.minor(), Five.bit());
    }

    #[test]
    fn test_unique() {
        use Rank::*;
        let t = Tables::shared();

        let high = t.unique(bits(&[Deuce, Four, Six, Eight, Ten, Queen, Ace]));
        assert_eq!(high.rank(), HandRank::HighCard);
        assert_eq!(high.minor(), bits(&[Ace, Queen, Ten, Eight, Six]));

        let straight = t.unique(bits(&[Deuce, Six, Seven, Eight, Nine, Ten, King]));
        assert_eq!(straight.rank(), HandRank::Straight);
        assert_eq!(straight.minor(), Ten.bit());
    }
}
