// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! 5 and 7 cards hands scoring.
use anyhow::{Result, bail};

use handrank_cards::{Card, HandMask};

use super::{
    score::{HandRank, Score},
    tables::Tables,
};

/// Rank masks of a hand split by how many suits each rank appears in.
struct RankGroups {
    /// The ranks in the hand.
    ranks: u16,
    /// Ranks that appear 4 times.
    fours: u16,
    /// Ranks that appear at least 3 times.
    threes: u16,
    /// Ranks that appear 2 or 4 times.
    twos: u16,
    /// Ranks that appear once.
    ones: u16,
}

impl RankGroups {
    #[inline]
    fn new(suits: [u16; 4]) -> Self {
        let [a, b, c, d] = suits;
        let ranks = a | b | c | d;

        // Three out of four suits share the rank if both a pair from
        // {ab, cd} and a pair from {ac, bd} have it.
        let fours = a & b & c & d;
        let threes = ((a & b) | (c & d)) & ((a & c) | (b & d));
        let twos = ranks ^ (a ^ b ^ c ^ d);
        let ones = ranks & !(twos | threes | fours);

        Self {
            ranks,
            fours,
            threes,
            twos,
            ones,
        }
    }
}

impl Tables {
    /// Scores a 5 cards hand.
    ///
    /// The cards must be distinct, duplicate cards give an unspecified score.
    #[inline]
    pub fn score5(&self, c1: Card, c2: Card, c3: Card, c4: Card, c5: Card) -> Score {
        let hand = c1 | c2 | c3 | c4 | c5;
        debug_assert_eq!(hand.len(), 5, "duplicate cards in {hand}");
        self.score5_mask(hand)
    }

    /// Scores a 7 cards hand using the best 5 cards.
    ///
    /// The cards must be distinct, duplicate cards give an unspecified score.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn score7(
        &self,
        c1: Card,
        c2: Card,
        c3: Card,
        c4: Card,
        c5: Card,
        c6: Card,
        c7: Card,
    ) -> Score {
        let hand = c1 | c2 | c3 | c4 | c5 | c6 | c7;
        debug_assert_eq!(hand.len(), 7, "duplicate cards in {hand}");
        self.score7_mask(hand)
    }

    /// Scores a hand mask with 5 cards.
    pub fn score5_mask(&self, hand: HandMask) -> Score {
        let suits = hand.suit_masks();
        if let Some(score) = self.flush_score(suits) {
            return score;
        }

        let ranks = hand.rank_mask();
        if self.popcount(ranks) == 5 {
            return self.unique(ranks);
        }

        let RankGroups {
            ranks,
            fours,
            threes,
            twos,
            ones,
        } = RankGroups::new(suits);

        if fours != 0 {
            return Score::new(HandRank::Quads, fours, ones);
        }

        if threes != 0 && twos != 0 {
            return Score::new(HandRank::FullHouse, threes, twos);
        }

        if let Some(score) = self.straight(ranks) {
            return score;
        }

        if threes != 0 {
            return Score::new(HandRank::Trips, threes, ones);
        }

        if self.popcount(twos) == 2 {
            return Score::new(HandRank::TwoPair, twos, ones);
        }

        if twos != 0 {
            return Score::new(HandRank::Pair, twos, ones);
        }

        Score::new(HandRank::HighCard, 0, ones)
    }

    /// Scores a hand mask with 7 cards using the best 5 cards.
    pub fn score7_mask(&self, hand: HandMask) -> Score {
        let suits = hand.suit_masks();
        if let Some(score) = self.flush_score(suits) {
            return score;
        }

        let ranks = hand.rank_mask();
        if self.popcount(ranks) == 7 {
            return self.unique(ranks);
        }

        let RankGroups {
            ranks,
            fours,
            threes,
            twos,
            ones,
        } = RankGroups::new(suits);

        if fours != 0 {
            let kicker = self.top1(ranks & !fours);
            return Score::new(HandRank::Quads, fours, kicker);
        }

        // No quads from here on so threes has exactly the trips ranks and
        // twos exactly the pairs ranks.
        if threes != 0 && twos != 0 {
            return Score::new(HandRank::FullHouse, threes, self.top1(twos));
        }

        if self.popcount(threes) == 2 {
            let trips = self.top1(threes);
            return Score::new(HandRank::FullHouse, trips, self.bottom(threes));
        }

        if let Some(score) = self.straight(ranks) {
            return score;
        }

        if threes != 0 {
            return Score::new(HandRank::Trips, threes, self.top2(ones));
        }

        match self.popcount(twos) {
            3 => {
                // The lowest pair rank joins the kickers.
                let pairs = self.top2(twos);
                let kicker = self.top1((twos & !pairs) | ones);
                Score::new(HandRank::TwoPair, pairs, kicker)
            }
            2 => Score::new(HandRank::TwoPair, twos, self.top1(ones)),
            1 => Score::new(HandRank::Pair, twos, self.top3(ones)),
            _ => Score::new(HandRank::HighCard, 0, self.top5(ones)),
        }
    }

    /// Returns the flush score if a suit has at least 5 cards.
    #[inline]
    fn flush_score(&self, suits: [u16; 4]) -> Option<Score> {
        suits
            .into_iter()
            .find(|&s| self.popcount(s) >= 5)
            .map(|s| self.flush(s))
    }
}

/// Scores a 5 cards hand with the process wide tables.
///
/// The cards must be distinct, duplicate cards give an unspecified score, use
/// [score_cards] to score hands from untrusted input.
#[inline]
pub fn score5(c1: Card, c2: Card, c3: Card, c4: Card, c5: Card) -> Score {
    Tables::shared().score5(c1, c2, c3, c4, c5)
}

/// Scores a 7 cards hand with the process wide tables using the best 5 cards.
///
/// The cards must be distinct, duplicate cards give an unspecified score, use
/// [score_cards] to score hands from untrusted input.
#[inline]
pub fn score7(c1: Card, c2: Card, c3: Card, c4: Card, c5: Card, c6: Card, c7: Card) -> Score {
    Tables::shared().score7(c1, c2, c3, c4, c5, c6, c7)
}

/// Scores a 5 or 7 cards hand checking the cards are distinct.
pub fn score_cards(cards: &[Card]) -> Result<Score> {
    let mut hand = HandMask::EMPTY;
    for &card in cards {
        if !hand.insert(card) {
            bail!("Duplicate card {card}");
        }
    }

    match hand.len() {
        5 => Ok(Tables::shared().score5_mask(hand)),
        7 => Ok(Tables::shared().score7_mask(hand)),
        n => bail!("Can only score 5 or 7 cards hands, got {n} cards"),
    }
}
