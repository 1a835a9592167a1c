// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories frequencies over all the hands of a deck.
//!
//! ```no_run
//! # use handrank_eval::{HandRank, tally::tally};
//! let counts = tally(7).unwrap();
//! assert_eq!(counts.total(), 133_784_560);
//! assert_eq!(counts[HandRank::StraightFlush], 41_584);
//! ```
use anyhow::{Result, bail};
use log::info;
use serde::{Deserialize, Serialize};
use std::{ops, time::Instant};

use crate::{Card, Deck, HandRank, Score, Tables};

/// Number of hands for each category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts([u64; HandRank::COUNT]);

impl CategoryCounts {
    /// Counts a scored hand.
    #[inline]
    pub fn add(&mut self, score: Score) {
        self.0[score.rank() as usize] += 1;
    }

    /// Adds the counts from another tally.
    pub fn merge(&mut self, other: &CategoryCounts) {
        for (count, other) in self.0.iter_mut().zip(other.0) {
            *count += other;
        }
    }

    /// The total number of hands.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Iterates the categories with their counts from the weakest.
    pub fn iter(&self) -> impl Iterator<Item = (HandRank, u64)> + '_ {
        HandRank::ranks().zip(self.0.iter().copied())
    }
}

impl ops::Index<HandRank> for CategoryCounts {
    type Output = u64;

    fn index(&self, rank: HandRank) -> &u64 {
        &self.0[rank as usize]
    }
}

/// Counts the categories of all the k-cards hands, k must be 5 or 7.
pub fn tally(k: usize) -> Result<CategoryCounts> {
    check_hand_size(k)?;

    let now = Instant::now();
    let tables = Tables::shared();
    let mut counts = CategoryCounts::default();

    Deck::default().for_each(k, |hand| {
        counts.add(score_hand(tables, hand));
    });

    info!("Scored {} {k}-cards hands in {:?}", counts.total(), now.elapsed());
    Ok(counts)
}

/// Counts the categories of all the k-cards hands using `num_tasks` parallel
/// tasks, k must be 5 or 7.
///
/// Each task counts in its own tally, the tallies are merged after all tasks
/// complete.
#[cfg(feature = "parallel")]
pub fn par_tally(num_tasks: usize, k: usize) -> Result<CategoryCounts> {
    use std::sync::atomic::{AtomicU64, Ordering};

    check_hand_size(k)?;
    if num_tasks == 0 {
        bail!("The number of tasks must be greater than zero");
    }

    let now = Instant::now();
    let tables = Tables::shared();

    // Create per task counters to avoid contention and boost performance.
    let task_counters = (0..num_tasks)
        .map(|_| <[AtomicU64; HandRank::COUNT]>::default())
        .collect::<Vec<_>>();

    Deck::default().par_for_each(num_tasks, k, |task_id, hand| {
        let rank = score_hand(tables, hand).rank();
        task_counters[task_id][rank as usize].fetch_add(1, Ordering::Relaxed);
    });

    let counts = task_counters
        .iter()
        .map(|counters| {
            let counts = counters.each_ref().map(|c| c.load(Ordering::Relaxed));
            CategoryCounts(counts)
        })
        .fold(CategoryCounts::default(), |mut acc, task_counts| {
            acc.merge(&task_counts);
            acc
        });

    info!(
        "Scored {} {k}-cards hands with {num_tasks} tasks in {:?}",
        counts.total(),
        now.elapsed()
    );

    Ok(counts)
}

fn check_hand_size(k: usize) -> Result<()> {
    if k != 5 && k != 7 {
        bail!("Can only tally 5 or 7 cards hands, got {k}");
    }

    Ok(())
}

#[inline]
fn score_hand(tables: &Tables, hand: &[Card]) -> Score {
    match *hand {
        [c1, c2, c3, c4, c5] => tables.score5(c1, c2, c3, c4, c5),
        [c1, c2, c3, c4, c5, c6, c7] => tables.score7(c1, c2, c3, c4, c5, c6, c7),
        _ => unreachable!("hand size checked by the caller"),
    }
}
