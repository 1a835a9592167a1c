// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
use std::thread;

use super::{Card, Deck, MAX_K, for_each_ksubset};

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards hand.
    ///
    /// The hands are split in `num_tasks` contiguous ranges each iterated by a
    /// scoped thread, the closure takes the task identifier (0..num_tasks) and
    /// a slice of cards of length k. The task identifier can be used to index
    /// per task data to avoid contention.
    ///
    /// Panics if k is not 2 <= k <= 7 or num_tasks is zero.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((2..=MAX_K).contains(&k), "2 <= k <= 7");
        assert!(num_tasks > 0);

        let n = self.cards.len();
        if k > n {
            return;
        }

        let num_hands = self.hands_count(k);
        let hands_per_task = num_hands.div_ceil(num_tasks);

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let start = task_id * hands_per_task;
                let count = hands_per_task.min(num_hands.saturating_sub(start));
                if count == 0 {
                    break;
                }

                let f = &f;
                s.spawn(move || {
                    let mut hand = [Card::from_index(0); MAX_K];
                    for_each_ksubset(n, k, start, count, |positions| {
                        for (slot, &pos) in hand.iter_mut().zip(positions) {
                            *slot = self.cards[pos];
                        }

                        f(task_id, &hand[..k]);
                    });
                });
            }
        });
    }
}
