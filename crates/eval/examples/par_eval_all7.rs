// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release -p handrank-eval --features=parallel --example par_eval_all7
// ```

use std::time::Instant;

use handrank_eval::{HandRank, tally::par_tally};

fn main() -> anyhow::Result<()> {
    // Score all 133M hands with 4 parallel tasks.
    const NUM_TASKS: usize = 4;

    let now = Instant::now();
    let counts = par_tally(NUM_TASKS, 7)?;
    let elapsed = now.elapsed().as_secs_f64();

    let total = counts.total();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[HandRank::HighCard]);
    println!("Pair:            {}", counts[HandRank::Pair]);
    println!("Two Pair:        {}", counts[HandRank::TwoPair]);
    println!("Three of a Kind: {}", counts[HandRank::Trips]);
    println!("Straight:        {}", counts[HandRank::Straight]);
    println!("Flush:           {}", counts[HandRank::Flush]);
    println!("Full House:      {}", counts[HandRank::FullHouse]);
    println!("Four of a Kind:  {}", counts[HandRank::Quads]);
    println!("Straight Flush:  {}", counts[HandRank::StraightFlush]);

    Ok(())
}
