// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release -p handrank-eval --example eval_all7
// ...
// Total hands      133784560
// Elapsed:         0.912s
// Hands/sec:       146693596
//
// High Card:       23294460
// Pair:            58627800
// Two Pair:        31433400
// Three of a Kind: 6461620
// Straight:        6180020
// Flush:           4047644
// Full House:      3473184
// Four of a Kind:  224848
// Straight Flush:  41584
// ```

use std::time::Instant;

use handrank_eval::tally::tally;

fn main() -> anyhow::Result<()> {
    // Score all 133M hands.
    let now = Instant::now();
    let counts = tally(7)?;

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.total();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for (rank, count) in counts.iter() {
        println!("{:<17}{count}", format!("{rank}:"));
    }

    Ok(())
}
