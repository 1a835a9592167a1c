// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use std::time::Instant;

use handrank_eval::{Score, parse_cards, score_cards, tally::par_tally};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scores a 5 or 7 cards hand, for example `handrank score AS KS QS JS TS`.
    Score {
        /// The hand cards, rank followed by suit (23456789TJQKA, CHSD).
        #[arg(required = true)]
        cards: Vec<String>,
    },
    /// Scores all the hands of a deck and prints the categories counts.
    Enumerate {
        /// Number of cards per hand.
        #[arg(long, value_enum, default_value_t = HandSize::Seven)]
        cards: HandSize,
        /// Number of parallel tasks.
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=64))]
        tasks: u8,
    },
}

/// The hand sizes that can be enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HandSize {
    /// 5 cards hands.
    #[value(name = "5")]
    Five,
    /// 7 cards hands.
    #[value(name = "7")]
    Seven,
}

impl HandSize {
    fn len(self) -> usize {
        match self {
            HandSize::Five => 5,
            HandSize::Seven => 7,
        }
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Score { cards } => score(&cards.join(" ")),
        Command::Enumerate { cards, tasks } => enumerate(cards.len(), tasks as usize),
    }
}

fn score(text: &str) -> Result<()> {
    let cards = parse_cards(text)?;
    debug!("Scoring {} cards", cards.len());

    let score: Score = score_cards(&cards)?;
    println!("{:#010x} {score}", score.bits());
    Ok(())
}

fn enumerate(cards: usize, tasks: usize) -> Result<()> {
    let now = Instant::now();
    let counts = par_tally(tasks, cards)?;
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
