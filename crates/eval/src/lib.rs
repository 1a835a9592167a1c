// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank poker hand evaluator.
//!
//! Constant time evaluator for 5 and 7 cards hands. Cards are single bit masks,
//! a hand is the union of its cards, and a [Score] is an integer where a larger
//! value is a stronger hand:
//!
//! ```
//! # use handrank_eval::*;
//! let c = parse_cards("AS KS QS JS TS 2C 2D").unwrap();
//! let royal = score5(c[0], c[1], c[2], c[3], c[4]);
//! assert_eq!(royal.rank(), HandRank::StraightFlush);
//!
//! let best = score7(c[0], c[1], c[2], c[3], c[4], c[5], c[6]);
//! assert_eq!(best, royal);
//! assert_eq!(best.to_string(), "Straight Flush (A high)");
//! ```
//!
//! The scoring functions expect distinct cards and don't check their input, to
//! score hands from untrusted input use [score_cards]:
//!
//! ```
//! # use handrank_eval::*;
//! let c = parse_cards("2H 2C 2D 5S 9H").unwrap();
//! let score = score_cards(&c).unwrap();
//! assert_eq!(score.to_string(), "Three 2s (95)");
//!
//! let c = parse_cards("2H 2H 2D 5S 9H").unwrap();
//! assert!(score_cards(&c).is_err());
//! ```
//!
//! The [tally] module counts categories over all the hands of a deck, see the
//! examples for measuring single and parallel performance on your hardware.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, Score, Tables, build_tables, score_cards, score5, score7};

pub mod tally;

// Reexport cards types.
pub use handrank_cards::{Card, Deck, HandMask, Rank, Suit, parse_cards};
