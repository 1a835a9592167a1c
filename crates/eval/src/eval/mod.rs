// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator splits a hand mask into its four suit rank masks and scores
//! the hand with a few bitwise operations and lookups into tables indexed by
//! 13 bits rank masks, there are no loops over the cards.
//!
//! The tables are built once on first use by [score5] and [score7], use
//! [build_tables] and the [Tables] methods to manage a tables instance
//! explicitly.

mod hand;
pub use hand::{score_cards, score5, score7};

mod score;
pub use score::{HandRank, Score};

mod tables;
pub use tables::{Tables, build_tables};
