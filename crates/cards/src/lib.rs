// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank cards types.
//!
//! Each card is a 64 bits mask with a single bit set at `suit * 13 + rank`,
//! and a hand is the union of its cards:
//!
//! ```
//! # use handrank_cards::{Card, HandMask, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let ad = Card::new(Rank::Ace, Suit::Diamonds);
//! let hand = ah | ad;
//! assert_eq!(hand.len(), 2);
//! assert_eq!(hand.rank_mask(), Rank::Ace.bit());
//! ```
//!
//! Cards can be parsed from their two characters representation:
//!
//! ```
//! # use handrank_cards::{Card, Rank, Suit, parse_cards};
//! let kd: Card = "Kd".parse().unwrap();
//! assert_eq!(kd, Card::new(Rank::King, Suit::Diamonds));
//!
//! let cards = parse_cards("2C 3D 4S TC QD").unwrap();
//! assert_eq!(cards.len(), 5);
//! ```
//!
//! and a [Deck] type for iterating all k-cards hands, for example to iterate
//! through all 7 cards hands:
//!
//! ```no_run
//! # use handrank_cards::Deck;
//! // Iterate through all 7 cards hands (133M hands).
//! let mut counter = 0;
//! Deck::default().for_each(7, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 133_784_560);
//! ```
//!
//! The **`parallel`** feature enables parallel iteration with a given number
//! of tasks, the following example uses 4 tasks to iterate all 5 cards hands,
//! the closure `task_id` can be used to store per task data to reduce
//! contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_for_each() {
//! # use std::sync::atomic;
//! # use handrank_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_for_each(4, 5, |task_id, hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 2_598_960);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit, parse_cards};

mod mask;
pub use mask::HandMask;
