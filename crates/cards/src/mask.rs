// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Set of cards as a 52 bits mask.
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

use crate::{Card, Rank, Suit};

/// A set of distinct cards.
///
/// The mask is the union of the cards bits, each card has its own bit so the
/// mask fully determines the cards in it. Each 13 bits slice of the mask is
/// a suit rank mask, see [Card] for the layout.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HandMask(u64);

impl HandMask {
    /// A mask with no cards.
    pub const EMPTY: HandMask = HandMask(0);

    /// A 13 bits rank mask with all ranks set.
    pub const ALL_RANKS: u16 = (1 << Rank::COUNT) - 1;

    /// The underlying bits.
    #[inline]
    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// Number of cards in the mask.
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if the mask has no cards.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Checks if a card is in the mask.
    #[inline]
    pub const fn contains(&self, card: Card) -> bool {
        self.0 & card.bits() != 0
    }

    /// Adds a card to the mask, returns false if the card was already there.
    #[inline]
    pub fn insert(&mut self, card: Card) -> bool {
        let added = !self.contains(card);
        self.0 |= card.bits();
        added
    }

    /// The ranks of the cards with the given suit.
    #[inline]
    pub const fn suit_mask(&self, suit: Suit) -> u16 {
        ((self.0 >> (suit as usize * Rank::COUNT)) as u16) & Self::ALL_RANKS
    }

    /// The four suit rank masks in suit order.
    #[inline]
    pub const fn suit_masks(&self) -> [u16; Suit::COUNT] {
        [
            self.suit_mask(Suit::Clubs),
            self.suit_mask(Suit::Hearts),
            self.suit_mask(Suit::Spades),
            self.suit_mask(Suit::Diamonds),
        ]
    }

    /// The ranks present in the mask regardless of suit and count.
    #[inline]
    pub const fn rank_mask(&self) -> u16 {
        let [c, h, s, d] = self.suit_masks();
        c | h | s | d
    }

    /// Iterates the cards in the mask in index order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + use<> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            let card = Card::from_bits(bits & bits.wrapping_neg())?;
            bits &= bits - 1;
            Some(card)
        })
    }
}

impl From<Card> for HandMask {
    fn from(card: Card) -> Self {
        HandMask(card.bits())
    }
}

impl FromIterator<Card> for HandMask {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        iter.into_iter().fold(HandMask::EMPTY, |mask, card| mask | card)
    }
}

impl<'a> FromIterator<&'a Card> for HandMask {
    fn from_iter<T: IntoIterator<Item = &'a Card>>(iter: T) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl ops::BitOr<Card> for Card {
    type Output = HandMask;

    #[inline]
    fn bitor(self, rhs: Card) -> HandMask {
        HandMask(self.bits() | rhs.bits())
    }
}

impl ops::BitOr<Card> for HandMask {
    type Output = HandMask;

    #[inline]
    fn bitor(self, rhs: Card) -> HandMask {
        HandMask(self.0 | rhs.bits())
    }
}

impl ops::BitOr for HandMask {
    type Output = HandMask;

    #[inline]
    fn bitor(self, rhs: HandMask) -> HandMask {
        HandMask(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign<Card> for HandMask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Card) {
        self.0 |= rhs.bits();
    }
}

impl fmt::Display for HandMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for HandMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandMask({self})")
    }
}
