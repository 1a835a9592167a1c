// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use anyhow::{Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

mod combinations;
#[cfg(feature = "parallel")]
mod parallel;

use combinations::{MAX_K, binomial, for_each_ksubset};

/// A Poker card.
///
/// A card is a 64 bits integer with a single bit set at index `suit * 13 + rank`:
///
/// ```text
///   63      52 51        39 38        26 25        13 12         0
///   +---------+------------+------------+------------+------------+
///   | unused  |  diamonds  |   spades   |   hearts   |   clubs    |
///   +---------+------------+------------+------------+------------+
///   each suit slice has deuce=bit 0, trey=bit 1, ..., ace=bit 12
/// ```
///
/// Distinct cards never share a bit so the union of any cards is a
/// [HandMask](crate::HandMask) that splits into per suit rank masks with a
/// shift and a mask.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card(u64);

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card(1 << (suit as u32 * Rank::COUNT as u32 + rank as u32))
    }

    /// Create a card from its index in 0..52.
    ///
    /// Panics if the index is out of range.
    pub const fn from_index(index: usize) -> Card {
        assert!(index < Deck::SIZE, "card index must be < 52");
        Card(1 << index)
    }

    /// Create a card from a mask with a single bit set in the low 52 bits.
    pub const fn from_bits(bits: u64) -> Option<Card> {
        if bits.count_ones() == 1 && bits < (1 << Deck::SIZE) {
            Some(Card(bits))
        } else {
            None
        }
    }

    /// The card index in 0..52.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0.trailing_zeros() as usize
    }

    /// The card single bit mask.
    #[inline]
    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// Returns the card rank.
    pub const fn rank(&self) -> Rank {
        Rank::from_index(self.index() % Rank::COUNT)
    }

    /// Returns the card suit.
    pub const fn suit(&self) -> Suit {
        Suit::from_index(self.index() / Rank::COUNT)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = anyhow::Error;

    /// Parses a card like `Ac`, `TD` or `2s`.
    fn from_str(text: &str) -> Result<Self> {
        let mut chars = text.chars();
        let (Some(r), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            bail!("Invalid card '{text}' expected a rank and a suit");
        };

        let rank = Rank::from_char(r)
            .ok_or_else(|| anyhow!("Invalid rank '{r}' in card '{text}'"))?;
        let suit = Suit::from_char(s)
            .ok_or_else(|| anyhow!("Invalid suit '{s}' in card '{text}'"))?;
        Ok(Card::new(rank, suit))
    }
}

/// Parses a list of cards like `"2C 3D 4S TC QD"` or `"2C3D4STCQD"`.
pub fn parse_cards(text: &str) -> Result<Vec<Card>> {
    let chars = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect::<Vec<_>>();

    if chars.len() % 2 != 0 {
        bail!("Invalid cards '{text}' each card needs a rank and a suit");
    }

    chars
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>().parse())
        .collect()
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks in a suit.
    pub const COUNT: usize = 13;

    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Returns the rank for an index in 0..13.
    ///
    /// Panics if the index is out of range.
    pub const fn from_index(index: usize) -> Rank {
        match index {
            0 => Rank::Deuce,
            1 => Rank::Trey,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => panic!("Invalid rank index"),
        }
    }

    /// Returns the rank for a character in `23456789TJQKA`, case insensitive.
    pub const fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }

    /// This rank bit in a 13 bits rank mask.
    #[inline]
    pub const fn bit(&self) -> u16 {
        1 << *self as u16
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// The discriminant is the suit slice position in a card mask.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Hearts suit.
    Hearts = 1,
    /// Spades suit.
    Spades = 2,
    /// Diamonds suit.
    Diamonds = 3,
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// Returns all suits in card mask order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Hearts, Suit::Spades, Suit::Diamonds].into_iter()
    }

    /// Returns the suit for an index in 0..4.
    ///
    /// Panics if the index is out of range.
    pub const fn from_index(index: usize) -> Suit {
        match index {
            0 => Suit::Clubs,
            1 => Suit::Hearts,
            2 => Suit::Spades,
            3 => Suit::Diamonds,
            _ => panic!("Invalid suit index"),
        }
    }

    /// Returns the suit for a character in `CHSD`, case insensitive.
    pub const fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            'D' => Some(Suit::Diamonds),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck, cards are kept in index order.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The cards in the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// The number of k-cards hands in this deck.
    pub fn hands_count(&self, k: usize) -> usize {
        binomial(self.cards.len(), k)
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=MAX_K).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut hand = [Card::from_index(0); MAX_K];
        for_each_ksubset(self.cards.len(), k, 0, self.hands_count(k), |positions| {
            for (slot, &pos) in hand.iter_mut().zip(positions) {
                *slot = self.cards[pos];
            }

            f(&hand[..k]);
        });
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = (0..Self::SIZE).map(Card::from_index).collect();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();

        for card in Deck::default() {
            assert_eq!(card.bits().count_ones(), 1);
            assert_eq!(card.index(), card.suit() as usize * 13 + card.rank() as usize);
            assert_eq!(Card::new(card.rank(), card.suit()), card);
            assert_eq!(Card::from_bits(card.bits()), Some(card));
            cards.insert(card.bits());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);

        // The deck is in suit then rank order.
        let ordered = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        assert_eq!(ordered, Deck::default().cards());
        assert_eq!(Suit::suits().count(), Suit::COUNT);

        assert_eq!(Card::new(Rank::Deuce, Suit::Clubs).bits(), 1);
        assert_eq!(Card::new(Rank::Trey, Suit::Clubs).bits(), 2);
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).bits(), 1 << 12);
        assert_eq!(Card::new(Rank::Deuce, Suit::Hearts).bits(), 1 << 13);
        assert_eq!(Card::new(Rank::Ace, Suit::Diamonds).bits(), 1 << 51);
    }

    #[test]
    fn card_from_bits() {
        assert_eq!(Card::from_bits(0), None);
        assert_eq!(Card::from_bits(0b11), None);
        assert_eq!(Card::from_bits(1 << 52), None);
        assert_eq!(
            Card::from_bits(1 << 14),
            Some(Card::new(Rank::Trey, Suit::Hearts))
        );
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_from_string() {
        for card in Deck::default() {
            let text = card.to_string();
            assert_eq!(text.parse::<Card>().unwrap(), card);
            assert_eq!(text.to_lowercase().parse::<Card>().unwrap(), card);
        }

        assert!("".parse::<Card>().is_err());
        assert!("A".parse::<Card>().is_err());
        assert!("1C".parse::<Card>().is_err());
        assert!("AX".parse::<Card>().is_err());
        assert!("ACE".parse::<Card>().is_err());
    }

    #[test]
    fn cards_from_string() {
        let expected = vec![
            Card::new(Rank::Deuce, Suit::Clubs),
            Card::new(Rank::Trey, Suit::Diamonds),
            Card::new(Rank::Four, Suit::Spades),
            Card::new(Rank::Ten, Suit::Clubs),
            Card::new(Rank::Queen, Suit::Diamonds),
        ];

        assert_eq!(parse_cards("2C 3D 4S TC QD").unwrap(), expected);
        assert_eq!(parse_cards("2c3d4stcqd").unwrap(), expected);
        assert_eq!(parse_cards("2C, 3D, 4S, TC, QD").unwrap(), expected);
        assert!(parse_cards("").unwrap().is_empty());
        assert!(parse_cards("2C 3").is_err());
        assert!(parse_cards("2C 3X").is_err());
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);
        assert_eq!(deck.hands_count(5), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            assert!(cards[0] != cards[1] && cards[1] != cards[2] && cards[0] != cards[2]);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_7cards() {
        let deck = Deck::default();

        let mut count = 0;
        deck.for_each(7, |cards| {
            assert_eq!(cards.len(), 7);
            count += 1;
        });
        assert_eq!(count, 133_784_560);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let mut count = 0;
        deck.for_each(7, |cards| {
            assert_eq!(cards.len(), 7);
            count += 1;
        });
        assert_eq!(count, 99_884_400);
    }

    #[test]
    fn deck_for_each_small_deck() {
        let mut deck = Deck::default();
        for card in Deck::default().into_iter().skip(4) {
            deck.remove(card);
        }

        let mut count = 0;
        deck.for_each(5, |_| count += 1);
        assert_eq!(count, 0);

        deck.for_each(4, |cards| {
            assert_eq!(cards, deck.cards());
            count += 1;
        });
        assert_eq!(count, 1);
    }
}
