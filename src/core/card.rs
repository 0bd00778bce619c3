//! Card, Rank, and Suit types plus the two placement predicates.
//!
//! Empty free-cell and foundation slots are `Option<Card>` at the container
//! level, so no "blank" sentinel card exists: the predicates only ever see
//! real cards and are total by construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card rank, Ace low through King high.
///
/// Discriminants are the face values 1..=13, so rank arithmetic is
/// `rank.value()` on the `u8` representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Face value, 1 for Ace through 13 for King.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Check that `self` is exactly one rank above `other`.
    ///
    /// ```
    /// use freecell_core::Rank;
    ///
    /// assert!(Rank::Two.follows(Rank::Ace));
    /// assert!(!Rank::Ace.follows(Rank::King));
    /// ```
    #[must_use]
    pub const fn follows(self, other: Rank) -> bool {
        self.value() == other.value() + 1
    }
}

/// The four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in a fixed order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Diamonds and Hearts are red; Clubs and Spades are black.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card from rank and suit.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Color predicate: true for Diamonds and Hearts.
    #[must_use]
    pub const fn is_red(self) -> bool {
        self.suit.is_red()
    }

    /// Single-card tableau legality: `self` may be placed on `dst` iff the
    /// colors differ and `dst` is exactly one rank higher.
    ///
    /// ```
    /// use freecell_core::{Card, Rank, Suit};
    ///
    /// let five = Card::new(Rank::Five, Suit::Hearts);
    /// let six = Card::new(Rank::Six, Suit::Spades);
    /// assert!(five.can_stack_on(six));
    /// assert!(!six.can_stack_on(five));
    /// ```
    #[must_use]
    pub const fn can_stack_on(self, dst: Card) -> bool {
        self.is_red() != dst.is_red() && dst.rank.follows(self.rank)
    }

    /// Foundation legality: an Ace settles on an empty slot; otherwise the
    /// suit must match and `self` must be one rank above the slot's top.
    #[must_use]
    pub fn can_settle_on(self, goal_top: Option<Card>) -> bool {
        match goal_top {
            None => self.rank == Rank::Ace,
            Some(top) => top.suit == self.suit && self.rank.follows(top.rank),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Rank::Ace => 'A',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            _ => (b'0' + self.value()) as char,
        };
        write!(f, "{c}")
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };
        write!(f, "{c}")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
