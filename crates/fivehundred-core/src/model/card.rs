use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;

/// A single card. The suit is `None` exactly when the rank is the Joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Option<Suit>,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit: Some(suit),
        }
    }

    pub const fn joker() -> Self {
        Self {
            rank: Rank::Joker,
            suit: None,
        }
    }

    pub const fn is_joker(self) -> bool {
        matches!(self.rank, Rank::Joker)
    }

    /// The Joker carries no suit and counts as not-red rather than erroring.
    pub const fn is_red(self) -> bool {
        match self.suit {
            Some(suit) => suit.is_red(),
            None => false,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{} of {}", self.rank, suit),
            None => f.write_str("Joker"),
        }
    }
}
