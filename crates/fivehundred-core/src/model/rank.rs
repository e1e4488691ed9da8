use core::fmt;

/// Ranks of the 43-card Five Hundred deck, ordered by declaration only.
/// The Joker sits last and is the one rank with no suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Four = 0,
    Five = 1,
    Six = 2,
    Seven = 3,
    Eight = 4,
    Nine = 5,
    Ten = 6,
    Jack = 7,
    Queen = 8,
    King = 9,
    Ace = 10,
    Joker = 11,
}

impl Rank {
    pub const ORDERED: [Rank; 12] = [
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
        Rank::Ace,
        Rank::Joker,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
            Rank::Joker => "Joker",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Rank;

    #[test]
    fn display_uses_full_names() {
        assert_eq!(Rank::Four.to_string(), "Four");
        assert_eq!(Rank::Jack.to_string(), "Jack");
        assert_eq!(Rank::Joker.to_string(), "Joker");
    }

    #[test]
    fn ordering_follows_declaration() {
        assert!(Rank::Four < Rank::Five);
        assert!(Rank::Ace < Rank::Joker);
        let mut sorted = Rank::ORDERED;
        sorted.sort();
        assert_eq!(sorted, Rank::ORDERED);
    }
}
