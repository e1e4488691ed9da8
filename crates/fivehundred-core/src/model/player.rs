use crate::model::card::Card;
use crate::model::hand::Hand;
use core::fmt;

/// A seat at the table. The hand is mutated only through `give_card` and
/// `reset_hand`; everyone else sees it read-only.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Hand,
}

/// Routine outcome of dealing into a full hand, not a fault: the dealer
/// diverts the card to the kitty and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandFull {
    pub player: String,
}

impl fmt::Display for HandFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} already holds {} cards",
            self.player,
            Hand::CAPACITY
        )
    }
}

impl std::error::Error for HandFull {}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn give_card(&mut self, card: Card) -> Result<(), HandFull> {
        if self.hand.is_full() {
            return Err(HandFull {
                player: self.name.clone(),
            });
        }
        self.hand.push(card);
        Ok(())
    }

    pub fn reset_hand(&mut self) {
        self.hand.clear();
    }
}
