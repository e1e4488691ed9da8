use crate::model::card::Card;

/// A capacity-bounded hand. Cards stay in insertion order; nothing here
/// de-duplicates or sorts.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub const CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub(crate) fn push(&mut self, card: Card) {
        debug_assert!(self.cards.len() < Self::CAPACITY);
        self.cards.push(card);
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() >= Self::CAPACITY
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
