use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

pub const DECK_SIZE: usize = 43;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The canonical unshuffled sequence: rank-major, suit-minor. Fours exist
    /// only in the red suits and the single Joker fills its own rank slot.
    /// Each call yields an independent, identical 43-card sequence.
    pub fn canonical_cards() -> impl Iterator<Item = Card> {
        Rank::ORDERED.iter().copied().flat_map(|rank| {
            let suits: &'static [Suit] = match rank {
                Rank::Joker => &[],
                Rank::Four => &Suit::RED,
                _ => &Suit::ALL,
            };
            suits
                .iter()
                .map(move |&suit| Card::new(rank, suit))
                .chain(matches!(rank, Rank::Joker).then(Card::joker))
        })
    }

    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        cards.extend(Self::canonical_cards());
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
