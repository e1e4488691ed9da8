use crate::model::card::Card;
use crate::model::dealing::deal;
use crate::model::deck::Deck;
use crate::model::player::Player;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const SEATS: usize = 4;

/// One table of four seats plus the RNG that shuffles its rounds. The table
/// orchestrates dealing only; trick play and round scoring live elsewhere.
#[derive(Debug, Clone)]
pub struct Table {
    players: [Player; SEATS],
    rng: StdRng,
    seed: u64,
    rounds_dealt: u32,
}

impl Table {
    pub fn new(names: [String; SEATS]) -> Self {
        let seed: u64 = rand::random();
        Self::with_seed(names, seed)
    }

    pub fn with_seed(names: [String; SEATS], seed: u64) -> Self {
        Self::with_seed_rounds(names, seed, 0)
    }

    /// Rebuilds a table that has already dealt `rounds_dealt` rounds by
    /// burning that many shuffles, so the RNG stream continues where the
    /// original left off.
    pub fn with_seed_rounds(names: [String; SEATS], seed: u64, rounds_dealt: u32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..rounds_dealt {
            let _ = Deck::shuffled(&mut rng);
        }

        Self {
            players: names.map(Player::new),
            rng,
            seed,
            rounds_dealt,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rounds_dealt(&self) -> u32 {
        self.rounds_dealt
    }

    pub fn players(&self) -> &[Player; SEATS] {
        &self.players
    }

    pub fn player_names(&self) -> [String; SEATS] {
        self.players.each_ref().map(|player| player.name().to_string())
    }

    /// Starts a fresh round: clears every hand, shuffles a standard deck
    /// with the table RNG, and deals it out. Returns the kitty (three cards
    /// at a full table).
    pub fn deal_round(&mut self) -> Vec<Card> {
        for player in &mut self.players {
            player.reset_hand();
        }

        let deck = Deck::shuffled(&mut self.rng);
        let kitty = deal(&mut self.players, deck.cards().iter().copied());
        self.rounds_dealt += 1;
        kitty
    }
}
