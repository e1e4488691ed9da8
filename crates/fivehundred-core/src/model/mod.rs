pub mod bid;
pub mod card;
pub mod dealing;
pub mod deck;
pub mod hand;
pub mod player;
pub mod rank;
pub mod suit;
