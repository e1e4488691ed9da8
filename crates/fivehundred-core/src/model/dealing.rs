use crate::model::card::Card;
use crate::model::player::Player;

/// Deal an already-shuffled sequence across the players, one card per step
/// in seat order. A full hand diverts the card to the kitty but still
/// advances the cycle by one seat, so kitty composition for player counts
/// that do not divide the dealt portion follows cycle phase exactly; no
/// rebalancing is attempted. With no players the whole sequence is the
/// kitty. Kitty cards keep their input order.
pub fn deal(players: &mut [Player], cards: impl IntoIterator<Item = Card>) -> Vec<Card> {
    let mut kitty = Vec::new();
    if players.is_empty() {
        kitty.extend(cards);
        return kitty;
    }

    let mut seat = 0;
    for card in cards {
        if players[seat].give_card(card).is_err() {
            kitty.push(card);
        }
        seat = (seat + 1) % players.len();
    }
    kitty
}

#[cfg(test)]
mod tests {
    use super::deal;
    use crate::model::card::Card;
    use crate::model::deck::{DECK_SIZE, Deck};
    use crate::model::hand::Hand;
    use crate::model::player::Player;

    fn table_of(count: usize) -> Vec<Player> {
        (1..=count).map(|n| Player::new(format!("Player {n}"))).collect()
    }

    #[test]
    fn four_players_get_ten_each_and_three_card_kitty() {
        let mut players = table_of(4);
        let deck = Deck::standard();
        let kitty = deal(&mut players, deck.cards().iter().copied());

        for player in &players {
            assert_eq!(player.hand().len(), 10, "{}", player.name());
        }
        assert_eq!(kitty, deck.cards()[40..].to_vec());
    }

    #[test]
    fn cards_cycle_seats_in_input_order() {
        let mut players = table_of(4);
        let cards: Vec<Card> = Deck::canonical_cards().collect();
        deal(&mut players, cards.iter().copied());

        for (index, card) in cards[..40].iter().enumerate() {
            let seat = index % 4;
            assert_eq!(players[seat].hand().cards()[index / 4], *card);
        }
    }

    #[test]
    fn conservation_holds_for_non_dividing_player_counts() {
        for count in [3usize, 5] {
            let mut players = table_of(count);
            let deck = Deck::standard();
            let kitty = deal(&mut players, deck.cards().iter().copied());
            let held: usize = players.iter().map(|p| p.hand().len()).sum();
            assert_eq!(held + kitty.len(), DECK_SIZE);
            for player in &players {
                assert!(player.hand().len() <= Hand::CAPACITY);
            }
        }
    }

    #[test]
    fn three_player_kitty_follows_cycle_phase() {
        // 43 cards over 3 seats: all three hands are full once 30 cards have
        // gone out, so the last 13 overflow in input order.
        let mut players = table_of(3);
        let cards: Vec<Card> = Deck::canonical_cards().collect();
        let kitty = deal(&mut players, cards.iter().copied());

        assert_eq!(kitty.len(), 13);
        assert_eq!(kitty, cards[30..].to_vec());
        for player in &players {
            assert_eq!(player.hand().len(), 10);
        }
    }

    #[test]
    fn full_seats_are_not_skipped_for_later_cards() {
        let mut players = table_of(2);
        let cards: Vec<Card> = Deck::canonical_cards().take(24).collect();
        let kitty = deal(&mut players, cards.iter().copied());

        // Cards 21..24 land after both hands are full, alternating seats.
        assert_eq!(kitty, cards[20..].to_vec());
        assert_eq!(players[0].hand().len(), 10);
        assert_eq!(players[1].hand().len(), 10);
    }

    #[test]
    fn empty_table_returns_whole_deck_as_kitty() {
        let mut players: Vec<Player> = Vec::new();
        let deck = Deck::standard();
        let kitty = deal(&mut players, deck.cards().iter().copied());
        assert_eq!(kitty, deck.cards().to_vec());
    }

    #[test]
    fn prefilled_hands_divert_early() {
        let mut players = table_of(1);
        for card in Deck::canonical_cards().take(10) {
            players[0].give_card(card).unwrap();
        }
        let extra: Vec<Card> = Deck::canonical_cards().skip(10).take(3).collect();
        let kitty = deal(&mut players, extra.iter().copied());
        assert_eq!(kitty, extra);
        assert_eq!(players[0].hand().len(), 10);
    }
}
