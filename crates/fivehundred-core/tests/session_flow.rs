use fivehundred_core::game::serialization::TableSnapshot;
use fivehundred_core::game::session::{MenuChoice, Session, SessionIo};
use fivehundred_core::game::table::Table;
use fivehundred_core::model::bid::all_bids;
use fivehundred_core::model::card::Card;
use fivehundred_core::model::deck::DECK_SIZE;

fn seats() -> [String; 4] {
    ["North", "East", "South", "West"].map(String::from)
}

/// Drives a table through the session loop the way a front end would: each
/// round deals, and the summary reports the kitty size.
struct TableIo {
    table: Table,
    rounds_to_play: usize,
    kitties: Vec<Vec<Card>>,
}

impl SessionIo for TableIo {
    fn main_menu(&mut self) -> MenuChoice {
        if self.kitties.len() < self.rounds_to_play {
            MenuChoice::Play
        } else {
            MenuChoice::Quit
        }
    }

    fn play_round(&mut self) {
        let kitty = self.table.deal_round();
        self.kitties.push(kitty);
    }

    fn round_summary(&mut self) {}

    fn shutdown(&mut self) {}
}

#[test]
fn session_deals_a_full_table_each_round() {
    let mut io = TableIo {
        table: Table::with_seed(seats(), 2024),
        rounds_to_play: 3,
        kitties: Vec::new(),
    };
    let mut session = Session::new();
    session.run(&mut io).unwrap();

    assert!(session.is_finished());
    assert_eq!(io.kitties.len(), 3);
    for kitty in &io.kitties {
        assert_eq!(kitty.len(), 3);
    }
    assert_eq!(io.table.rounds_dealt(), 3);

    let held: usize = io.table.players().iter().map(|p| p.hand().len()).sum();
    assert_eq!(held + io.kitties.last().unwrap().len(), DECK_SIZE);
}

#[test]
fn snapshot_taken_mid_session_resumes_the_same_deals() {
    let mut io = TableIo {
        table: Table::with_seed(seats(), 777),
        rounds_to_play: 1,
        kitties: Vec::new(),
    };
    Session::new().run(&mut io).unwrap();

    let json = TableSnapshot::to_json(&io.table).unwrap();
    let mut resumed = TableSnapshot::from_json(&json).unwrap().restore();

    let mut original = io.table;
    assert_eq!(original.deal_round(), resumed.deal_round());
    for (a, b) in original.players().iter().zip(resumed.players().iter()) {
        assert_eq!(a.hand().cards(), b.hand().cards());
    }
}

#[test]
fn bid_ladder_is_strictly_increasing_within_each_family() {
    let bids: Vec<_> = all_bids().collect();
    assert_eq!(bids.len(), 27);
    for window in bids.windows(2) {
        if window[0].bid_type() == window[1].bid_type() {
            assert!(window[0].points() < window[1].points());
        }
    }
    assert_eq!(bids[0].points(), 40);
    assert_eq!(bids[26].points(), 500);
}
