use super::table::{SEATS, Table};
use serde::{Deserialize, Serialize};

/// JSON snapshot of a table. Hands are not persisted: restoring replays the
/// seeded shuffle stream, so the next deal matches what the original table
/// would have dealt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableSnapshot {
    pub seed: u64,
    pub rounds_dealt: u32,
    pub player_names: [String; SEATS],
}

impl TableSnapshot {
    pub fn capture(table: &Table) -> Self {
        TableSnapshot {
            seed: table.seed(),
            rounds_dealt: table.rounds_dealt(),
            player_names: table.player_names(),
        }
    }

    pub fn restore(self) -> Table {
        Table::with_seed_rounds(self.player_names, self.seed, self.rounds_dealt)
    }

    pub fn to_json(table: &Table) -> serde_json::Result<String> {
        let snapshot = Self::capture(table);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
