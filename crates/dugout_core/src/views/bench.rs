//! The bench view: bench players with their notes.

use serde::{Deserialize, Serialize};

use crate::roster::Roster;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchRow {
    pub id: String,
    pub name: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchView {
    pub rows: Vec<BenchRow>,
}

pub fn render(roster: &Roster) -> BenchView {
    let rows = roster
        .benched()
        .map(|player| BenchRow {
            id: player.id.clone(),
            name: player.name.clone(),
            notes: player.notes.clone(),
        })
        .collect();

    BenchView { rows }
}
