//! The roster list view: every player in lineup order.

use serde::{Deserialize, Serialize};

use crate::roster::{Position, Roster};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterRow {
    /// 1-based batting order number, derived from sequence position.
    pub order: usize,
    pub id: String,
    pub name: String,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterView {
    pub rows: Vec<RosterRow>,
}

pub fn render(roster: &Roster) -> RosterView {
    let rows = roster
        .iter()
        .enumerate()
        .map(|(index, player)| RosterRow {
            order: index + 1,
            id: player.id.clone(),
            name: player.name.clone(),
            position: player.position,
        })
        .collect();

    RosterView { rows }
}
