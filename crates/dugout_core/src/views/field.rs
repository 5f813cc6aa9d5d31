//! The field diagram view: one label per fielded player, placed at the
//! static coordinate for that position.

use serde::{Deserialize, Serialize};

use crate::roster::{FieldCoords, Position, Roster};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldLabel {
    pub name: String,
    pub position: Position,
    pub coords: FieldCoords,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDiagramView {
    pub labels: Vec<FieldLabel>,
}

/// Bench and unassigned players do not appear. Players sharing a position
/// produce overlapping labels at the same coordinate; there is no collision
/// avoidance.
pub fn render(roster: &Roster) -> FieldDiagramView {
    let labels = roster
        .fielded()
        .filter_map(|player| {
            let position = player.position?;
            let coords = position.coordinates()?;
            Some(FieldLabel { name: player.name.clone(), position, coords })
        })
        .collect();

    FieldDiagramView { labels }
}
