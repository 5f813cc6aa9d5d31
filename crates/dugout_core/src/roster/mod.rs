//! Roster domain model
//!
//! This module contains:
//! - Player: the single roster entry
//! - Position: fielding assignments, the bench, and field coordinates
//! - Roster: the ordered player sequence (order = batting lineup order)

pub mod player;
pub mod position;

pub use player::Player;
pub use position::{FieldCoords, Position};

use serde::{Deserialize, Serialize};

/// The ordered list of all players. Sequence order IS the batting lineup
/// order: index 0 bats first, and the displayed batting number is derived as
/// index + 1 at render time, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<Player>);

impl Roster {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.0.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.0.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Player> {
        self.0.iter_mut().find(|p| p.id == id)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.0.iter().any(|p| p.name == name)
    }

    pub fn position_of(&self, id: &str) -> Option<Position> {
        self.get(id).and_then(|p| p.position)
    }

    /// Append a player to the end of the lineup (new players bat last).
    pub fn push(&mut self, player: Player) {
        self.0.push(player);
    }

    /// Remove the player with the given id, preserving the relative order of
    /// everyone else. Returns the removed player, or `None` if the id is
    /// unknown.
    pub fn remove(&mut self, id: &str) -> Option<Player> {
        let index = self.0.iter().position(|p| p.id == id)?;
        Some(self.0.remove(index))
    }

    pub fn fielded(&self) -> impl Iterator<Item = &Player> {
        self.0.iter().filter(|p| p.is_fielded())
    }

    pub fn benched(&self) -> impl Iterator<Item = &Player> {
        self.0.iter().filter(|p| p.is_benched())
    }

    pub fn unassigned(&self) -> impl Iterator<Item = &Player> {
        self.0.iter().filter(|p| p.is_unassigned())
    }

    pub fn into_vec(self) -> Vec<Player> {
        self.0
    }
}

impl From<Vec<Player>> for Roster {
    fn from(players: Vec<Player>) -> Self {
        Self(players)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
