//! The player entity and its stored record shape.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::position::{position_label, Position};

/// A single roster entry.
///
/// The stored record is exactly `{id, name, position, notes}`. Older stored
/// data may lack `id`, `position`, or `notes`; those fields default on load
/// (an absent id is re-minted by the loader, see `save::format`).
///
/// `id` is assigned once at creation and never changes afterwards. Names are
/// user-editable and indices shift under reordering, so neither is ever used
/// as identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub id: String,

    pub name: String,

    /// `None` = unassigned. Stored as the position label, empty string for
    /// unassigned.
    #[serde(default, with = "position_label")]
    pub position: Option<Position>,

    /// Free text, only meaningful while the player sits on the bench.
    #[serde(default)]
    pub notes: String,
}

impl Player {
    /// Create a new unassigned player with a freshly minted id.
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            position: None,
            notes: String::new(),
        }
    }

    pub fn is_fielded(&self) -> bool {
        self.position.map(|p| p.is_fielding()).unwrap_or(false)
    }

    pub fn is_benched(&self) -> bool {
        self.position.map(|p| p.is_bench()).unwrap_or(false)
    }

    pub fn is_unassigned(&self) -> bool {
        self.position.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_is_unassigned_with_unique_id() {
        let a = Player::new("Alice");
        let b = Player::new("Bob");

        assert!(a.is_unassigned());
        assert!(!a.is_fielded());
        assert!(!a.is_benched());
        assert!(a.notes.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn assignment_states_are_mutually_exclusive() {
        let mut player = Player::new("Alice");

        player.position = Some(Position::Pitcher);
        assert!(player.is_fielded() && !player.is_benched() && !player.is_unassigned());

        player.position = Some(Position::Bench);
        assert!(!player.is_fielded() && player.is_benched() && !player.is_unassigned());

        player.position = None;
        assert!(!player.is_fielded() && !player.is_benched() && player.is_unassigned());
    }

    #[test]
    fn stored_record_shape() {
        let player = Player {
            id: "abc".to_string(),
            name: "Alice".to_string(),
            position: Some(Position::FirstBase),
            notes: String::new(),
        };
        let json = serde_json::to_string(&player).unwrap();
        assert_eq!(json, r#"{"id":"abc","name":"Alice","position":"First Base","notes":""}"#);
    }

    #[test]
    fn loads_records_with_missing_optional_fields() {
        // A record written by an older variant that never stored ids or notes.
        let player: Player = serde_json::from_str(r#"{"name":"Alice"}"#).unwrap();
        assert_eq!(player.name, "Alice");
        assert!(player.id.is_empty());
        assert_eq!(player.position, None);
        assert_eq!(player.notes, "");
    }

    #[test]
    fn unset_position_stores_as_empty_string() {
        let player: Player =
            serde_json::from_str(r#"{"id":"x","name":"Alice","position":"","notes":""}"#).unwrap();
        assert_eq!(player.position, None);

        let json = serde_json::to_string(&player).unwrap();
        assert!(json.contains(r#""position":"""#));
    }

    #[test]
    fn unknown_position_label_loads_as_unassigned() {
        let player: Player =
            serde_json::from_str(r#"{"id":"x","name":"Alice","position":"Designated Hitter"}"#)
                .unwrap();
        assert_eq!(player.position, None);
    }
}
