//! The roster wire format: one JSON array of `{id, name, position, notes}`
//! records, stored as a whole under a single key.

use uuid::Uuid;

use super::error::SaveError;
use crate::roster::Roster;

/// Serialize the full roster. Full-replace semantics: the output always
/// represents the entire sequence.
pub fn serialize_roster(roster: &Roster) -> Result<String, SaveError> {
    serde_json::to_string(roster).map_err(|e| SaveError::Serialization(e.to_string()))
}

/// Strict parse of stored content. Callers that want the fail-soft contract
/// go through [`load_or_default`] instead.
pub fn deserialize_roster(content: &str) -> Result<Roster, SaveError> {
    serde_json::from_str(content).map_err(|e| SaveError::Deserialization(e.to_string()))
}

/// The tolerant load path: absent, empty, or unreadable content yields an
/// empty roster and is never an error. Records that survive the parse are
/// normalized so the uniqueness invariants hold from the first observable
/// instant.
pub fn load_or_default(content: Option<&str>) -> Roster {
    let content = match content {
        Some(c) if !c.trim().is_empty() => c,
        _ => return Roster::new(),
    };

    match deserialize_roster(content) {
        Ok(roster) => normalize(roster),
        Err(e) => {
            log::warn!("Discarding unreadable roster data: {}", e);
            Roster::new()
        }
    }
}

/// Repair what older variants may have stored: records without an id get a
/// fresh one, and records that collide on id or name are dropped, first
/// occurrence wins.
fn normalize(roster: Roster) -> Roster {
    let mut seen_ids = std::collections::HashSet::new();
    let mut seen_names = std::collections::HashSet::new();
    let mut players = Vec::with_capacity(roster.len());

    for mut player in roster.into_vec() {
        if player.id.is_empty() {
            player.id = Uuid::new_v4().to_string();
        }

        if !seen_ids.insert(player.id.clone()) {
            log::warn!("Dropping stored player {:?} with duplicate id {}", player.name, player.id);
            continue;
        }
        if !seen_names.insert(player.name.clone()) {
            log::warn!("Dropping stored player with duplicate name {:?}", player.name);
            continue;
        }

        players.push(player);
    }

    Roster::from(players)
}
