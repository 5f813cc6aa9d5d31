//! The roster store: the single owner of the player sequence.
//!
//! Every command is a synchronous read-modify-persist-return. The store owns
//! its roster and its storage backend outright; renderers receive `&Roster`
//! and hold no mutable reference. There is no global instance anywhere in
//! this crate: callers construct a store and pass it where it is needed.

use tracing::warn;

use crate::error::{Result, RosterError};
use crate::roster::{Player, Position, Roster};
use crate::save::{load_or_default, serialize_roster, SaveError, StorageBackend, ROSTER_KEY};

pub struct RosterStore<S: StorageBackend> {
    storage: S,
    roster: Roster,
}

impl<S: StorageBackend> RosterStore<S> {
    /// Open a store over the given backend, loading whatever roster it
    /// holds. Absent or unreadable stored content yields an empty roster;
    /// only backend I/O failures surface.
    pub fn open(storage: S) -> std::result::Result<Self, SaveError> {
        let content = storage.get(ROSTER_KEY)?;
        let roster = load_or_default(content.as_deref());
        Ok(Self { storage, roster })
    }

    /// The current roster, for renderers and other read-only collaborators.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Re-run the tolerant load from the backend, replacing the in-memory
    /// roster.
    pub fn reload(&mut self) -> std::result::Result<(), SaveError> {
        let content = self.storage.get(ROSTER_KEY)?;
        self.roster = load_or_default(content.as_deref());
        Ok(())
    }

    /// Persist the full roster, replacing any prior stored value.
    pub fn save(&mut self) -> std::result::Result<(), SaveError> {
        let payload = serialize_roster(&self.roster)?;
        self.storage.set(ROSTER_KEY, &payload)
    }

    /// Append a new player to the end of the lineup (new players bat last).
    /// Rejects a name already taken by any player.
    pub fn add_player(&mut self, name: &str) -> Result<Player> {
        if self.roster.contains_name(name) {
            return Err(RosterError::DuplicateName { name: name.to_string() });
        }

        let player = Player::new(name);
        self.roster.push(player.clone());
        self.save()?;
        Ok(player)
    }

    /// Rename a player. The duplicate check compares by identity, so renaming
    /// a player to its own current name succeeds. Unknown ids are ignored.
    pub fn rename_player(&mut self, id: &str, new_name: &str) -> Result<()> {
        if self.roster.get(id).is_none() {
            return Ok(());
        }
        if self.roster.iter().any(|p| p.id != id && p.name == new_name) {
            return Err(RosterError::DuplicateName { name: new_name.to_string() });
        }

        if let Some(player) = self.roster.get_mut(id) {
            player.name = new_name.to_string();
        }
        self.save()?;
        Ok(())
    }

    /// Assign a position, or `None` to unassign. No uniqueness constraint:
    /// two players may hold the same field position at once. Unknown ids are
    /// ignored.
    pub fn set_position(&mut self, id: &str, position: Option<Position>) -> Result<()> {
        match self.roster.get_mut(id) {
            Some(player) => player.position = position,
            None => return Ok(()),
        }
        self.save()?;
        Ok(())
    }

    /// Set a player's bench notes. Unknown ids are ignored.
    pub fn set_notes(&mut self, id: &str, notes: &str) -> Result<()> {
        match self.roster.get_mut(id) {
            Some(player) => player.notes = notes.to_string(),
            None => return Ok(()),
        }
        self.save()?;
        Ok(())
    }

    /// Remove a player, preserving the relative order of the rest. Unknown
    /// ids are ignored, and nothing is written when nothing changed.
    pub fn remove_player(&mut self, id: &str) -> Result<()> {
        if self.roster.remove(id).is_some() {
            self.save()?;
        }
        Ok(())
    }

    /// Replace the lineup order with the sequence implied by `ids`.
    ///
    /// The canonical sequence is re-derived from the id list rather than
    /// swapped in place, so displayed order and stored order cannot drift
    /// apart. Ids that match no player are skipped. A player whose id is
    /// absent from `ids` is dropped from the roster entirely; callers must
    /// pass the complete surviving ordering, exactly once per completed
    /// reorder gesture.
    pub fn reorder(&mut self, ids: &[String]) -> Result<()> {
        let mut remaining = std::mem::take(&mut self.roster).into_vec();
        let mut next = Vec::with_capacity(remaining.len());

        for id in ids {
            match remaining.iter().position(|p| &p.id == id) {
                Some(index) => next.push(remaining.remove(index)),
                None => warn!("Reorder referenced unknown player id {}", id),
            }
        }

        for dropped in &remaining {
            warn!("Player {:?} ({}) absent from reorder list, dropping", dropped.name, dropped.id);
        }

        self.roster = Roster::from(next);
        self.save()?;
        Ok(())
    }
}
