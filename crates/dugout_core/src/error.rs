use std::fmt;

use crate::save::SaveError;

#[derive(Debug)]
pub enum RosterError {
    /// The add or rename would leave two players with the same name. The
    /// triggering edit is rejected and the prior value retained.
    DuplicateName { name: String },
    /// The backend failed to persist the roster.
    Save(SaveError),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RosterError::DuplicateName { name } => {
                write!(f, "A player named {:?} already exists", name)
            }
            RosterError::Save(err) => {
                write!(f, "Failed to persist roster: {}", err)
            }
        }
    }
}

impl std::error::Error for RosterError {}

impl From<SaveError> for RosterError {
    fn from(err: SaveError) -> Self {
        RosterError::Save(err)
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
