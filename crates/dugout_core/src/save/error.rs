use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Corrupted data")]
    Corrupted,
}

impl SaveError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            SaveError::Io(_) => true,
            SaveError::Serialization(_) => false,
            // Unreadable stored content degrades to an empty roster rather
            // than surfacing to the user.
            SaveError::Deserialization(_) => true,
            SaveError::Corrupted => true,
        }
    }
}
