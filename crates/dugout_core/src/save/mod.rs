// Roster persistence: a string-keyed storage contract with file and
// in-memory backends, and the tolerant JSON wire format.

pub mod backend;
pub mod error;
pub mod format;

pub use backend::{FileStorage, MemoryStorage, StorageBackend};
pub use error::SaveError;
pub use format::{deserialize_roster, load_or_default, serialize_roster};

/// The well-known storage key the roster array lives under.
pub const ROSTER_KEY: &str = "players";
