//! # dugout_core - Roster & Batting Lineup Core
//!
//! This library provides the headless core of a baseball team roster and
//! lineup editor: an ordered roster whose sequence is the batting order,
//! fielding position assignment, a bench with free-text notes, and a JSON
//! API for easy integration with display hosts.
//!
//! ## Features
//! - Single source of truth: one store owns the player sequence, every
//!   command persists the full roster before returning
//! - Stable-id reorder protocol for drag-and-drop lineup editing
//! - Three derived views (roster list, field diagram, bench table) computed
//!   as pure functions of the roster
//! - Tolerant loader: absent or corrupt stored data degrades to an empty
//!   roster, never an error

pub mod api;
pub mod error;
pub mod roster;
pub mod save;
pub mod store;
pub mod views;

// Re-export main API functions
pub use api::{
    add_player_json, get_views_json, remove_player_json, rename_player_json, reorder_json,
    set_notes_json, set_position_json, ApiError, ApiResponse, API_VERSION,
};
pub use error::{Result, RosterError};

// Re-export the domain model
pub use roster::{FieldCoords, Player, Position, Roster};

// Re-export the persistence layer
pub use save::{FileStorage, MemoryStorage, SaveError, StorageBackend, ROSTER_KEY};

// Re-export the store
pub use store::RosterStore;

// Re-export view models
pub use views::{
    render_all, BenchRow, BenchView, FieldDiagramView, FieldLabel, RosterRow, RosterView,
    ViewBundle,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
