//! Derived views of the roster.
//!
//! Each view is a pure function of `&Roster` producing a serializable view
//! model; the host owns the actual display surface. Callers re-render all
//! three after every store mutation so the dependent surfaces never drift
//! from the canonical sequence.

pub mod bench;
pub mod field;
pub mod roster;

pub use bench::{BenchRow, BenchView};
pub use field::{FieldDiagramView, FieldLabel};
pub use roster::{RosterRow, RosterView};

use serde::{Deserialize, Serialize};

use crate::roster::Roster;

/// All three views, refreshed together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewBundle {
    pub roster: RosterView,
    pub field: FieldDiagramView,
    pub bench: BenchView,
}

pub fn render_all(roster: &Roster) -> ViewBundle {
    ViewBundle {
        roster: roster::render(roster),
        field: field::render(roster),
        bench: bench::render(roster),
    }
}
