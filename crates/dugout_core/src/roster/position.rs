//! Fielding positions and the schematic field coordinate table.

use serde::{Deserialize, Serialize};

/// A position a player can be assigned to: one of the ten field spots or the
/// bench. An unassigned player carries no `Position` at all (`Option::None`
/// at the `Player` level).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Pitcher,
    Catcher,
    #[serde(rename = "First Base")]
    FirstBase,
    #[serde(rename = "Second Base")]
    SecondBase,
    #[serde(rename = "Third Base")]
    ThirdBase,
    Shortstop,
    #[serde(rename = "Left Field")]
    LeftField,
    #[serde(rename = "Left Center Field")]
    LeftCenterField,
    #[serde(rename = "Right Center Field")]
    RightCenterField,
    #[serde(rename = "Right Field")]
    RightField,
    Bench,
}

impl Position {
    /// All positions, in the order a selection UI lists them.
    pub const ALL: [Position; 11] = [
        Position::Pitcher,
        Position::Catcher,
        Position::FirstBase,
        Position::SecondBase,
        Position::ThirdBase,
        Position::Shortstop,
        Position::LeftField,
        Position::LeftCenterField,
        Position::RightCenterField,
        Position::RightField,
        Position::Bench,
    ];

    /// Canonical display label. This is also the stored wire string.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pitcher => "Pitcher",
            Self::Catcher => "Catcher",
            Self::FirstBase => "First Base",
            Self::SecondBase => "Second Base",
            Self::ThirdBase => "Third Base",
            Self::Shortstop => "Shortstop",
            Self::LeftField => "Left Field",
            Self::LeftCenterField => "Left Center Field",
            Self::RightCenterField => "Right Center Field",
            Self::RightField => "Right Field",
            Self::Bench => "Bench",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Pitcher => "P",
            Self::Catcher => "C",
            Self::FirstBase => "1B",
            Self::SecondBase => "2B",
            Self::ThirdBase => "3B",
            Self::Shortstop => "SS",
            Self::LeftField => "LF",
            Self::LeftCenterField => "LCF",
            Self::RightCenterField => "RCF",
            Self::RightField => "RF",
            Self::Bench => "BN",
        }
    }

    /// Parse a canonical label. Exact match only.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|pos| pos.label() == label)
    }

    pub fn is_bench(&self) -> bool {
        matches!(self, Self::Bench)
    }

    /// A fielding assignment, as opposed to the bench.
    pub fn is_fielding(&self) -> bool {
        !self.is_bench()
    }

    /// Where this position sits on the schematic field diagram.
    /// The bench has no spot on the diagram.
    pub fn coordinates(&self) -> Option<FieldCoords> {
        let (x, y) = match self {
            Self::Pitcher => (50.0, 45.0),
            Self::Catcher => (50.0, 60.0),
            Self::FirstBase => (80.0, 50.0),
            Self::SecondBase => (55.0, 30.0),
            Self::ThirdBase => (20.0, 50.0),
            Self::Shortstop => (45.0, 30.0),
            Self::LeftField => (20.0, 15.0),
            Self::LeftCenterField => (35.0, 10.0),
            Self::RightCenterField => (65.0, 10.0),
            Self::RightField => (80.0, 15.0),
            Self::Bench => return None,
        };
        Some(FieldCoords::new(x, y))
    }
}

/// A point on the field diagram, as percentage offsets from the top-left
/// corner of the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldCoords {
    pub x: f32, // 0.0 = left edge, 100.0 = right edge
    pub y: f32, // 0.0 = top edge, 100.0 = bottom edge
}

impl FieldCoords {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x: x.clamp(0.0, 100.0), y: y.clamp(0.0, 100.0) }
    }
}

/// Serde adapter for `Option<Position>` fields stored as a bare label string,
/// where the empty string means "unassigned". Unrecognized labels also load
/// as unassigned so one stray record cannot poison a whole stored roster.
pub(crate) mod position_label {
    use super::Position;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Position>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(position) => serializer.serialize_str(position.label()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Position>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        if label.is_empty() {
            return Ok(None);
        }
        Ok(Position::from_label(&label))
    }
}
