//! Player data structures and the role-compatibility check.

use crate::models::slot::RoleCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in assignments and lookups).
pub type PlayerId = Uuid;

/// Position a player prefers to play.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Centre,
    #[default]
    Wing,
    Defender,
    Goalie,
}

impl Position {
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Centre => "Centre",
            Position::Wing => "Wing",
            Position::Defender => "Defender",
            Position::Goalie => "Goalie",
        }
    }
}

/// Leadership letter worn on the jersey: at most one Captain and two
/// Alternates per team (enforced by the roster, not here).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Leadership {
    #[default]
    None,
    Captain,
    Alternate,
}

impl Leadership {
    /// Jersey letter: `"C"`, `"A"`, or empty.
    pub fn letter(self) -> &'static str {
        match self {
            Leadership::None => "",
            Leadership::Captain => "C",
            Leadership::Alternate => "A",
        }
    }
}

/// Stick handedness.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stick {
    Left,
    Right,
}

impl Stick {
    /// Short label used on lineup sheets (`LH` / `RH`).
    pub fn label(self) -> &'static str {
        match self {
            Stick::Left => "LH",
            Stick::Right => "RH",
        }
    }
}

/// A rostered player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Jersey number, unique within the team.
    pub number: u32,
    pub name: String,
    pub preferred_position: Position,
    pub leadership: Leadership,
    pub stick: Option<Stick>,
    /// Roles the player has declared playable. Empty means no restriction.
    pub can_play: Vec<RoleCode>,
    pub notes: String,
}

/// Input for creating or editing a player; the roster validates it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayerDraft {
    pub number: u32,
    pub name: String,
    #[serde(default)]
    pub preferred_position: Position,
    #[serde(default)]
    pub leadership: Leadership,
    #[serde(default)]
    pub stick: Option<Stick>,
    #[serde(default)]
    pub can_play: Vec<RoleCode>,
    #[serde(default)]
    pub notes: String,
}

impl Player {
    /// Create a player from a validated draft.
    pub fn from_draft(draft: PlayerDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            number: draft.number,
            name: draft.name.trim().to_string(),
            preferred_position: draft.preferred_position,
            leadership: draft.leadership,
            stick: draft.stick,
            can_play: draft.can_play,
            notes: draft.notes,
        }
    }

    /// True when the player's declared roles exclude `role`. An empty
    /// `can_play` list declares no restriction, so it never mismatches.
    pub fn role_mismatch(&self, role: RoleCode) -> bool {
        if self.can_play.is_empty() {
            return false;
        }
        !self.can_play.contains(&role)
    }

    /// Stick label for display, empty when unknown.
    pub fn stick_label(&self) -> &'static str {
        self.stick.map(Stick::label).unwrap_or("")
    }
}
