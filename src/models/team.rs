//! Team roster: players plus the validation rules for editing them.

use crate::models::player::{Leadership, Player, PlayerDraft, PlayerId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team.
pub type TeamId = Uuid;

/// Errors from roster operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RosterError {
    /// Jersey number must be a positive integer.
    InvalidNumber,
    /// Another player on the team already wears this number.
    DuplicateNumber(u32),
    /// Name is required (after trimming).
    MissingName,
    /// The team already has a Captain.
    CaptainTaken,
    /// The team already has two Alternates.
    AlternatesFull,
    /// Player not found on this team.
    PlayerNotFound(PlayerId),
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::InvalidNumber => write!(f, "Number must be a positive integer"),
            RosterError::DuplicateNumber(n) => {
                write!(f, "Number {} is already used in this team", n)
            }
            RosterError::MissingName => write!(f, "Name is required"),
            RosterError::CaptainTaken => write!(f, "Only one Captain (C) is allowed per team"),
            RosterError::AlternatesFull => {
                write!(f, "Only two Alternates (A) are allowed per team")
            }
            RosterError::PlayerNotFound(_) => write!(f, "Player not found"),
        }
    }
}

/// A team and its roster.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            players: Vec::new(),
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Validate a draft against the roster. `editing` is the id of the player
    /// being edited (so their own number/letter doesn't clash with itself).
    pub fn validate_draft(
        &self,
        draft: &PlayerDraft,
        editing: Option<PlayerId>,
    ) -> Result<(), RosterError> {
        if draft.number == 0 {
            return Err(RosterError::InvalidNumber);
        }
        let others = self.players.iter().filter(|p| Some(p.id) != editing);
        if others.clone().any(|p| p.number == draft.number) {
            return Err(RosterError::DuplicateNumber(draft.number));
        }
        if draft.name.trim().is_empty() {
            return Err(RosterError::MissingName);
        }
        match draft.leadership {
            Leadership::Captain => {
                if others.clone().any(|p| p.leadership == Leadership::Captain) {
                    return Err(RosterError::CaptainTaken);
                }
            }
            Leadership::Alternate => {
                let count = others
                    .filter(|p| p.leadership == Leadership::Alternate)
                    .count();
                if count >= 2 {
                    return Err(RosterError::AlternatesFull);
                }
            }
            Leadership::None => {}
        }
        Ok(())
    }

    /// Add a player from a draft. Returns the new player's id.
    pub fn add_player(&mut self, draft: PlayerDraft) -> Result<PlayerId, RosterError> {
        self.validate_draft(&draft, None)?;
        let player = Player::from_draft(draft);
        let id = player.id;
        self.players.push(player);
        Ok(id)
    }

    /// Replace an existing player's attributes from a draft (id is kept).
    pub fn update_player(
        &mut self,
        player_id: PlayerId,
        draft: PlayerDraft,
    ) -> Result<(), RosterError> {
        if self.player(player_id).is_none() {
            return Err(RosterError::PlayerNotFound(player_id));
        }
        self.validate_draft(&draft, Some(player_id))?;
        if let Some(p) = self.players.iter_mut().find(|p| p.id == player_id) {
            p.number = draft.number;
            p.name = draft.name.trim().to_string();
            p.preferred_position = draft.preferred_position;
            p.leadership = draft.leadership;
            p.stick = draft.stick;
            p.can_play = draft.can_play;
            p.notes = draft.notes;
        }
        Ok(())
    }

    /// Remove a player from the roster. Lineup cleanup is the app-data
    /// layer's job (it owns the lineup collections).
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<Player, RosterError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(RosterError::PlayerNotFound(player_id))?;
        Ok(self.players.remove(idx))
    }
}
