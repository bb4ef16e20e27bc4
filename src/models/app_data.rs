//! Whole-application state: the one blob handed to load/save.

use crate::models::lineup::LineupCollection;
use crate::models::player::PlayerId;
use crate::models::team::{RosterError, Team, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Everything the app persists: teams with rosters, and each team's lineup
/// collection. Persisted as one opaque structure; the engine never saves
/// partial state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppData {
    pub teams: Vec<Team>,
    pub active_team_id: Option<TeamId>,
    #[serde(default)]
    pub lineups_by_team: HashMap<TeamId, LineupCollection>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AppData {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            teams: Vec::new(),
            active_team_id: None,
            lineups_by_team: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    /// Add a team (with a seeded lineup collection) and make it active.
    pub fn add_team(&mut self, team: Team) -> TeamId {
        let id = team.id;
        self.teams.push(team);
        self.lineups_by_team.insert(id, LineupCollection::new());
        self.active_team_id = Some(id);
        self.touch();
        id
    }

    /// Remove a team, its lineups, and fix the active pointer.
    pub fn remove_team(&mut self, id: TeamId) {
        self.teams.retain(|t| t.id != id);
        self.lineups_by_team.remove(&id);
        if self.active_team_id == Some(id) {
            self.active_team_id = self.teams.first().map(|t| t.id);
        }
        self.touch();
    }

    /// Point the active marker at `id`. No-op if `id` is not a member.
    pub fn set_active_team(&mut self, id: TeamId) {
        if self.teams.iter().any(|t| t.id == id) {
            self.active_team_id = Some(id);
            self.touch();
        }
    }

    /// Lineup collection for a team, seeding a default one on first access.
    pub fn lineups_for(&mut self, team_id: TeamId) -> &mut LineupCollection {
        self.lineups_by_team
            .entry(team_id)
            .or_insert_with(LineupCollection::new)
    }

    /// Remove a player from a team's roster and from every lineup of that
    /// team, so no lineup keeps a dangling id.
    pub fn remove_player(
        &mut self,
        team_id: TeamId,
        player_id: PlayerId,
    ) -> Result<(), RosterError> {
        let team = self
            .team_mut(team_id)
            .ok_or(RosterError::PlayerNotFound(player_id))?;
        team.remove_player(player_id)?;
        if let Some(collection) = self.lineups_by_team.get_mut(&team_id) {
            collection.unassign_player_everywhere(player_id);
        }
        self.touch();
        Ok(())
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for AppData {
    fn default() -> Self {
        Self::new()
    }
}
