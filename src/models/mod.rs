//! Data structures for the lineup builder: players, teams, slots, lineups.

mod app_data;
mod lineup;
mod player;
mod slot;
mod team;

pub use app_data::AppData;
pub use lineup::{Lineup, LineupCollection, LineupId};
pub use player::{Leadership, Player, PlayerDraft, PlayerId, Position, Stick};
pub use slot::{
    canonical_slots, defence_pair_slots, defence_slot, forward_line_slots, forward_slot,
    role_code_of, RoleCode, SlotId, MAX_DEFENCE_PAIRS, MAX_FORWARD_LINES, SLOT_GOALIE_BACKUP,
    SLOT_GOALIE_START,
};
pub use team::{RosterError, Team, TeamId};
