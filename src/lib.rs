//! Ice hockey lineup builder: library with models and lineup-engine logic.

pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{
    add_defence_pair, add_forward_line, apply_move, auto_fill_lineup,
    backup_goalie_removal_displaced, defence_pair_removal_displaced, export_roster_csv,
    forward_line_removal_displaced, import_roster_csv, lineup_sheet, remove_defence_pair,
    remove_forward_line, toggle_backup_goalie, ImportReport, LineupSheet, MoveEvent, MoveTarget,
    AVAILABLE_ZONE,
};
pub use models::{
    canonical_slots, role_code_of, AppData, Leadership, Lineup, LineupCollection, LineupId,
    Player, PlayerDraft, PlayerId, Position, RoleCode, RosterError, SlotId, Stick, Team, TeamId,
    MAX_DEFENCE_PAIRS, MAX_FORWARD_LINES, SLOT_GOALIE_BACKUP, SLOT_GOALIE_START,
};
