//! Lineup engine flows: structure changes, auto-fill, manual moves, CSV, reports.

mod auto_fill;
mod moves;
mod report;
mod roster_csv;
mod structure;

pub use auto_fill::auto_fill_lineup;
pub use moves::{apply_move, MoveEvent, MoveTarget, AVAILABLE_ZONE};
pub use report::{lineup_sheet, LineupSheet, PlayerView, RowView, SlotView};
pub use roster_csv::{
    export_roster_csv, import_roster_csv, normalize_leadership, normalize_position,
    normalize_stick, parse_can_play, CsvFileError, ImportReport,
};
pub use structure::{
    add_defence_pair, add_forward_line, backup_goalie_removal_displaced,
    defence_pair_removal_displaced, forward_line_removal_displaced, remove_defence_pair,
    remove_forward_line, toggle_backup_goalie,
};
