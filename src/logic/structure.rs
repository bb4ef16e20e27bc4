//! Structural mutation: line/pair counts and the backup-goalie toggle.
//!
//! Removals follow a two-phase protocol: the `*_displaced` functions report
//! how many occupants a removal would unassign, the caller obtains whatever
//! confirmation it wants, then invokes the mutation. The mutation itself
//! never asks.

use crate::models::{
    defence_pair_slots, forward_line_slots, Lineup, MAX_DEFENCE_PAIRS, MAX_FORWARD_LINES,
    SLOT_GOALIE_BACKUP,
};

/// Add a forward line. Returns `false` (no-op) at the maximum.
pub fn add_forward_line(lineup: &mut Lineup) -> bool {
    if lineup.forward_lines >= MAX_FORWARD_LINES {
        return false;
    }
    lineup.forward_lines += 1;
    lineup.normalize();
    lineup.touch();
    true
}

/// Occupants that removing the highest-indexed forward line would unassign.
pub fn forward_line_removal_displaced(lineup: &Lineup) -> usize {
    if lineup.forward_lines <= 1 {
        return 0;
    }
    lineup.assigned_count_in(&forward_line_slots(lineup.forward_lines))
}

/// Remove the highest-indexed forward line, unassigning its occupants.
/// Returns `false` (no-op) at the minimum of 1.
pub fn remove_forward_line(lineup: &mut Lineup) -> bool {
    if lineup.forward_lines <= 1 {
        return false;
    }
    for slot in forward_line_slots(lineup.forward_lines) {
        lineup.assignments.insert(slot, None);
    }
    lineup.forward_lines -= 1;
    lineup.normalize();
    lineup.touch();
    true
}

/// Add a defence pair. Returns `false` (no-op) at the maximum.
pub fn add_defence_pair(lineup: &mut Lineup) -> bool {
    if lineup.defence_pairs >= MAX_DEFENCE_PAIRS {
        return false;
    }
    lineup.defence_pairs += 1;
    lineup.normalize();
    lineup.touch();
    true
}

/// Occupants that removing the highest-indexed defence pair would unassign.
pub fn defence_pair_removal_displaced(lineup: &Lineup) -> usize {
    if lineup.defence_pairs <= 1 {
        return 0;
    }
    lineup.assigned_count_in(&defence_pair_slots(lineup.defence_pairs))
}

/// Remove the highest-indexed defence pair, unassigning its occupants.
/// Returns `false` (no-op) at the minimum of 1.
pub fn remove_defence_pair(lineup: &mut Lineup) -> bool {
    if lineup.defence_pairs <= 1 {
        return false;
    }
    for slot in defence_pair_slots(lineup.defence_pairs) {
        lineup.assignments.insert(slot, None);
    }
    lineup.defence_pairs -= 1;
    lineup.normalize();
    lineup.touch();
    true
}

/// Occupants that disabling the backup goalie would unassign (0 or 1).
pub fn backup_goalie_removal_displaced(lineup: &Lineup) -> usize {
    if !lineup.backup_goalie_enabled {
        return 0;
    }
    usize::from(lineup.occupant_of(SLOT_GOALIE_BACKUP).is_some())
}

/// Flip the backup-goalie flag. Turning it off empties `G_BACKUP` first;
/// turning it on adds the slot empty. Both directions renormalize.
pub fn toggle_backup_goalie(lineup: &mut Lineup) {
    if lineup.backup_goalie_enabled {
        lineup
            .assignments
            .insert(SLOT_GOALIE_BACKUP.to_string(), None);
        lineup.backup_goalie_enabled = false;
    } else {
        lineup.backup_goalie_enabled = true;
    }
    lineup.normalize();
    lineup.touch();
}
