//! Read-only lineup sheet: the data a print/export renderer consumes.

use crate::models::{
    defence_pair_slots, forward_line_slots, role_code_of, Lineup, Player, RoleCode, SlotId, Team,
    SLOT_GOALIE_BACKUP, SLOT_GOALIE_START,
};
use serde::Serialize;

/// A player as shown on the sheet.
#[derive(Clone, Debug, Serialize)]
pub struct PlayerView {
    pub number: u32,
    pub name: String,
    /// Jersey letter: `"C"`, `"A"`, or empty.
    pub leadership: String,
    /// `"LH"` / `"RH"` or empty.
    pub stick: String,
}

impl PlayerView {
    fn from_player(p: &Player) -> Self {
        Self {
            number: p.number,
            name: p.name.clone(),
            leadership: p.leadership.letter().to_string(),
            stick: p.stick_label().to_string(),
        }
    }
}

/// One slot on the sheet: resolved occupant plus the compatibility warning.
#[derive(Clone, Debug, Serialize)]
pub struct SlotView {
    pub slot_id: SlotId,
    pub role: Option<RoleCode>,
    pub player: Option<PlayerView>,
    /// True when the occupant's declared roles exclude this slot's role.
    pub mismatch: bool,
}

/// A labelled row of slots (one line, one pair, the goalies).
#[derive(Clone, Debug, Serialize)]
pub struct RowView {
    pub label: String,
    pub slots: Vec<SlotView>,
}

/// Everything a renderer needs to draw one lineup sheet. No write path back
/// into the engine.
#[derive(Clone, Debug, Serialize)]
pub struct LineupSheet {
    pub team_name: String,
    pub lineup_name: String,
    pub forward_lines: Vec<RowView>,
    pub defence_pairs: Vec<RowView>,
    pub goalies: RowView,
}

fn slot_view(team: &Team, lineup: &Lineup, slot_id: SlotId) -> SlotView {
    let role = role_code_of(&slot_id);
    let player = lineup
        .occupant_of(&slot_id)
        .and_then(|pid| team.player(pid));
    let mismatch = match (player, role) {
        (Some(p), Some(role)) => p.role_mismatch(role),
        _ => false,
    };
    SlotView {
        slot_id,
        role,
        player: player.map(PlayerView::from_player),
        mismatch,
    }
}

/// Project a lineup onto its printable sheet.
pub fn lineup_sheet(team: &Team, lineup: &Lineup) -> LineupSheet {
    let forward_lines = (1..=lineup.forward_lines)
        .map(|line| RowView {
            label: format!("Line {}", line),
            slots: forward_line_slots(line)
                .into_iter()
                .map(|slot| slot_view(team, lineup, slot))
                .collect(),
        })
        .collect();

    let defence_pairs = (1..=lineup.defence_pairs)
        .map(|pair| RowView {
            label: format!("Pair {}", pair),
            slots: defence_pair_slots(pair)
                .into_iter()
                .map(|slot| slot_view(team, lineup, slot))
                .collect(),
        })
        .collect();

    let mut goalie_slots = vec![slot_view(team, lineup, SLOT_GOALIE_START.to_string())];
    if lineup.backup_goalie_enabled {
        goalie_slots.push(slot_view(team, lineup, SLOT_GOALIE_BACKUP.to_string()));
    }

    LineupSheet {
        team_name: team.name.clone(),
        lineup_name: lineup.name.clone(),
        forward_lines,
        defence_pairs,
        goalies: RowView {
            label: "Goalie(s)".to_string(),
            slots: goalie_slots,
        },
    }
}
