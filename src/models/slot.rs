//! Role codes and the canonical slot scheme for a lineup structure.

use serde::{Deserialize, Serialize};

/// Maximum number of forward lines a lineup can have.
pub const MAX_FORWARD_LINES: u32 = 4;
/// Maximum number of defence pairs a lineup can have.
pub const MAX_DEFENCE_PAIRS: u32 = 4;

/// A slot key such as `F1_LW`, `D2_RD`, `G_START`. Always derived from the
/// lineup's structure fields, never hand-written.
pub type SlotId = String;

/// The starting goalie slot.
pub const SLOT_GOALIE_START: &str = "G_START";
/// The backup goalie slot (present only when the backup toggle is on).
pub const SLOT_GOALIE_BACKUP: &str = "G_BACKUP";

/// On-ice role a slot asks for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum RoleCode {
    LW,
    C,
    RW,
    LD,
    RD,
    G,
}

impl RoleCode {
    pub fn as_str(self) -> &'static str {
        match self {
            RoleCode::LW => "LW",
            RoleCode::C => "C",
            RoleCode::RW => "RW",
            RoleCode::LD => "LD",
            RoleCode::RD => "RD",
            RoleCode::G => "G",
        }
    }

    /// Parse a role code segment (`"LW"`, `"C"`, ...). Case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "LW" => Some(RoleCode::LW),
            "C" => Some(RoleCode::C),
            "RW" => Some(RoleCode::RW),
            "LD" => Some(RoleCode::LD),
            "RD" => Some(RoleCode::RD),
            "G" => Some(RoleCode::G),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slot id for a forward-line position (`F<line>_<role>`).
pub fn forward_slot(line: u32, role: RoleCode) -> SlotId {
    format!("F{}_{}", line, role)
}

/// Slot id for a defence-pair position (`D<pair>_<role>`).
pub fn defence_slot(pair: u32, role: RoleCode) -> SlotId {
    format!("D{}_{}", pair, role)
}

/// Role a slot id asks for: `G` for the goalie group, otherwise the segment
/// after the group/index. `None` for ids that fit neither shape.
pub fn role_code_of(slot_id: &str) -> Option<RoleCode> {
    if slot_id.starts_with("G_") {
        return Some(RoleCode::G);
    }
    let (_, role) = slot_id.split_once('_')?;
    RoleCode::parse(role)
}

/// Ordered canonical slot list for a structure: forward lines (LW, C, RW per
/// line), defence pairs (LD, RD per pair), starter goalie, then backup goalie
/// if enabled. Deterministic; the assignment store derives its key set from
/// this.
pub fn canonical_slots(
    forward_lines: u32,
    defence_pairs: u32,
    backup_goalie_enabled: bool,
) -> Vec<SlotId> {
    let mut slots = Vec::new();
    for line in 1..=forward_lines {
        slots.push(forward_slot(line, RoleCode::LW));
        slots.push(forward_slot(line, RoleCode::C));
        slots.push(forward_slot(line, RoleCode::RW));
    }
    for pair in 1..=defence_pairs {
        slots.push(defence_slot(pair, RoleCode::LD));
        slots.push(defence_slot(pair, RoleCode::RD));
    }
    slots.push(SLOT_GOALIE_START.to_string());
    if backup_goalie_enabled {
        slots.push(SLOT_GOALIE_BACKUP.to_string());
    }
    slots
}

/// The three slots of one forward line, in board order.
pub fn forward_line_slots(line: u32) -> [SlotId; 3] {
    [
        forward_slot(line, RoleCode::LW),
        forward_slot(line, RoleCode::C),
        forward_slot(line, RoleCode::RW),
    ]
}

/// The two slots of one defence pair, in board order.
pub fn defence_pair_slots(pair: u32) -> [SlotId; 2] {
    [
        defence_slot(pair, RoleCode::LD),
        defence_slot(pair, RoleCode::RD),
    ]
}
