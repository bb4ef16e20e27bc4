//! Manual assignment: interpret one drag-and-drop move against a lineup.

use crate::models::{Lineup, PlayerId, SlotId};
use serde::{Deserialize, Serialize};

/// Drop-zone id the drag toolkit reports for the unassigned-players panel.
pub const AVAILABLE_ZONE: &str = "AVAILABLE";

/// Where a dragged player was dropped.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum MoveTarget {
    /// Back to the unassigned pool.
    Unassigned,
    /// Onto a slot (possibly stale if the structure changed mid-drag).
    Slot(SlotId),
}

impl MoveTarget {
    /// Interpret a raw drop-zone id from the drag toolkit.
    pub fn from_drop_id(id: &str) -> Self {
        if id == AVAILABLE_ZONE {
            MoveTarget::Unassigned
        } else {
            MoveTarget::Slot(id.to_string())
        }
    }
}

/// A completed drag: who was dragged, where they were dropped.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveEvent {
    pub player_id: PlayerId,
    pub target: MoveTarget,
}

/// Apply one move to the lineup.
///
/// - Unassigned target: empty the slot holding the player (no-op if none).
/// - Slot target not in the canonical set: no-op (stale event).
/// - Player came from the pool: place them; a prior occupant is overwritten
///   back to the pool, not relocated.
/// - Same slot: no-op. Otherwise swap, so dropping onto an occupied slot
///   never silently drops the displaced player.
pub fn apply_move(lineup: &mut Lineup, event: &MoveEvent) {
    let from_slot = lineup.holder_slot_of(event.player_id);

    let to_slot = match &event.target {
        MoveTarget::Unassigned => {
            if let Some(slot) = from_slot {
                lineup.assignments.insert(slot, None);
                lineup.touch();
            }
            return;
        }
        MoveTarget::Slot(slot) => slot.clone(),
    };

    if !lineup.assignments.contains_key(&to_slot) {
        return;
    }
    let target_occupant = lineup.occupant_of(&to_slot);

    match from_slot {
        None => {
            lineup.assignments.insert(to_slot, Some(event.player_id));
        }
        Some(from) if from == to_slot => return,
        Some(from) => {
            lineup.assignments.insert(to_slot, Some(event.player_id));
            lineup.assignments.insert(from, target_occupant);
        }
    }
    lineup.touch();
}
