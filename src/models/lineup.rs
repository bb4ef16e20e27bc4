//! Lineup (the assignment store) and the per-team lineup collection.

use crate::models::player::PlayerId;
use crate::models::slot::{canonical_slots, SlotId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Unique identifier for a lineup.
pub type LineupId = Uuid;

/// Default structure for a freshly created lineup.
const DEFAULT_FORWARD_LINES: u32 = 3;
const DEFAULT_DEFENCE_PAIRS: u32 = 2;
const DEFAULT_BACKUP_GOALIE: bool = true;

/// One named lineup variant: structure fields plus slot assignments.
///
/// Invariants (restored by `normalize`, upheld by the mutation protocols):
/// the key set of `assignments` is exactly the canonical slot set for the
/// structure fields, and a player id occupies at most one slot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Lineup {
    pub id: LineupId,
    pub name: String,
    pub forward_lines: u32,
    pub defence_pairs: u32,
    pub backup_goalie_enabled: bool,
    /// Slot id -> occupant. `None` is an empty slot.
    pub assignments: HashMap<SlotId, Option<PlayerId>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lineup {
    /// Create a lineup with the default structure and all slots empty.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        let mut lineup = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            forward_lines: DEFAULT_FORWARD_LINES,
            defence_pairs: DEFAULT_DEFENCE_PAIRS,
            backup_goalie_enabled: DEFAULT_BACKUP_GOALIE,
            assignments: HashMap::new(),
            created_at: now,
            updated_at: now,
        };
        lineup.normalize();
        lineup
    }

    /// Canonical ordered slot list for this lineup's current structure.
    pub fn canonical_slots(&self) -> Vec<SlotId> {
        canonical_slots(
            self.forward_lines,
            self.defence_pairs,
            self.backup_goalie_enabled,
        )
    }

    /// Rebuild `assignments` from the structure fields: keep occupants whose
    /// slot still exists, default newly required slots to empty, drop stale
    /// keys. The structure fields are authoritative.
    pub fn normalize(&mut self) {
        let mut next = HashMap::new();
        for slot in self.canonical_slots() {
            let occupant = self.assignments.get(&slot).copied().flatten();
            next.insert(slot, occupant);
        }
        self.assignments = next;
    }

    /// Occupant of a slot, or `None` when the slot is empty or the id is not
    /// in the canonical set (stale UI events reference removed slots).
    pub fn occupant_of(&self, slot_id: &str) -> Option<PlayerId> {
        self.assignments.get(slot_id).copied().flatten()
    }

    /// The slot currently holding `player_id`, if any. Relies on the
    /// at-most-one-slot invariant, so the first hit is the only hit.
    pub fn holder_slot_of(&self, player_id: PlayerId) -> Option<SlotId> {
        self.assignments
            .iter()
            .find(|(_, occupant)| **occupant == Some(player_id))
            .map(|(slot, _)| slot.clone())
    }

    /// Ids of all players currently holding a slot.
    pub fn assigned_player_ids(&self) -> Vec<PlayerId> {
        self.assignments.values().filter_map(|o| *o).collect()
    }

    /// How many of the given slots are currently occupied.
    pub fn assigned_count_in(&self, slots: &[SlotId]) -> usize {
        slots
            .iter()
            .filter(|slot| self.occupant_of(slot).is_some())
            .count()
    }

    /// Empty every slot.
    pub fn clear_assignments(&mut self) {
        for occupant in self.assignments.values_mut() {
            *occupant = None;
        }
        self.touch();
    }

    /// Remove a player from whichever slot holds them, if any.
    pub fn unassign_player(&mut self, player_id: PlayerId) {
        for occupant in self.assignments.values_mut() {
            if *occupant == Some(player_id) {
                *occupant = None;
            }
        }
    }

    /// Record a mutation time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A team's ordered set of named lineups with one active pointer.
///
/// Invariant: once initialized the collection is never empty, and
/// `active_lineup_id` always names a member.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LineupCollection {
    pub active_lineup_id: Option<LineupId>,
    pub lineups: Vec<Lineup>,
}

impl LineupCollection {
    /// Start a collection with one default lineup, active.
    pub fn new() -> Self {
        let first = Lineup::new("Lineup 1");
        Self {
            active_lineup_id: Some(first.id),
            lineups: vec![first],
        }
    }

    pub fn active_lineup(&self) -> Option<&Lineup> {
        let id = self.active_lineup_id?;
        self.lineups.iter().find(|l| l.id == id)
    }

    pub fn active_lineup_mut(&mut self) -> Option<&mut Lineup> {
        let id = self.active_lineup_id?;
        self.lineups.iter_mut().find(|l| l.id == id)
    }

    /// Create a lineup with the default structure, append it, make it active.
    pub fn create(&mut self, name: impl Into<String>) -> LineupId {
        let lineup = Lineup::new(name);
        let id = lineup.id;
        self.lineups.push(lineup);
        self.active_lineup_id = Some(id);
        id
    }

    /// Rename the active lineup. No-op without one.
    pub fn rename_active(&mut self, name: impl Into<String>) {
        if let Some(lineup) = self.active_lineup_mut() {
            lineup.name = name.into();
            lineup.touch();
        }
    }

    /// Deep-copy the active lineup under a new name: new id, fresh
    /// timestamps, inserted directly after the original, becomes active.
    pub fn duplicate_active(&mut self, name: impl Into<String>) -> Option<LineupId> {
        let active_id = self.active_lineup_id?;
        let idx = self.lineups.iter().position(|l| l.id == active_id)?;
        let now = Utc::now();
        let mut copy = self.lineups[idx].clone();
        copy.id = Uuid::new_v4();
        copy.name = name.into();
        copy.created_at = now;
        copy.updated_at = now;
        copy.normalize();
        let id = copy.id;
        self.lineups.insert(idx + 1, copy);
        self.active_lineup_id = Some(id);
        Some(id)
    }

    /// Delete the active lineup. The first remaining lineup becomes active;
    /// when none remain a fresh default is created so the collection is never
    /// left empty.
    pub fn delete_active(&mut self) {
        let Some(active_id) = self.active_lineup_id else {
            return;
        };
        self.lineups.retain(|l| l.id != active_id);
        match self.lineups.first() {
            Some(first) => self.active_lineup_id = Some(first.id),
            None => {
                let lineup = Lineup::new("Lineup 1");
                self.active_lineup_id = Some(lineup.id);
                self.lineups.push(lineup);
            }
        }
    }

    /// Point the active marker at `id`. No-op if `id` is not a member.
    pub fn set_active(&mut self, id: LineupId) {
        if self.lineups.iter().any(|l| l.id == id) {
            self.active_lineup_id = Some(id);
        }
    }

    /// Remove a player from every lineup in the collection (roster removal).
    pub fn unassign_player_everywhere(&mut self, player_id: PlayerId) {
        for lineup in &mut self.lineups {
            lineup.unassign_player(player_id);
        }
    }
}

impl Default for LineupCollection {
    fn default() -> Self {
        Self::new()
    }
}
