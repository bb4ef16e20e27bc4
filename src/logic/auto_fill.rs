//! Auto-fill: staff every empty slot from a candidate pool.

use crate::models::{
    defence_pair_slots, forward_line_slots, role_code_of, Lineup, Player, SlotId,
    SLOT_GOALIE_BACKUP, SLOT_GOALIE_START,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// Fill order: starter goalie first, then defence pairs in index order, then
/// forward line 1, then the remaining lines, backup goalie last.
fn fill_order(lineup: &Lineup) -> Vec<SlotId> {
    let mut order = vec![SLOT_GOALIE_START.to_string()];
    for pair in 1..=lineup.defence_pairs {
        order.extend(defence_pair_slots(pair));
    }
    order.extend(forward_line_slots(1));
    for line in 2..=lineup.forward_lines {
        order.extend(forward_line_slots(line));
    }
    if lineup.backup_goalie_enabled {
        order.push(SLOT_GOALIE_BACKUP.to_string());
    }
    order
}

/// Fill the lineup's empty slots from `pool` (a snapshot, consumed here).
///
/// Each slot prefers candidates whose `can_play` lists its role, picked
/// uniformly at random; with no match the whole remaining pool is eligible.
/// Occupied slots are never overwritten and a candidate is never assigned
/// twice. Stops when the pool runs out. Returns the number of slots filled.
pub fn auto_fill_lineup(lineup: &mut Lineup, mut pool: Vec<Player>) -> usize {
    let mut rng = rand::thread_rng();
    let mut filled = 0;

    for slot in fill_order(lineup) {
        if lineup.occupant_of(&slot).is_some() {
            continue;
        }
        if pool.is_empty() {
            break;
        }
        let matching: Vec<usize> = match role_code_of(&slot) {
            Some(role) => pool
                .iter()
                .enumerate()
                .filter(|(_, p)| p.can_play.contains(&role))
                .map(|(i, _)| i)
                .collect(),
            None => Vec::new(),
        };
        let idx = match matching.choose(&mut rng) {
            Some(&i) => i,
            None => rng.gen_range(0..pool.len()),
        };
        let chosen = pool.remove(idx);
        lineup.assignments.insert(slot, Some(chosen.id));
        filled += 1;
    }

    if filled > 0 {
        lineup.touch();
    }
    filled
}
