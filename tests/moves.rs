//! Integration tests for the manual assignment (drag/drop) protocol.

use hockey_lineup_web::{
    apply_move, Lineup, MoveEvent, MoveTarget, Player, PlayerDraft, PlayerId, AVAILABLE_ZONE,
};
use std::collections::HashMap;

fn player(number: u32, name: &str) -> Player {
    Player::from_draft(PlayerDraft {
        number,
        name: name.to_string(),
        ..Default::default()
    })
}

fn move_to_slot(player_id: PlayerId, slot: &str) -> MoveEvent {
    MoveEvent {
        player_id,
        target: MoveTarget::Slot(slot.to_string()),
    }
}

fn move_to_pool(player_id: PlayerId) -> MoveEvent {
    MoveEvent {
        player_id,
        target: MoveTarget::Unassigned,
    }
}

/// Every player id may occupy at most one slot.
fn assert_at_most_one_slot(lineup: &Lineup) {
    let mut counts: HashMap<PlayerId, usize> = HashMap::new();
    for occupant in lineup.assignments.values().flatten() {
        *counts.entry(*occupant).or_default() += 1;
    }
    assert!(counts.values().all(|&c| c <= 1), "player in multiple slots");
}

#[test]
fn drop_zone_sentinel_maps_to_unassigned() {
    assert_eq!(
        MoveTarget::from_drop_id(AVAILABLE_ZONE),
        MoveTarget::Unassigned
    );
    assert_eq!(
        MoveTarget::from_drop_id("F1_C"),
        MoveTarget::Slot("F1_C".to_string())
    );
}

#[test]
fn placing_from_the_pool_fills_the_slot() {
    let mut lineup = Lineup::new("Test");
    let p = player(9, "Ida Holm");

    apply_move(&mut lineup, &move_to_slot(p.id, "F1_C"));

    assert_eq!(lineup.occupant_of("F1_C"), Some(p.id));
    assert_at_most_one_slot(&lineup);
}

#[test]
fn placing_onto_an_occupied_slot_displaces_the_prior_occupant() {
    let mut lineup = Lineup::new("Test");
    let x = player(1, "X");
    let y = player(2, "Y");
    lineup.assignments.insert("F1_C".to_string(), Some(y.id));

    // X comes from the pool; Y is overwritten back to the pool.
    apply_move(&mut lineup, &move_to_slot(x.id, "F1_C"));

    assert_eq!(lineup.occupant_of("F1_C"), Some(x.id));
    assert_eq!(lineup.holder_slot_of(y.id), None);
    assert_at_most_one_slot(&lineup);
}

#[test]
fn slot_to_slot_move_onto_an_occupied_slot_swaps() {
    let mut lineup = Lineup::new("Test");
    let x = player(1, "X");
    let y = player(2, "Y");
    lineup.assignments.insert("F1_LW".to_string(), Some(x.id));
    lineup.assignments.insert("F2_C".to_string(), Some(y.id));

    apply_move(&mut lineup, &move_to_slot(x.id, "F2_C"));

    assert_eq!(lineup.occupant_of("F2_C"), Some(x.id));
    assert_eq!(lineup.occupant_of("F1_LW"), Some(y.id));
    assert_at_most_one_slot(&lineup);
}

#[test]
fn slot_to_empty_slot_move_vacates_the_source() {
    let mut lineup = Lineup::new("Test");
    let x = player(1, "X");
    lineup.assignments.insert("D1_LD".to_string(), Some(x.id));

    apply_move(&mut lineup, &move_to_slot(x.id, "D2_RD"));

    assert_eq!(lineup.occupant_of("D2_RD"), Some(x.id));
    assert_eq!(lineup.occupant_of("D1_LD"), None);
    assert_at_most_one_slot(&lineup);
}

#[test]
fn dropping_on_the_own_slot_is_a_no_op() {
    let mut lineup = Lineup::new("Test");
    let x = player(1, "X");
    lineup.assignments.insert("G_START".to_string(), Some(x.id));
    let before = lineup.assignments.clone();

    apply_move(&mut lineup, &move_to_slot(x.id, "G_START"));

    assert_eq!(lineup.assignments, before);
}

#[test]
fn unassigning_empties_the_holding_slot() {
    let mut lineup = Lineup::new("Test");
    let x = player(1, "X");
    lineup.assignments.insert("F3_RW".to_string(), Some(x.id));

    apply_move(&mut lineup, &move_to_pool(x.id));

    assert_eq!(lineup.holder_slot_of(x.id), None);
    assert_eq!(lineup.occupant_of("F3_RW"), None);
}

#[test]
fn unassigning_an_already_unassigned_player_is_a_no_op() {
    let mut lineup = Lineup::new("Test");
    let x = player(1, "X");
    let before = lineup.assignments.clone();

    apply_move(&mut lineup, &move_to_pool(x.id));

    assert_eq!(lineup.assignments, before);
}

#[test]
fn stale_slot_target_is_a_no_op() {
    let mut lineup = Lineup::new("Test");
    let x = player(1, "X");
    lineup.assignments.insert("F1_C".to_string(), Some(x.id));
    let before = lineup.assignments.clone();

    // F4 slots exist only at four forward lines; the default is three.
    apply_move(&mut lineup, &move_to_slot(x.id, "F4_LW"));

    assert_eq!(lineup.assignments, before);
}

#[test]
fn at_most_one_slot_holds_after_a_long_move_sequence() {
    let mut lineup = Lineup::new("Test");
    let players: Vec<Player> = (1..=6).map(|n| player(n, "P")).collect();

    let slots = ["F1_LW", "F1_C", "F2_C", "D1_LD", "G_START", "F1_LW"];
    for (p, slot) in players.iter().zip(slots) {
        apply_move(&mut lineup, &move_to_slot(p.id, slot));
        assert_at_most_one_slot(&lineup);
    }
    // Shuffle a few of them around, including swaps and unassigns.
    apply_move(&mut lineup, &move_to_slot(players[0].id, "F1_C"));
    apply_move(&mut lineup, &move_to_pool(players[1].id));
    apply_move(&mut lineup, &move_to_slot(players[3].id, "G_START"));
    apply_move(&mut lineup, &move_to_slot(players[4].id, "D2_RD"));
    assert_at_most_one_slot(&lineup);
}
