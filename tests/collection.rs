//! Integration tests for the lineup collection: create, duplicate, delete, activate.

use hockey_lineup_web::{LineupCollection, Player, PlayerDraft};
use uuid::Uuid;

fn player(number: u32, name: &str) -> Player {
    Player::from_draft(PlayerDraft {
        number,
        name: name.to_string(),
        ..Default::default()
    })
}

#[test]
fn a_new_collection_starts_with_one_active_default_lineup() {
    let collection = LineupCollection::new();
    assert_eq!(collection.lineups.len(), 1);
    assert_eq!(collection.lineups[0].name, "Lineup 1");
    assert_eq!(collection.active_lineup_id, Some(collection.lineups[0].id));
}

#[test]
fn create_appends_and_activates() {
    let mut collection = LineupCollection::new();
    let id = collection.create("Power play");

    assert_eq!(collection.lineups.len(), 2);
    assert_eq!(collection.lineups[1].id, id);
    assert_eq!(collection.active_lineup_id, Some(id));
    assert_eq!(
        collection.active_lineup().map(|l| l.name.as_str()),
        Some("Power play")
    );
}

#[test]
fn rename_active_changes_only_the_name() {
    let mut collection = LineupCollection::new();
    let id = collection.lineups[0].id;
    collection.rename_active("Home opener");

    assert_eq!(collection.lineups[0].id, id);
    assert_eq!(collection.lineups[0].name, "Home opener");
}

#[test]
fn duplicate_is_a_deep_copy_inserted_after_the_original() {
    let mut collection = LineupCollection::new();
    collection.create("Second");
    collection.set_active(collection.lineups[0].id);

    let p = player(8, "Nora Palm");
    if let Some(lineup) = collection.active_lineup_mut() {
        lineup.assignments.insert("F1_C".to_string(), Some(p.id));
    }
    let original_id = collection.lineups[0].id;

    let copy_id = collection.duplicate_active("First (copy)");
    let copy_id = copy_id.expect("active lineup exists");

    // Inserted between the original and "Second", and now active.
    assert_eq!(collection.lineups.len(), 3);
    assert_eq!(collection.lineups[0].id, original_id);
    assert_eq!(collection.lineups[1].id, copy_id);
    assert_eq!(collection.lineups[2].name, "Second");
    assert_eq!(collection.active_lineup_id, Some(copy_id));

    // Same assignments, distinct identity; edits don't leak back.
    assert_eq!(collection.lineups[1].occupant_of("F1_C"), Some(p.id));
    if let Some(copy) = collection.active_lineup_mut() {
        copy.assignments.insert("F1_C".to_string(), None);
    }
    assert_eq!(collection.lineups[0].occupant_of("F1_C"), Some(p.id));
}

#[test]
fn delete_active_falls_back_to_the_first_remaining_lineup() {
    let mut collection = LineupCollection::new();
    let first = collection.lineups[0].id;
    let second = collection.create("Second");

    collection.set_active(second);
    collection.delete_active();

    assert_eq!(collection.lineups.len(), 1);
    assert_eq!(collection.active_lineup_id, Some(first));
}

#[test]
fn deleting_the_last_lineup_recreates_a_default_one() {
    let mut collection = LineupCollection::new();
    collection.delete_active();

    assert_eq!(collection.lineups.len(), 1);
    assert_eq!(collection.lineups[0].name, "Lineup 1");
    assert_eq!(collection.active_lineup_id, Some(collection.lineups[0].id));
}

#[test]
fn set_active_ignores_ids_outside_the_collection() {
    let mut collection = LineupCollection::new();
    let active = collection.active_lineup_id;

    collection.set_active(Uuid::new_v4());

    assert_eq!(collection.active_lineup_id, active);
}

#[test]
fn unassign_player_everywhere_clears_all_lineups() {
    let mut collection = LineupCollection::new();
    collection.create("Second");
    let p = player(17, "Rio Salo");
    for lineup in &mut collection.lineups {
        lineup.assignments.insert("G_START".to_string(), Some(p.id));
    }

    collection.unassign_player_everywhere(p.id);

    for lineup in &collection.lineups {
        assert_eq!(lineup.holder_slot_of(p.id), None);
    }
}
