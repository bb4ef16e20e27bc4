//! Integration tests for roster validation and the compatibility check.

use hockey_lineup_web::{
    AppData, Leadership, Player, PlayerDraft, RoleCode, RosterError, Team,
};

fn draft(number: u32, name: &str) -> PlayerDraft {
    PlayerDraft {
        number,
        name: name.to_string(),
        ..Default::default()
    }
}

#[test]
fn jersey_number_must_be_positive() {
    let mut team = Team::new("Ice Cats");
    assert_eq!(
        team.add_player(draft(0, "Zed")),
        Err(RosterError::InvalidNumber)
    );
}

#[test]
fn jersey_numbers_are_unique_within_a_team() {
    let mut team = Team::new("Ice Cats");
    team.add_player(draft(9, "First")).unwrap();
    assert_eq!(
        team.add_player(draft(9, "Second")),
        Err(RosterError::DuplicateNumber(9))
    );
}

#[test]
fn a_name_is_required() {
    let mut team = Team::new("Ice Cats");
    assert_eq!(
        team.add_player(draft(4, "   ")),
        Err(RosterError::MissingName)
    );
}

#[test]
fn only_one_captain_and_two_alternates_per_team() {
    let mut team = Team::new("Ice Cats");
    let mut captain = draft(1, "Cap");
    captain.leadership = Leadership::Captain;
    team.add_player(captain).unwrap();

    let mut second_captain = draft(2, "Cap Two");
    second_captain.leadership = Leadership::Captain;
    assert_eq!(
        team.add_player(second_captain),
        Err(RosterError::CaptainTaken)
    );

    for n in 3..=4 {
        let mut alternate = draft(n, "Alt");
        alternate.leadership = Leadership::Alternate;
        team.add_player(alternate).unwrap();
    }
    let mut third_alternate = draft(5, "Alt Three");
    third_alternate.leadership = Leadership::Alternate;
    assert_eq!(
        team.add_player(third_alternate),
        Err(RosterError::AlternatesFull)
    );
}

#[test]
fn updating_a_player_keeps_their_own_number_available() {
    let mut team = Team::new("Ice Cats");
    let id = team.add_player(draft(7, "Seven")).unwrap();

    // Re-submitting with the same number is not a clash with itself.
    let mut updated = draft(7, "Seven Renamed");
    updated.preferred_position = hockey_lineup_web::Position::Goalie;
    team.update_player(id, updated).unwrap();

    let p = team.player(id).unwrap();
    assert_eq!(p.name, "Seven Renamed");
    assert_eq!(p.number, 7);
}

#[test]
fn updating_an_unknown_player_fails() {
    let mut team = Team::new("Ice Cats");
    let ghost = uuid::Uuid::new_v4();
    assert_eq!(
        team.update_player(ghost, draft(1, "Ghost")),
        Err(RosterError::PlayerNotFound(ghost))
    );
}

#[test]
fn removing_a_player_also_unassigns_them_from_every_lineup() {
    let mut data = AppData::new();
    let mut team = Team::new("Ice Cats");
    let player_id = team.add_player(draft(11, "Liv Moen")).unwrap();
    let team_id = data.add_team(team);

    let collection = data.lineups_for(team_id);
    collection.create("Second");
    for lineup in &mut collection.lineups {
        lineup
            .assignments
            .insert("F1_C".to_string(), Some(player_id));
    }

    data.remove_player(team_id, player_id).unwrap();

    assert!(data.team(team_id).unwrap().players.is_empty());
    for lineup in &data.lineups_by_team[&team_id].lineups {
        assert_eq!(lineup.holder_slot_of(player_id), None);
    }
}

#[test]
fn role_mismatch_flags_only_declared_restrictions() {
    let mut centre_only = draft(12, "P");
    centre_only.can_play = vec![RoleCode::C];
    let p = Player::from_draft(centre_only);

    assert!(p.role_mismatch(RoleCode::LW));
    assert!(!p.role_mismatch(RoleCode::C));

    // An empty can-play list declares nothing, so nothing mismatches.
    let q = Player::from_draft(draft(13, "Q"));
    assert!(!q.role_mismatch(RoleCode::G));
    assert!(!q.role_mismatch(RoleCode::LW));
}
