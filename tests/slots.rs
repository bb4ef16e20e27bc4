//! Integration tests for the slot scheme: role decoding and canonical slot lists.

use hockey_lineup_web::{canonical_slots, role_code_of, RoleCode};

#[test]
fn role_code_is_decoded_from_slot_id() {
    assert_eq!(role_code_of("F1_LW"), Some(RoleCode::LW));
    assert_eq!(role_code_of("F4_C"), Some(RoleCode::C));
    assert_eq!(role_code_of("D2_RD"), Some(RoleCode::RD));
    assert_eq!(role_code_of("D1_LD"), Some(RoleCode::LD));
    assert_eq!(role_code_of("G_START"), Some(RoleCode::G));
    assert_eq!(role_code_of("G_BACKUP"), Some(RoleCode::G));
}

#[test]
fn unknown_slot_ids_decode_to_none() {
    assert_eq!(role_code_of("AVAILABLE"), None);
    assert_eq!(role_code_of("F1_XX"), None);
    assert_eq!(role_code_of(""), None);
}

#[test]
fn canonical_slots_for_two_lines_one_pair_no_backup() {
    let slots = canonical_slots(2, 1, false);
    assert_eq!(
        slots,
        vec![
            "F1_LW", "F1_C", "F1_RW", "F2_LW", "F2_C", "F2_RW", "D1_LD", "D1_RD", "G_START",
        ]
    );
}

#[test]
fn enabling_backup_goalie_appends_one_slot() {
    let without = canonical_slots(2, 1, false);
    let with = canonical_slots(2, 1, true);
    assert_eq!(with.len(), without.len() + 1);
    assert_eq!(&with[..without.len()], &without[..]);
    assert_eq!(with.last().map(String::as_str), Some("G_BACKUP"));
}

#[test]
fn canonical_slots_is_deterministic() {
    for lines in 1..=4 {
        for pairs in 1..=4 {
            for backup in [false, true] {
                assert_eq!(
                    canonical_slots(lines, pairs, backup),
                    canonical_slots(lines, pairs, backup)
                );
            }
        }
    }
}
