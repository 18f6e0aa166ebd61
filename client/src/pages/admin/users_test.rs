use super::*;

#[test]
fn other_accounts_are_allowed() {
    assert_eq!(check_user_action(UserAction::ToggleAdmin, "u2", "u1"), Ok(()));
    assert_eq!(check_user_action(UserAction::Delete, "u2", "u1"), Ok(()));
}

#[test]
fn own_account_cannot_be_demoted() {
    assert_eq!(
        check_user_action(UserAction::ToggleAdmin, "u1", "u1"),
        Err("You cannot remove your own admin status.")
    );
}

#[test]
fn own_account_cannot_be_deleted() {
    assert_eq!(check_user_action(UserAction::Delete, "u1", "u1"), Err("You cannot delete your own admin account."));
}

#[test]
fn unknown_self_id_does_not_block() {
    assert_eq!(check_user_action(UserAction::Delete, "", ""), Ok(()));
}
