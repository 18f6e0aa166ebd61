use super::*;

#[test]
fn signed_in_user_leaves_login_page() {
    assert_eq!(signed_in_redirect(true, true), Some("/dashboard"));
}

#[test]
fn anonymous_user_stays_on_login_page() {
    assert_eq!(signed_in_redirect(true, false), None);
}

#[test]
fn no_redirect_before_restore() {
    assert_eq!(signed_in_redirect(false, true), None);
}
