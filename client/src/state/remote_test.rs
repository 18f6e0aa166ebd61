use super::*;

#[test]
fn default_is_idle() {
    let status: RemoteStatus<Vec<u32>> = RemoteStatus::default();
    assert_eq!(status, RemoteStatus::Idle);
    assert_eq!(status.data(), None);
}

#[test]
fn from_result_maps_error_to_user_message() {
    let failed: RemoteStatus<u32> =
        RemoteStatus::from_result(Err(ApiError::Status { status: 404, message: "College not found".to_owned() }));
    assert_eq!(failed.error(), Some("College not found"));
    assert!(!failed.needs_login());

    let ready = RemoteStatus::from_result(Ok(7));
    assert_eq!(ready.data(), Some(&7));
    assert_eq!(ready.error(), None);
}

#[test]
fn rejected_token_asks_for_login() {
    let expired: RemoteStatus<u32> =
        RemoteStatus::from_result(Err(ApiError::Unauthorized { status: 401, message: "Not authorized, token failed".to_owned() }));
    assert!(expired.needs_login());
    assert_eq!(expired.error(), Some("Not authorized, token failed"));

    let offline: RemoteStatus<u32> = RemoteStatus::from_result(Err(ApiError::Network("down".to_owned())));
    assert!(!offline.needs_login());
}

#[test]
fn edit_only_touches_ready_data() {
    let mut loading: RemoteStatus<Vec<u32>> = RemoteStatus::Loading;
    assert!(!loading.edit(|items| items.push(1)));
    assert_eq!(loading, RemoteStatus::Loading);

    let mut ready = RemoteStatus::Ready(vec![1]);
    assert!(ready.edit(|items| items.push(2)));
    assert_eq!(ready.data(), Some(&vec![1, 2]));
}

#[test]
fn take_and_restore_round_trip_position() {
    let mut items = vec!["a", "b", "c"];
    let (index, item) = take_where(&mut items, |x| *x == "b").unwrap();
    assert_eq!(items, vec!["a", "c"]);

    restore_at(&mut items, index, item);
    assert_eq!(items, vec!["a", "b", "c"]);
}

#[test]
fn take_missing_is_none_and_restore_clamps() {
    let mut items = vec![1, 2];
    assert_eq!(take_where(&mut items, |x| *x == 9), None);

    restore_at(&mut items, 10, 3);
    assert_eq!(items, vec![1, 2, 3]);
}

#[test]
fn only_latest_ticket_is_current() {
    let mut sequence = RequestSequence::default();
    let first = sequence.issue();
    assert!(sequence.is_current(first));

    let second = sequence.issue();
    assert!(!sequence.is_current(first));
    assert!(sequence.is_current(second));
}
