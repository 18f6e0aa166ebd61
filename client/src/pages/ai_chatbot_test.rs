use super::*;

#[test]
fn begin_send_appends_trimmed_user_message() {
    let mut history = Vec::new();
    assert_eq!(begin_send(&mut history, "  hello "), Some("hello".to_owned()));
    assert_eq!(history, vec![ChatMessage::user("hello")]);
}

#[test]
fn begin_send_ignores_blank_input() {
    let mut history = vec![ChatMessage::ai("hi")];
    assert_eq!(begin_send(&mut history, "   "), None);
    assert_eq!(history.len(), 1);
}

#[test]
fn finish_send_replaces_history_with_server_conversation() {
    let mut history = vec![ChatMessage::user("hello")];
    let server = vec![ChatMessage::user("hello"), ChatMessage::ai("Hi! How can I help?")];
    finish_send(&mut history, Ok(server.clone()));
    assert_eq!(history, server);
}

#[test]
fn finish_send_failure_appends_apology() {
    let mut history = vec![ChatMessage::user("hello")];
    finish_send(&mut history, Err(ApiError::Network("offline".to_owned())));
    assert_eq!(history, vec![ChatMessage::user("hello"), ChatMessage::ai(APOLOGY)]);
}
