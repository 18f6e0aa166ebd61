use super::*;

fn session(value: Value) -> Session {
    serde_json::from_value(value).unwrap()
}

#[test]
fn draft_reads_sections_and_trims_timestamp() {
    let current = session(serde_json::json!({
        "name": "Asha Rao",
        "token": "t1",
        "personalInfo": { "dateOfBirth": "2007-05-01T00:00:00.000Z", "location": "Pune" },
        "educationalInfo": { "grade": "12" }
    }));

    let draft = ProfileDraft::from_session(&current);

    assert_eq!(draft.name, "Asha Rao");
    assert_eq!(draft.personal["dateOfBirth"], "2007-05-01");
    assert_eq!(draft.personal["location"], "Pune");
    assert_eq!(draft.personal["contact"], "");
    assert_eq!(draft.educational["grade"], "12");
}

#[test]
fn draft_without_sections_is_blank() {
    let draft = ProfileDraft::from_session(&session(serde_json::json!({ "name": "A", "token": "t1" })));
    assert!(draft.personal.values().all(String::is_empty));
    assert_eq!(draft.educational.len(), EDUCATIONAL_FIELDS.len());
}

#[test]
fn fields_merge_edits_over_existing_section_keys() {
    let current = session(serde_json::json!({
        "name": "A",
        "token": "t1",
        "personalInfo": { "location": "Pune", "nickname": "Ash" }
    }));
    let mut draft = ProfileDraft::from_session(&current);
    draft.name = " B ".to_owned();
    draft.personal.insert("location", "Mumbai".to_owned());

    let fields = draft.to_fields(&current).unwrap();

    assert_eq!(fields["name"], "B");
    assert_eq!(fields["personalInfo"]["location"], "Mumbai");
    assert_eq!(fields["personalInfo"]["nickname"], "Ash");
    assert!(fields["educationalInfo"].is_object());
    assert!(!fields.contains_key("token"));
}

#[test]
fn fields_require_a_name() {
    let current = session(serde_json::json!({ "name": "A", "token": "t1" }));
    let draft = ProfileDraft { name: "  ".to_owned(), ..ProfileDraft::from_session(&current) };
    assert_eq!(draft.to_fields(&current), Err(FormError::Missing("Name")));
}
