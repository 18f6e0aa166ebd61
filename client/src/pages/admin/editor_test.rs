use super::*;

#[test]
fn closed_editor_has_nothing_open() {
    let editor = Editor::<u8>::default();
    assert!(!editor.is_open());
    assert_eq!(editor.existing(), None);
}

#[test]
fn create_is_open_without_record() {
    let editor = Editor::<u8>::Create;
    assert!(editor.is_open());
    assert_eq!(editor.existing(), None);
    assert_eq!(editor.title("College"), "Add New College");
}

#[test]
fn edit_exposes_record() {
    let editor = Editor::Edit(7_u8);
    assert_eq!(editor.existing(), Some(&7));
    assert_eq!(editor.title("Scholarship"), "Edit Scholarship");
}
