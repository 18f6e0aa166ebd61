use super::*;

fn draft(title: &str, content: &str, category: &str) -> DiscussionDraft {
    DiscussionDraft { title: title.to_owned(), content: content.to_owned(), category: category.to_owned() }
}

#[test]
fn default_draft_is_general() {
    assert_eq!(DiscussionDraft::default().category, "General");
}

#[test]
fn to_request_trims_fields() {
    let request = draft("  Physics help ", " Need tips\n", "Science").to_request().unwrap();
    assert_eq!(request, NewDiscussion {
        title: "Physics help".to_owned(),
        content: "Need tips".to_owned(),
        category: "Science".to_owned(),
    });
}

#[test]
fn to_request_requires_title_and_content() {
    assert_eq!(draft("", "body", "Arts").to_request(), Err("Please fill in both title and content."));
    assert_eq!(draft("title", "   ", "Arts").to_request(), Err("Please fill in both title and content."));
}

#[test]
fn unknown_category_falls_back_to_general() {
    let request = draft("t", "c", "All Discussions").to_request().unwrap();
    assert_eq!(request.category, "General");
}
