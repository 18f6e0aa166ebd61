use super::*;
use crate::net::types::SavedItem;

fn resource(id: &str, title: &str, kind: &str, field: &str) -> Resource {
    Resource {
        id: id.to_owned(),
        title: title.to_owned(),
        kind: kind.to_owned(),
        field: field.to_owned(),
        link: None,
        image: None,
    }
}

fn library() -> Vec<Resource> {
    vec![
        resource("r1", "Intro to Machine Learning", "Video", "Technology"),
        resource("r2", "Nursing Career Guide", "Article", "Healthcare"),
        resource("r3", "Design Thinking Live", "Webinar", "Creative"),
    ]
}

#[test]
fn saved_resources_are_marked() {
    let saved: SavedItems =
        serde_json::from_value(serde_json::json!({ "resources": [{ "_id": "r2", "title": "Nursing" }] })).unwrap();

    let entries = mark_saved(library(), &saved);

    let flags: Vec<bool> = entries.iter().map(|entry| entry.saved).collect();
    assert_eq!(flags, vec![false, true, false]);
}

#[test]
fn saved_colleges_do_not_mark_resources() {
    let saved = SavedItems {
        colleges: vec![SavedItem {
            id: "r1".to_owned(),
            name: Some("NIT".to_owned()),
            title: None,
            location: None,
            category: None,
            image: None,
        }],
        ..SavedItems::default()
    };
    assert!(mark_saved(library(), &saved).iter().all(|entry| !entry.saved));
}

#[test]
fn default_filter_shows_everything() {
    let filter = ResourceFilter::default();
    assert!(library().iter().all(|r| filter.matches(r)));
}

#[test]
fn search_is_case_insensitive_on_title() {
    let filter = ResourceFilter { search: "  MACHINE ".to_owned(), ..ResourceFilter::default() };
    let hits: Vec<String> = library().into_iter().filter(|r| filter.matches(r)).map(|r| r.id).collect();
    assert_eq!(hits, vec!["r1"]);
}

#[test]
fn type_and_field_filters_combine() {
    let filter = ResourceFilter { kind: "Article".to_owned(), field: "Technology".to_owned(), ..ResourceFilter::default() };
    assert!(library().iter().all(|r| !filter.matches(r)));

    let filter = ResourceFilter { kind: "Webinar".to_owned(), ..ResourceFilter::default() };
    let hits: Vec<String> = library().into_iter().filter(|r| filter.matches(r)).map(|r| r.id).collect();
    assert_eq!(hits, vec!["r3"]);
}

#[test]
fn toggle_flips_and_reports_previous_state() {
    let mut entries = mark_saved(library(), &SavedItems::default());

    assert_eq!(toggle_saved(&mut entries, "r3"), Some(false));
    assert!(entries[2].saved);
    assert_eq!(toggle_saved(&mut entries, "r3"), Some(true));
    assert!(!entries[2].saved);
    assert_eq!(toggle_saved(&mut entries, "missing"), None);
}
