use super::*;
use crate::net::types::{BlogPost, Career, College, Scholarship, Webinar};

fn from_json<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap()
}

fn assert_row_matches_columns<T: CatalogEntry>(record: &T) {
    assert_eq!(record.cells().len(), T::COLUMNS.len(), "{} row width", T::NOUN);
}

#[test]
fn every_catalog_row_fills_its_columns() {
    assert_row_matches_columns(&from_json::<College>(serde_json::json!({ "_id": "c1", "name": "NIT" })));
    assert_row_matches_columns(&from_json::<Scholarship>(serde_json::json!({ "_id": "s1", "name": "Inspire" })));
    assert_row_matches_columns(&from_json::<Career>(serde_json::json!({ "_id": "k1", "name": "Nurse" })));
    assert_row_matches_columns(&from_json::<BlogPost>(serde_json::json!({ "_id": "p1", "title": "T" })));
    assert_row_matches_columns(&from_json::<Webinar>(serde_json::json!({ "_id": "w1", "title": "T" })));
}

#[test]
fn career_row_shows_placeholder_salary() {
    let career: Career = from_json(serde_json::json!({ "_id": "k1", "name": "Nurse", "cluster": "Healthcare" }));
    assert_eq!(career.id(), "k1");
    assert_eq!(career.cells(), vec!["Nurse", "Healthcare", "—", ""]);
}

#[test]
fn webinar_row_labels_status() {
    let webinar: Webinar =
        from_json(serde_json::json!({ "_id": "w1", "title": "NEET prep", "speaker": "Dr. Rao", "status": "Past" }));
    assert_eq!(webinar.cells()[1], "Dr. Rao");
    assert_eq!(webinar.cells()[3], "Past");
}

#[test]
fn blog_row_falls_back_to_team_byline() {
    let post: BlogPost = from_json(serde_json::json!({ "_id": "p1", "title": "Streams", "category": "Guidance" }));
    assert_eq!(post.cells()[2], "Learn-x-AI Team");
}

#[test]
fn prompts_use_lowercase_noun() {
    assert_eq!(delete_prompt(BlogPost::NOUN), "Are you sure you want to delete this blog post?");
    assert_eq!(delete_failed(College::NOUN), "Failed to delete college.");
}

#[test]
fn every_form_has_a_required_field() {
    for form in [College::FORM, Scholarship::FORM, Career::FORM, BlogPost::FORM, Webinar::FORM] {
        assert!(form.iter().any(|field| field.required));
    }
}
