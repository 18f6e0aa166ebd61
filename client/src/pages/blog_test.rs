use super::*;

fn post(id: &str, category: Option<&str>) -> BlogPost {
    serde_json::from_value(serde_json::json!({ "_id": id, "title": id, "category": category })).unwrap()
}

#[test]
fn categories_lists_all_first_then_distinct_in_order() {
    let posts = [
        post("1", Some("Exam Prep")),
        post("2", Some("Career Advice")),
        post("3", Some("Exam Prep")),
        post("4", None),
        post("5", Some("  ")),
    ];
    assert_eq!(categories(&posts), vec!["All", "Exam Prep", "Career Advice"]);
}

#[test]
fn posts_in_all_returns_everything() {
    let posts = [post("1", Some("Guidance")), post("2", None)];
    assert_eq!(posts_in(&posts, ALL_CATEGORIES).len(), 2);
}

#[test]
fn posts_in_category_filters_exact_match() {
    let posts = [post("1", Some("Guidance")), post("2", Some("Exam Prep")), post("3", None)];
    let ids: Vec<_> = posts_in(&posts, "Guidance").into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["1"]);
}
