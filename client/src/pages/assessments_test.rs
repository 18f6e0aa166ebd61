use super::*;

fn assessment(id: &str, kind: &str) -> Assessment {
    serde_json::from_value(serde_json::json!({
        "_id": id,
        "assessmentName": id,
        "assessmentType": kind
    }))
    .unwrap()
}

#[test]
fn groups_follow_section_order_and_types() {
    let items = vec![
        assessment("p1", "Personality"),
        assessment("a1", "Aptitude"),
        assessment("i1", "Interest"),
        assessment("v1", "Values"),
        assessment("x1", "Other"),
    ];

    let groups = group_assessments(&items);

    let summary: Vec<(&str, Vec<String>)> =
        groups.into_iter().map(|(title, members)| (title, members.into_iter().map(|a| a.id).collect())).collect();
    assert_eq!(
        summary,
        vec![
            ("Aptitude Tests", vec!["a1".to_owned()]),
            ("Interest & Personality", vec!["i1".to_owned(), "p1".to_owned()]),
            ("Values Clarification", vec!["v1".to_owned()]),
        ]
    );
}

#[test]
fn empty_list_yields_empty_sections() {
    let groups = group_assessments(&[]);
    assert_eq!(groups.len(), 3);
    assert!(groups.iter().all(|(_, members)| members.is_empty()));
}

#[test]
fn action_label_by_status() {
    assert_eq!(action_label(AssessmentStatus::Pending), Some("Start Test"));
    assert_eq!(action_label(AssessmentStatus::InProgress), Some("Continue Test"));
    assert_eq!(action_label(AssessmentStatus::Completed), None);
}

#[test]
fn placeholder_scores_stay_in_range() {
    use rand::SeedableRng;

    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let scores: Vec<u32> = (0..500).map(|_| placeholder_score(&mut rng)).collect();

    assert!(scores.iter().all(|score| SCORE_RANGE.contains(score)));
    assert!(scores.contains(&70));
    assert!(scores.contains(&99));
}
