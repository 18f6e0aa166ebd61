use super::*;
use crate::net::types::College;

fn values(pairs: &[(&'static str, &str)]) -> FormValues {
    pairs.iter().map(|(k, v)| (*k, (*v).to_owned())).collect()
}

#[test]
fn initial_values_default_blank_and_first_option() {
    let initial = initial_values::<College>(&SCHOLARSHIP_FORM, None);
    assert_eq!(initial["name"], "");
    assert_eq!(initial["provider"], "Government");
    assert_eq!(initial.len(), SCHOLARSHIP_FORM.len());
}

#[test]
fn initial_values_copy_existing_record() {
    let college: College = serde_json::from_value(serde_json::json!({
        "_id": "c1",
        "name": "IIT Bombay",
        "nirf_ranking": 3,
        "websiteUrl": "https://www.iitb.ac.in/"
    }))
    .unwrap();

    let initial = initial_values(&COLLEGE_FORM, Some(&college));

    assert_eq!(initial["name"], "IIT Bombay");
    assert_eq!(initial["nirf_ranking"], "3");
    assert_eq!(initial["websiteUrl"], "https://www.iitb.ac.in/");
    assert_eq!(initial["location"], "");
}

#[test]
fn initial_values_trim_timestamps_for_date_fields() {
    let scholarship: crate::net::types::Scholarship = serde_json::from_value(serde_json::json!({
        "_id": "s1",
        "name": "Inspire",
        "provider": "Private",
        "deadline": "2025-03-31T00:00:00.000Z"
    }))
    .unwrap();

    let initial = initial_values(&SCHOLARSHIP_FORM, Some(&scholarship));

    assert_eq!(initial["deadline"], "2025-03-31");
    assert_eq!(initial["provider"], "Private");
}

#[test]
fn body_converts_numbers_and_trims_text() {
    let body = to_body(&COLLEGE_FORM, &values(&[("name", " IIT Delhi "), ("nirf_ranking", "2"), ("fees", "₹2 L")]))
        .unwrap();
    assert_eq!(body["name"], "IIT Delhi");
    assert_eq!(body["nirf_ranking"], 2);
    assert_eq!(body["fees"], "₹2 L");
    assert_eq!(body["location"], "");
}

#[test]
fn body_omits_blank_numbers() {
    let body = to_body(&COLLEGE_FORM, &values(&[("name", "X")])).unwrap();
    assert!(!body.contains_key("nirf_ranking"));
}

#[test]
fn body_rejects_missing_required_field() {
    assert_eq!(to_body(&COLLEGE_FORM, &values(&[("name", "  ")])), Err(FormError::Missing("College Name")));
}

#[test]
fn body_rejects_non_numeric_number() {
    let err = to_body(&COLLEGE_FORM, &values(&[("name", "X"), ("nirf_ranking", "third")])).unwrap_err();
    assert_eq!(err, FormError::NotNumber("NIRF Ranking"));
    assert_eq!(err.to_string(), "NIRF Ranking must be a number.");
}

#[test]
fn body_rejects_unknown_select_option() {
    let err = to_body(&SCHOLARSHIP_FORM, &values(&[("name", "S"), ("provider", "Alien")])).unwrap_err();
    assert!(matches!(err, FormError::UnknownOption { label: "Provider", .. }));
}

#[test]
fn list_fields_split_on_commas() {
    let body = to_body(&CAREER_FORM, &values(&[("name", "Nurse"), ("traits", " Caring,, Patient ,")])).unwrap();
    assert_eq!(body["traits"], serde_json::json!(["Caring", "Patient"]));
    assert_eq!(body["growth"], "");
}

#[test]
fn blank_list_field_sends_empty_array() {
    let body = to_body(&CAREER_FORM, &values(&[("name", "Nurse")])).unwrap();
    assert_eq!(body["traits"], serde_json::json!([]));
    assert!(!body.contains_key("salary"));
}

#[test]
fn list_fields_join_existing_entries() {
    let career: crate::net::types::Career = serde_json::from_value(serde_json::json!({
        "_id": "k1",
        "name": "Data Scientist",
        "salary": 14,
        "traits": ["Analytical", "Curious"]
    }))
    .unwrap();

    let initial = initial_values(&CAREER_FORM, Some(&career));

    assert_eq!(initial["traits"], "Analytical, Curious");
    assert_eq!(initial["salary"], "14");
    assert_eq!(initial["growth"], "Medium");
}

#[test]
fn webinar_form_reads_recording_url() {
    let webinar: crate::net::types::Webinar = serde_json::from_value(serde_json::json!({
        "_id": "w1",
        "title": "Cracking JEE",
        "status": "Past",
        "recordingUrl": "https://youtu.be/x"
    }))
    .unwrap();

    let initial = initial_values(&WEBINAR_FORM, Some(&webinar));

    assert_eq!(initial["status"], "Past");
    assert_eq!(initial["recordingUrl"], "https://youtu.be/x");
}

#[test]
fn blog_form_requires_content() {
    let err = to_body(&BLOG_FORM, &values(&[("title", "Choosing a stream")])).unwrap_err();
    assert_eq!(err, FormError::Missing("Content"));
}
