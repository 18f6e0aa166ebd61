//! Declarative admin forms: field lists to editable values to JSON bodies.
//!
//! DESIGN
//! ======
//! Admin create/edit modals are driven by a static list of [`FormField`]s.
//! Values are edited as strings; [`to_body`] validates them and converts each
//! field to the JSON type the backend expects.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::util::format::short_date;

/// Input control and JSON conversion for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Multi-line text.
    TextArea,
    Url,
    Date,
    /// Sent as a JSON number; blank omits the field.
    Number,
    /// One of a fixed set of options; the first is the default.
    Select(&'static [&'static str]),
    /// Comma-separated entries sent as a JSON array of strings.
    List,
}

impl FieldKind {
    /// HTML `<input type>` for non-select kinds.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Date => "date",
            Self::Number => "number",
            Self::Text | Self::TextArea | Self::List | Self::Select(_) => "text",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormField {
    /// JSON key.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind, placeholder: &'static str) -> FormField {
    FormField { name, label, kind, required: false, placeholder }
}

const fn required(field: FormField) -> FormField {
    FormField { required: true, ..field }
}

pub const COLLEGE_FORM: [FormField; 6] = [
    required(field("name", "College Name", FieldKind::Text, "e.g., IIT Bombay")),
    field("location", "Location", FieldKind::Text, "e.g., Mumbai, Maharashtra"),
    field("stream", "Stream", FieldKind::Text, "e.g., Engineering"),
    field("nirf_ranking", "NIRF Ranking", FieldKind::Number, "e.g., 3"),
    field("fees", "Average Fees", FieldKind::Text, "e.g., ₹2.2 Lakhs/yr"),
    field("websiteUrl", "Website URL", FieldKind::Url, "e.g., https://www.iitb.ac.in/"),
];

pub const CAREER_FORM: [FormField; 6] = [
    required(field("name", "Career Name", FieldKind::Text, "e.g., Data Scientist")),
    field("salary", "Average Salary (LPA)", FieldKind::Number, "e.g., 12"),
    field("growth", "Growth", FieldKind::Select(&["Medium", "Low", "High"]), ""),
    field("cluster", "Cluster", FieldKind::Text, "e.g., Technology"),
    field("traits", "Traits (comma separated)", FieldKind::List, "e.g., Analytical, Curious"),
    field("rationale", "Why it fits", FieldKind::TextArea, ""),
];

pub const BLOG_FORM: [FormField; 5] = [
    required(field("title", "Title", FieldKind::Text, "")),
    field("excerpt", "Excerpt", FieldKind::TextArea, "A one-line summary"),
    field("category", "Category", FieldKind::Select(&["Guidance", "Career Advice", "Exam Prep"]), ""),
    field("image", "Image URL", FieldKind::Url, "https://"),
    required(field("content", "Content", FieldKind::TextArea, "")),
];

pub const WEBINAR_FORM: [FormField; 6] = [
    required(field("title", "Title", FieldKind::Text, "")),
    field("speaker", "Speaker", FieldKind::Text, "e.g., Dr. Anjali Rao"),
    field("date", "Date", FieldKind::Date, ""),
    field("image", "Image URL", FieldKind::Url, "https://"),
    field("status", "Status", FieldKind::Select(&["Upcoming", "Past"]), ""),
    field("recordingUrl", "Recording URL", FieldKind::Url, "Link for past webinars"),
];

pub const SCHOLARSHIP_FORM: [FormField; 6] = [
    required(field("name", "Scholarship Name", FieldKind::Text, "")),
    field("provider", "Provider", FieldKind::Select(&["Government", "Private"]), ""),
    field("eligibility", "Eligibility", FieldKind::Text, ""),
    field("field", "Field (e.g., Science, All)", FieldKind::Text, ""),
    field("amount", "Amount", FieldKind::Text, ""),
    field("deadline", "Deadline", FieldKind::Date, ""),
];

/// Editable string values keyed by field name.
pub type FormValues = BTreeMap<&'static str, String>;

/// Validation failures reported inside the form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required.")]
    Missing(&'static str),
    #[error("{0} must be a number.")]
    NotNumber(&'static str),
    #[error("{label} must be one of: {options}.")]
    UnknownOption { label: &'static str, options: String },
}

/// Starting values: taken from `existing` when editing, defaults otherwise.
pub fn initial_values<T: Serialize>(fields: &[FormField], existing: Option<&T>) -> FormValues {
    let record = existing.and_then(|item| serde_json::to_value(item).ok()).unwrap_or(Value::Null);
    fields
        .iter()
        .map(|field| {
            let value = match record.get(field.name) {
                Some(Value::String(text)) if field.kind == FieldKind::Date => short_date(text).to_owned(),
                Some(Value::String(text)) => text.clone(),
                Some(Value::Number(number)) => number.to_string(),
                Some(Value::Bool(flag)) => flag.to_string(),
                Some(Value::Array(items)) => join_list(items),
                _ => default_value(field.kind),
            };
            (field.name, value)
        })
        .collect()
}

fn default_value(kind: FieldKind) -> String {
    match kind {
        FieldKind::Select(options) => options.first().map(|o| (*o).to_owned()).unwrap_or_default(),
        _ => String::new(),
    }
}

/// Validate `values` and build the JSON request body.
///
/// # Errors
///
/// Returns the first [`FormError`] in field order.
pub fn to_body(fields: &[FormField], values: &FormValues) -> Result<Map<String, Value>, FormError> {
    let mut body = Map::new();
    for field in fields {
        let raw = values.get(field.name).map_or("", |v| v.trim());
        if raw.is_empty() {
            if field.required {
                return Err(FormError::Missing(field.label));
            }
            match field.kind {
                FieldKind::Number => {}
                FieldKind::List => {
                    body.insert(field.name.to_owned(), Value::Array(Vec::new()));
                }
                _ => {
                    body.insert(field.name.to_owned(), Value::String(String::new()));
                }
            }
            continue;
        }
        let value = match field.kind {
            FieldKind::Number => Value::Number(parse_number(raw).ok_or(FormError::NotNumber(field.label))?),
            FieldKind::Select(options) if !options.contains(&raw) => {
                return Err(FormError::UnknownOption { label: field.label, options: options.join(", ") });
            }
            FieldKind::List => split_list(raw),
            _ => Value::String(raw.to_owned()),
        };
        body.insert(field.name.to_owned(), value);
    }
    Ok(body)
}

fn split_list(raw: &str) -> Value {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| Value::String(entry.to_owned()))
        .collect()
}

fn join_list(items: &[Value]) -> String {
    items.iter().filter_map(Value::as_str).collect::<Vec<_>>().join(", ")
}

fn parse_number(raw: &str) -> Option<Number> {
    if let Ok(int) = raw.parse::<i64>() {
        return Some(Number::from(int));
    }
    raw.parse::<f64>().ok().and_then(Number::from_f64)
}
