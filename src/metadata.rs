//! Linked-data article records.
//!
//! The caller hands the pipeline a set of pre-decoded JSON-LD records (see
//! `HtmlDocument::linked_data`). This module finds the first article-typed
//! record carrying an articleBody field. Schema data is untyped in the wild,
//! so the body field is modeled as a tagged variant and the type check is an
//! explicit predicate instead of ad hoc duck-typing.

use serde_json::Value;

/// Schema types accepted as articles besides the `*Article` family.
const ARTICLE_TYPE_SET: &[&str] = &["BlogPosting", "Report", "SocialMediaPosting", "WebPage"];

/// The articleBody field of a linked-data record, as found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyField {
    /// A single body string.
    Text(String),
    /// A list of body paragraphs.
    Paragraphs(Vec<String>),
    /// No usable body field.
    Absent,
}

impl BodyField {
    /// Whether no usable body was found.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The body as a paragraph list, splitting single strings on newlines.
    #[must_use]
    pub fn into_paragraphs(self) -> Vec<String> {
        match self {
            Self::Text(text) => text.split('\n').map(str::to_string).collect(),
            Self::Paragraphs(paragraphs) => paragraphs,
            Self::Absent => Vec::new(),
        }
    }
}

/// Collect the `@type` names of a schema object.
///
/// Handles both single-string and array forms; anything else yields an empty
/// list.
#[must_use]
pub fn schema_types(value: &Value) -> Vec<String> {
    let Some(type_val) = value.get("@type") else {
        return Vec::new();
    };

    match type_val {
        Value::String(s) => vec![s.trim().to_string()],
        Value::Array(arr) => arr
            .iter()
            .filter_map(|item| item.as_str())
            .map(|s| s.trim().to_string())
            .collect(),
        _ => Vec::new(),
    }
}

/// Whether a type list identifies an article-like record.
#[must_use]
pub fn is_article_type(types: &[String]) -> bool {
    types
        .iter()
        .any(|t| t.ends_with("Article") || ARTICLE_TYPE_SET.contains(&t.as_str()))
}

/// Read the articleBody field of one schema object.
#[must_use]
pub fn body_field(value: &Value) -> BodyField {
    match value.get("articleBody") {
        Some(Value::String(text)) if !text.trim().is_empty() => BodyField::Text(text.clone()),
        Some(Value::Array(arr)) => {
            let paragraphs: Vec<String> = arr
                .iter()
                .filter_map(|item| item.as_str())
                .map(str::to_string)
                .filter(|s| !s.trim().is_empty())
                .collect();
            if paragraphs.is_empty() {
                BodyField::Absent
            } else {
                BodyField::Paragraphs(paragraphs)
            }
        }
        _ => BodyField::Absent,
    }
}

/// Find the first article-typed record with a usable body.
///
/// Recurses through `@graph` arrays and nested objects in record order, the
/// way schema publishers actually nest things. Malformed values are skipped.
#[must_use]
pub fn find_article_body(records: &[Value]) -> BodyField {
    for record in records {
        let found = find_in_value(record);
        if !found.is_absent() {
            return found;
        }
    }
    BodyField::Absent
}

fn find_in_value(value: &Value) -> BodyField {
    match value {
        Value::Object(map) => {
            if is_article_type(&schema_types(value)) {
                let body = body_field(value);
                if !body.is_absent() {
                    return body;
                }
            }
            for nested in map.values() {
                let found = find_in_value(nested);
                if !found.is_absent() {
                    return found;
                }
            }
            BodyField::Absent
        }
        Value::Array(arr) => {
            for item in arr {
                let found = find_in_value(item);
                if !found.is_absent() {
                    return found;
                }
            }
            BodyField::Absent
        }
        _ => BodyField::Absent,
    }
}
