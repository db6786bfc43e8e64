//! Schema checks for restaurant catalog records.
//!
//! Every record is checked independently and all problems are collected,
//! so one run reports the full list of fixes a catalog needs.

use crate::parser::json_type_name;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;

/// Dietary tags a catalog record may carry.
pub const ALLOWED_DIETARY_TAGS: [&str; 5] =
    ["gluten_free", "halal", "pescatarian", "vegan", "vegetarian"];

/// Where a record's data came from.
pub const ALLOWED_SOURCES: [&str; 3] = ["google", "manual", "yelp"];

/// JSON type a field is required to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Str,
    List,
    Int,
    Number,
}

impl FieldKind {
    fn name(self) -> &'static str {
        match self {
            FieldKind::Str => "str",
            FieldKind::List => "list",
            FieldKind::Int => "int",
            FieldKind::Number => "number",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::Str => value.is_string(),
            FieldKind::List => value.is_array(),
            FieldKind::Int => value.is_i64() || value.is_u64(),
            FieldKind::Number => value.is_number(),
        }
    }
}

const REQUIRED_FIELDS: [(&str, FieldKind); 10] = [
    ("id", FieldKind::Str),
    ("name", FieldKind::Str),
    ("dietary_tags", FieldKind::List),
    ("rating", FieldKind::Number),
    ("price_level", FieldKind::Int),
    ("address", FieldKind::Str),
    ("lat", FieldKind::Number),
    ("lng", FieldKind::Number),
    ("hours_text", FieldKind::Str),
    ("source", FieldKind::Str),
];

const OPTIONAL_FIELDS: [(&str, FieldKind); 5] = [
    ("review_count", FieldKind::Int),
    ("phone", FieldKind::Str),
    ("menu_text", FieldKind::Str),
    ("cuisines", FieldKind::List),
    ("categories", FieldKind::List),
];

/// One problem found in a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Position of the offending record
    pub index: usize,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "restaurants[{}]{}", self.index, self.message)
    }
}

/// Validate every record in a catalog.
///
/// # Returns
/// All issues found, in record order. An empty vector means the catalog is valid.
pub fn validate_catalog(records: &[Value]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for (index, record) in records.iter().enumerate() {
        match record {
            Value::Object(obj) => {
                for message in validate_record(obj, &mut seen_ids) {
                    issues.push(ValidationIssue { index, message });
                }
            }
            other => issues.push(ValidationIssue {
                index,
                message: format!(": expected object, got {}", json_type_name(other)),
            }),
        }
    }

    issues
}

/// Check one record. Messages are suffixes for the `restaurants[i]` prefix.
fn validate_record(obj: &Map<String, Value>, seen_ids: &mut HashSet<String>) -> Vec<String> {
    let mut errs = Vec::new();

    for (field, kind) in REQUIRED_FIELDS {
        match obj.get(field) {
            None => errs.push(format!(": missing required field '{field}'")),
            Some(value) if kind == FieldKind::Number && !value.is_number() => {
                errs.push(format!(".{field}: must be a number"));
            }
            Some(value) if !kind.matches(value) => errs.push(format!(
                ".{field}: expected {}, got {}",
                kind.name(),
                json_type_name(value)
            )),
            Some(_) => {}
        }
    }

    if let Some(Value::String(id)) = obj.get("id") {
        if id.trim().is_empty() {
            errs.push(".id: cannot be empty".to_string());
        } else if !seen_ids.insert(id.clone()) {
            errs.push(format!(".id: duplicate id '{id}'"));
        }
    }

    if let Some(rating) = obj.get("rating").and_then(Value::as_f64) {
        if !(0.0..=5.0).contains(&rating) {
            errs.push(format!(".rating: must be between 0 and 5, got {rating}"));
        }
    }

    match obj.get("price_level") {
        Some(value) if FieldKind::Int.matches(value) => {
            let level = value.as_i64().unwrap_or(i64::MAX);
            if !(1..=4).contains(&level) {
                errs.push(format!(".price_level: must be 1..4, got {value}"));
            }
        }
        Some(_) => errs.push(".price_level: must be int 1..4".to_string()),
        None => {}
    }

    if let Some(Value::Array(tags)) = obj.get("dietary_tags") {
        for tag in tags {
            let Some(tag) = tag.as_str() else {
                errs.push(".dietary_tags: all tags must be strings".to_string());
                break;
            };
            if !ALLOWED_DIETARY_TAGS.contains(&tag) {
                errs.push(format!(
                    ".dietary_tags: invalid tag '{tag}' (allowed: {ALLOWED_DIETARY_TAGS:?})"
                ));
            }
        }
    }

    if let Some(Value::String(source)) = obj.get("source") {
        if !ALLOWED_SOURCES.contains(&source.as_str()) {
            errs.push(format!(
                ".source: must be one of {ALLOWED_SOURCES:?}, got '{source}'"
            ));
        }
    }

    if let (Some(lat), Some(lng)) = (obj.get("lat"), obj.get("lng")) {
        if let Some(msg) = check_lat_lng(lat, lng) {
            errs.push(format!(": {msg}"));
        }
    }

    for (field, kind) in OPTIONAL_FIELDS {
        let Some(value) = obj.get(field) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        if !kind.matches(value) {
            errs.push(format!(".{field}: must be {} or null", kind.name()));
        } else if let Value::Array(items) = value {
            if items.iter().any(|item| !item.is_string()) {
                errs.push(format!(".{field}: must be list of strings"));
            }
        }
    }

    errs
}

fn check_lat_lng(lat: &Value, lng: &Value) -> Option<String> {
    let (Some(lat), Some(lng)) = (lat.as_f64(), lng.as_f64()) else {
        return Some("lat/lng must be numbers".to_string());
    };
    if !(-90.0..=90.0).contains(&lat) {
        return Some(format!("lat out of range (-90..90): {lat}"));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Some(format!("lng out of range (-180..180): {lng}"));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_record(id: &str) -> Value {
        json!({
            "id": id,
            "name": "MoonGoat Coffee",
            "dietary_tags": ["vegan", "vegetarian"],
            "rating": 4.4,
            "price_level": 2,
            "address": "4237 Campus Dr, Irvine, CA",
            "lat": 33.6489,
            "lng": -117.8405,
            "hours_text": "7am - 6pm",
            "source": "manual",
            "review_count": 120,
            "cuisines": ["coffee"],
            "phone": null
        })
    }

    #[test]
    fn test_valid_catalog_has_no_issues() {
        let records = vec![valid_record("a"), valid_record("b")];
        assert!(validate_catalog(&records).is_empty());
    }

    #[test]
    fn test_missing_and_mistyped_fields() {
        let mut record = valid_record("a");
        let obj = record.as_object_mut().unwrap();
        obj.remove("address");
        obj.insert("name".into(), json!(42));
        obj.insert("rating".into(), json!("high"));

        let issues = validate_catalog(&[record]);
        let messages: Vec<String> = issues.iter().map(ToString::to_string).collect();
        assert!(messages.contains(&"restaurants[0]: missing required field 'address'".to_string()));
        assert!(messages.contains(&"restaurants[0].name: expected str, got int".to_string()));
        assert!(messages.contains(&"restaurants[0].rating: must be a number".to_string()));
    }

    #[test]
    fn test_duplicate_and_empty_ids() {
        let records = vec![valid_record("dup"), valid_record("dup"), valid_record("  ")];
        let issues = validate_catalog(&records);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].index, 1);
        assert!(issues[0].message.contains("duplicate id 'dup'"));
        assert_eq!(issues[1].index, 2);
        assert!(issues[1].message.contains("cannot be empty"));
    }

    #[test]
    fn test_range_checks() {
        let mut record = valid_record("a");
        let obj = record.as_object_mut().unwrap();
        obj.insert("rating".into(), json!(5.5));
        obj.insert("price_level".into(), json!(7));
        obj.insert("lat".into(), json!(91.0));

        let issues = validate_catalog(&[record]);
        assert_eq!(issues.len(), 3);
        assert!(issues[0].message.contains("rating: must be between 0 and 5"));
        assert!(issues[1].message.contains("price_level: must be 1..4, got 7"));
        assert!(issues[2].message.contains("lat out of range"));
    }

    #[test]
    fn test_vocabulary_checks() {
        let mut record = valid_record("a");
        let obj = record.as_object_mut().unwrap();
        obj.insert("dietary_tags".into(), json!(["vegan", "keto"]));
        obj.insert("source".into(), json!("tripadvisor"));

        let issues = validate_catalog(&[record]);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].message.contains("invalid tag 'keto'"));
        assert!(issues[1].message.contains("got 'tripadvisor'"));
    }

    #[test]
    fn test_non_string_tags_reported_once() {
        let mut record = valid_record("a");
        let obj = record.as_object_mut().unwrap();
        obj.insert("dietary_tags".into(), json!(["keto", 1, 2, "paleo"]));

        let issues = validate_catalog(&[record]);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].message.contains("invalid tag 'keto'"));
        assert_eq!(
            issues[1].to_string(),
            "restaurants[0].dietary_tags: all tags must be strings"
        );
    }

    #[test]
    fn test_optional_field_types() {
        let mut record = valid_record("a");
        let obj = record.as_object_mut().unwrap();
        obj.insert("review_count".into(), json!(1.5));
        obj.insert("categories".into(), json!(["cafe", 3]));

        let issues = validate_catalog(&[record]);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].message.contains("review_count: must be int or null"));
        assert!(issues[1].message.contains("categories: must be list of strings"));
    }

    #[test]
    fn test_non_object_record() {
        let issues = validate_catalog(&[json!("not a restaurant")]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].to_string(), "restaurants[0]: expected object, got str");
    }
}
