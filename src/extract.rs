//! Field extraction from upstream travel API documents.
//!
//! Upstream payloads vary: optional sections come and go, ids are
//! sometimes numbers, and list entries are not always objects. The
//! `try_*` functions surface structural problems as [`ExtractError`];
//! the plain `extract_*` functions are total and fall back to an empty
//! list.

use crate::types::{AttractionRecord, ReviewRecord};
use serde_json::{Map, Value};
use tracing::error;

/// Why a document could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("missing field `{path}`")]
    MissingField { path: String },

    #[error("expected {expected} at `{path}`, found {found}")]
    WrongShape {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Walk `path` through nested objects.
///
/// An absent or `null` segment is [`ExtractError::MissingField`]; a
/// non-object on the way is [`ExtractError::WrongShape`].
pub fn lookup<'a>(doc: &'a Value, path: &[&str]) -> Result<&'a Value, ExtractError> {
    let mut current = doc;
    for (depth, segment) in path.iter().enumerate() {
        let obj = current.as_object().ok_or_else(|| ExtractError::WrongShape {
            path: join_path(&path[..depth]),
            expected: "object",
            found: kind(current),
        })?;
        current = match obj.get(*segment) {
            Some(Value::Null) | None => {
                return Err(ExtractError::MissingField {
                    path: join_path(&path[..=depth]),
                })
            }
            Some(value) => value,
        };
    }
    Ok(current)
}

/// Array at `path`, or an empty slice when any link is missing.
fn array_or_empty<'a>(doc: &'a Value, path: &[&str]) -> Result<&'a [Value], ExtractError> {
    match lookup(doc, path) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(other) => Err(ExtractError::WrongShape {
            path: join_path(path),
            expected: "array",
            found: kind(other),
        }),
        Err(ExtractError::MissingField { .. }) => Ok(&[]),
        Err(e) => Err(e),
    }
}

// ---------------------------------------------------------------------------
// Attractions
// ---------------------------------------------------------------------------

/// Normalize `data.products` from a location search.
pub fn try_extract_attractions(doc: &Value) -> Result<Vec<AttractionRecord>, ExtractError> {
    array_or_empty(doc, &["data", "products"])?
        .iter()
        .enumerate()
        .map(|(i, product)| {
            let obj = product.as_object().ok_or_else(|| ExtractError::WrongShape {
                path: format!("data.products[{i}]"),
                expected: "object",
                found: kind(product),
            })?;
            Ok(AttractionRecord {
                title: text_field(obj, "title"),
                product_id: text_field(obj, "productId"),
                city_name: text_field(obj, "cityName"),
                country_code: text_field(obj, "countryCode"),
            })
        })
        .collect()
}

/// Like [`try_extract_attractions`], but never fails.
pub fn extract_attractions(doc: &Value) -> Vec<AttractionRecord> {
    try_extract_attractions(doc).unwrap_or_else(|e| {
        error!("Error while extracting attractions: {e}");
        Vec::new()
    })
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

/// Normalize the top-level `data` list of a reviews response.
///
/// Entries that are not objects are skipped.
pub fn try_extract_reviews(doc: &Value) -> Result<Vec<ReviewRecord>, ExtractError> {
    array_or_empty(doc, &["data"])?
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| entry.as_object().map(|obj| review_record(i, obj)))
        .collect()
}

/// Like [`try_extract_reviews`], but never fails.
pub fn extract_reviews(doc: &Value) -> Vec<ReviewRecord> {
    try_extract_reviews(doc).unwrap_or_else(|e| {
        error!("Error while extracting reviews: {e}");
        Vec::new()
    })
}

fn review_record(index: usize, obj: &Map<String, Value>) -> Result<ReviewRecord, ExtractError> {
    let user = match obj.get("user") {
        None | Some(Value::Null) => None,
        Some(Value::Object(author)) => raw_field(author, "name"),
        Some(other) => {
            return Err(ExtractError::WrongShape {
                path: format!("data[{index}].user"),
                expected: "object",
                found: kind(other),
            })
        }
    };

    Ok(ReviewRecord {
        content: raw_field(obj, "content"),
        id: raw_field(obj, "id"),
        language: raw_field(obj, "language"),
        numeric_rating: match obj.get("numericRating") {
            Some(Value::Number(n)) => Some(n.clone()),
            _ => None,
        },
        user,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Scalar field as text. Objects and arrays read as absent.
fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Field value as upstream sent it; `null` reads as absent.
fn raw_field(obj: &Map<String, Value>, key: &str) -> Option<Value> {
    obj.get(key).filter(|v| !v.is_null()).cloned()
}

fn join_path(segments: &[&str]) -> String {
    if segments.is_empty() {
        "$".to_string()
    } else {
        segments.join(".")
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_reports_missing_and_wrong_shape() {
        let doc = json!({"data": {"products": null}, "flat": "x"});
        assert_eq!(
            lookup(&doc, &["data", "products"]),
            Err(ExtractError::MissingField {
                path: "data.products".into()
            })
        );
        assert_eq!(
            lookup(&doc, &["flat", "products"]),
            Err(ExtractError::WrongShape {
                path: "flat".into(),
                expected: "object",
                found: "string",
            })
        );
        assert!(matches!(
            lookup(&json!([]), &["data"]),
            Err(ExtractError::WrongShape { ref path, .. }) if path == "$"
        ));
    }

    #[test]
    fn attractions_keep_only_declared_fields() {
        let doc = json!({
            "data": {
                "products": [{
                    "title": "Louvre Museum",
                    "productId": "PRxyz",
                    "cityName": "Paris",
                    "countryCode": "fr",
                    "slug": "louvre",
                    "taxonomySlug": "museums"
                }]
            }
        });

        let records = try_extract_attractions(&doc).unwrap();
        assert_eq!(
            serde_json::to_value(&records).unwrap(),
            json!([{
                "title": "Louvre Museum",
                "productId": "PRxyz",
                "cityName": "Paris",
                "countryCode": "fr"
            }])
        );
    }

    #[test]
    fn attractions_default_absent_fields_to_null() {
        let doc = json!({"data": {"products": [{"title": "Eiffel Tower"}]}});
        let records = extract_attractions(&doc);
        assert_eq!(
            records,
            vec![AttractionRecord {
                title: Some("Eiffel Tower".into()),
                ..Default::default()
            }]
        );
    }

    #[test]
    fn attractions_missing_links_yield_empty() {
        for doc in [
            json!({}),
            json!({"data": null}),
            json!({"data": {}}),
            json!({"data": {"products": []}}),
        ] {
            assert_eq!(try_extract_attractions(&doc), Ok(Vec::new()), "{doc}");
        }
    }

    #[test]
    fn attractions_wrong_shapes_are_errors() {
        assert!(try_extract_attractions(&json!({"data": "oops"})).is_err());
        assert!(try_extract_attractions(&json!({"data": {"products": {}}})).is_err());
        assert_eq!(
            try_extract_attractions(&json!({"data": {"products": [1]}})),
            Err(ExtractError::WrongShape {
                path: "data.products[0]".into(),
                expected: "object",
                found: "number",
            })
        );
        assert!(extract_attractions(&json!({"data": [1, 2]})).is_empty());
    }

    #[test]
    fn numeric_ids_are_rendered_as_text() {
        let doc = json!({"data": {"products": [{"productId": 42, "title": ["nested"]}]}});
        let records = extract_attractions(&doc);
        assert_eq!(records[0].product_id.as_deref(), Some("42"));
        assert_eq!(records[0].title, None);
    }

    #[test]
    fn reviews_skip_non_object_entries() {
        let doc = json!({
            "data": [
                "garbage",
                {"id": "1", "content": "Lovely", "language": "en", "numericRating": 4, "user": {"name": "Bo"}}
            ]
        });
        let reviews = try_extract_reviews(&doc).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].user, Some(json!("Bo")));
        assert_eq!(reviews[0].numeric_rating, Some(4.into()));
    }

    #[test]
    fn reviews_default_user_and_rating() {
        let doc = json!({"data": [{"id": 9, "numericRating": "five"}, {"user": null}, {"user": {}}]});
        let reviews = extract_reviews(&doc);
        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews[0].id, Some(json!(9)));
        assert_eq!(reviews[0].numeric_rating, None);
        assert!(reviews.iter().all(|r| r.user.is_none()));
    }

    #[test]
    fn review_fields_pass_through_unchanged() {
        let doc = json!({
            "data": [{
                "id": 987654,
                "content": {"text": "hi"},
                "language": null,
                "user": {"name": 17}
            }]
        });
        let out = serde_json::to_value(extract_reviews(&doc)).unwrap();
        assert_eq!(out[0]["id"], json!(987654));
        assert_eq!(out[0]["content"], json!({"text": "hi"}));
        assert_eq!(out[0]["language"], Value::Null);
        assert_eq!(out[0]["user"], json!(17));
    }

    #[test]
    fn reviews_fractional_rating_is_preserved() {
        let doc = json!({"data": [{"numericRating": 4.5}]});
        let reviews = extract_reviews(&doc);
        assert_eq!(
            serde_json::to_value(&reviews[0]).unwrap()["numericRating"],
            json!(4.5)
        );
    }

    #[test]
    fn reviews_non_object_user_is_wrong_shape() {
        let doc = json!({"data": [{"id": "1"}, {"user": "Ann"}]});
        assert_eq!(
            try_extract_reviews(&doc),
            Err(ExtractError::WrongShape {
                path: "data[1].user".into(),
                expected: "object",
                found: "string",
            })
        );
        assert!(extract_reviews(&doc).is_empty());
    }

    #[test]
    fn reviews_missing_data_yields_empty() {
        assert_eq!(try_extract_reviews(&json!({"status": true})), Ok(Vec::new()));
        assert!(try_extract_reviews(&json!({"data": {"items": []}})).is_err());
    }

    #[test]
    fn extraction_is_idempotent() {
        let doc = json!({
            "data": [
                {"id": "1", "content": "a", "user": {"name": "x"}},
                {"id": "2", "numericRating": 3}
            ]
        });
        assert_eq!(extract_reviews(&doc), extract_reviews(&doc));

        let doc = json!({"data": {"products": [{"title": "t"}, {"cityName": "c"}]}});
        assert_eq!(extract_attractions(&doc), extract_attractions(&doc));
    }
}
