// src/pipeline/validate.rs

//! Structural validation of the decoded API payload.

use serde_json::Value;

use crate::error::{AppError, Result};

const HOMEWORKS_KEY: &str = "homeworks";

/// Check the shape of the API response and extract the homework records.
///
/// Three independent checks, all evaluated before any verdict: the
/// payload must be a mapping, it must contain the `homeworks` key, and
/// that key must hold a list. Per-record fields are left untouched here;
/// the formatter inspects them.
pub fn check_response(response: &Value) -> Result<Vec<Value>> {
    let is_mapping = response.is_object();
    let homeworks = response.get(HOMEWORKS_KEY);
    let has_key = homeworks.is_some();
    let is_list = homeworks.is_some_and(Value::is_array);

    if !is_mapping {
        return Err(AppError::Shape("not a mapping"));
    }
    if !has_key {
        return Err(AppError::Shape("missing key"));
    }
    if !is_list {
        return Err(AppError::Shape("homeworks not a list"));
    }

    // Checked above; the list is returned in upstream order.
    let records = homeworks
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn shape_reason(result: Result<Vec<Value>>) -> &'static str {
        match result {
            Err(AppError::Shape(reason)) => reason,
            other => panic!("expected shape failure, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_non_mapping() {
        assert_eq!(shape_reason(check_response(&json!([]))), "not a mapping");
        assert_eq!(shape_reason(check_response(&json!(7))), "not a mapping");
        assert_eq!(shape_reason(check_response(&json!(null))), "not a mapping");
    }

    #[test]
    fn test_rejects_missing_key() {
        let payload = json!({"current_date": 1});
        assert_eq!(shape_reason(check_response(&payload)), "missing key");
    }

    #[test]
    fn test_rejects_non_list_homeworks() {
        let payload = json!({"homeworks": {"homework_name": "hw1"}});
        assert_eq!(
            shape_reason(check_response(&payload)),
            "homeworks not a list"
        );

        let payload = json!({"homeworks": "hw1"});
        assert_eq!(
            shape_reason(check_response(&payload)),
            "homeworks not a list"
        );
    }

    #[test]
    fn test_extracts_records_in_order() {
        let payload = json!({
            "homeworks": [
                {"homework_name": "hw1", "status": "approved"},
                {"homework_name": "hw2", "status": "reviewing"},
            ],
            "current_date": 1_700_000_000,
        });

        let records = check_response(&payload).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["homework_name"], "hw1");
        assert_eq!(records[1]["homework_name"], "hw2");
    }

    #[test]
    fn test_accepts_empty_list() {
        let payload = json!({"homeworks": []});
        assert!(check_response(&payload).unwrap().is_empty());
    }
}
