// src/pipeline/format.rs

//! Notification rendering for one homework record.

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::ReviewStatus;

/// Render the notification text for one homework record.
///
/// Requires `homework_name` (a non-empty string) and `status` (one of
/// the closed enumeration). Pure: the same record always renders the
/// same bytes.
pub fn parse_status(homework: &Value) -> Result<String> {
    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or(AppError::MissingField("homework_name"))?;

    let raw_status = homework
        .get("status")
        .ok_or(AppError::MissingField("status"))?;

    // A present but non-string status (null, number) is an unknown
    // status, not a missing field.
    let code = raw_status
        .as_str()
        .ok_or_else(|| AppError::UnknownStatus(raw_status.to_string()))?;
    let status =
        ReviewStatus::parse(code).ok_or_else(|| AppError::UnknownStatus(code.to_string()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    ))
}
