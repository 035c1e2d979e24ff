// src/pipeline/validate.rs

//! Homework API response shape checks.

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{HomeworkRecord, PollResponse};

/// JSON type name for error messages.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Check that `response` matches the documented API shape.
///
/// Required keys are checked before their types, so a response missing
/// `current_date` is an empty response even when `homeworks` is malformed.
/// An empty `homeworks` list is valid.
pub fn check_response(response: Value) -> Result<PollResponse> {
    let mut object = match response {
        Value::Object(object) => object,
        other => {
            return Err(AppError::type_error(format!(
                "response is a {} instead of an object",
                type_name(&other)
            )));
        }
    };

    let homeworks = object
        .remove("homeworks")
        .ok_or(AppError::EmptyResponse("homeworks"))?;
    let current_date = object
        .remove("current_date")
        .ok_or(AppError::EmptyResponse("current_date"))?;

    let homeworks = match homeworks {
        Value::Array(items) => items.into_iter().map(HomeworkRecord::from).collect(),
        other => {
            return Err(AppError::type_error(format!(
                "homeworks is a {} instead of a list",
                type_name(&other)
            )));
        }
    };

    let current_date = current_date.as_i64().ok_or_else(|| {
        AppError::type_error(format!(
            "current_date is a {} instead of an integer",
            type_name(&current_date)
        ))
    })?;

    Ok(PollResponse {
        homeworks,
        current_date,
    })
}
