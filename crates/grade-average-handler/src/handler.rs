//! Grade average handler
//!
//! Computes the arithmetic mean of a student's grades and wraps the result
//! in the gateway's response envelope. Stateless: every invocation is a pure
//! function of its event.

use grade_function_sdk::prelude::*;
use serde_json::Map;

/// Handle one invocation event.
///
/// The context is accepted for interface compatibility with the host
/// contract and never inspected here.
pub fn handle(event: JsonValue, _ctx: &Context) -> Response {
    // Browser preflight: answer before any parsing or validation.
    if event::http_method(&event) == Some("OPTIONS") {
        return Response::ok(json!({"message": "OK"})).with_cors();
    }

    match run(&event) {
        Ok(response) => response,
        Err(err) => err.to_response(),
    }
}

fn run(event: &JsonValue) -> Result<Response, HandlerError> {
    let data = event::payload_object(event)?;

    let student_id = require_student_id(&data)?;
    let grades = require_grades(&data)?;
    let values = check_grades(grades)?;

    let average = round2(values.iter().sum::<f64>() / values.len() as f64);

    Ok(Response::ok(json!({
        "success": true,
        "student_id": student_id,
        "grades": grades,
        "average": average,
        "grade_count": grades.len(),
        "message": format!("Successfully calculated average for {student_id}"),
    }))
    .with_cors())
}

/// Trimmed, non-empty student id. A non-string value is a type fault, not a
/// validation failure: the caller sent a payload outside the contract shape.
fn require_student_id(data: &Map<String, JsonValue>) -> Result<&str, HandlerError> {
    let trimmed = match data.get("student_id") {
        None | Some(JsonValue::Null) => "",
        Some(JsonValue::String(s)) => s.trim(),
        Some(_) => {
            return Err(HandlerError::Unexpected(
                "student_id is not a string".into(),
            ))
        }
    };

    if trimmed.is_empty() {
        return Err(HandlerError::Validation("Student ID is required".into()));
    }

    Ok(trimmed)
}

fn require_grades(data: &Map<String, JsonValue>) -> Result<&Vec<JsonValue>, HandlerError> {
    match data.get("grades") {
        None | Some(JsonValue::Null) => Err(HandlerError::Validation(
            "At least one grade is required".into(),
        )),
        Some(JsonValue::Array(grades)) if grades.is_empty() => Err(HandlerError::Validation(
            "At least one grade is required".into(),
        )),
        Some(JsonValue::Array(grades)) => Ok(grades),
        Some(_) => Err(HandlerError::Unexpected("grades is not an array".into())),
    }
}

/// Single in-order scan: for each element the type check runs before the
/// range check, and the scan stops at the first element failing either.
/// Positions in messages are 1-based.
fn check_grades(grades: &[JsonValue]) -> Result<Vec<f64>, HandlerError> {
    let mut values = Vec::with_capacity(grades.len());

    for (i, grade) in grades.iter().enumerate() {
        let value = grade.as_f64().ok_or_else(|| {
            HandlerError::Validation(format!("Grade {} must be a number", i + 1))
        })?;

        if !(0.0..=100.0).contains(&value) {
            return Err(HandlerError::Validation(format!(
                "Grade {} must be between 0 and 100",
                i + 1
            )));
        }

        values.push(value);
    }

    Ok(values)
}

/// Round half away from zero to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
