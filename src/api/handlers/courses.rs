//! Course handlers

use serde_json::Value;

use super::{parse_body, parse_id};
use crate::api::types::{ApiResponse, ApiState};
use crate::domain::ValidationErrors;

/// GET /api/courses
pub fn list_courses(state: &ApiState) -> ApiResponse {
    match state.store() {
        Ok(store) => ApiResponse::ok(&store.courses()),
        Err(response) => response,
    }
}

/// GET /api/courses/:id
pub fn get_course(state: &ApiState, raw_id: &str) -> ApiResponse {
    let id = match parse_id(raw_id, "course") {
        Ok(id) => id,
        Err(response) => return response,
    };
    let store = match state.store() {
        Ok(store) => store,
        Err(response) => return response,
    };

    match store.course(id) {
        Some(course) => ApiResponse::ok(course),
        None => ApiResponse::not_found("Course"),
    }
}

/// PATCH /api/courses/:id/progress with `{"progress": 0..=100}`
pub fn update_progress(state: &ApiState, raw_id: &str, body: &str) -> ApiResponse {
    let id = match parse_id(raw_id, "course") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let progress = match parse_body(body).and_then(|value| parse_progress(&value)) {
        Ok(progress) => progress,
        Err(e) => return ApiResponse::invalid("Invalid progress data", &e.errors),
    };

    let mut store = match state.store() {
        Ok(store) => store,
        Err(response) => return response,
    };
    match store.update_course_progress(id, progress) {
        Some(course) => ApiResponse::ok(&course),
        None => ApiResponse::not_found("Course"),
    }
}

fn parse_progress(body: &Value) -> Result<u8, ValidationErrors> {
    let fail = |message: &str| ValidationErrors::single("progress", message);

    let Some(value) = body.get("progress") else {
        return Err(fail("is required"));
    };
    let Some(n) = value.as_f64() else {
        return Err(fail("must be a number"));
    };
    if n.fract() != 0.0 {
        return Err(fail("must be an integer"));
    }
    if !(0.0..=100.0).contains(&n) {
        return Err(fail("must be between 0 and 100"));
    }
    Ok(n as u8)
}

/// GET /api/courses/:id/assignments
pub fn list_assignments(state: &ApiState, raw_id: &str) -> ApiResponse {
    let id = match parse_id(raw_id, "course") {
        Ok(id) => id,
        Err(response) => return response,
    };
    match state.store() {
        Ok(store) => ApiResponse::ok(&store.assignments(id)),
        Err(response) => response,
    }
}
