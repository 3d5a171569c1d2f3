//! User and settings handlers

use tracing::info;

use super::{parse_body, parse_id};
use crate::api::types::{ApiResponse, ApiState};
use crate::domain::SettingsPatch;

/// GET /api/users/:id
pub fn get_user(state: &ApiState, raw_id: &str) -> ApiResponse {
    let id = match parse_id(raw_id, "user") {
        Ok(id) => id,
        Err(response) => return response,
    };
    let store = match state.store() {
        Ok(store) => store,
        Err(response) => return response,
    };

    match store.user(id) {
        Some(user) => ApiResponse::ok(user),
        None => ApiResponse::not_found("User"),
    }
}

/// PATCH /api/users/:id/settings
///
/// Every field is validated before anything is written, so a rejected
/// request leaves the stored settings untouched.
pub fn update_settings(state: &ApiState, raw_id: &str, body: &str) -> ApiResponse {
    let id = match parse_id(raw_id, "user") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let patch = match parse_body(body).and_then(|value| SettingsPatch::from_json(&value)) {
        Ok(patch) => patch,
        Err(e) => {
            info!("[voxlearn:http] rejected settings for user {}: {}", id, e);
            return ApiResponse::invalid("Invalid settings data", &e.errors);
        }
    };

    let mut store = match state.store() {
        Ok(store) => store,
        Err(response) => return response,
    };
    match store.update_user_settings(id, patch) {
        Some(user) => ApiResponse::ok(&user),
        None => ApiResponse::not_found("User"),
    }
}
