//! Shared API types

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

use crate::domain::FieldError;
use crate::store::MemStore;

/// State shared by every request
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<Mutex<MemStore>>,
}

impl ApiState {
    pub fn new(store: MemStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Lock the store, mapping a poisoned lock to a 500 response
    pub(crate) fn store(&self) -> Result<MutexGuard<'_, MemStore>, ApiResponse> {
        self.store.lock().map_err(|_| {
            error!("[voxlearn:http] store lock poisoned");
            ApiResponse::message(500, "Server error")
        })
    }
}

/// Status code and JSON body of a routed request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn ok<T: Serialize>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(body) => Self { status: 200, body },
            Err(e) => {
                error!("[voxlearn:http] failed to serialize response: {}", e);
                Self::message(500, "Server error")
            }
        }
    }

    pub fn message(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "message": message.into() }),
        }
    }

    pub fn invalid(message: &str, errors: &[FieldError]) -> Self {
        Self {
            status: 400,
            body: json!({ "message": message, "errors": errors }),
        }
    }

    pub fn not_found(entity: &str) -> Self {
        Self::message(404, format!("{} not found", entity))
    }

    /// `message` field of the body, if any
    pub fn message_text(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }
}
