//! REST API for courses, lessons, quizzes and user settings
//!
//! Endpoints:
//! - GET   /api/users/:id
//! - PATCH /api/users/:id/settings
//! - GET   /api/courses, /api/courses/:id
//! - PATCH /api/courses/:id/progress
//! - GET   /api/courses/:id/lessons, /api/courses/:id/assignments
//! - GET   /api/lessons/:id, /api/lessons/:id/sections, /api/lessons/:id/quiz
//! - GET   /api/quizzes/:id/questions
//! - GET   /api/health

pub mod handlers;
mod types;

pub use types::{ApiResponse, ApiState};

use std::io::Read;
use std::thread::{self, JoinHandle};

use anyhow::{Result, anyhow};
use serde_json::json;
use tiny_http::{Response, Server};
use tracing::{debug, error, info};

use handlers::{courses, lessons, users};

const MAX_BODY_BYTES: usize = 1024 * 1024; // 1 MiB

/// Route one request. Pure with respect to the transport so it can be
/// exercised without a socket.
pub fn route(state: &ApiState, method: &str, path: &str, body: &str) -> ApiResponse {
    let path = path.split('?').next().unwrap_or(path);
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    match (method, segments.as_slice()) {
        ("GET", ["api", "health"]) => ApiResponse::ok(&json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
        })),

        ("GET", ["api", "users", id]) => users::get_user(state, id),
        ("PATCH", ["api", "users", id, "settings"]) => users::update_settings(state, id, body),

        ("GET", ["api", "courses"]) => courses::list_courses(state),
        ("GET", ["api", "courses", id]) => courses::get_course(state, id),
        ("PATCH", ["api", "courses", id, "progress"]) => {
            courses::update_progress(state, id, body)
        }
        ("GET", ["api", "courses", id, "lessons"]) => lessons::list_lessons(state, id),
        ("GET", ["api", "courses", id, "assignments"]) => courses::list_assignments(state, id),

        ("GET", ["api", "lessons", id]) => lessons::get_lesson(state, id),
        ("GET", ["api", "lessons", id, "sections"]) => lessons::list_sections(state, id),
        ("GET", ["api", "lessons", id, "quiz"]) => lessons::get_quiz(state, id),
        ("GET", ["api", "quizzes", id, "questions"]) => lessons::list_questions(state, id),

        _ => ApiResponse::message(404, "Not found"),
    }
}

/// Bind the listener and serve requests on a background thread.
/// Returns once the socket is bound; the thread runs until the program exits.
pub fn start_http_server(state: ApiState, addr: &str) -> Result<JoinHandle<()>> {
    let server = Server::http(addr)
        .map_err(|e| anyhow!("Failed to start server on {}: {}", addr, e))?;
    info!("[voxlearn:http] Server listening on http://{}", addr);

    let handle = thread::spawn(move || {
        for mut request in server.incoming_requests() {
            let method = request.method().to_string();
            let url = request.url().to_string();

            let body = match read_request_body(&mut request) {
                Ok(body) => body,
                Err(response) => {
                    let _ = request.respond(response);
                    continue;
                }
            };

            let response = route(&state, &method, &url, &body);
            debug!("[voxlearn:http] {} {} -> {}", method, url, response.status);
            respond_json(request, response);
        }
    });

    Ok(handle)
}

fn json_content_type() -> tiny_http::Header {
    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .expect("static header is valid")
}

fn read_request_body(
    request: &mut tiny_http::Request,
) -> Result<String, Response<std::io::Cursor<Vec<u8>>>> {
    let mut body = String::new();
    let mut reader = request.as_reader().take((MAX_BODY_BYTES + 1) as u64);
    if let Err(e) = reader.read_to_string(&mut body) {
        error!("[voxlearn:http] Failed to read body: {}", e);
        let response = Response::from_string("{\"message\":\"Bad request\"}")
            .with_status_code(400)
            .with_header(json_content_type());
        return Err(response);
    }

    if body.len() > MAX_BODY_BYTES {
        let response = Response::from_string("{\"message\":\"Payload too large\"}")
            .with_status_code(413)
            .with_header(json_content_type());
        return Err(response);
    }

    Ok(body)
}

fn respond_json(request: tiny_http::Request, response: ApiResponse) {
    let body = serde_json::to_string(&response.body)
        .unwrap_or_else(|_| "{\"message\":\"Server error\"}".to_string());
    let response = Response::from_string(body)
        .with_status_code(response.status)
        .with_header(json_content_type());
    let _ = request.respond(response);
}
