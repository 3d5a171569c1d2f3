//! Lesson, section and quiz handlers

use super::parse_id;
use crate::api::types::{ApiResponse, ApiState};

/// GET /api/courses/:id/lessons
pub fn list_lessons(state: &ApiState, raw_course_id: &str) -> ApiResponse {
    let course_id = match parse_id(raw_course_id, "course") {
        Ok(id) => id,
        Err(response) => return response,
    };
    match state.store() {
        Ok(store) => ApiResponse::ok(&store.lessons(course_id)),
        Err(response) => response,
    }
}

/// GET /api/lessons/:id
pub fn get_lesson(state: &ApiState, raw_id: &str) -> ApiResponse {
    let id = match parse_id(raw_id, "lesson") {
        Ok(id) => id,
        Err(response) => return response,
    };
    let store = match state.store() {
        Ok(store) => store,
        Err(response) => return response,
    };

    match store.lesson(id) {
        Some(lesson) => ApiResponse::ok(lesson),
        None => ApiResponse::not_found("Lesson"),
    }
}

/// GET /api/lessons/:id/sections
pub fn list_sections(state: &ApiState, raw_lesson_id: &str) -> ApiResponse {
    let lesson_id = match parse_id(raw_lesson_id, "lesson") {
        Ok(id) => id,
        Err(response) => return response,
    };
    match state.store() {
        Ok(store) => ApiResponse::ok(&store.sections(lesson_id)),
        Err(response) => response,
    }
}

/// GET /api/lessons/:id/quiz
pub fn get_quiz(state: &ApiState, raw_lesson_id: &str) -> ApiResponse {
    let lesson_id = match parse_id(raw_lesson_id, "lesson") {
        Ok(id) => id,
        Err(response) => return response,
    };
    let store = match state.store() {
        Ok(store) => store,
        Err(response) => return response,
    };

    match store.quiz_for_lesson(lesson_id) {
        Some(quiz) => ApiResponse::ok(quiz),
        None => ApiResponse::not_found("Quiz"),
    }
}

/// GET /api/quizzes/:id/questions
pub fn list_questions(state: &ApiState, raw_quiz_id: &str) -> ApiResponse {
    let quiz_id = match parse_id(raw_quiz_id, "quiz") {
        Ok(id) => id,
        Err(response) => return response,
    };
    match state.store() {
        Ok(store) => ApiResponse::ok(&store.questions(quiz_id)),
        Err(response) => response,
    }
}
