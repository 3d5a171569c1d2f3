//! Core domain types for voxlearn

mod course;
mod settings;
mod user;

pub use course::{
    Assignment, AssignmentId, Course, CourseId, Lesson, LessonId, Question, QuestionId, Quiz,
    QuizId, Section, SectionId,
};
pub use settings::{AccessibilitySettings, FieldError, SettingsPatch, ValidationErrors};
pub use user::{User, UserId};
