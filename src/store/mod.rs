//! In-memory course store (no persistence)

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::domain::{
    Assignment, AssignmentId, Course, CourseId, Lesson, LessonId, Question, QuestionId, Quiz,
    QuizId, Section, SectionId, SettingsPatch, User, UserId,
};

/// Holds users and course content keyed by id.
///
/// Ids are allocated sequentially per entity kind, starting at 1.
#[derive(Debug, Default)]
pub struct MemStore {
    users: BTreeMap<UserId, User>,
    courses: BTreeMap<CourseId, Course>,
    lessons: BTreeMap<LessonId, Lesson>,
    sections: BTreeMap<SectionId, Section>,
    quizzes: BTreeMap<QuizId, Quiz>,
    questions: BTreeMap<QuestionId, Question>,
    assignments: BTreeMap<AssignmentId, Assignment>,
}

fn next_id<V>(map: &BTreeMap<u64, V>) -> u64 {
    map.keys().next_back().map_or(1, |id| id + 1)
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Users

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.values().find(|u| u.username == username)
    }

    pub fn create_user(&mut self, username: &str, password: &str) -> User {
        let id = next_id(&self.users);
        let user = User::new(id, username, password);
        self.users.insert(id, user.clone());
        user
    }

    /// Apply an already validated patch; `None` if the user does not exist
    pub fn update_user_settings(&mut self, id: UserId, patch: SettingsPatch) -> Option<User> {
        let user = self.users.get_mut(&id)?;
        patch.apply(&mut user.settings);
        Some(user.clone())
    }

    // Courses

    pub fn courses(&self) -> Vec<Course> {
        self.courses.values().cloned().collect()
    }

    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(&id)
    }

    pub fn create_course(&mut self, title: &str, description: &str) -> Course {
        let id = next_id(&self.courses);
        let course = Course {
            id,
            title: title.to_string(),
            description: description.to_string(),
            progress: 0,
        };
        self.courses.insert(id, course.clone());
        course
    }

    pub fn update_course_progress(&mut self, id: CourseId, progress: u8) -> Option<Course> {
        let course = self.courses.get_mut(&id)?;
        course.progress = progress;
        Some(course.clone())
    }

    // Lessons

    /// Lessons of a course in display order
    pub fn lessons(&self, course_id: CourseId) -> Vec<Lesson> {
        let mut lessons: Vec<Lesson> = self
            .lessons
            .values()
            .filter(|l| l.course_id == course_id)
            .cloned()
            .collect();
        lessons.sort_by_key(|l| l.order);
        lessons
    }

    pub fn lesson(&self, id: LessonId) -> Option<&Lesson> {
        self.lessons.get(&id)
    }

    pub fn create_lesson(&mut self, course_id: CourseId, title: &str, order: u32) -> Lesson {
        let id = next_id(&self.lessons);
        let lesson = Lesson {
            id,
            course_id,
            title: title.to_string(),
            order,
        };
        self.lessons.insert(id, lesson.clone());
        lesson
    }

    // Sections

    pub fn sections(&self, lesson_id: LessonId) -> Vec<Section> {
        let mut sections: Vec<Section> = self
            .sections
            .values()
            .filter(|s| s.lesson_id == lesson_id)
            .cloned()
            .collect();
        sections.sort_by_key(|s| s.order);
        sections
    }

    pub fn create_section(
        &mut self,
        lesson_id: LessonId,
        title: &str,
        content: &str,
        order: u32,
    ) -> Section {
        let id = next_id(&self.sections);
        let section = Section {
            id,
            lesson_id,
            title: title.to_string(),
            content: content.to_string(),
            order,
        };
        self.sections.insert(id, section.clone());
        section
    }

    // Quizzes

    pub fn quiz_for_lesson(&self, lesson_id: LessonId) -> Option<&Quiz> {
        self.quizzes.values().find(|q| q.lesson_id == lesson_id)
    }

    pub fn create_quiz(&mut self, lesson_id: LessonId, title: &str) -> Quiz {
        let id = next_id(&self.quizzes);
        let quiz = Quiz {
            id,
            lesson_id,
            title: title.to_string(),
        };
        self.quizzes.insert(id, quiz.clone());
        quiz
    }

    pub fn questions(&self, quiz_id: QuizId) -> Vec<Question> {
        let mut questions: Vec<Question> = self
            .questions
            .values()
            .filter(|q| q.quiz_id == quiz_id)
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.order);
        questions
    }

    pub fn create_question(
        &mut self,
        quiz_id: QuizId,
        question: &str,
        options: &[&str],
        correct_answer: usize,
        order: u32,
    ) -> Question {
        let id = next_id(&self.questions);
        let question = Question {
            id,
            quiz_id,
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer,
            order,
        };
        self.questions.insert(id, question.clone());
        question
    }

    // Assignments

    pub fn assignments(&self, course_id: CourseId) -> Vec<Assignment> {
        self.assignments
            .values()
            .filter(|a| a.course_id == course_id)
            .cloned()
            .collect()
    }

    pub fn create_assignment(
        &mut self,
        course_id: CourseId,
        title: &str,
        description: &str,
        due_date: DateTime<Utc>,
    ) -> Assignment {
        let id = next_id(&self.assignments);
        let assignment = Assignment {
            id,
            course_id,
            title: title.to_string(),
            description: description.to_string(),
            due_date,
        };
        self.assignments.insert(id, assignment.clone());
        assignment
    }

    /// Store seeded with the demo student and the introductory course
    pub fn with_sample_data(now: DateTime<Utc>) -> Self {
        let mut store = Self::new();
        store.create_user("student", "password");

        let course = store.create_course(
            "Introduction to Programming",
            "Learn the basics of programming concepts and languages.",
        );

        let titles = [
            "Introduction to Programming Concepts",
            "Variables and Data Types",
            "Control Structures",
            "Loops and Iterations",
            "Functions",
        ];
        let mut functions = None;
        for (order, title) in (1u32..).zip(titles) {
            functions = Some(store.create_lesson(course.id, title, order));
        }
        let Some(functions) = functions else {
            return store;
        };

        store.create_section(
            functions.id,
            "Functions Introduction",
            "This section explains what functions are and how they help organize code. \
             Functions are reusable blocks of code that perform a specific task. They help you \
             avoid repetition and make your code more organized and easier to understand.",
            1,
        );
        store.create_section(
            functions.id,
            "Function Parameters",
            "Learn how to define and use parameters in your functions. Parameters are values \
             that you can pass to a function when you call it. They allow your functions to \
             work with different data each time they're called.",
            2,
        );
        store.create_section(
            functions.id,
            "Return Values",
            "Understand how functions can return values to calling code. The return statement \
             allows a function to compute a value and send it back to the code that called the \
             function. This makes functions even more versatile and powerful.",
            3,
        );

        let quiz = store.create_quiz(functions.id, "Functions in Programming");
        let questions: [(&str, [&str; 4], usize); 5] = [
            (
                "What are functions in programming?",
                [
                    "Variables that store multiple values",
                    "Reusable blocks of code that perform specific tasks",
                    "Special operators for mathematical calculations",
                    "Comments that explain the code",
                ],
                1,
            ),
            (
                "What is the purpose of parameters in a function?",
                [
                    "To give the function a name",
                    "To determine how fast the function runs",
                    "To pass data into the function",
                    "To display results on the screen",
                ],
                2,
            ),
            (
                "What is the purpose of a return statement in a function?",
                [
                    "To end the function execution",
                    "To return a value to the caller",
                    "To print output to the console",
                    "To create a new variable",
                ],
                1,
            ),
            (
                "Which of the following is a benefit of using functions?",
                [
                    "They make the program run slower",
                    "They require more memory",
                    "They reduce code duplication",
                    "They limit what a program can do",
                ],
                2,
            ),
            (
                "What happens if a function has no return statement?",
                [
                    "The function will cause an error",
                    "The function will return the value 0",
                    "The function will return undefined",
                    "The function will continue executing forever",
                ],
                2,
            ),
        ];
        for (order, (question, options, correct)) in (1u32..).zip(questions) {
            store.create_question(quiz.id, question, &options, correct, order);
        }

        store.create_assignment(
            course.id,
            "Programming Quiz",
            "Test your knowledge of programming concepts",
            now + Duration::days(1),
        );

        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_layout() {
        let now = Utc::now();
        let store = MemStore::with_sample_data(now);

        assert_eq!(store.user(1).map(|u| u.username.as_str()), Some("student"));
        assert_eq!(store.courses().len(), 1);
        let lessons = store.lessons(1);
        assert_eq!(lessons.len(), 5);
        assert_eq!(lessons[4].title, "Functions");

        assert_eq!(store.sections(5).len(), 3);
        let quiz = store.quiz_for_lesson(5).unwrap();
        let questions = store.questions(quiz.id);
        assert_eq!(questions.len(), 5);
        assert!(questions[0].is_correct(1));
        assert!(!questions[0].is_correct(0));

        let assignments = store.assignments(1);
        assert_eq!(assignments[0].due_date, now + Duration::days(1));
        assert!(store.quiz_for_lesson(1).is_none());
    }

    #[test]
    fn test_listing_is_sorted_by_order() {
        let mut store = MemStore::new();
        let course = store.create_course("C", "d");
        store.create_lesson(course.id, "second", 2);
        store.create_lesson(course.id, "first", 1);
        store.create_lesson(99, "other course", 1);

        let titles: Vec<String> = store.lessons(course.id).into_iter().map(|l| l.title).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_update_missing_entities() {
        let mut store = MemStore::new();
        assert!(store.update_course_progress(1, 50).is_none());
        assert!(store.update_user_settings(1, SettingsPatch::default()).is_none());

        let user = store.create_user("ada", "secret");
        let patch = SettingsPatch {
            reading_speed: Some(5),
            ..Default::default()
        };
        let updated = store.update_user_settings(user.id, patch).unwrap();
        assert_eq!(updated.settings.reading_speed, 5);
        assert_eq!(store.user_by_username("ada").unwrap().settings.reading_speed, 5);
    }
}
