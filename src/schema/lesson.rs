use serde::{Deserialize, Serialize};

use crate::models::lesson::Lesson;

#[derive(Serialize, Deserialize)]
pub struct CreateLesson {
    pub course_id: i64,
    pub title: String,
    pub content: String,
}

// the course field is editable too, a lesson can move between courses
#[derive(Serialize, Deserialize)]
pub struct UpdateLesson {
    pub course_id: i64,
    pub title: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LessonResponse{
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub content: String,
}

impl From<Lesson> for LessonResponse {
    fn from(lesson: Lesson) -> Self {
        Self {
            id: lesson.id,
            course_id: lesson.course_id,
            title: lesson.title,
            content: lesson.content,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CompletionResponse{
    pub lesson_id: i64,
    pub completed: bool,
    pub message: String,
}
