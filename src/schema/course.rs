use serde::{Deserialize, Serialize};

use crate::models::course::Course;
use crate::schema::lesson::LessonResponse;

#[derive(Serialize, Deserialize)]
pub struct CreateCourse {
    pub title: String,
    pub description: String,
    pub duration: i64,
    pub thumbnail: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateCourse {
    pub title: String,
    pub description: String,
    pub duration: i64,
    pub thumbnail: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CourseResponse{
    pub id: i64,
    pub title: String,
    pub description: String,
    pub duration: i64,
    pub thumbnail: Option<String>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            duration: course.duration,
            thumbnail: course.thumbnail,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct CourseDetailResponse{
    pub id: i64,
    pub title: String,
    pub description: String,
    pub duration: i64,
    pub thumbnail: Option<String>,
    pub total_lessons: i64,
    pub lessons: Vec<LessonResponse>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ProgressResponse{
    pub course_id: i64,
    pub completed: i64,
    pub total_lessons: i64,
    pub percent: f64,
}
