use serde::Serialize;
use sqlx::{FromRow, Pool, Sqlite};

use crate::{errors::CustomError, schema::course::{CreateCourse, UpdateCourse}};

#[derive(Debug, Serialize, FromRow)]
pub struct Course{
    pub id: i64,
    pub title: String,
    pub description: String,
    pub duration: i64,
    pub thumbnail: Option<String>,
}

pub async fn create_course(pool:&Pool<Sqlite>, course_details:&CreateCourse) -> Result<Course, CustomError>{

    let result = sqlx::query_as::<_, Course>(
        r#"
            INSERT INTO courses (title, description, duration, thumbnail)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, description, duration, thumbnail
        "#,
    )
    .bind(&course_details.title)
    .bind(&course_details.description)
    .bind(course_details.duration)
    .bind(&course_details.thumbnail)
    .fetch_one(pool)
    .await;

    match result {
        Ok(val) => Ok(val),
        Err(_) => Err(CustomError { error: "Error while creating a course".to_string() })
    }
}

pub async fn get_course_by_id(pool:&Pool<Sqlite>, id:i64)->Result<Option<Course>, CustomError>{

    let result = sqlx::query_as::<_, Course>(
        r#"
            SELECT id, title, description, duration, thumbnail FROM courses
            WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await;

    match result {
        Ok(val) => Ok(val),
        Err(_) => Err(CustomError { error: "Error while fetching the course".to_string() })
    }
}

/// Returns `None` when no course carries the given id.
pub async fn update_course(pool:&Pool<Sqlite>, id:i64, updated_course:&UpdateCourse) -> Result<Option<Course>, CustomError>{

    let result = sqlx::query_as::<_, Course>(
        r#"
            UPDATE courses
            SET title = ?, description = ?, duration = ?, thumbnail = ?
            WHERE id = ?
            RETURNING id, title, description, duration, thumbnail
        "#,
    )
    .bind(&updated_course.title)
    .bind(&updated_course.description)
    .bind(updated_course.duration)
    .bind(&updated_course.thumbnail)
    .bind(id)
    .fetch_optional(pool)
    .await;

    match result {
        Ok(val) => Ok(val),
        Err(_) => Err(CustomError { error: "Error while updating the course".to_string() })
    }
}

pub async fn delete_course(pool:&Pool<Sqlite>, id:i64) -> Result<bool, CustomError>{

    let result = sqlx::query(
        r#"
            DELETE FROM courses
            WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await
    .map_err(|_e|CustomError{error:"Error while deleting the course".to_string()})?;

    Ok(result.rows_affected() > 0)
}

pub async fn get_all_courses(pool:&Pool<Sqlite>) -> Result<Vec<Course>, CustomError>{

    let result = sqlx::query_as::<_, Course>(
        r#"
            SELECT id, title, description, duration, thumbnail FROM courses
            ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await;

    match result {
        Ok(val) => Ok(val),
        Err(_) => Err(CustomError { error: "Error while fetching all the courses".to_string() })
    }
}
