use serde::Serialize;
use sqlx::{FromRow, Pool, Sqlite};

use crate::{errors::CustomError, schema::lesson::{CreateLesson, UpdateLesson}};

#[derive(Debug, Serialize, FromRow)]
pub struct Lesson{
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub content: String,
}

pub async fn create_lesson(pool:&Pool<Sqlite>, lesson_details:&CreateLesson) -> Result<Lesson, CustomError>{

    let result = sqlx::query_as::<_, Lesson>(
        r#"
            INSERT INTO lessons (course_id, title, content)
            VALUES (?, ?, ?)
            RETURNING id, course_id, title, content
        "#,
    )
    .bind(lesson_details.course_id)
    .bind(&lesson_details.title)
    .bind(&lesson_details.content)
    .fetch_one(pool)
    .await;

    match result {
        Ok(val) => Ok(val),
        Err(_) => Err(CustomError { error: "Error while creating a lesson".to_string() })
    }
}

pub async fn get_lesson_by_id(pool:&Pool<Sqlite>, id:i64)->Result<Option<Lesson>, CustomError>{

    let result = sqlx::query_as::<_, Lesson>(
        r#"
            SELECT id, course_id, title, content FROM lessons
            WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await;

    match result {
        Ok(val) => Ok(val),
        Err(_) => Err(CustomError { error: "Error while fetching the lesson".to_string() })
    }
}

pub async fn update_lesson(pool:&Pool<Sqlite>, id:i64, updated_lesson:&UpdateLesson) -> Result<Option<Lesson>, CustomError>{

    let result = sqlx::query_as::<_, Lesson>(
        r#"
            UPDATE lessons
            SET course_id = ?, title = ?, content = ?
            WHERE id = ?
            RETURNING id, course_id, title, content
        "#,
    )
    .bind(updated_lesson.course_id)
    .bind(&updated_lesson.title)
    .bind(&updated_lesson.content)
    .bind(id)
    .fetch_optional(pool)
    .await;

    match result {
        Ok(val) => Ok(val),
        Err(_) => Err(CustomError { error: "Error while updating the lesson".to_string() })
    }
}

pub async fn delete_lesson(pool:&Pool<Sqlite>, id:i64) -> Result<bool, CustomError>{

    let result = sqlx::query(
        r#"
            DELETE FROM lessons
            WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await
    .map_err(|_e|CustomError{error:"Error while deleting the lesson".to_string()})?;

    Ok(result.rows_affected() > 0)
}

pub async fn get_course_lessons(pool:&Pool<Sqlite>, course_id:i64) -> Result<Vec<Lesson>, CustomError>{

    let result = sqlx::query_as::<_, Lesson>(
        r#"
            SELECT id, course_id, title, content FROM lessons
            WHERE course_id = ?
            ORDER BY id
        "#,
    )
    .bind(course_id)
    .fetch_all(pool)
    .await;

    match result {
        Ok(val) => Ok(val),
        Err(_) => Err(CustomError { error: "Error while fetching the course lessons".to_string() })
    }
}

pub async fn count_course_lessons(pool:&Pool<Sqlite>, course_id:i64) -> Result<i64, CustomError>{

    let result = sqlx::query_scalar::<_, i64>(
        r#"
            SELECT COUNT(*) FROM lessons
            WHERE course_id = ?
        "#,
    )
    .bind(course_id)
    .fetch_one(pool)
    .await
    .map_err(|_e|CustomError{error:"Error while counting the course lessons".to_string()})?;

    Ok(result)
}
