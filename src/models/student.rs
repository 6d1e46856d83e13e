use chrono::Utc;
use serde::Serialize;
use sqlx::{FromRow, Pool, Sqlite};

use crate::{errors::CustomError, models::user::User};

#[derive(Debug, Serialize, FromRow)]
pub struct Student{
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub email: String,
}

pub async fn get_student_by_user(pool:&Pool<Sqlite>, user_id:i64) -> Result<Option<Student>, CustomError>{

    let result = sqlx::query_as::<_, Student>(
        r#"
            SELECT id, user_id, name, email FROM students
            WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(|_e|CustomError{error:"Error while fetching the student".to_string()})?;

    Ok(result)
}

/// Get-or-create the student record linked to an account, deriving the
/// profile defaults from the account on first contact.
pub async fn ensure_student(pool:&Pool<Sqlite>, account:&User) -> Result<Student, CustomError>{

    if let Some(student) = get_student_by_user(pool, account.id).await? {
        return Ok(student);
    }

    let result = sqlx::query_as::<_, Student>(
        r#"
            INSERT INTO students (user_id, name, email)
            VALUES (?, ?, ?)
            RETURNING id, user_id, name, email
        "#,
    )
    .bind(account.id)
    .bind(&account.name)
    .bind(&account.email)
    .fetch_one(pool)
    .await;

    match result {
        Ok(val) => Ok(val),
        Err(_) => Err(CustomError { error: "Error while creating the student".to_string() })
    }
}

pub async fn is_enrolled(pool:&Pool<Sqlite>, student_id:i64, course_id:i64) -> Result<bool, CustomError>{

    let result = sqlx::query_scalar::<_, i64>(
        r#"
            SELECT COUNT(*) FROM enrollments
            WHERE student_id = ? AND course_id = ?
        "#,
    )
    .bind(student_id)
    .bind(course_id)
    .fetch_one(pool)
    .await
    .map_err(|_e|CustomError{error:"Error while checking the enrollment".to_string()})?;

    Ok(result > 0)
}

pub async fn enroll(pool:&Pool<Sqlite>, student_id:i64, course_id:i64) -> Result<(), CustomError>{

    sqlx::query(
        r#"
            INSERT INTO enrollments (student_id, course_id, enrolled_at)
            VALUES (?, ?, ?)
        "#,
    )
    .bind(student_id)
    .bind(course_id)
    .bind(Utc::now())
    .execute(pool)
    .await
    .map_err(|_e|CustomError{error:"Error while enrolling the student".to_string()})?;

    Ok(())
}

/// The most recent enrollees of a course, newest student id first.
pub async fn newest_enrollees(pool:&Pool<Sqlite>, course_id:i64, limit:i64) -> Result<Vec<Student>, CustomError>{

    let result = sqlx::query_as::<_, Student>(
        r#"
            SELECT s.id, s.user_id, s.name, s.email FROM students s
            JOIN enrollments e ON e.student_id = s.id
            WHERE e.course_id = ?
            ORDER BY s.id DESC
            LIMIT ?
        "#,
    )
    .bind(course_id)
    .bind(limit)
    .fetch_all(pool)
    .await;

    match result {
        Ok(val) => Ok(val),
        Err(_) => Err(CustomError { error: "Error while fetching the new students".to_string() })
    }
}
