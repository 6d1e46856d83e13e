use serde::Serialize;
use sqlx::{Pool, Sqlite};

use crate::{errors::CustomError, models::lesson};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Progress{
    pub completed: i64,
    pub total_lessons: i64,
    pub percent: f64,
}

impl Progress {
    // a course with no lessons counts as zero progress
    pub fn new(completed: i64, total_lessons: i64) -> Self {
        let percent = if total_lessons == 0 {
            0.0
        } else {
            completed as f64 / total_lessons as f64 * 100.0
        };

        Progress { completed, total_lessons, percent }
    }
}

pub async fn is_completed(pool:&Pool<Sqlite>, student_id:i64, lesson_id:i64) -> Result<bool, CustomError>{

    let result = sqlx::query_scalar::<_, i64>(
        r#"
            SELECT COUNT(*) FROM completions
            WHERE student_id = ? AND lesson_id = ?
        "#,
    )
    .bind(student_id)
    .bind(lesson_id)
    .fetch_one(pool)
    .await
    .map_err(|_e|CustomError{error:"Error while checking the completion".to_string()})?;

    Ok(result > 0)
}

pub async fn add_completion(pool:&Pool<Sqlite>, student_id:i64, lesson_id:i64) -> Result<(), CustomError>{

    sqlx::query(
        r#"
            INSERT INTO completions (student_id, lesson_id)
            VALUES (?, ?)
        "#,
    )
    .bind(student_id)
    .bind(lesson_id)
    .execute(pool)
    .await
    .map_err(|_e|CustomError{error:"Error while recording the completion".to_string()})?;

    Ok(())
}

pub async fn remove_completion(pool:&Pool<Sqlite>, student_id:i64, lesson_id:i64) -> Result<(), CustomError>{

    sqlx::query(
        r#"
            DELETE FROM completions
            WHERE student_id = ? AND lesson_id = ?
        "#,
    )
    .bind(student_id)
    .bind(lesson_id)
    .execute(pool)
    .await
    .map_err(|_e|CustomError{error:"Error while removing the completion".to_string()})?;

    Ok(())
}

/// Flips the completion state of a lesson for a student and returns the
/// new state.
pub async fn toggle_completion(pool:&Pool<Sqlite>, student_id:i64, lesson_id:i64) -> Result<bool, CustomError>{

    if is_completed(pool, student_id, lesson_id).await? {
        remove_completion(pool, student_id, lesson_id).await?;
        Ok(false)
    } else {
        add_completion(pool, student_id, lesson_id).await?;
        Ok(true)
    }
}

pub async fn course_progress(pool:&Pool<Sqlite>, student_id:i64, course_id:i64) -> Result<Progress, CustomError>{

    let total = lesson::count_course_lessons(pool, course_id).await?;

    let completed = sqlx::query_scalar::<_, i64>(
        r#"
            SELECT COUNT(*) FROM completions c
            JOIN lessons l ON l.id = c.lesson_id
            WHERE c.student_id = ? AND l.course_id = ?
        "#,
    )
    .bind(student_id)
    .bind(course_id)
    .fetch_one(pool)
    .await
    .map_err(|_e|CustomError{error:"Error while counting the completions".to_string()})?;

    Ok(Progress::new(completed, total))
}

#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    fn empty_course_has_zero_progress(){
        let progress = Progress::new(0, 0);
        assert_eq!(progress.percent, 0.0);
    }

    #[test]
    fn half_completed_course_is_fifty_percent(){
        let progress = Progress::new(2, 4);
        assert_eq!(progress.percent, 50.0);
    }

    #[test]
    fn fully_completed_course_is_hundred_percent(){
        let progress = Progress::new(3, 3);
        assert_eq!(progress.percent, 100.0);
    }
}
