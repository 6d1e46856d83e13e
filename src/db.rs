use std::str::FromStr;

use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};

use crate::errors::AppError;

// Idempotent schema, applied at startup. Deleting a course takes its
// lessons and enrollments with it; deleting a lesson takes its
// completion rows.
static SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        name     TEXT NOT NULL,
        email    TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        role     TEXT NOT NULL DEFAULT 'student'
    )",

    "CREATE TABLE IF NOT EXISTS courses (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        title       TEXT NOT NULL,
        description TEXT NOT NULL,
        duration    INTEGER NOT NULL,
        thumbnail   TEXT
    )",

    "CREATE TABLE IF NOT EXISTS lessons (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        course_id INTEGER NOT NULL REFERENCES courses(id) ON DELETE CASCADE,
        title     TEXT NOT NULL,
        content   TEXT NOT NULL
    )",

    "CREATE TABLE IF NOT EXISTS students (
        id      INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
        name    TEXT NOT NULL,
        email   TEXT NOT NULL
    )",

    "CREATE TABLE IF NOT EXISTS enrollments (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        student_id  INTEGER NOT NULL REFERENCES students(id) ON DELETE CASCADE,
        course_id   INTEGER NOT NULL REFERENCES courses(id) ON DELETE CASCADE,
        enrolled_at TEXT NOT NULL,
        UNIQUE (student_id, course_id)
    )",

    "CREATE TABLE IF NOT EXISTS completions (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        student_id INTEGER NOT NULL REFERENCES students(id) ON DELETE CASCADE,
        lesson_id  INTEGER NOT NULL REFERENCES lessons(id) ON DELETE CASCADE,
        UNIQUE (student_id, lesson_id)
    )",
];

pub async fn connect(database_url:&str) -> Result<Pool<Sqlite>, AppError>{

    // sqlite needs the pragma on every connection for the cascades to fire
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|_e| AppError::DbConnect)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|_e| AppError::DbConnect)?;

    Ok(pool)
}

pub async fn init(pool:&Pool<Sqlite>) -> Result<(), AppError>{

    for table in SCHEMA {
        sqlx::query(table)
            .execute(pool)
            .await
            .map_err(|_e| AppError::Migrate)?;
    }

    Ok(())
}
