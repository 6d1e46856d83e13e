use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Pool, Sqlite};

use crate::errors::CustomError;

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_INSTRUCTOR: &str = "instructor";

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User{
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

pub async fn check_user_exists(pool:&Pool<Sqlite>, email:&str) -> Result<bool, CustomError>{

    let result = sqlx::query_scalar::<_, i64>(
        r#"
            SELECT COUNT(*) FROM users
            WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .map_err(|_e|CustomError{error:"Error while fetching the account".to_string()})?;

    Ok(result > 0)
}

pub async fn create_user(pool:&Pool<Sqlite>, name:&str, email:&str, password_hash:&str, role:&str) -> Result<i64, CustomError>{

    let result = sqlx::query(
        r#"
            INSERT INTO users (name, email, password, role)
            VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .execute(pool)
    .await
    .map_err(|_e|CustomError{error:"Error while creating the account".to_string()})?;

    Ok(result.last_insert_rowid())
}

pub async fn get_user_by_email(pool:&Pool<Sqlite>, email:&str) -> Result<Option<User>, CustomError>{

    let result = sqlx::query_as::<_, User>(
        r#"
            SELECT id, name, email, password, role FROM users
            WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(|_e|CustomError{error:"Error while fetching the account".to_string()})?;

    Ok(result)
}
