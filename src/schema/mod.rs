use serde::{Deserialize, Serialize};

pub mod course;
pub mod lesson;
pub mod student;

#[derive(Deserialize, Serialize, Debug)]
pub struct JWTClaims{
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

/// Caller identity decoded by the auth middlewares and stashed in the
/// request extensions.
#[derive(Serialize, Clone)]
pub struct AuthenticatedUser{
    pub email: String,
    pub role: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterRequest{
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub instructor: bool,
}

#[derive(Deserialize, Serialize)]
pub struct EmailAndPassword{
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SignupResponse{
    pub message: String,
    pub id: i64
}

#[derive(Serialize, Deserialize)]
pub struct SigninResponse{
    pub message: String,
    pub token: String,
}

#[derive(Serialize, Deserialize)]
pub struct MessageResponse{
    pub message: String,
}
