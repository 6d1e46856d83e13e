use actix_web::{post, web::{self, Json}, HttpResponse, Responder};

use crate::{errors::CustomError, models::{student::ensure_student, user::{check_user_exists, create_user, get_user_by_email, ROLE_INSTRUCTOR, ROLE_STUDENT}}, schema::{EmailAndPassword, MessageResponse, RegisterRequest, SigninResponse, SignupResponse}, utils::{hash_password, issue_token, verify_password}, GlobalState};

#[post("/register")]
pub async fn register_user(data:web::Data<GlobalState>, body:Json<RegisterRequest>) -> impl Responder{
    let pool = &data.pool;

    match check_user_exists(pool, &body.email).await {
        Ok(false) => {},
        Ok(true) => return HttpResponse::BadRequest().json(CustomError{error:"User exists already with this email".to_string()}),
        Err(e) => return HttpResponse::InternalServerError().json(e),
    }

    let password_hash = match hash_password(&body.password) {
        Ok(hash) => hash,
        Err(_e) => return HttpResponse::InternalServerError().json(CustomError{error:"Something went wrong !".to_string()}),
    };

    let role = if body.instructor { ROLE_INSTRUCTOR } else { ROLE_STUDENT };

    let user_id = match create_user(pool, &body.name, &body.email, &password_hash, role).await {
        Ok(id) => id,
        Err(e) => return HttpResponse::BadGateway().json(e),
    };

    // every fresh account gets its student profile right away
    let account = match get_user_by_email(pool, &body.email).await {
        Ok(Some(account)) => account,
        Ok(None) => return HttpResponse::InternalServerError().json(CustomError{error:"Internal Error".to_string()}),
        Err(e) => return HttpResponse::InternalServerError().json(e),
    };

    if let Err(e) = ensure_student(pool, &account).await {
        return HttpResponse::InternalServerError().json(e);
    }

    log::info!("registered {} account for {}", role, body.email);

    HttpResponse::Ok().json(SignupResponse{message:String::from("Registration successful!"), id:user_id})
}

#[post("/login")]
pub async fn login_user(data:web::Data<GlobalState>, body:Json<EmailAndPassword>) -> impl Responder{
    let pool = &data.pool;

    let account = match get_user_by_email(pool, &body.email).await {
        Ok(Some(account)) => account,
        Ok(None) => return HttpResponse::BadRequest().json(CustomError{error:"No account found with this email".to_string()}),
        Err(e) => return HttpResponse::InternalServerError().json(e),
    };

    if verify_password(&body.password, &account.password).is_err() {
        return HttpResponse::BadRequest().json(CustomError{error:"Invalid username or password.".to_string()});
    }

    let token = match issue_token(&account.email, &account.role) {
        Ok(token) => token,
        Err(e) => return HttpResponse::InternalServerError().json(e),
    };

    HttpResponse::Ok().json(SigninResponse{message:String::from("Login successful!"), token})
}

// tokens carry their own expiry, there is no server side session to clear
#[post("/logout")]
pub async fn logout_user() -> impl Responder{
    HttpResponse::Ok().json(MessageResponse{message:String::from("You have been logged out.")})
}
