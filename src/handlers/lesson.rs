use actix_web::{delete, post, put, web::{self, Json}, HttpMessage, HttpRequest, HttpResponse, Responder};

use crate::{errors::CustomError, models::{course::get_course_by_id, lesson, progress::toggle_completion, student::get_student_by_user, user::get_user_by_email}, schema::{lesson::{CompletionResponse, CreateLesson, LessonResponse, UpdateLesson}, AuthenticatedUser, MessageResponse}, GlobalState};

#[post("/lessons")]
pub async fn create_lesson_handler(data:web::Data<GlobalState>, body:Json<CreateLesson>) -> impl Responder {
    let pool = &data.pool;

    match get_course_by_id(pool, body.course_id).await {
        Ok(Some(_)) => {},
        Ok(None) => return HttpResponse::NotFound().json(CustomError{error:"Course not found".to_string()}),
        Err(e) => return HttpResponse::InternalServerError().json(e),
    }

    let lesson_res = lesson::create_lesson(pool, &body).await;

    match lesson_res {
        Ok(res) => HttpResponse::Ok().json(LessonResponse::from(res)),
        Err(e) => HttpResponse::BadGateway().json(e),
    }
}

#[put("/lessons/{id}")]
pub async fn update_lesson_handler(data:web::Data<GlobalState>, path:web::Path<i64>, body:Json<UpdateLesson>) -> impl Responder {
    let pool = &data.pool;
    let lesson_id = path.into_inner();

    match get_course_by_id(pool, body.course_id).await {
        Ok(Some(_)) => {},
        Ok(None) => return HttpResponse::NotFound().json(CustomError{error:"Course not found".to_string()}),
        Err(e) => return HttpResponse::InternalServerError().json(e),
    }

    let lesson_res = lesson::update_lesson(pool, lesson_id, &body).await;

    match lesson_res {
        Ok(Some(res)) => HttpResponse::Ok().json(LessonResponse::from(res)),
        Ok(None) => HttpResponse::NotFound().json(CustomError{error:"Lesson not found".to_string()}),
        Err(e) => HttpResponse::BadGateway().json(e),
    }
}

#[delete("/lessons/{id}")]
pub async fn delete_lesson_handler(data:web::Data<GlobalState>, path:web::Path<i64>) -> impl Responder {
    let pool = &data.pool;
    let lesson_id = path.into_inner();

    match lesson::delete_lesson(pool, lesson_id).await {
        Ok(true) => HttpResponse::Ok().json(MessageResponse{message:String::from("Lesson deleted successfully!")}),
        Ok(false) => HttpResponse::NotFound().json(CustomError{error:"Lesson not found".to_string()}),
        Err(e) => HttpResponse::BadGateway().json(e),
    }
}

// flips the completion state, completing an already completed lesson
// clears it again
#[post("")]
pub async fn mark_complete_handler(data:web::Data<GlobalState>, path:web::Path<i64>, req:HttpRequest) -> impl Responder {
    let pool = &data.pool;
    let lesson_id = path.into_inner();

    let caller = req.extensions().get::<AuthenticatedUser>().cloned();

    if caller.is_none(){
        return HttpResponse::Forbidden().json(CustomError{error:"caller identity missing".to_string()});
    }

    let caller = caller.unwrap();

    let lesson = match lesson::get_lesson_by_id(pool, lesson_id).await {
        Ok(Some(lesson)) => lesson,
        Ok(None) => return HttpResponse::NotFound().json(CustomError{error:"Lesson not found".to_string()}),
        Err(e) => return HttpResponse::InternalServerError().json(e),
    };

    let account = match get_user_by_email(pool, &caller.email).await {
        Ok(Some(account)) => account,
        Ok(None) => return HttpResponse::Forbidden().json(CustomError{error:"No account found with this email".to_string()}),
        Err(e) => return HttpResponse::InternalServerError().json(e),
    };

    let student = match get_student_by_user(pool, account.id).await {
        Ok(Some(student)) => student,
        Ok(None) => return HttpResponse::NotFound().json(CustomError{error:"Student not found".to_string()}),
        Err(e) => return HttpResponse::InternalServerError().json(e),
    };

    let completed = match toggle_completion(pool, student.id, lesson.id).await {
        Ok(completed) => completed,
        Err(e) => return HttpResponse::InternalServerError().json(e),
    };

    let message = if completed {
        String::from("Lesson marked as complete.")
    } else {
        String::from("Lesson completion removed.")
    };

    HttpResponse::Ok().json(CompletionResponse{lesson_id, completed, message})
}
