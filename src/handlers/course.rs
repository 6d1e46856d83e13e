use actix_web::{delete, get, post, put, web::{self, Json}, HttpMessage, HttpRequest, HttpResponse, Responder};
use futures_util::future;

use crate::{errors::CustomError, models::{course, lesson::{count_course_lessons, get_course_lessons}, progress::{self, Progress}, student::get_student_by_user, user::get_user_by_email}, schema::{course::{CourseDetailResponse, CourseResponse, CreateCourse, ProgressResponse, UpdateCourse}, AuthenticatedUser, MessageResponse}, GlobalState};

#[get("")]
pub async fn get_all_courses_handler(data:web::Data<GlobalState>) -> impl Responder {
    let pool = &data.pool;

    let courses = course::get_all_courses(pool).await;

    match courses {
        Ok(courses) => {
            let parsed_courses = courses.into_iter()
                .map(CourseResponse::from)
                .collect::<Vec<CourseResponse>>();

            HttpResponse::Ok().json(parsed_courses)
        },
        Err(e) => HttpResponse::InternalServerError().json(e),
    }
}

#[get("/{id}")]
pub async fn get_course_handler(data:web::Data<GlobalState>, path:web::Path<i64>) -> impl Responder {
    let pool = &data.pool;
    let course_id = path.into_inner();

    let fetched = future::try_join(
        course::get_course_by_id(pool, course_id),
        get_course_lessons(pool, course_id),
    ).await;

    let (course, lessons) = match fetched {
        Ok(val) => val,
        Err(e) => return HttpResponse::InternalServerError().json(e),
    };

    let course = match course {
        Some(course) => course,
        None => return HttpResponse::NotFound().json(CustomError{error:"Course not found".to_string()}),
    };

    let total_lessons = lessons.len() as i64;

    HttpResponse::Ok().json(CourseDetailResponse{
        id: course.id,
        title: course.title,
        description: course.description,
        duration: course.duration,
        thumbnail: course.thumbnail,
        total_lessons,
        lessons: lessons.into_iter().map(Into::into).collect(),
    })
}

#[get("")]
pub async fn course_progress_handler(data:web::Data<GlobalState>, path:web::Path<i64>, req:HttpRequest) -> impl Responder {
    let pool = &data.pool;
    let course_id = path.into_inner();

    let caller = req.extensions().get::<AuthenticatedUser>().cloned();

    if caller.is_none(){
        return HttpResponse::Forbidden().json(CustomError{error:"caller identity missing".to_string()});
    }

    let caller = caller.unwrap();

    match course::get_course_by_id(pool, course_id).await {
        Ok(Some(_)) => {},
        Ok(None) => return HttpResponse::NotFound().json(CustomError{error:"Course not found".to_string()}),
        Err(e) => return HttpResponse::InternalServerError().json(e),
    }

    let account = match get_user_by_email(pool, &caller.email).await {
        Ok(Some(account)) => account,
        Ok(None) => return HttpResponse::Forbidden().json(CustomError{error:"No account found with this email".to_string()}),
        Err(e) => return HttpResponse::InternalServerError().json(e),
    };

    // an account without a student profile simply has no completions yet
    let progress = match get_student_by_user(pool, account.id).await {
        Ok(Some(student)) => match progress::course_progress(pool, student.id, course_id).await {
            Ok(progress) => progress,
            Err(e) => return HttpResponse::InternalServerError().json(e),
        },
        Ok(None) => {
            let total = match count_course_lessons(pool, course_id).await {
                Ok(total) => total,
                Err(e) => return HttpResponse::InternalServerError().json(e),
            };
            Progress::new(0, total)
        },
        Err(e) => return HttpResponse::InternalServerError().json(e),
    };

    HttpResponse::Ok().json(ProgressResponse{
        course_id,
        completed: progress.completed,
        total_lessons: progress.total_lessons,
        percent: progress.percent,
    })
}

#[post("/courses")]
pub async fn create_course_handler(data:web::Data<GlobalState>, body:Json<CreateCourse>) -> impl Responder {
    let pool = &data.pool;

    let course_res = course::create_course(pool, &body).await;

    match course_res {
        Ok(res) => HttpResponse::Ok().json(CourseResponse::from(res)),
        Err(e) => HttpResponse::BadGateway().json(e),
    }
}

#[put("/courses/{id}")]
pub async fn update_course_handler(data:web::Data<GlobalState>, path:web::Path<i64>, body:Json<UpdateCourse>) -> impl Responder {
    let pool = &data.pool;
    let course_id = path.into_inner();

    let course_res = course::update_course(pool, course_id, &body).await;

    match course_res {
        Ok(Some(res)) => HttpResponse::Ok().json(CourseResponse::from(res)),
        Ok(None) => HttpResponse::NotFound().json(CustomError{error:"Course not found".to_string()}),
        Err(e) => HttpResponse::BadGateway().json(e),
    }
}

#[delete("/courses/{id}")]
pub async fn delete_course_handler(data:web::Data<GlobalState>, path:web::Path<i64>) -> impl Responder {
    let pool = &data.pool;
    let course_id = path.into_inner();

    match course::delete_course(pool, course_id).await {
        Ok(true) => HttpResponse::Ok().json(MessageResponse{message:String::from("Course deleted successfully!")}),
        Ok(false) => HttpResponse::NotFound().json(CustomError{error:"Course not found".to_string()}),
        Err(e) => HttpResponse::BadGateway().json(e),
    }
}
