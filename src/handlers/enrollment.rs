use actix_web::{get, post, web::{self, Json}, HttpResponse, Responder};

use crate::{errors::CustomError, models::{course::get_course_by_id, student::{self, ensure_student}, user::get_user_by_email}, schema::student::{EnrollRequest, EnrollResponse, StudentResponse}, GlobalState};

const NEW_STUDENTS_LIMIT: i64 = 10;

#[post("")]
pub async fn enroll_student_handler(data:web::Data<GlobalState>, body:Json<EnrollRequest>) -> impl Responder {
    let pool = &data.pool;

    let course = match get_course_by_id(pool, body.course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => return HttpResponse::NotFound().json(CustomError{error:"Course not found".to_string()}),
        Err(e) => return HttpResponse::InternalServerError().json(e),
    };

    let account = match get_user_by_email(pool, &body.email).await {
        Ok(Some(account)) => account,
        Ok(None) => return HttpResponse::NotFound().json(CustomError{error:format!("No user found with email {}", body.email)}),
        Err(e) => return HttpResponse::InternalServerError().json(e),
    };

    let enrollee = match ensure_student(pool, &account).await {
        Ok(enrollee) => enrollee,
        Err(e) => return HttpResponse::InternalServerError().json(e),
    };

    let already_enrolled = match student::is_enrolled(pool, enrollee.id, course.id).await {
        Ok(val) => val,
        Err(e) => return HttpResponse::InternalServerError().json(e),
    };

    if already_enrolled {
        return HttpResponse::Ok().json(EnrollResponse{
            message: format!("{} is already enrolled in {}.", enrollee.email, course.title),
            enrolled: false,
        });
    }

    if let Err(e) = student::enroll(pool, enrollee.id, course.id).await {
        return HttpResponse::InternalServerError().json(e);
    }

    log::info!("enrolled {} in course {}", enrollee.email, course.id);

    HttpResponse::Ok().json(EnrollResponse{
        message: format!("{} has been enrolled in {}.", enrollee.email, course.title),
        enrolled: true,
    })
}

#[get("/new")]
pub async fn new_students_handler(data:web::Data<GlobalState>, path:web::Path<i64>) -> impl Responder {
    let pool = &data.pool;
    let course_id = path.into_inner();

    match get_course_by_id(pool, course_id).await {
        Ok(Some(_)) => {},
        Ok(None) => return HttpResponse::NotFound().json(CustomError{error:"Course not found".to_string()}),
        Err(e) => return HttpResponse::InternalServerError().json(e),
    }

    let enrollees = match student::newest_enrollees(pool, course_id, NEW_STUDENTS_LIMIT).await {
        Ok(enrollees) => enrollees,
        Err(e) => return HttpResponse::InternalServerError().json(e),
    };

    let parsed = enrollees.into_iter()
        .map(StudentResponse::from)
        .collect::<Vec<StudentResponse>>();

    HttpResponse::Ok().json(parsed)
}

#[cfg(test)]
mod tests {
    use actix_web::test;

    use crate::{models::course, schema::course::CreateCourse, test_init_app::{init, register_and_login}};

    use super::*;

    async fn seed_course(pool: &sqlx::Pool<sqlx::Sqlite>, title: &str) -> i64 {
        course::create_course(pool, &CreateCourse{
            title: title.to_string(),
            description: String::from("An introduction"),
            duration: 120,
            thumbnail: None,
        }).await.unwrap().id
    }

    #[actix_web::test]
    async fn test_enroll_student() {
        let (app, pool) = init().await;

        let course_id = seed_course(&pool, "Rust 101").await;
        let _ = register_and_login(&app, "a@x.com", false).await;

        let res = test::TestRequest::post()
            .set_json(EnrollRequest{
                email: String::from("a@x.com"),
                course_id,
            })
            .uri("/api/v1/enroll")
            .send_request(&app)
            .await;

        assert!(res.status().is_success());
        let res_body: EnrollResponse = test::read_body_json(res).await;
        assert!(res_body.enrolled);
        assert_eq!(res_body.message, "a@x.com has been enrolled in Rust 101.".to_string());

        let rows = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM enrollments")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[actix_web::test]
    async fn test_enroll_twice_is_a_warning_noop() {
        let (app, pool) = init().await;

        let course_id = seed_course(&pool, "Rust 101").await;
        let _ = register_and_login(&app, "a@x.com", false).await;

        let enroll = EnrollRequest{
            email: String::from("a@x.com"),
            course_id,
        };

        let res = test::TestRequest::post()
            .set_json(&enroll)
            .uri("/api/v1/enroll")
            .send_request(&app)
            .await;

        assert!(res.status().is_success());

        let res = test::TestRequest::post()
            .set_json(&enroll)
            .uri("/api/v1/enroll")
            .send_request(&app)
            .await;

        assert!(res.status().is_success());
        let res_body: EnrollResponse = test::read_body_json(res).await;
        assert!(!res_body.enrolled);
        assert_eq!(res_body.message, "a@x.com is already enrolled in Rust 101.".to_string());

        // still a single association
        let rows = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM enrollments")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[actix_web::test]
    async fn test_enroll_in_unknown_course() {
        let (app, pool) = init().await;

        let _ = register_and_login(&app, "a@x.com", false).await;

        let res = test::TestRequest::post()
            .set_json(EnrollRequest{
                email: String::from("a@x.com"),
                course_id: 9999,
            })
            .uri("/api/v1/enroll")
            .send_request(&app)
            .await;

        assert_eq!(res.status().as_u16(), 404);

        let res_body: CustomError = test::read_body_json(res).await;
        assert_eq!(res_body.error, "Course not found".to_string());

        let rows = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM enrollments")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(rows, 0);
    }

    #[actix_web::test]
    async fn test_enroll_with_unknown_email() {
        let (app, pool) = init().await;

        let course_id = seed_course(&pool, "Rust 101").await;

        let res = test::TestRequest::post()
            .set_json(serde_json::json!({
                "email": "ghost@x.com",
                "course_id": course_id,
            }))
            .uri("/api/v1/enroll")
            .send_request(&app)
            .await;

        assert_eq!(res.status().as_u16(), 404);

        let res_body: CustomError = test::read_body_json(res).await;
        assert_eq!(res_body.error, "No user found with email ghost@x.com".to_string());
    }

    #[actix_web::test]
    async fn test_new_students_listing() {
        let (app, pool) = init().await;

        let course_id = seed_course(&pool, "Rust 101").await;

        let token = register_and_login(&app, "first@x.com", false).await;
        let _ = register_and_login(&app, "second@x.com", false).await;

        for email in ["first@x.com", "second@x.com"] {
            let res = test::TestRequest::post()
                .set_json(EnrollRequest{
                    email: email.to_string(),
                    course_id,
                })
                .uri("/api/v1/enroll")
                .send_request(&app)
                .await;

            assert!(res.status().is_success());
        }

        let res = test::TestRequest::get()
            .append_header(("Authorization", token))
            .uri(&format!("/api/v1/courses/{}/students/new", course_id))
            .send_request(&app)
            .await;

        assert!(res.status().is_success());
        let listed: Vec<StudentResponse> = test::read_body_json(res).await;

        assert_eq!(listed.len(), 2);
        // newest first
        assert_eq!(listed[0].email, "second@x.com".to_string());
        assert_eq!(listed[1].email, "first@x.com".to_string());
    }

    #[actix_web::test]
    async fn test_new_students_requires_token() {
        let (app, pool) = init().await;

        let course_id = seed_course(&pool, "Rust 101").await;

        let res = test::TestRequest::get()
            .uri(&format!("/api/v1/courses/{}/students/new", course_id))
            .send_request(&app)
            .await;

        assert_eq!(res.status().as_u16(), 401);
    }
}
