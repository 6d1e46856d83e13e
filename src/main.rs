use actix_web::{middleware::{from_fn, Logger}, web::{self, scope}, App, HttpServer, Scope};
use dotenv::dotenv;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use sqlx::{Pool, Sqlite};

use errors::AppError;

mod db;
mod errors;
mod handlers;
mod middlewares;
mod models;
mod schema;
#[cfg(test)]
mod test_init_app;
mod utils;

pub struct GlobalState{
    pub pool: Pool<Sqlite>
}

pub fn api_scope(app_data: web::Data<GlobalState>) -> Scope {
    scope("/api/v1")
        .app_data(app_data)
        .service(handlers::health)
        .service(
            scope("/enroll")
            .service(handlers::enrollment::enroll_student_handler)
        )
        // parameterised course scopes go before the bare /courses scope,
        // else /courses/{id} would swallow their paths
        .service(
            scope("/courses/{course_id}/students")
            .wrap(from_fn(middlewares::auth::auth_middleware))
            .service(handlers::enrollment::new_students_handler)
        )
        .service(
            scope("/courses/{course_id}/progress")
            .wrap(from_fn(middlewares::auth::auth_middleware))
            .service(handlers::course::course_progress_handler)
        )
        .service(
            scope("/lessons/{lesson_id}/complete")
            .wrap(from_fn(middlewares::auth::auth_middleware))
            .service(handlers::lesson::mark_complete_handler)
        )
        .service(
            // course and lesson authoring is instructor only
            scope("/manage")
            .wrap(from_fn(middlewares::instructor::instructor_middleware))
            .service(handlers::course::create_course_handler)
            .service(handlers::course::update_course_handler)
            .service(handlers::course::delete_course_handler)
            .service(handlers::lesson::create_lesson_handler)
            .service(handlers::lesson::update_lesson_handler)
            .service(handlers::lesson::delete_lesson_handler)
        )
        .service(
            scope("/auth")
            .service(handlers::auth::register_user)
            .service(handlers::auth::login_user)
            .service(handlers::auth::logout_user)
        )
        .service(
            scope("/courses")
            .service(handlers::course::get_all_courses_handler)
            .service(handlers::course::get_course_handler)
        )
}

#[actix_web::main]
async fn main() -> Result<(), AppError> {

    dotenv().ok();

    TermLogger::init(LevelFilter::Info, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).ok();

    if std::env::var("JWT_SECRET").is_err(){
        return Err(AppError::MissingSecret);
    }

    let address = std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("127.0.0.1:8080"));
    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| String::from("sqlite:courses.db"));

    let pool = db::connect(&database_url).await?;
    db::init(&pool).await?;

    let app_data = web::Data::new(GlobalState{pool});

    log::info!("the server is listening on {}", address);

    HttpServer::new(
        move||{
            App::new()
            .wrap(Logger::default())
            .service(api_scope(app_data.clone()))
        }
    ).bind(&address)
    .map_err(|_e|AppError::SocketBind)?
    .run()
    .await
    .map_err(|_e|AppError::ServerStart)?;

    Ok(())
}
