use std::str::FromStr;

use actix_web::{test, web, dev::ServiceResponse, App, Error};
use actix_service::Service;
use actix_http::Request;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};

use crate::{api_scope, db, schema::{EmailAndPassword, RegisterRequest, SigninResponse}, GlobalState};

pub async fn init() -> (impl Service<Request, Response = ServiceResponse, Error = Error>, Pool<Sqlite>) {

    // handlers and middlewares read the secret at request time
    std::env::set_var("JWT_SECRET", "test-secret");

    // a single connection keeps every query on the same in memory database
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Cant parse the sqlite url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Cant connect to the database");

    db::init(&pool).await.expect("Cant create the schema");

    let app_data = web::Data::new(GlobalState{pool: pool.clone()});

    let app = test::init_service(
        App::new().service(api_scope(app_data))
    ).await;

    (app, pool)
}

pub async fn register_and_login<S>(app:&S, email:&str, instructor:bool) -> String
where
    S: Service<Request, Response = ServiceResponse, Error = Error>,
{
    let user = RegisterRequest{
        name: String::from("Test User"),
        email: email.to_string(),
        password: String::from("testpass123"),
        instructor,
    };

    let res = test::TestRequest::post()
        .set_json(user)
        .uri("/api/v1/auth/register")
        .send_request(app)
        .await;

    assert!(res.status().is_success());

    let creds = EmailAndPassword{
        email: email.to_string(),
        password: String::from("testpass123"),
    };

    let res = test::TestRequest::post()
        .set_json(creds)
        .uri("/api/v1/auth/login")
        .send_request(app)
        .await;

    assert!(res.status().is_success());

    let body: SigninResponse = test::read_body_json(res).await;
    body.token
}
