pub mod auth;
pub mod course;
pub mod enrollment;
pub mod lesson;

use actix_web::{Responder, get};

#[get("/health")]
pub async fn health() -> impl Responder{
    "ok"
}

#[cfg(test)]
mod tests{
    use actix_web::test::{self, TestRequest};

    use super::*;

    #[actix_web::test]
    async fn test_health(){
        let (app, _pool) = crate::test_init_app::init().await;

        let req = TestRequest::get().uri("/api/v1/health").to_request();
        let res = test::call_service(&app, req).await;

        let body_bytes = test::read_body(res).await;
        let body_str = std::str::from_utf8(&body_bytes).unwrap();

        assert_eq!(body_str, "ok");
    }
}
