use actix_web::{body::MessageBody, dev::{ServiceRequest, ServiceResponse}, middleware::Next, Error, HttpMessage};

use crate::{errors::{AppError, CustomError}, models::user::ROLE_INSTRUCTOR, schema::AuthenticatedUser, utils::decode_token};

pub async fn instructor_middleware(
    req:ServiceRequest,
    next: Next<impl MessageBody>) -> Result<ServiceResponse<impl MessageBody>, Error>
{

    let authorization = req.headers().get("Authorization");

    if authorization.is_none(){
        return Err(Error::from(CustomError{error:"Token not found".to_string()}));
    }

    let token = authorization.unwrap().to_str();

    if token.is_err() {
        return Err(Error::from(AppError::InternalError));
    }

    let claims = decode_token(token.unwrap())?;

    if claims.role != ROLE_INSTRUCTOR {
        return Err(Error::from(CustomError{error:"Instructor access required".to_string()}));
    }

    req.extensions_mut().insert(AuthenticatedUser{email:claims.sub, role:claims.role});
    next.call(req).await

}
