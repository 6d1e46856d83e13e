use argon2::{
    password_hash::{
        rand_core::OsRng, Error, PasswordHasher, SaltString
    }, Argon2, PasswordHash, PasswordVerifier
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{errors::CustomError, schema::JWTClaims};

pub fn hash_password(password:&str)->Result<String, Error>{

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2.hash_password(password.as_bytes(), salt.as_salt())?.to_string();
    Ok(password_hash)
}

pub fn verify_password(password:&str, hash:&str)->Result<(), Error>{

    let argon2 = Argon2::default();
    let parsed_hash = PasswordHash::new(&hash)?;
    argon2.verify_password(password.as_bytes(), &parsed_hash)?;

    Ok(())
}

pub fn issue_token(email:&str, role:&str)->Result<String, CustomError>{

    let secret = std::env::var("JWT_SECRET")
        .map_err(|_e|CustomError{error:"Internal Error".to_string()})?;

    let tomorrow = Utc::now() + Duration::days(1);

    let claims = JWTClaims{
        sub: email.to_owned(),
        role: role.to_owned(),
        exp: tomorrow.timestamp() as usize
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|_e|CustomError{error:"Internal Error".to_string()})
}

pub fn decode_token(token:&str)->Result<JWTClaims, CustomError>{

    let secret = std::env::var("JWT_SECRET")
        .map_err(|_e|CustomError{error:"Internal Error".to_string()})?;

    let decoded = decode::<JWTClaims>(token, &DecodingKey::from_secret(secret.as_bytes()), &Validation::default())
        .map_err(|_e|CustomError{error:"Invalid token".to_string()})?;

    Ok(decoded.claims)
}
