//! Form payloads for the authentication endpoints.

use serde::Deserialize;

/// POST /signup form body.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// POST /authenticate form body.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}
