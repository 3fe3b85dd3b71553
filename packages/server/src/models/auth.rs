use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Request body for account signup.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct SignupRequest {
    #[schema(example = "alice")]
    #[serde(default)]
    pub username: String,
    #[schema(example = "alice@example.com")]
    #[serde(default)]
    pub email: String,
    #[schema(example = "s3cure_P@ss!")]
    #[serde(default)]
    pub password: String,
    /// Must equal `password`.
    #[schema(example = "s3cure_P@ss!")]
    #[serde(default)]
    pub confirm_password: String,
}

pub fn validate_signup_request(payload: &SignupRequest) -> Result<(), AppError> {
    if payload.username.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.password.is_empty()
    {
        return Err(AppError::Validation("All fields are required".into()));
    }
    if payload.password != payload.confirm_password {
        return Err(AppError::PasswordMismatch);
    }
    Ok(())
}

/// Request body for login.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    #[schema(example = "alice")]
    #[serde(default)]
    pub username: String,
    #[schema(example = "s3cure_P@ss!")]
    #[serde(default)]
    pub password: String,
}

pub fn validate_login_request(payload: &LoginRequest) -> Result<(), AppError> {
    if payload.username.trim().is_empty() || payload.password.is_empty() {
        return Err(AppError::InvalidCredentials);
    }
    Ok(())
}

/// A newly created account.
#[derive(Serialize, utoipa::ToSchema)]
pub struct SignupResponse {
    #[schema(example = 42)]
    pub id: i32,
    #[schema(example = "alice")]
    pub username: String,
}

impl From<crate::entity::user::Model> for SignupResponse {
    fn from(user: crate::entity::user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Successful login. The token is also set as the `session` cookie.
#[derive(Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    #[schema(example = "alice")]
    pub username: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct LogoutResponse {
    #[schema(example = true)]
    pub success: bool,
}

/// The authenticated account.
#[derive(Serialize, utoipa::ToSchema)]
pub struct MeResponse {
    #[schema(example = 42)]
    pub id: i32,
    #[schema(example = "alice")]
    pub username: String,
}
