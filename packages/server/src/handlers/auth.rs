use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use sea_orm::*;
use tracing::{info, instrument};

use crate::entity::user;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::auth::{
    LoginRequest, LoginResponse, LogoutResponse, MeResponse, SignupRequest, SignupResponse,
    validate_login_request, validate_signup_request,
};
use crate::state::AppState;
use crate::utils::{hash, jwt, session};

/// Sign a session token for `user` and attach it to the cookie jar.
fn start_session(
    state: &AppState,
    jar: CookieJar,
    user: &user::Model,
) -> Result<(CookieJar, String), AppError> {
    let auth = &state.config.auth;
    let token = jwt::sign(user.id, &user.username, auth.session_ttl_hours, &auth.secret_key)
        .map_err(|e| AppError::Internal(format!("Session sign error: {}", e)))?;
    let jar = jar.add(session::session_cookie(token.clone(), auth));
    Ok((jar, token))
}

#[utoipa::path(
    post,
    path = "/signup/",
    tag = "Auth",
    operation_id = "signup",
    summary = "Create an account and start a session",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created, session cookie set", body = SignupResponse),
        (status = 400, description = "Missing fields (VALIDATION_ERROR) or PASSWORD_MISMATCH", body = ErrorBody),
        (status = 409, description = "USERNAME_TAKEN or EMAIL_TAKEN", body = ErrorBody),
    ),
)]
#[instrument(skip(state, jar, payload), fields(username = %payload.username))]
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(payload): AppJson<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_signup_request(&payload)?;

    let username = payload.username.trim().to_string();
    let email = payload.email.trim().to_string();

    let username_taken = user::Entity::find()
        .filter(user::Column::Username.eq(&username))
        .one(&state.db)
        .await?
        .is_some();
    if username_taken {
        return Err(AppError::UsernameTaken);
    }

    let email_taken = user::Entity::find()
        .filter(user::Column::Email.eq(&email))
        .one(&state.db)
        .await?
        .is_some();
    if email_taken {
        return Err(AppError::EmailTaken);
    }

    let hash = hash::hash_password(&payload.password)
        .map_err(|e| AppError::Internal(format!("Password hash error: {}", e)))?;

    let new_user = user::ActiveModel {
        username: Set(username),
        email: Set(email),
        password: Set(hash),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let user = new_user.insert(&state.db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!("Signup race condition: unique constraint caught on insert");
            if detail.contains("email") {
                AppError::EmailTaken
            } else {
                AppError::UsernameTaken
            }
        }
        _ => AppError::from(e),
    })?;

    info!(user_id = user.id, "Account created");
    let (jar, _) = start_session(&state, jar, &user)?;

    Ok((StatusCode::CREATED, jar, Json(SignupResponse::from(user))))
}

#[utoipa::path(
    post,
    path = "/login/",
    tag = "Auth",
    operation_id = "login",
    summary = "Exchange credentials for a session",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, session cookie set", body = LoginResponse),
        (status = 400, description = "Malformed body (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "INVALID_CREDENTIALS", body = ErrorBody),
    ),
)]
#[instrument(skip(state, jar, payload), fields(username = %payload.username))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_login_request(&payload)?;

    let user = user::Entity::find()
        .filter(user::Column::Username.eq(payload.username.trim()))
        .one(&state.db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let is_valid = hash::verify_password(&payload.password, &user.password)
        .map_err(|e| AppError::Internal(format!("Password verify error: {}", e)))?;

    if !is_valid {
        return Err(AppError::InvalidCredentials);
    }

    let (jar, token) = start_session(&state, jar, &user)?;

    Ok((
        jar,
        Json(LoginResponse {
            token,
            username: user.username,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/logout/",
    tag = "Auth",
    operation_id = "logout",
    summary = "End the current session",
    responses((status = 200, description = "Session cookie cleared", body = LogoutResponse)),
)]
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (
        jar.remove(session::cleared_session_cookie()),
        Json(LogoutResponse { success: true }),
    )
}

#[utoipa::path(
    get,
    path = "/me/",
    tag = "Auth",
    operation_id = "me",
    summary = "Current account",
    responses(
        (status = 200, description = "Authenticated account", body = MeResponse),
        (status = 401, description = "TOKEN_MISSING or TOKEN_INVALID", body = ErrorBody),
    ),
    security(("session" = []), ("jwt" = [])),
)]
#[instrument(skip(auth_user), fields(user_id = auth_user.user_id))]
pub async fn me(auth_user: AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        id: auth_user.user_id,
        username: auth_user.username,
    })
}
