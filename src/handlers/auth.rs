//! Registration, login and token introspection.

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::auth;
use crate::config;
use crate::database::models::NewUser;
use crate::database::repositories::UserRepository;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

fn validate_registration(req: &RegisterRequest) -> Result<(), ApiError> {
    let mut field_errors = HashMap::new();
    if !req.email.contains('@') {
        field_errors.insert("email".to_string(), "must be a valid email".to_string());
    }
    if req.name.trim().is_empty() {
        field_errors.insert("name".to_string(), "must not be empty".to_string());
    }
    if req.password.len() < 8 {
        field_errors.insert(
            "password".to_string(),
            "must be at least 8 characters".to_string(),
        );
    }
    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation_error(
            "Invalid registration data",
            Some(field_errors),
        ))
    }
}

fn session_body(token: String, user: &crate::database::models::User) -> Value {
    let expires_in = config::config().security.jwt_expiry_hours * 3600;
    json!({
        "success": true,
        "data": {
            "token": token,
            "user": user,
            "expires_in": expires_in
        }
    })
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    validate_registration(&req)?;

    let password_hash = auth::hash_password(&req.password)?;
    let users = UserRepository::new(state.db.pool().clone());

    let user = users
        .base
        .create(&NewUser {
            email: req.email.trim().to_lowercase(),
            name: req.name.trim().to_string(),
            password_hash,
        })
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                ApiError::conflict("email already registered")
            } else {
                e.into()
            }
        })?;

    let token = auth::generate_token(&user)?;
    tracing::info!(user_id = %user.id, "registered new user");

    Ok((StatusCode::CREATED, Json(session_body(token, &user))))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let users = UserRepository::new(state.db.pool().clone());

    // Same response whether the account is missing, soft-deleted or the
    // password is wrong.
    let invalid = || ApiError::unauthorized("invalid credentials");

    let user = users.find_by_email(&req.email).await?.ok_or_else(invalid)?;
    if !auth::verify_password(&req.password, &user.password_hash) {
        return Err(invalid());
    }

    let token = auth::generate_token(&user)?;
    Ok(Json(session_body(token, &user)))
}

/// GET /api/auth/whoami - resolve the bearer token to its active account
pub async fn whoami(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::unauthorized("missing bearer token"))?;

    let claims = auth::decode_token(token)?;

    let users = UserRepository::new(state.db.pool().clone());
    let user = users
        .base
        .find_by_id_active(claims.sub)
        .await?
        .ok_or_else(|| ApiError::unauthorized("account no longer active"))?;

    Ok(Json(json!({ "success": true, "data": user })))
}
