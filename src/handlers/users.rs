use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;

use crate::error::{AppError, Result};
use crate::password::{hash_password, verify_password};
use crate::repositories::UserRepository;
use crate::schemas::{UserCreate, UserLogin, UserOut, Validate};

#[derive(Clone)]
pub struct UsersState {
    pub user_repo: UserRepository,
}

pub async fn register(
    State(state): State<UsersState>,
    WithRejection(Json(input), _): WithRejection<Json<UserCreate>, AppError>,
) -> Result<(StatusCode, Json<UserOut>)> {
    input.validate()?;
    let input = input.normalized();

    if state.user_repo.find_by_email(&input.email).await?.is_some() {
        return Err(AppError::Integrity("Email already registered".to_string()));
    }

    let password_hash = hash_password(&input.password)?;

    // A concurrent registration can still trip the UNIQUE constraint.
    let user = state
        .user_repo
        .create(&input, &password_hash)
        .await
        .map_err(|e| match e {
            AppError::Integrity(_) => AppError::Integrity("Email already registered".to_string()),
            other => other,
        })?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn login(
    State(state): State<UsersState>,
    WithRejection(Json(credentials), _): WithRejection<Json<UserLogin>, AppError>,
) -> Result<Json<UserOut>> {
    credentials.validate()?;

    let user = state
        .user_repo
        .find_by_email(&credentials.normalized_email())
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(&credentials.password, &user.password_hash)? {
        tracing::debug!("Rejected login for user {}", user.id);
        return Err(AppError::Unauthorized);
    }

    Ok(Json(user.into()))
}
