use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::{
        dto::{PublicUser, RegisterRequest, RegisterResponse, UsersResponse},
        password::hash_password_blocking,
        repo::CreateUser,
        repo_types::User,
        services::validate_registration,
    },
    error::AppError,
    extract::{AppJson, AppPath},
    state::AppState,
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(register))
        .route("/users/:id", delete(delete_user))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let username = validate_registration(&payload.username, &payload.password)?;

    if User::find_by_username(&state.db, &username).await?.is_some() {
        warn!(%username, "username already registered");
        return Err(AppError::Conflict("User already exists!".into()));
    }

    let hash = hash_password_blocking(payload.password).await?;

    let user = match User::create(&state.db, &username, &hash).await? {
        CreateUser::Created(u) => u,
        CreateUser::UsernameTaken => {
            warn!(%username, "username registered concurrently");
            return Err(AppError::Conflict("User already exists!".into()));
        }
    };

    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse { user: user.into() }),
    ))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UsersResponse>, AppError> {
    let users = User::list(&state.db).await?;
    Ok(Json(UsersResponse {
        users: users.into_iter().map(PublicUser::from).collect(),
    }))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<Value>, AppError> {
    if !User::delete(&state.db, id).await? {
        return Err(AppError::NotFound("User not found!".into()));
    }
    info!(user_id = %id, "user removed");
    Ok(Json(json!({ "message": "User removed successfully!" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn public_user_hides_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            username: "frank".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: None,
        };

        let raw = serde_json::to_string(&user).unwrap();
        assert!(!raw.contains("argon2"));

        let public = serde_json::to_value(PublicUser::from(user)).unwrap();
        assert_eq!(public["username"], "frank");
        assert_eq!(public["created_at"], "1970-01-01T00:00:00Z");
        assert!(public.get("password_hash").is_none());
    }
}
