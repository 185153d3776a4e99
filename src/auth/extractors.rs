use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracing::warn;

use super::{
    password::verify_password_blocking, repo_types::User, services::parse_basic_credentials,
};
use crate::{error::AppError, state::AppState};

/// Resolves HTTP Basic credentials to a stored user with a matching password.
pub struct BasicUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for BasicUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Unauthorized!".into()))?;

        let creds = parse_basic_credentials(header)
            .ok_or_else(|| AppError::Unauthorized("Invalid Authorization header".into()))?;

        let user = User::find_by_username(&state.db, &creds.username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found!".into()))?;

        if !verify_password_blocking(creds.password, user.password_hash.clone()).await? {
            warn!(user_id = %user.id, "basic auth invalid password");
            return Err(AppError::Unauthorized("Invalid credentials".into()));
        }

        Ok(BasicUser(user))
    }
}
