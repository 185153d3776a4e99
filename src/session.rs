use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap, HeaderValue},
};
use tracing::debug;
use uuid::Uuid;

use crate::{config::SessionConfig, error::AppError, state::AppState};

/// Reads a cookie value out of all `Cookie` headers on a request.
pub fn get_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim().to_string())
}

fn session_from_headers(headers: &HeaderMap, cfg: &SessionConfig) -> Option<Uuid> {
    get_cookie_value(headers, &cfg.cookie_name).and_then(|v| Uuid::parse_str(&v).ok())
}

pub fn session_cookie(cfg: &SessionConfig, session_id: Uuid) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        cfg.cookie_name, session_id, cfg.max_age_secs
    );
    if cfg.secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Existing session id, or a fresh one plus the `Set-Cookie` value to issue it.
pub fn ensure_session(
    headers: &HeaderMap,
    cfg: &SessionConfig,
) -> anyhow::Result<(Uuid, Option<HeaderValue>)> {
    if let Some(id) = session_from_headers(headers, cfg) {
        return Ok((id, None));
    }
    let id = Uuid::new_v4();
    let cookie = HeaderValue::from_str(&session_cookie(cfg, id))?;
    debug!(session_id = %id, "issued session cookie");
    Ok((id, Some(cookie)))
}

/// Session id carried by the request cookie. Requests without one are rejected.
pub struct SessionId(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for SessionId {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        session_from_headers(&parts.headers, &state.config.session)
            .map(SessionId)
            .ok_or_else(|| AppError::Unauthorized("Session not found!".into()))
    }
}
