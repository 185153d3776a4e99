use base64ct::{Base64, Encoding};

use crate::auth::dto::BasicCredentials;
use crate::auth::password::MIN_PASSWORD_LEN;
use crate::error::AppError;

/// Decodes the value of an `Authorization` header using the Basic scheme.
/// Returns `None` for any other scheme or malformed payload.
pub fn parse_basic_credentials(header: &str) -> Option<BasicCredentials> {
    let (scheme, encoded) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = Base64::decode_vec(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    if username.is_empty() {
        return None;
    }
    Some(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Normalizes a registration payload, returning the trimmed username.
pub fn validate_registration(username: &str, password: &str) -> Result<String, AppError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::BadRequest("Username is empty!".into()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest("Password too short".into()));
    }
    Ok(username.to_string())
}
