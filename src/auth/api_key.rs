use actix_web::http::header::{HeaderMap, AUTHORIZATION};

/// Scheme token expected in front of the key: `Authorization: ApiKey <key>`
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Reasons an `Authorization` header does not yield an API key
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Header missing, or present with an empty value
    #[error("no authorization header included")]
    NoAuthHeader,

    /// Header present but not of the form `ApiKey <key>`
    #[error("malformed authorization header")]
    MalformedHeader,
}

impl AuthError {
    /// Stable identifier for the error kind, used in JSON error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::NoAuthHeader => "NoAuthHeader",
            AuthError::MalformedHeader => "MalformedHeader",
        }
    }
}

/// Extracts the API key from the `Authorization` header.
///
/// Only the first value of the header is consulted. The value must split on
/// whitespace into exactly two fields, the literal `ApiKey` scheme
/// (case-sensitive) followed by the key, which is returned verbatim.
///
/// ```
/// use actix_web::http::header::{HeaderMap, HeaderValue, AUTHORIZATION};
/// use apikey_auth::auth::{get_api_key, AuthError};
///
/// let mut headers = HeaderMap::new();
/// assert_eq!(get_api_key(&headers), Err(AuthError::NoAuthHeader));
///
/// headers.insert(AUTHORIZATION, HeaderValue::from_static("ApiKey my-api-key"));
/// assert_eq!(get_api_key(&headers), Ok("my-api-key"));
/// ```
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthError::NoAuthHeader),
    };

    // Keys are opaque, so any UTF-8 is accepted; only undecodable bytes are rejected
    let value = std::str::from_utf8(value.as_bytes()).map_err(|_| AuthError::MalformedHeader)?;

    let mut fields = value.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(API_KEY_SCHEME), Some(key), None) => Ok(key),
        _ => Err(AuthError::MalformedHeader),
    }
}
