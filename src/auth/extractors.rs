use actix_web::{dev::Payload, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::api_key::get_api_key;
use crate::error::AppError;

/// Extractor for `Authorization: ApiKey <key>` authentication
///
/// Usage in handlers:
/// ```ignore
/// async fn my_handler(auth: ApiKeyAuth) -> HttpResponse {
///     // auth.key contains the key taken from the header
/// }
/// ```
///
/// Only the header shape is checked here; deciding whether the key grants
/// access is left to the handler.
pub struct ApiKeyAuth {
    pub key: String,
}

impl ApiKeyAuth {
    /// Redacted form of the key, safe to log or return to clients
    pub fn hint(&self) -> String {
        redact_key(&self.key)
    }
}

impl FromRequest for ApiKeyAuth {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match get_api_key(req.headers()) {
            Ok(key) => Ok(ApiKeyAuth {
                key: key.to_owned(),
            }),
            Err(e) => {
                log::debug!("Rejected {} {}: {}", req.method(), req.path(), e.kind());
                Err(AppError::from(e))
            }
        };

        ready(result)
    }
}

/// Keeps the first 4 characters of a key and masks the rest
pub fn redact_key(key: &str) -> String {
    const VISIBLE: usize = 4;

    if key.chars().count() <= VISIBLE {
        return "****".to_string();
    }

    let prefix: String = key.chars().take(VISIBLE).collect();
    format!("{}****", prefix)
}
