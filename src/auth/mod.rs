pub mod api_key;
pub mod extractors;

pub use api_key::{get_api_key, AuthError, API_KEY_SCHEME};
pub use extractors::{redact_key, ApiKeyAuth};
