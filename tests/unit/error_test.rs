//! Unit tests for HTTP error mapping

use actix_web::{body::to_bytes, http::StatusCode, ResponseError};
use apikey_auth::auth::AuthError;
use apikey_auth::error::AppError;
use rstest::rstest;
use serde_json::Value;

#[rstest]
#[case::missing_header(AuthError::NoAuthHeader, StatusCode::UNAUTHORIZED, "Unauthorized")]
#[case::malformed_header(AuthError::MalformedHeader, StatusCode::BAD_REQUEST, "ValidationError")]
#[actix_web::test]
async fn test_auth_error_response(
    #[case] err: AuthError,
    #[case] status: StatusCode,
    #[case] error_type: &'static str,
) {
    let app_err = AppError::from(err);
    assert_eq!(app_err.status_code(), status);

    let response = app_err.error_response();
    assert_eq!(response.status(), status);

    let body = to_bytes(response.into_body()).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["type"], error_type);
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains(&err.to_string()));
}

#[test]
fn test_not_found_status_code() {
    assert_eq!(
        AppError::NotFound("x".into()).status_code(),
        StatusCode::NOT_FOUND
    );
}
