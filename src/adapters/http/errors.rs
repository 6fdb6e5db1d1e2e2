use actix_web::{
  HttpRequest, HttpResponse,
  error::{JsonPayloadError, PathError, QueryPayloadError, ResponseError},
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::auth::errors::{AuthError, RepositoryError, TokenError};
use crate::domain::auth::value_objects::ValueObjectError;
use crate::domain::tenant::errors::TenantError;

use super::dtos::ApiResponse;
use super::validation::{FieldErrors, format_validation_errors, status_message};

/// API error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// Malformed request (400 Bad Request)
  BadRequest(String),

  /// Field validation failures (422 Unprocessable Entity)
  Validation(FieldErrors),

  /// Authentication error (401 Unauthorized)
  Auth(AuthErrorKind),

  /// Resource does not exist (404 Not Found)
  NotFound(String),

  /// Uniqueness violation (409 Conflict)
  Conflict(String),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

/// Authentication error kinds, all answered with 401
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
  InvalidCredentials,
  MissingToken,
  MalformedHeader,
  InvalidToken,
  ExpiredToken,
}

impl AuthErrorKind {
  fn message(&self) -> &'static str {
    match self {
      AuthErrorKind::InvalidCredentials => "Invalid email or password",
      AuthErrorKind::MissingToken => "Authorization header is required",
      AuthErrorKind::MalformedHeader => "Authorization header must be 'Bearer <token>'",
      AuthErrorKind::InvalidToken | AuthErrorKind::ExpiredToken => "Invalid or expired token",
    }
  }
}

impl ApiError {
  /// Single-field validation error
  pub fn field(field: &str, message: impl Into<String>) -> Self {
    let mut fields = FieldErrors::new();
    fields.insert(field.to_string(), message.into());
    ApiError::Validation(fields)
  }
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
      ApiError::Validation(fields) => write!(f, "Validation error on {} field(s)", fields.len()),
      ApiError::Auth(kind) => write!(f, "Authentication error: {:?}", kind),
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let body = match self {
      ApiError::BadRequest(msg) => ApiResponse::failure(msg.clone(), "bad request"),
      ApiError::Validation(fields) => ApiResponse {
        data: serde_json::to_value(fields).ok(),
        ..ApiResponse::failure("Invalid input", "validation failed")
      },
      ApiError::Auth(kind) => ApiResponse::failure(kind.message(), "unauthorized"),
      ApiError::NotFound(msg) => ApiResponse::failure(msg.clone(), "not found"),
      ApiError::Conflict(msg) => ApiResponse::failure(msg.clone(), "conflict"),
      ApiError::Internal(msg) => {
        tracing::error!("Internal error: {}", msg);
        ApiResponse::failure("An internal server error occurred", "internal server error")
      }
    };

    HttpResponse::build(self.status_code())
      .content_type(ContentType::json())
      .json(body)
  }
}

fn from_repository(error: RepositoryError) -> ApiError {
  match error {
    RepositoryError::NotFound => ApiError::NotFound("Record not found".to_string()),
    RepositoryError::DuplicateKey(detail) => ApiError::Conflict(detail),
    other => ApiError::Internal(other.to_string()),
  }
}

/// Convert AuthError to ApiError
impl From<AuthError> for ApiError {
  fn from(error: AuthError) -> Self {
    match error {
      AuthError::InvalidCredentials => ApiError::Auth(AuthErrorKind::InvalidCredentials),
      AuthError::EmailAlreadyExists => {
        ApiError::Conflict("An admin with this email already exists".to_string())
      }
      AuthError::UserNotFound => ApiError::NotFound("Admin user not found".to_string()),
      AuthError::Token(TokenError::Expired) => ApiError::Auth(AuthErrorKind::ExpiredToken),
      AuthError::Token(TokenError::Invalid(_)) => ApiError::Auth(AuthErrorKind::InvalidToken),
      AuthError::Token(err) => ApiError::Internal(err.to_string()),
      AuthError::Repository(err) => from_repository(err),
      AuthError::Hash(err) => ApiError::Internal(err.to_string()),
      AuthError::ValueObject(err) => ApiError::BadRequest(err.to_string()),
    }
  }
}

/// Convert TenantError to ApiError
impl From<TenantError> for ApiError {
  fn from(error: TenantError) -> Self {
    match error {
      TenantError::NotFound => ApiError::NotFound("Tenant not found".to_string()),
      TenantError::SlugConflict(slug) => {
        ApiError::Conflict(format!("A tenant with slug '{}' already exists", slug))
      }
      TenantError::InvalidStatus(_) => ApiError::field("status", status_message()),
      TenantError::InvalidName => {
        ApiError::field("name", "Must contain at least one letter or digit.")
      }
      TenantError::ValueObject(ValueObjectError::InvalidEmail(_)) => {
        ApiError::field("company_email", "Invalid email format.")
      }
      TenantError::ValueObject(err) => ApiError::BadRequest(err.to_string()),
      TenantError::Repository(err) => from_repository(err),
    }
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    ApiError::Validation(format_validation_errors(&errors))
  }
}

/// Error handler for `web::JsonConfig`
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  let message = match &error {
    JsonPayloadError::Deserialize(e) if e.is_eof() => "Request body must not be empty",
    _ => "Invalid JSON input",
  };
  tracing::debug!(error = %error, "Rejected JSON body");
  ApiError::BadRequest(message.to_string()).into()
}

/// Error handler for `web::PathConfig`
pub fn path_error_handler(error: PathError, _req: &HttpRequest) -> actix_web::Error {
  tracing::debug!(error = %error, "Rejected path parameter");
  ApiError::BadRequest("Invalid tenant id".to_string()).into()
}

/// Error handler for `web::QueryConfig`
pub fn query_error_handler(error: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
  tracing::debug!(error = %error, "Rejected query string");
  ApiError::BadRequest("Invalid query parameters".to_string()).into()
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::body::to_bytes;

  async fn body_json(error: ApiError) -> serde_json::Value {
    let response = error.error_response();
    let bytes = to_bytes(response.into_body()).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  #[test]
  fn test_api_error_status_codes() {
    assert_eq!(
      ApiError::BadRequest("test".to_string()).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      ApiError::Validation(FieldErrors::new()).status_code(),
      StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(
      ApiError::Auth(AuthErrorKind::ExpiredToken).status_code(),
      StatusCode::UNAUTHORIZED
    );
    assert_eq!(
      ApiError::Conflict("test".to_string()).status_code(),
      StatusCode::CONFLICT
    );
    assert_eq!(
      ApiError::Internal("test".to_string()).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn test_auth_error_conversion() {
    let api_error: ApiError = AuthError::InvalidCredentials.into();
    assert_eq!(api_error.status_code(), StatusCode::UNAUTHORIZED);

    let api_error: ApiError = AuthError::EmailAlreadyExists.into();
    assert_eq!(api_error.status_code(), StatusCode::CONFLICT);

    let api_error: ApiError = AuthError::Token(TokenError::Expired).into();
    assert!(matches!(api_error, ApiError::Auth(AuthErrorKind::ExpiredToken)));

    let api_error: ApiError = AuthError::Token(TokenError::MissingSecret).into();
    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let api_error: ApiError = AuthError::Repository(RepositoryError::Timeout(5)).into();
    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn test_tenant_error_conversion() {
    let api_error: ApiError = TenantError::SlugConflict("acme".to_string()).into();
    assert_eq!(api_error.status_code(), StatusCode::CONFLICT);

    let api_error: ApiError = TenantError::NotFound.into();
    assert_eq!(api_error.status_code(), StatusCode::NOT_FOUND);

    match ApiError::from(TenantError::InvalidStatus("archived".to_string())) {
      ApiError::Validation(fields) => assert_eq!(
        fields["status"],
        "Must be one of: setup_pending, active, inactive, suspended."
      ),
      other => panic!("unexpected {:?}", other),
    }

    match ApiError::from(TenantError::ValueObject(ValueObjectError::InvalidEmail(
      "x".to_string(),
    ))) {
      ApiError::Validation(fields) => assert!(fields.contains_key("company_email")),
      other => panic!("unexpected {:?}", other),
    }
  }

  #[actix_web::test]
  async fn test_validation_envelope() {
    let json = body_json(ApiError::field("name", "This field is required.")).await;

    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "validation failed");
    assert_eq!(json["data"]["name"], "This field is required.");
  }

  #[actix_web::test]
  async fn test_internal_details_are_hidden() {
    let json = body_json(ApiError::Internal("connection refused on 10.0.0.3".into())).await;

    assert_eq!(json["message"], "An internal server error occurred");
    assert!(!json.to_string().contains("10.0.0.3"));
  }

  #[actix_web::test]
  async fn test_credentials_message_is_generic() {
    let json = body_json(AuthError::InvalidCredentials.into()).await;
    assert_eq!(json["message"], "Invalid email or password");
    assert_eq!(json["error"], "unauthorized");
  }
}
