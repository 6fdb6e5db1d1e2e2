use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::auth::errors::{AuthError, TokenError};
use crate::domain::auth::ports::TokenService;

/// Claims carried by a superadmin bearer token
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
  /// Admin id
  sub: String,
  iss: String,
  iat: i64,
  exp: i64,
}

/// HMAC-signed JWT issuer and verifier
pub struct JwtTokenService {
  encoding_key: EncodingKey,
  decoding_key: DecodingKey,
  validation: Validation,
  issuer: String,
  ttl: Duration,
}

impl JwtTokenService {
  /// Creates a token service signing with `secret`
  ///
  /// # Errors
  /// Returns `TokenError::MissingSecret` when the secret is empty
  pub fn new(secret: &str, issuer: &str, ttl_hours: i64) -> Result<Self, TokenError> {
    if secret.is_empty() {
      return Err(TokenError::MissingSecret);
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
    validation.set_issuer(&[issuer]);
    validation.set_required_spec_claims(&["exp", "iss", "sub"]);
    validation.leeway = 0;

    Ok(Self {
      encoding_key: EncodingKey::from_secret(secret.as_bytes()),
      decoding_key: DecodingKey::from_secret(secret.as_bytes()),
      validation,
      issuer: issuer.to_string(),
      ttl: Duration::hours(ttl_hours),
    })
  }
}

impl TokenService for JwtTokenService {
  fn issue(&self, admin_id: Uuid) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = Claims {
      sub: admin_id.to_string(),
      iss: self.issuer.clone(),
      iat: now.timestamp(),
      exp: (now + self.ttl).timestamp(),
    };

    encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
      .map_err(|e| AuthError::Token(TokenError::IssueFailed(e.to_string())))
  }

  fn verify(&self, token: &str) -> Result<Uuid, AuthError> {
    let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
      .map_err(|e| AuthError::Token(TokenError::from(e)))?;

    Uuid::parse_str(&data.claims.sub)
      .map_err(|_| AuthError::Token(TokenError::Invalid("malformed subject".to_string())))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn service() -> JwtTokenService {
    JwtTokenService::new("unit-test-secret", "hris", 24).unwrap()
  }

  #[test]
  fn test_empty_secret_is_rejected() {
    assert!(matches!(
      JwtTokenService::new("", "hris", 24),
      Err(TokenError::MissingSecret)
    ));
  }

  #[test]
  fn test_issue_then_verify() {
    let service = service();
    let admin_id = Uuid::now_v7();

    let token = service.issue(admin_id).unwrap();

    assert_eq!(token.split('.').count(), 3);
    assert_eq!(service.verify(&token).unwrap(), admin_id);
  }

  #[test]
  fn test_expired_token_is_rejected() {
    let expired = JwtTokenService::new("unit-test-secret", "hris", -1).unwrap();
    let token = expired.issue(Uuid::now_v7()).unwrap();

    assert!(matches!(
      service().verify(&token),
      Err(AuthError::Token(TokenError::Expired))
    ));
  }

  #[test]
  fn test_wrong_secret_is_rejected() {
    let other = JwtTokenService::new("another-secret", "hris", 24).unwrap();
    let token = other.issue(Uuid::now_v7()).unwrap();

    assert!(matches!(
      service().verify(&token),
      Err(AuthError::Token(TokenError::Invalid(_)))
    ));
  }

  #[test]
  fn test_wrong_issuer_is_rejected() {
    let other = JwtTokenService::new("unit-test-secret", "someone-else", 24).unwrap();
    let token = other.issue(Uuid::now_v7()).unwrap();

    assert!(service().verify(&token).is_err());
  }

  #[test]
  fn test_other_hmac_algorithms_are_accepted() {
    let admin_id = Uuid::now_v7();
    let now = Utc::now().timestamp();
    let claims = Claims {
      sub: admin_id.to_string(),
      iss: "hris".to_string(),
      iat: now,
      exp: now + 60,
    };
    let token = encode(
      &Header::new(Algorithm::HS512),
      &claims,
      &EncodingKey::from_secret(b"unit-test-secret"),
    )
    .unwrap();

    assert_eq!(service().verify(&token).unwrap(), admin_id);
  }

  #[test]
  fn test_malformed_subject_is_rejected() {
    let now = Utc::now().timestamp();
    let claims = Claims {
      sub: "not-a-uuid".to_string(),
      iss: "hris".to_string(),
      iat: now,
      exp: now + 60,
    };
    let token = encode(
      &Header::default(),
      &claims,
      &EncodingKey::from_secret(b"unit-test-secret"),
    )
    .unwrap();

    assert!(service().verify(&token).is_err());
  }
}
