use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;

/// Use case for resolving a bearer token to the admin it was issued for
pub struct AuthenticateAdminUseCase {
  auth_service: Arc<AuthService>,
}

impl AuthenticateAdminUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Returns the admin id carried by a valid, unexpired token
  pub fn execute(&self, token: &str) -> Result<Uuid, AuthError> {
    self.auth_service.authenticate(token)
  }
}
