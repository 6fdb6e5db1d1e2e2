use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{Email, Password};

/// Command for logging in a superadmin
#[derive(Debug, Clone)]
pub struct LoginAdminCommand {
  pub email: String,
  /// Plain text password
  pub password: String,
}

/// Response after a successful login
#[derive(Debug, Clone)]
pub struct LoginAdminResponse {
  pub admin_id: Uuid,
  /// Signed bearer token
  pub token: String,
}

/// Use case for logging in a superadmin
pub struct LoginAdminUseCase {
  auth_service: Arc<AuthService>,
}

impl LoginAdminUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the login use case
  ///
  /// # Errors
  /// Returns `AuthError::InvalidCredentials` for any credential problem,
  /// including input that cannot be a valid email or password.
  pub async fn execute(&self, command: LoginAdminCommand) -> Result<LoginAdminResponse, AuthError> {
    let email = Email::new(command.email).map_err(|_| AuthError::InvalidCredentials)?;
    let password = Password::new(command.password).map_err(|_| AuthError::InvalidCredentials)?;

    let (admin, token) = self.auth_service.login(email, password).await?;

    Ok(LoginAdminResponse {
      admin_id: admin.id,
      token,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::auth::{RegisterAdminCommand, RegisterAdminUseCase};
  use crate::application::test_support::auth_service;

  #[tokio::test]
  async fn test_login_after_register() {
    let service = auth_service();
    let admin = RegisterAdminUseCase::new(service.clone())
      .execute(RegisterAdminCommand {
        name: "Root".to_string(),
        email: "root@example.com".to_string(),
        password: "correct horse battery".to_string(),
      })
      .await
      .unwrap();

    let response = LoginAdminUseCase::new(service.clone())
      .execute(LoginAdminCommand {
        email: "root@example.com".to_string(),
        password: "correct horse battery".to_string(),
      })
      .await
      .unwrap();

    assert_eq!(response.admin_id, admin.id);
    assert_eq!(service.authenticate(&response.token).unwrap(), admin.id);
  }

  #[tokio::test]
  async fn test_malformed_input_is_invalid_credentials() {
    let use_case = LoginAdminUseCase::new(auth_service());

    let result = use_case
      .execute(LoginAdminCommand {
        email: "not-an-email".to_string(),
        password: "whatever".to_string(),
      })
      .await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
  }
}
