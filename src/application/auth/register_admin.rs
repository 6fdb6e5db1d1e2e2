use std::sync::Arc;

use crate::domain::auth::entities::AdminUser;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{Email, Password};

/// Command for registering a new superadmin
#[derive(Debug, Clone)]
pub struct RegisterAdminCommand {
  pub name: String,
  pub email: String,
  /// Plain text password, hashed before storage
  pub password: String,
}

/// Use case for registering a new superadmin
pub struct RegisterAdminUseCase {
  auth_service: Arc<AuthService>,
}

impl RegisterAdminUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the registration use case
  ///
  /// # Returns
  /// The new admin, without its password hash
  ///
  /// # Errors
  /// Returns `AuthError::EmailAlreadyExists` when the email is taken
  pub async fn execute(&self, command: RegisterAdminCommand) -> Result<AdminUser, AuthError> {
    let email = Email::new(command.email)?;
    let password = Password::new(command.password)?;

    self
      .auth_service
      .register(command.name.trim().to_string(), email, password)
      .await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::test_support::auth_service;

  fn command(email: &str) -> RegisterAdminCommand {
    RegisterAdminCommand {
      name: "  Root Admin ".to_string(),
      email: email.to_string(),
      password: "correct horse battery".to_string(),
    }
  }

  #[tokio::test]
  async fn test_register_trims_name_and_email() {
    let use_case = RegisterAdminUseCase::new(auth_service());

    let admin = use_case.execute(command(" root@example.com ")).await.unwrap();

    assert_eq!(admin.name, "Root Admin");
    assert_eq!(admin.email, "root@example.com");
    assert!(admin.password_hash.is_empty());
  }

  #[tokio::test]
  async fn test_register_twice_fails() {
    let use_case = RegisterAdminUseCase::new(auth_service());

    use_case.execute(command("root@example.com")).await.unwrap();
    let result = use_case.execute(command("root@example.com")).await;

    assert!(matches!(result, Err(AuthError::EmailAlreadyExists)));
  }
}
