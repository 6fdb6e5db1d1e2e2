use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::entities::AdminUser;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;

/// Use case for getting the authenticated superadmin
pub struct GetCurrentAdminUseCase {
  auth_service: Arc<AuthService>,
}

impl GetCurrentAdminUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// # Errors
  /// Returns `AuthError::UserNotFound` if the admin no longer exists
  pub async fn execute(&self, admin_id: Uuid) -> Result<AdminUser, AuthError> {
    self.auth_service.get_admin(admin_id).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::auth::{RegisterAdminCommand, RegisterAdminUseCase};
  use crate::application::test_support::auth_service;

  #[tokio::test]
  async fn test_returns_registered_admin() {
    let service = auth_service();
    let admin = RegisterAdminUseCase::new(service.clone())
      .execute(RegisterAdminCommand {
        name: "Root".to_string(),
        email: "root@example.com".to_string(),
        password: "correct horse battery".to_string(),
      })
      .await
      .unwrap();

    let current = GetCurrentAdminUseCase::new(service)
      .execute(admin.id)
      .await
      .unwrap();

    assert_eq!(current.email, "root@example.com");
    assert!(current.password_hash.is_empty());
  }

  #[tokio::test]
  async fn test_unknown_admin() {
    let use_case = GetCurrentAdminUseCase::new(auth_service());
    let result = use_case.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(AuthError::UserNotFound)));
  }
}
