use std::sync::Arc;

use crate::domain::auth::entities::AdminUser;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::pagination::{PaginationMetadata, PaginationQuery};

/// One page of admins
#[derive(Debug, Clone)]
pub struct ListAdminsResponse {
  pub admins: Vec<AdminUser>,
  pub pagination: PaginationMetadata,
}

/// Use case for listing superadmins
pub struct ListAdminsUseCase {
  auth_service: Arc<AuthService>,
}

impl ListAdminsUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  pub async fn execute(&self, query: PaginationQuery) -> Result<ListAdminsResponse, AuthError> {
    let (admins, pagination) = self.auth_service.list_admins(&query).await?;
    Ok(ListAdminsResponse { admins, pagination })
  }
}
