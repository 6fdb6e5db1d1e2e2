use std::sync::Arc;

use crate::domain::auth::value_objects::Email;
use crate::domain::tenant::entities::Tenant;
use crate::domain::tenant::errors::TenantError;
use crate::domain::tenant::services::TenantService;

/// Command for creating a tenant
#[derive(Debug, Clone)]
pub struct CreateTenantCommand {
  pub name: String,
  pub company_email: String,
}

/// Use case for creating a tenant
pub struct CreateTenantUseCase {
  tenant_service: Arc<TenantService>,
}

impl CreateTenantUseCase {
  pub fn new(tenant_service: Arc<TenantService>) -> Self {
    Self { tenant_service }
  }

  /// Executes the create tenant use case
  ///
  /// # Errors
  /// - `TenantError::SlugConflict` when the derived slug is taken
  /// - `TenantError::InvalidName` when the name has no letters or digits
  pub async fn execute(&self, command: CreateTenantCommand) -> Result<Tenant, TenantError> {
    let company_email = Email::new(command.company_email)?;
    self.tenant_service.create(command.name, company_email).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::test_support::tenant_service;
  use crate::domain::tenant::value_objects::TenantStatus;

  #[tokio::test]
  async fn test_create_tenant() {
    let use_case = CreateTenantUseCase::new(tenant_service());

    let tenant = use_case
      .execute(CreateTenantCommand {
        name: "Acme Corp".to_string(),
        company_email: " hr@acme.test ".to_string(),
      })
      .await
      .unwrap();

    assert_eq!(tenant.slug, "acme-corp");
    assert_eq!(tenant.company_email, "hr@acme.test");
    assert_eq!(tenant.status, TenantStatus::SetupPending);
  }

  #[tokio::test]
  async fn test_invalid_company_email() {
    let use_case = CreateTenantUseCase::new(tenant_service());

    let result = use_case
      .execute(CreateTenantCommand {
        name: "Acme Corp".to_string(),
        company_email: "nope".to_string(),
      })
      .await;

    assert!(matches!(result, Err(TenantError::ValueObject(_))));
  }
}
