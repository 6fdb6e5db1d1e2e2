use std::sync::Arc;
use uuid::Uuid;

use crate::domain::tenant::entities::Tenant;
use crate::domain::tenant::errors::TenantError;
use crate::domain::tenant::services::{TenantChanges, TenantService};
use crate::domain::tenant::value_objects::TenantStatus;

/// Command for a partial tenant update
#[derive(Debug, Clone, Default)]
pub struct UpdateTenantCommand {
  pub id: Uuid,
  pub name: Option<String>,
  pub company_email: Option<String>,
  pub status: Option<String>,
}

/// Use case for updating a tenant
pub struct UpdateTenantUseCase {
  tenant_service: Arc<TenantService>,
}

impl UpdateTenantUseCase {
  pub fn new(tenant_service: Arc<TenantService>) -> Self {
    Self { tenant_service }
  }

  /// Executes the update tenant use case
  ///
  /// # Errors
  /// - `TenantError::InvalidStatus` for a status outside the known set
  /// - `TenantError::SlugConflict` when the new name's slug belongs to another tenant
  /// - `TenantError::NotFound` when the tenant is missing or deleted
  pub async fn execute(&self, command: UpdateTenantCommand) -> Result<Tenant, TenantError> {
    let status = command
      .status
      .map(|s| s.trim().to_string())
      .filter(|s| !s.is_empty())
      .map(|s| s.parse::<TenantStatus>())
      .transpose()?;

    self
      .tenant_service
      .update(
        command.id,
        TenantChanges {
          name: command.name,
          company_email: command.company_email,
          status,
        },
      )
      .await
  }
}
