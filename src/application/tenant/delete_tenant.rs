use std::sync::Arc;
use uuid::Uuid;

use crate::domain::tenant::errors::TenantError;
use crate::domain::tenant::services::TenantService;

/// Use case for soft deleting a tenant
pub struct DeleteTenantUseCase {
  tenant_service: Arc<TenantService>,
}

impl DeleteTenantUseCase {
  pub fn new(tenant_service: Arc<TenantService>) -> Self {
    Self { tenant_service }
  }

  /// # Errors
  /// Returns `TenantError::NotFound` for a missing or already deleted tenant
  pub async fn execute(&self, id: Uuid) -> Result<(), TenantError> {
    self.tenant_service.delete(id).await
  }
}
