use std::sync::Arc;
use uuid::Uuid;

use crate::domain::tenant::entities::Tenant;
use crate::domain::tenant::errors::TenantError;
use crate::domain::tenant::services::TenantService;

/// Use case for fetching a single tenant
pub struct GetTenantUseCase {
  tenant_service: Arc<TenantService>,
}

impl GetTenantUseCase {
  pub fn new(tenant_service: Arc<TenantService>) -> Self {
    Self { tenant_service }
  }

  pub async fn execute(&self, id: Uuid) -> Result<Tenant, TenantError> {
    self.tenant_service.get(id).await
  }
}
