use std::sync::Arc;

use crate::domain::pagination::{PaginationMetadata, PaginationQuery};
use crate::domain::tenant::entities::Tenant;
use crate::domain::tenant::errors::TenantError;
use crate::domain::tenant::services::TenantService;

/// One page of tenants
#[derive(Debug, Clone)]
pub struct ListTenantsResponse {
  pub tenants: Vec<Tenant>,
  pub pagination: PaginationMetadata,
}

/// Use case for listing tenants
pub struct ListTenantsUseCase {
  tenant_service: Arc<TenantService>,
}

impl ListTenantsUseCase {
  pub fn new(tenant_service: Arc<TenantService>) -> Self {
    Self { tenant_service }
  }

  pub async fn execute(&self, query: PaginationQuery) -> Result<ListTenantsResponse, TenantError> {
    let (tenants, pagination) = self.tenant_service.list(&query).await?;
    Ok(ListTenantsResponse {
      tenants,
      pagination,
    })
  }
}
