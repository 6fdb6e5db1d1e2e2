use async_trait::async_trait;
use uuid::Uuid;

use super::entities::Tenant;
use super::errors::TenantError;
use crate::domain::pagination::PaginationQuery;

/// Repository trait for tenant persistence operations
///
/// Lookups return `TenantError::NotFound` for missing and soft-deleted rows.
#[async_trait]
pub trait TenantRepository: Send + Sync {
  /// Stores a new tenant
  async fn create(&self, tenant: Tenant) -> Result<Tenant, TenantError>;

  async fn find_by_id(&self, id: Uuid) -> Result<Tenant, TenantError>;

  async fn find_by_slug(&self, slug: &str) -> Result<Tenant, TenantError>;

  /// Returns one page of tenants matching the query
  ///
  /// Search covers name, company email and slug; a `status` filter narrows
  /// the result to one status.
  async fn find(&self, query: &PaginationQuery) -> Result<Vec<Tenant>, TenantError>;

  /// Counts every tenant matching the query's search and filters
  async fn count(&self, query: &PaginationQuery) -> Result<i64, TenantError>;

  /// Persists name, slug, company email and status, returning the stored row
  async fn update(&self, tenant: Tenant) -> Result<Tenant, TenantError>;

  /// Soft deletes a tenant
  async fn delete(&self, id: Uuid) -> Result<(), TenantError>;
}
