use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{contains_ignore_case, sort_and_page};
use crate::domain::auth::errors::RepositoryError;
use crate::domain::pagination::PaginationQuery;
use crate::domain::tenant::{entities::Tenant, errors::TenantError, ports::TenantRepository};

/// Tenant store kept in process memory
#[derive(Default)]
pub struct InMemoryTenantRepository {
  tenants: RwLock<HashMap<Uuid, Tenant>>,
}

impl InMemoryTenantRepository {
  pub fn new() -> Self {
    Self::default()
  }

  fn matches(tenant: &Tenant, query: &PaginationQuery) -> bool {
    if tenant.is_deleted() {
      return false;
    }

    if let Some(term) = query.search_term() {
      let hit = contains_ignore_case(&tenant.name, term)
        || contains_ignore_case(&tenant.company_email, term)
        || contains_ignore_case(&tenant.slug, term);
      if !hit {
        return false;
      }
    }

    match query.filter("status") {
      Some(status) => tenant.status.as_str() == status,
      None => true,
    }
  }

  fn slug_taken(tenants: &HashMap<Uuid, Tenant>, slug: &str, except: Uuid) -> bool {
    tenants
      .values()
      .any(|t| t.id != except && !t.is_deleted() && t.slug == slug)
  }
}

fn duplicate_slug() -> TenantError {
  TenantError::Repository(RepositoryError::DuplicateKey(
    "tenants_slug_key".to_string(),
  ))
}

#[async_trait]
impl TenantRepository for InMemoryTenantRepository {
  async fn create(&self, tenant: Tenant) -> Result<Tenant, TenantError> {
    if tenant.id.is_nil() {
      return Err(TenantError::Repository(RepositoryError::MissingId));
    }

    let mut tenants = self.tenants.write().await;
    if tenants.contains_key(&tenant.id) || Self::slug_taken(&tenants, &tenant.slug, tenant.id) {
      return Err(duplicate_slug());
    }

    tenants.insert(tenant.id, tenant.clone());
    Ok(tenant)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Tenant, TenantError> {
    self
      .tenants
      .read()
      .await
      .get(&id)
      .filter(|t| !t.is_deleted())
      .cloned()
      .ok_or(TenantError::NotFound)
  }

  async fn find_by_slug(&self, slug: &str) -> Result<Tenant, TenantError> {
    self
      .tenants
      .read()
      .await
      .values()
      .find(|t| !t.is_deleted() && t.slug == slug)
      .cloned()
      .ok_or(TenantError::NotFound)
  }

  async fn find(&self, query: &PaginationQuery) -> Result<Vec<Tenant>, TenantError> {
    let matching: Vec<Tenant> = self
      .tenants
      .read()
      .await
      .values()
      .filter(|t| Self::matches(t, query))
      .cloned()
      .collect();

    let column = query.sort_column(&[
      "name",
      "slug",
      "company_email",
      "status",
      "created_at",
      "updated_at",
    ]);
    Ok(sort_and_page(matching, query, |a, b| {
      let ordering = match column {
        "name" => a.name.cmp(&b.name),
        "slug" => a.slug.cmp(&b.slug),
        "company_email" => a.company_email.cmp(&b.company_email),
        "status" => a.status.as_str().cmp(b.status.as_str()),
        "updated_at" => a.updated_at.cmp(&b.updated_at),
        _ => a.created_at.cmp(&b.created_at),
      };
      ordering.then_with(|| a.id.cmp(&b.id))
    }))
  }

  async fn count(&self, query: &PaginationQuery) -> Result<i64, TenantError> {
    let tenants = self.tenants.read().await;
    let total = tenants.values().filter(|t| Self::matches(t, query)).count();
    Ok(total as i64)
  }

  async fn update(&self, tenant: Tenant) -> Result<Tenant, TenantError> {
    let mut tenants = self.tenants.write().await;

    if Self::slug_taken(&tenants, &tenant.slug, tenant.id) {
      return Err(duplicate_slug());
    }

    let stored = tenants
      .get_mut(&tenant.id)
      .filter(|t| !t.is_deleted())
      .ok_or(TenantError::NotFound)?;

    stored.name = tenant.name;
    stored.slug = tenant.slug;
    stored.company_email = tenant.company_email;
    stored.status = tenant.status;
    stored.updated_at = Utc::now();

    Ok(stored.clone())
  }

  async fn delete(&self, id: Uuid) -> Result<(), TenantError> {
    let mut tenants = self.tenants.write().await;

    let stored = tenants
      .get_mut(&id)
      .filter(|t| !t.is_deleted())
      .ok_or(TenantError::NotFound)?;

    let now = Utc::now();
    stored.deleted_at = Some(now);
    stored.updated_at = now;

    Ok(())
  }
}
