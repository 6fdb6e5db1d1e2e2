use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::value_objects::{Slug, TenantStatus};

/// Organization managed by the superadmins
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tenant {
  pub id: Uuid,
  pub name: String,
  /// Derived from `name`, unique among non-deleted tenants
  pub slug: String,
  pub company_email: String,
  pub status: TenantStatus,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  pub deleted_at: Option<DateTime<Utc>>,
}

impl Tenant {
  /// Creates a tenant in the `setup_pending` state
  pub fn new(name: String, slug: Slug, company_email: String) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::now_v7(),
      name,
      slug: slug.into_inner(),
      company_email,
      status: TenantStatus::SetupPending,
      created_at: now,
      updated_at: now,
      deleted_at: None,
    }
  }

  #[allow(clippy::too_many_arguments)]
  pub fn from_db(
    id: Uuid,
    name: String,
    slug: String,
    company_email: String,
    status: TenantStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
  ) -> Self {
    Self {
      id,
      name,
      slug,
      company_email,
      status,
      created_at,
      updated_at,
      deleted_at,
    }
  }

  /// Renames the tenant together with its slug
  pub fn rename(&mut self, name: String, slug: Slug) {
    self.name = name;
    self.slug = slug.into_inner();
  }

  pub fn is_deleted(&self) -> bool {
    self.deleted_at.is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_tenant_is_setup_pending() {
    let tenant = Tenant::new(
      "Acme Corp".to_string(),
      Slug::from_name("Acme Corp").unwrap(),
      "hr@acme.test".to_string(),
    );

    assert_eq!(tenant.status, TenantStatus::SetupPending);
    assert_eq!(tenant.slug, "acme-corp");
    assert_eq!(tenant.id.get_version_num(), 7);
    assert!(!tenant.is_deleted());
  }

  #[test]
  fn test_rename_updates_slug() {
    let mut tenant = Tenant::new(
      "Acme Corp".to_string(),
      Slug::from_name("Acme Corp").unwrap(),
      "hr@acme.test".to_string(),
    );

    tenant.rename("Acme Global".to_string(), Slug::from_name("Acme Global").unwrap());

    assert_eq!(tenant.name, "Acme Global");
    assert_eq!(tenant.slug, "acme-global");
  }
}
