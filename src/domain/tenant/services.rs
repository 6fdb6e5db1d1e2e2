use std::sync::Arc;
use uuid::Uuid;

use super::entities::Tenant;
use super::errors::TenantError;
use super::ports::TenantRepository;
use super::value_objects::{Slug, TenantStatus};
use crate::domain::auth::errors::RepositoryError;
use crate::domain::auth::value_objects::Email;
use crate::domain::pagination::{PaginationMetadata, PaginationQuery};

/// Partial tenant update; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct TenantChanges {
  pub name: Option<String>,
  pub company_email: Option<String>,
  pub status: Option<TenantStatus>,
}

/// Tenant lifecycle service
pub struct TenantService {
  tenant_repo: Arc<dyn TenantRepository>,
}

impl TenantService {
  pub fn new(tenant_repo: Arc<dyn TenantRepository>) -> Self {
    Self { tenant_repo }
  }

  /// Creates a tenant in the `setup_pending` state
  ///
  /// # Errors
  /// - `TenantError::InvalidName` if the name yields an empty slug
  /// - `TenantError::SlugConflict` if another live tenant owns the slug
  pub async fn create(&self, name: String, company_email: Email) -> Result<Tenant, TenantError> {
    let name = name.trim().to_string();
    let slug = Slug::from_name(&name)?;

    self.ensure_slug_available(&slug, None).await?;

    let tenant = Tenant::new(name, slug, company_email.into_inner());
    let created = self
      .tenant_repo
      .create(tenant)
      .await
      .map_err(|e| slug_conflict(e, None))?;

    tracing::info!(tenant_id = %created.id, slug = %created.slug, "Tenant created");

    Ok(created)
  }

  /// Lists tenants one page at a time
  pub async fn list(
    &self,
    query: &PaginationQuery,
  ) -> Result<(Vec<Tenant>, PaginationMetadata), TenantError> {
    let tenants = self.tenant_repo.find(query).await?;
    let total = self.tenant_repo.count(query).await?;

    Ok((tenants, query.metadata(total)))
  }

  pub async fn get(&self, id: Uuid) -> Result<Tenant, TenantError> {
    self.tenant_repo.find_by_id(id).await
  }

  /// Applies a partial update
  ///
  /// Empty names and emails count as absent. A new name recomputes the slug,
  /// which must not belong to another live tenant.
  pub async fn update(&self, id: Uuid, changes: TenantChanges) -> Result<Tenant, TenantError> {
    let mut tenant = self.tenant_repo.find_by_id(id).await?;

    if let Some(name) = non_empty(changes.name) {
      let slug = Slug::from_name(&name)?;
      if slug.as_str() != tenant.slug {
        self.ensure_slug_available(&slug, Some(tenant.id)).await?;
      }
      tenant.rename(name, slug);
    }

    if let Some(email) = non_empty(changes.company_email) {
      tenant.company_email = Email::new(email)?.into_inner();
    }

    if let Some(status) = changes.status {
      tenant.status = status;
    }

    let slug = tenant.slug.clone();
    let updated = self
      .tenant_repo
      .update(tenant)
      .await
      .map_err(|e| slug_conflict(e, Some(slug)))?;

    tracing::info!(tenant_id = %updated.id, "Tenant updated");

    Ok(updated)
  }

  /// Soft deletes a tenant that still exists
  pub async fn delete(&self, id: Uuid) -> Result<(), TenantError> {
    self.tenant_repo.find_by_id(id).await?;
    self.tenant_repo.delete(id).await?;

    tracing::info!(tenant_id = %id, "Tenant deleted");

    Ok(())
  }

  async fn ensure_slug_available(
    &self,
    slug: &Slug,
    owner: Option<Uuid>,
  ) -> Result<(), TenantError> {
    match self.tenant_repo.find_by_slug(slug.as_str()).await {
      Ok(existing) if Some(existing.id) == owner => Ok(()),
      Ok(_) => Err(TenantError::SlugConflict(slug.to_string())),
      Err(TenantError::NotFound) => Ok(()),
      Err(e) => Err(e),
    }
  }
}

fn non_empty(value: Option<String>) -> Option<String> {
  value
    .map(|v| v.trim().to_string())
    .filter(|v| !v.is_empty())
}

/// A unique-index violation on write means another tenant took the slug
fn slug_conflict(error: TenantError, slug: Option<String>) -> TenantError {
  match error {
    TenantError::Repository(RepositoryError::DuplicateKey(detail)) => {
      TenantError::SlugConflict(slug.unwrap_or(detail))
    }
    other => other,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::memory::InMemoryTenantRepository;

  fn service() -> TenantService {
    TenantService::new(Arc::new(InMemoryTenantRepository::new()))
  }

  fn email(value: &str) -> Email {
    Email::new(value).unwrap()
  }

  #[tokio::test]
  async fn test_create_sets_slug_and_status() {
    let service = service();
    let tenant = service
      .create("  Acme Corp ".to_string(), email("hr@acme.test"))
      .await
      .unwrap();

    assert_eq!(tenant.name, "Acme Corp");
    assert_eq!(tenant.slug, "acme-corp");
    assert_eq!(tenant.status, TenantStatus::SetupPending);
  }

  #[tokio::test]
  async fn test_create_rejects_taken_slug() {
    let service = service();
    service
      .create("Acme Corp".to_string(), email("hr@acme.test"))
      .await
      .unwrap();

    let result = service
      .create("ACME corp!".to_string(), email("other@acme.test"))
      .await;

    assert!(matches!(result, Err(TenantError::SlugConflict(slug)) if slug == "acme-corp"));
  }

  #[tokio::test]
  async fn test_create_rejects_name_without_alphanumerics() {
    let service = service();
    let result = service.create("???".to_string(), email("hr@acme.test")).await;
    assert!(matches!(result, Err(TenantError::InvalidName)));
  }

  #[tokio::test]
  async fn test_update_renames_and_recomputes_slug() {
    let service = service();
    let tenant = service
      .create("Acme Corp".to_string(), email("hr@acme.test"))
      .await
      .unwrap();

    let updated = service
      .update(
        tenant.id,
        TenantChanges {
          name: Some("Acme Global".to_string()),
          status: Some(TenantStatus::Active),
          ..Default::default()
        },
      )
      .await
      .unwrap();

    assert_eq!(updated.name, "Acme Global");
    assert_eq!(updated.slug, "acme-global");
    assert_eq!(updated.status, TenantStatus::Active);
    assert_eq!(updated.company_email, "hr@acme.test");
    assert!(service.get(tenant.id).await.unwrap().slug == "acme-global");
  }

  #[tokio::test]
  async fn test_update_keeps_own_slug() {
    let service = service();
    let tenant = service
      .create("Acme Corp".to_string(), email("hr@acme.test"))
      .await
      .unwrap();

    let updated = service
      .update(
        tenant.id,
        TenantChanges {
          name: Some("ACME Corp".to_string()),
          ..Default::default()
        },
      )
      .await
      .unwrap();

    assert_eq!(updated.name, "ACME Corp");
    assert_eq!(updated.slug, "acme-corp");
  }

  #[tokio::test]
  async fn test_update_conflict_leaves_row_unchanged() {
    let service = service();
    service
      .create("Globex".to_string(), email("hr@globex.test"))
      .await
      .unwrap();
    let tenant = service
      .create("Acme Corp".to_string(), email("hr@acme.test"))
      .await
      .unwrap();

    let result = service
      .update(
        tenant.id,
        TenantChanges {
          name: Some("globex".to_string()),
          ..Default::default()
        },
      )
      .await;

    assert!(matches!(result, Err(TenantError::SlugConflict(_))));
    let stored = service.get(tenant.id).await.unwrap();
    assert_eq!(stored.name, "Acme Corp");
    assert_eq!(stored.slug, "acme-corp");
  }

  #[tokio::test]
  async fn test_update_treats_blank_fields_as_absent() {
    let service = service();
    let tenant = service
      .create("Acme Corp".to_string(), email("hr@acme.test"))
      .await
      .unwrap();

    let updated = service
      .update(
        tenant.id,
        TenantChanges {
          name: Some("   ".to_string()),
          company_email: Some(String::new()),
          status: None,
        },
      )
      .await
      .unwrap();

    assert_eq!(updated.name, "Acme Corp");
    assert_eq!(updated.company_email, "hr@acme.test");
  }

  #[tokio::test]
  async fn test_delete_then_lookups_fail() {
    let service = service();
    let tenant = service
      .create("Acme Corp".to_string(), email("hr@acme.test"))
      .await
      .unwrap();

    service.delete(tenant.id).await.unwrap();

    assert!(matches!(service.get(tenant.id).await, Err(TenantError::NotFound)));
    assert!(matches!(service.delete(tenant.id).await, Err(TenantError::NotFound)));

    // The slug is free again once its owner is deleted
    assert!(
      service
        .create("Acme Corp".to_string(), email("hr@acme.test"))
        .await
        .is_ok()
    );
  }

  #[tokio::test]
  async fn test_list_reports_metadata() {
    let service = service();
    for name in ["Alpha", "Beta", "Gamma"] {
      service
        .create(name.to_string(), email("hr@tenant.test"))
        .await
        .unwrap();
    }

    let query = PaginationQuery {
      limit: 2,
      page: 2,
      ..Default::default()
    };
    let (tenants, metadata) = service.list(&query).await.unwrap();

    assert_eq!(tenants.len(), 1);
    assert_eq!(metadata.total_items, 3);
    assert_eq!(metadata.total_pages, 2);
    assert_eq!(metadata.current_page, 2);
  }
}
