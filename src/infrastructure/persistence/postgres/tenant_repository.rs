use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::time::Duration;
use uuid::Uuid;

use super::{bounded, contains_pattern};
use crate::domain::auth::errors::RepositoryError;
use crate::domain::pagination::PaginationQuery;
use crate::domain::tenant::{
  entities::Tenant, errors::TenantError, ports::TenantRepository, value_objects::TenantStatus,
};

const COLUMNS: &str = "id, name, slug, company_email, status, created_at, updated_at, deleted_at";

/// Columns a listing may be sorted by
const SORTABLE_COLUMNS: [&str; 6] = [
  "name",
  "slug",
  "company_email",
  "status",
  "created_at",
  "updated_at",
];

/// PostgreSQL implementation of the TenantRepository trait
pub struct PostgresTenantRepository {
  pool: PgPool,
  query_timeout: Duration,
}

impl PostgresTenantRepository {
  pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
    Self {
      pool,
      query_timeout,
    }
  }
}

/// Database row structure for tenants table
#[derive(Debug, sqlx::FromRow)]
struct TenantRow {
  id: Uuid,
  name: String,
  slug: String,
  company_email: String,
  status: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
  deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<TenantRow> for Tenant {
  type Error = TenantError;

  fn try_from(row: TenantRow) -> Result<Self, Self::Error> {
    let status = row.status.parse::<TenantStatus>().map_err(|_| {
      TenantError::Repository(RepositoryError::InvalidData(format!(
        "tenant {} has unknown status '{}'",
        row.id, row.status
      )))
    })?;

    Ok(Tenant::from_db(
      row.id,
      row.name,
      row.slug,
      row.company_email,
      status,
      row.created_at,
      row.updated_at,
      row.deleted_at,
    ))
  }
}

/// Appends the WHERE clause shared by `find` and `count`
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &PaginationQuery) {
  builder.push(" WHERE deleted_at IS NULL");

  if let Some(term) = query.search_term() {
    let pattern = contains_pattern(term);
    builder
      .push(" AND (name ILIKE ")
      .push_bind(pattern.clone())
      .push(" OR company_email ILIKE ")
      .push_bind(pattern.clone())
      .push(" OR slug ILIKE ")
      .push_bind(pattern)
      .push(")");
  }

  if let Some(status) = query.filter("status") {
    builder.push(" AND status = ").push_bind(status.to_string());
  }
}

#[async_trait]
impl TenantRepository for PostgresTenantRepository {
  async fn create(&self, tenant: Tenant) -> Result<Tenant, TenantError> {
    if tenant.id.is_nil() {
      return Err(TenantError::Repository(RepositoryError::MissingId));
    }

    let insert = sqlx::query_as::<_, TenantRow>(
      r#"
            INSERT INTO tenants (id, name, slug, company_email, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, slug, company_email, status, created_at, updated_at, deleted_at
            "#,
    )
    .bind(tenant.id)
    .bind(&tenant.name)
    .bind(&tenant.slug)
    .bind(&tenant.company_email)
    .bind(tenant.status.as_str())
    .bind(tenant.created_at)
    .bind(tenant.updated_at)
    .fetch_one(&self.pool);

    let row = bounded(self.query_timeout, async { Ok::<_, TenantError>(insert.await?) }).await?;

    row.try_into()
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Tenant, TenantError> {
    let sql = format!(
      "SELECT {} FROM tenants WHERE id = $1 AND deleted_at IS NULL",
      COLUMNS
    );
    let lookup = sqlx::query_as::<_, TenantRow>(&sql)
      .bind(id)
      .fetch_optional(&self.pool);

    let row = bounded(self.query_timeout, async { Ok::<_, TenantError>(lookup.await?) }).await?;

    row.ok_or(TenantError::NotFound)?.try_into()
  }

  async fn find_by_slug(&self, slug: &str) -> Result<Tenant, TenantError> {
    let sql = format!(
      "SELECT {} FROM tenants WHERE slug = $1 AND deleted_at IS NULL",
      COLUMNS
    );
    let lookup = sqlx::query_as::<_, TenantRow>(&sql)
      .bind(slug)
      .fetch_optional(&self.pool);

    let row = bounded(self.query_timeout, async { Ok::<_, TenantError>(lookup.await?) }).await?;

    row.ok_or(TenantError::NotFound)?.try_into()
  }

  async fn find(&self, query: &PaginationQuery) -> Result<Vec<Tenant>, TenantError> {
    let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {} FROM tenants", COLUMNS));
    push_filters(&mut builder, query);

    let direction = query.sort_dir.as_sql();
    builder
      .push(format!(
        " ORDER BY {} {}, id {}",
        query.sort_column(&SORTABLE_COLUMNS),
        direction,
        direction
      ))
      .push(" LIMIT ")
      .push_bind(i64::from(query.limit))
      .push(" OFFSET ")
      .push_bind(i64::try_from(query.offset()).unwrap_or(i64::MAX));

    tracing::debug!(sql = builder.sql(), "Listing tenants");

    let rows = bounded(self.query_timeout, async {
      Ok::<_, TenantError>(
        builder
          .build_query_as::<TenantRow>()
          .fetch_all(&self.pool)
          .await?,
      )
    })
    .await?;

    rows.into_iter().map(Tenant::try_from).collect()
  }

  async fn count(&self, query: &PaginationQuery) -> Result<i64, TenantError> {
    let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM tenants");
    push_filters(&mut builder, query);

    bounded(self.query_timeout, async {
      Ok::<_, TenantError>(
        builder
          .build_query_scalar::<i64>()
          .fetch_one(&self.pool)
          .await?,
      )
    })
    .await
  }

  async fn update(&self, tenant: Tenant) -> Result<Tenant, TenantError> {
    let update = sqlx::query_as::<_, TenantRow>(
      r#"
            UPDATE tenants
            SET
                name = $2,
                slug = $3,
                company_email = $4,
                status = $5,
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, slug, company_email, status, created_at, updated_at, deleted_at
            "#,
    )
    .bind(tenant.id)
    .bind(&tenant.name)
    .bind(&tenant.slug)
    .bind(&tenant.company_email)
    .bind(tenant.status.as_str())
    .fetch_optional(&self.pool);

    let row = bounded(self.query_timeout, async { Ok::<_, TenantError>(update.await?) }).await?;

    row.ok_or(TenantError::NotFound)?.try_into()
  }

  async fn delete(&self, id: Uuid) -> Result<(), TenantError> {
    let delete = sqlx::query(
      r#"
            UPDATE tenants
            SET
                deleted_at = NOW(),
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
    )
    .bind(id)
    .execute(&self.pool);

    let result = bounded(self.query_timeout, async { Ok::<_, TenantError>(delete.await?) }).await?;

    if result.rows_affected() == 0 {
      return Err(TenantError::NotFound);
    }

    Ok(())
  }
}
