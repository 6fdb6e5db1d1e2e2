use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::time::Duration;
use uuid::Uuid;

use super::{bounded, contains_pattern};
use crate::domain::auth::{
  entities::AdminUser,
  errors::{AuthError, RepositoryError},
  ports::AdminUserRepository,
  value_objects::Email,
};
use crate::domain::pagination::PaginationQuery;

const COLUMNS: &str = "id, name, email, password, created_at, updated_at, deleted_at";

/// Columns a listing may be sorted by
const SORTABLE_COLUMNS: [&str; 4] = ["name", "email", "created_at", "updated_at"];

/// PostgreSQL implementation of the AdminUserRepository trait
pub struct PostgresAdminUserRepository {
  pool: PgPool,
  query_timeout: Duration,
}

impl PostgresAdminUserRepository {
  pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
    Self {
      pool,
      query_timeout,
    }
  }
}

/// Database row structure for admin_users table
#[derive(Debug, sqlx::FromRow)]
struct AdminUserRow {
  id: Uuid,
  name: String,
  email: String,
  password: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
  deleted_at: Option<DateTime<Utc>>,
}

impl From<AdminUserRow> for AdminUser {
  fn from(row: AdminUserRow) -> Self {
    AdminUser::from_db(
      row.id,
      row.name,
      row.email,
      row.password,
      row.created_at,
      row.updated_at,
      row.deleted_at,
    )
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
      .push(" OR email ILIKE ")
      .push_bind(pattern)
      .push(")");
  }
}

#[async_trait]
impl AdminUserRepository for PostgresAdminUserRepository {
  async fn create(&self, user: AdminUser) -> Result<AdminUser, AuthError> {
    if user.id.is_nil() {
      return Err(AuthError::Repository(RepositoryError::MissingId));
    }

    let insert = sqlx::query_as::<_, AdminUserRow>(
      r#"
            INSERT INTO admin_users (id, name, email, password, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, password, created_at, updated_at, deleted_at
            "#,
    )
    .bind(user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.created_at)
    .bind(user.updated_at)
    .fetch_one(&self.pool);

    let row = bounded(self.query_timeout, async { Ok::<_, AuthError>(insert.await?) }).await?;

    Ok(row.into())
  }

  async fn find_by_email(&self, email: &Email) -> Result<AdminUser, AuthError> {
    let sql = format!(
      "SELECT {} FROM admin_users WHERE email = $1 AND deleted_at IS NULL",
      COLUMNS
    );
    let lookup = sqlx::query_as::<_, AdminUserRow>(&sql)
      .bind(email.as_str())
      .fetch_optional(&self.pool);

    let row = bounded(self.query_timeout, async { Ok::<_, AuthError>(lookup.await?) }).await?;

    row.map(Into::into).ok_or(AuthError::UserNotFound)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<AdminUser, AuthError> {
    let sql = format!(
      "SELECT {} FROM admin_users WHERE id = $1 AND deleted_at IS NULL",
      COLUMNS
    );
    let lookup = sqlx::query_as::<_, AdminUserRow>(&sql)
      .bind(id)
      .fetch_optional(&self.pool);

    let row = bounded(self.query_timeout, async { Ok::<_, AuthError>(lookup.await?) }).await?;

    row.map(Into::into).ok_or(AuthError::UserNotFound)
  }

  async fn find(&self, query: &PaginationQuery) -> Result<Vec<AdminUser>, AuthError> {
    let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {} FROM admin_users", COLUMNS));
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

    tracing::debug!(sql = builder.sql(), "Listing admin users");

    let rows = bounded(self.query_timeout, async {
      Ok::<_, AuthError>(
        builder
          .build_query_as::<AdminUserRow>()
          .fetch_all(&self.pool)
          .await?,
      )
    })
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
  }

  async fn count(&self, query: &PaginationQuery) -> Result<i64, AuthError> {
    let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM admin_users");
    push_filters(&mut builder, query);

    bounded(self.query_timeout, async {
      Ok::<_, AuthError>(
        builder
          .build_query_scalar::<i64>()
          .fetch_one(&self.pool)
          .await?,
      )
    })
    .await
  }
}
