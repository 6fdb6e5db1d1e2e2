use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{contains_ignore_case, sort_and_page};
use crate::domain::auth::{
  entities::AdminUser,
  errors::{AuthError, RepositoryError},
  ports::AdminUserRepository,
  value_objects::Email,
};
use crate::domain::pagination::PaginationQuery;

/// Admin user store kept in process memory
#[derive(Default)]
pub struct InMemoryAdminUserRepository {
  users: RwLock<HashMap<Uuid, AdminUser>>,
}

impl InMemoryAdminUserRepository {
  pub fn new() -> Self {
    Self::default()
  }

  fn matches(user: &AdminUser, query: &PaginationQuery) -> bool {
    if user.is_deleted() {
      return false;
    }

    match query.search_term() {
      Some(term) => contains_ignore_case(&user.name, term) || contains_ignore_case(&user.email, term),
      None => true,
    }
  }
}

#[async_trait]
impl AdminUserRepository for InMemoryAdminUserRepository {
  async fn create(&self, user: AdminUser) -> Result<AdminUser, AuthError> {
    if user.id.is_nil() {
      return Err(AuthError::Repository(RepositoryError::MissingId));
    }

    let mut users = self.users.write().await;

    let email_taken = users
      .values()
      .any(|existing| !existing.is_deleted() && existing.email == user.email);
    if email_taken || users.contains_key(&user.id) {
      return Err(AuthError::Repository(RepositoryError::DuplicateKey(
        "admin_users_email_key".to_string(),
      )));
    }

    users.insert(user.id, user.clone());
    Ok(user)
  }

  async fn find_by_email(&self, email: &Email) -> Result<AdminUser, AuthError> {
    self
      .users
      .read()
      .await
      .values()
      .find(|user| !user.is_deleted() && user.email == email.as_str())
      .cloned()
      .ok_or(AuthError::UserNotFound)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<AdminUser, AuthError> {
    self
      .users
      .read()
      .await
      .get(&id)
      .filter(|user| !user.is_deleted())
      .cloned()
      .ok_or(AuthError::UserNotFound)
  }

  async fn find(&self, query: &PaginationQuery) -> Result<Vec<AdminUser>, AuthError> {
    let matching: Vec<AdminUser> = self
      .users
      .read()
      .await
      .values()
      .filter(|user| Self::matches(user, query))
      .cloned()
      .collect();

    let column = query.sort_column(&["name", "email", "created_at", "updated_at"]);
    Ok(sort_and_page(matching, query, |a, b| {
      let ordering = match column {
        "name" => a.name.cmp(&b.name),
        "email" => a.email.cmp(&b.email),
        "updated_at" => a.updated_at.cmp(&b.updated_at),
        _ => a.created_at.cmp(&b.created_at),
      };
      ordering.then_with(|| a.id.cmp(&b.id))
    }))
  }

  async fn count(&self, query: &PaginationQuery) -> Result<i64, AuthError> {
    let users = self.users.read().await;
    let total = users.values().filter(|user| Self::matches(user, query)).count();
    Ok(total as i64)
  }
}
