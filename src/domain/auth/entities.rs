use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Superadmin account
#[derive(Debug, Clone, Serialize)]
pub struct AdminUser {
  /// Time-ordered unique identifier (UUID v7)
  pub id: Uuid,
  /// Display name
  pub name: String,
  /// Email address, unique among non-deleted admins
  pub email: String,
  /// Argon2id PHC hash; never serialized
  #[serde(skip_serializing)]
  pub password_hash: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  /// Soft-delete marker
  pub deleted_at: Option<DateTime<Utc>>,
}

impl AdminUser {
  /// Creates a new admin with a fresh UUID v7
  pub fn new(name: String, email: String, password_hash: String) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::now_v7(),
      name,
      email,
      password_hash,
      created_at: now,
      updated_at: now,
      deleted_at: None,
    }
  }

  /// Reconstructs an admin from stored fields
  pub fn from_db(
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
  ) -> Self {
    Self {
      id,
      name,
      email,
      password_hash,
      created_at,
      updated_at,
      deleted_at,
    }
  }

  /// Drops the password hash before the entity leaves the domain
  pub fn without_password(mut self) -> Self {
    self.password_hash = String::new();
    self
  }

  pub fn is_deleted(&self) -> bool {
    self.deleted_at.is_some()
  }
}
