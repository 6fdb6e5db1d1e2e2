use async_trait::async_trait;
use uuid::Uuid;

use super::entities::AdminUser;
use super::errors::AuthError;
use super::value_objects::{Email, Password, PasswordHash};
use crate::domain::pagination::PaginationQuery;

/// Repository trait for admin user persistence operations
///
/// Soft-deleted admins are invisible to every lookup and listing.
#[async_trait]
pub trait AdminUserRepository: Send + Sync {
  /// Stores a new admin; the id must already be set
  async fn create(&self, user: AdminUser) -> Result<AdminUser, AuthError>;

  /// Finds an admin by email, `AuthError::UserNotFound` when absent
  async fn find_by_email(&self, email: &Email) -> Result<AdminUser, AuthError>;

  /// Finds an admin by id, `AuthError::UserNotFound` when absent
  async fn find_by_id(&self, id: Uuid) -> Result<AdminUser, AuthError>;

  /// Returns one page of admins matching the query
  async fn find(&self, query: &PaginationQuery) -> Result<Vec<AdminUser>, AuthError>;

  /// Counts every admin matching the query's search and filters
  async fn count(&self, query: &PaginationQuery) -> Result<i64, AuthError>;
}

/// Service trait for password hashing operations
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AuthError>;

  /// Verifies a plain text password against a hashed password
  ///
  /// A mismatch is `Ok(false)`, never an error.
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AuthError>;
}

/// Issues and verifies signed bearer tokens
pub trait TokenService: Send + Sync {
  /// Issues a token whose subject is the given admin id
  fn issue(&self, admin_id: Uuid) -> Result<String, AuthError>;

  /// Verifies a token and returns its subject
  fn verify(&self, token: &str) -> Result<Uuid, AuthError>;
}
