use thiserror::Error;

use crate::domain::auth::errors::RepositoryError;
use crate::domain::auth::value_objects::ValueObjectError;

/// Tenant management error type
#[derive(Debug, Error)]
pub enum TenantError {
  #[error("Tenant not found")]
  NotFound,

  #[error("Tenant slug '{0}' is already in use")]
  SlugConflict(String),

  #[error("Invalid tenant status: {0}")]
  InvalidStatus(String),

  #[error("Tenant name must contain at least one letter or digit")]
  InvalidName,

  #[error("Value object error: {0}")]
  ValueObject(#[from] ValueObjectError),

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),
}

impl From<sqlx::Error> for TenantError {
  fn from(error: sqlx::Error) -> Self {
    match RepositoryError::from(error) {
      RepositoryError::NotFound => TenantError::NotFound,
      other => TenantError::Repository(other),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_row_not_found_becomes_tenant_not_found() {
    assert!(matches!(
      TenantError::from(sqlx::Error::RowNotFound),
      TenantError::NotFound
    ));
  }

  #[test]
  fn test_pool_errors_stay_repository_errors() {
    assert!(matches!(
      TenantError::from(sqlx::Error::PoolClosed),
      TenantError::Repository(RepositoryError::ConnectionFailed(_))
    ));
  }
}
