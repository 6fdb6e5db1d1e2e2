mod admin_user_repository;
mod tenant_repository;

pub use admin_user_repository::PostgresAdminUserRepository;
pub use tenant_repository::PostgresTenantRepository;

use std::future::Future;
use std::time::Duration;

use crate::domain::auth::errors::RepositoryError;

/// Runs a store call under a fixed deadline
pub(crate) async fn bounded<T, E, F>(timeout: Duration, operation: F) -> Result<T, E>
where
  F: Future<Output = Result<T, E>>,
  E: From<RepositoryError>,
{
  match tokio::time::timeout(timeout, operation).await {
    Ok(result) => result,
    Err(_) => {
      tracing::error!(timeout_secs = timeout.as_secs(), "Database call timed out");
      Err(RepositoryError::Timeout(timeout.as_secs()).into())
    }
  }
}

/// Builds an `ILIKE` substring pattern, escaping the user's wildcards
pub(crate) fn contains_pattern(term: &str) -> String {
  let mut pattern = String::with_capacity(term.len() + 2);
  pattern.push('%');
  for c in term.chars() {
    if matches!(c, '%' | '_' | '\\') {
      pattern.push('\\');
    }
    pattern.push(c);
  }
  pattern.push('%');
  pattern
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_contains_pattern_escapes_wildcards() {
    assert_eq!(contains_pattern("acme"), "%acme%");
    assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
    assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
  }

  #[tokio::test]
  async fn test_bounded_times_out() {
    let result: Result<(), RepositoryError> = bounded(Duration::from_millis(10), async {
      tokio::time::sleep(Duration::from_secs(5)).await;
      Ok(())
    })
    .await;

    assert!(matches!(result, Err(RepositoryError::Timeout(_))));
  }

  #[tokio::test]
  async fn test_bounded_passes_through() {
    let result: Result<u8, RepositoryError> = bounded(Duration::from_secs(1), async { Ok(7) }).await;
    assert_eq!(result.unwrap(), 7);
  }
}
