//! In-process stores with the same semantics as the PostgreSQL repositories
//!
//! Test doubles only. Compiled for this crate's unit tests, and for other
//! crates with the `test-util` feature.

mod admin_user_repository;
mod tenant_repository;

pub use admin_user_repository::InMemoryAdminUserRepository;
pub use tenant_repository::InMemoryTenantRepository;

use std::cmp::Ordering;

use crate::domain::pagination::{PaginationQuery, SortDirection};

/// Case-insensitive substring match, the in-memory counterpart of `ILIKE '%term%'`
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Sorts with `id` as tie-breaker, then cuts out the requested page
fn sort_and_page<T, K>(mut items: Vec<T>, query: &PaginationQuery, compare: K) -> Vec<T>
where
  K: Fn(&T, &T) -> Ordering,
{
  items.sort_by(|a, b| match query.sort_dir {
    SortDirection::Asc => compare(a, b),
    SortDirection::Desc => compare(b, a),
  });

  let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
  items
    .into_iter()
    .skip(offset)
    .take(query.limit as usize)
    .collect()
}
