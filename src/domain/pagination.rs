use serde::Serialize;
use std::collections::HashMap;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;
pub const DEFAULT_SORT_COLUMN: &str = "created_at";

/// Query parameters with a fixed meaning; everything else becomes a filter
const RESERVED_PARAMS: [&str; 4] = ["page", "limit", "sort", "search"];

/// Sort direction for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
  Asc,
  #[default]
  Desc,
}

impl SortDirection {
  /// Parses a direction, falling back to `Desc` for anything but `asc`/`desc`
  pub fn parse(value: &str) -> Self {
    match value.trim().to_ascii_lowercase().as_str() {
      "asc" => SortDirection::Asc,
      _ => SortDirection::Desc,
    }
  }

  pub fn as_sql(&self) -> &'static str {
    match self {
      SortDirection::Asc => "ASC",
      SortDirection::Desc => "DESC",
    }
  }
}

/// Normalized listing request shared by every paginated repository query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationQuery {
  pub page: u32,
  pub limit: u32,
  pub sort_by: String,
  pub sort_dir: SortDirection,
  pub search: String,
  pub filters: HashMap<String, String>,
}

impl Default for PaginationQuery {
  fn default() -> Self {
    Self {
      page: DEFAULT_PAGE,
      limit: DEFAULT_LIMIT,
      sort_by: DEFAULT_SORT_COLUMN.to_string(),
      sort_dir: SortDirection::Desc,
      search: String::new(),
      filters: HashMap::new(),
    }
  }
}

impl PaginationQuery {
  /// Builds a query from raw request parameters
  ///
  /// - `page` defaults to 1 when absent, unparsable or non-positive
  /// - `limit` defaults to 10 under the same conditions and is capped at 100
  /// - `sort` has the form `field:direction`; the direction falls back to `desc`
  /// - any other parameter is collected into `filters`
  pub fn from_params(params: &HashMap<String, String>) -> Self {
    let page = parse_positive(params.get("page")).unwrap_or(DEFAULT_PAGE);
    let limit = parse_positive(params.get("limit"))
      .unwrap_or(DEFAULT_LIMIT)
      .min(MAX_LIMIT);

    let (sort_by, sort_dir) = match params.get("sort").map(|s| s.trim()) {
      Some(sort) if !sort.is_empty() => parse_sort(sort),
      _ => (DEFAULT_SORT_COLUMN.to_string(), SortDirection::Desc),
    };

    let search = params
      .get("search")
      .map(|s| s.trim().to_string())
      .unwrap_or_default();

    let filters = params
      .iter()
      .filter(|(key, _)| !RESERVED_PARAMS.contains(&key.as_str()))
      .map(|(key, value)| (key.clone(), value.clone()))
      .collect();

    Self {
      page,
      limit,
      sort_by,
      sort_dir,
      search,
      filters,
    }
  }

  /// Number of rows to skip for the current page
  pub fn offset(&self) -> u64 {
    u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
  }

  /// Search term, if one was given
  pub fn search_term(&self) -> Option<&str> {
    let term = self.search.trim();
    (!term.is_empty()).then_some(term)
  }

  /// Value of a free-form filter, ignoring empty values
  pub fn filter(&self, key: &str) -> Option<&str> {
    self
      .filters
      .get(key)
      .map(|value| value.trim())
      .filter(|value| !value.is_empty())
  }

  /// Resolves the requested sort field against a whitelist of columns
  ///
  /// Unknown fields fall back to `created_at`, so the result is always safe to
  /// splice into an ORDER BY clause.
  pub fn sort_column(&self, allowed: &[&'static str]) -> &'static str {
    allowed
      .iter()
      .copied()
      .find(|column| *column == self.sort_by)
      .unwrap_or(DEFAULT_SORT_COLUMN)
  }

  /// Computes response metadata for a listing with `total_items` matches
  pub fn metadata(&self, total_items: i64) -> PaginationMetadata {
    let limit = i64::from(self.limit);
    let total_pages = if total_items > 0 && limit > 0 {
      (total_items + limit - 1) / limit
    } else {
      0
    };

    PaginationMetadata {
      total_items,
      total_pages,
      current_page: self.page,
      limit: self.limit,
    }
  }
}

/// Pagination details returned alongside a page of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMetadata {
  pub total_items: i64,
  pub total_pages: i64,
  pub current_page: u32,
  pub limit: u32,
}

fn parse_positive(value: Option<&String>) -> Option<u32> {
  value
    .and_then(|v| v.trim().parse::<i64>().ok())
    .filter(|v| *v > 0)
    .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
}

fn parse_sort(sort: &str) -> (String, SortDirection) {
  let mut parts = sort.split(':');
  let field = parts.next().map(to_snake_case).unwrap_or_default();
  let direction = parts
    .next()
    .map(SortDirection::parse)
    .unwrap_or_default();

  if field.is_empty() {
    (DEFAULT_SORT_COLUMN.to_string(), direction)
  } else {
    (field, direction)
  }
}

/// `createdAt` -> `created_at`; snake_case input passes through unchanged
fn to_snake_case(field: &str) -> String {
  let mut out = String::with_capacity(field.len() + 4);
  for c in field.trim().chars() {
    if c.is_ascii_uppercase() {
      if !out.is_empty() {
        out.push('_');
      }
      out.push(c.to_ascii_lowercase());
    } else {
      out.push(c);
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect()
  }

  #[test]
  fn test_defaults_when_params_missing() {
    let query = PaginationQuery::from_params(&HashMap::new());

    assert_eq!(query.page, 1);
    assert_eq!(query.limit, 10);
    assert_eq!(query.sort_by, "created_at");
    assert_eq!(query.sort_dir, SortDirection::Desc);
    assert!(query.search_term().is_none());
    assert!(query.filters.is_empty());
  }

  #[test]
  fn test_non_positive_and_garbage_values_fall_back() {
    let query = PaginationQuery::from_params(&params(&[("page", "0"), ("limit", "-5")]));
    assert_eq!(query.page, 1);
    assert_eq!(query.limit, 10);

    let query = PaginationQuery::from_params(&params(&[("page", "abc"), ("limit", "x")]));
    assert_eq!(query.page, 1);
    assert_eq!(query.limit, 10);
  }

  #[test]
  fn test_limit_is_capped() {
    let query = PaginationQuery::from_params(&params(&[("limit", "500")]));
    assert_eq!(query.limit, 100);
  }

  #[test]
  fn test_sort_parsing() {
    let query = PaginationQuery::from_params(&params(&[("sort", "name:asc")]));
    assert_eq!(query.sort_by, "name");
    assert_eq!(query.sort_dir, SortDirection::Asc);

    let query = PaginationQuery::from_params(&params(&[("sort", "name:sideways")]));
    assert_eq!(query.sort_by, "name");
    assert_eq!(query.sort_dir, SortDirection::Desc);

    let query = PaginationQuery::from_params(&params(&[("sort", "createdAt:ASC")]));
    assert_eq!(query.sort_by, "created_at");
    assert_eq!(query.sort_dir, SortDirection::Asc);

    let query = PaginationQuery::from_params(&params(&[("sort", ":asc")]));
    assert_eq!(query.sort_by, "created_at");
  }

  #[test]
  fn test_sort_column_whitelist() {
    let allowed = ["name", "created_at"];

    let query = PaginationQuery::from_params(&params(&[("sort", "name:asc")]));
    assert_eq!(query.sort_column(&allowed), "name");

    let query = PaginationQuery::from_params(&params(&[("sort", "name; DROP TABLE x")]));
    assert_eq!(query.sort_column(&allowed), "created_at");
  }

  #[test]
  fn test_unreserved_params_become_filters() {
    let query = PaginationQuery::from_params(&params(&[
      ("page", "2"),
      ("search", "  acme "),
      ("status", "active"),
      ("empty", " "),
    ]));

    assert_eq!(query.search_term(), Some("acme"));
    assert_eq!(query.filter("status"), Some("active"));
    assert_eq!(query.filter("empty"), None);
    assert!(!query.filters.contains_key("page"));
    assert!(!query.filters.contains_key("search"));
  }

  #[test]
  fn test_offset() {
    let mut query = PaginationQuery::default();
    assert_eq!(query.offset(), 0);

    query.page = 3;
    query.limit = 25;
    assert_eq!(query.offset(), 50);
  }

  #[test]
  fn test_total_pages() {
    let query = PaginationQuery::default();
    let cases = [(0, 0), (1, 1), (10, 1), (11, 2), (100, 10)];

    for (total, expected) in cases {
      let metadata = query.metadata(total);
      assert_eq!(metadata.total_pages, expected, "total = {}", total);
      assert_eq!(metadata.total_items, total);
      assert_eq!(metadata.current_page, 1);
      assert_eq!(metadata.limit, 10);
    }
  }
}
