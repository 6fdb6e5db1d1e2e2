use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::TenantError;

/// Lifecycle status of a tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenantStatus {
  #[default]
  SetupPending,
  Active,
  Inactive,
  Suspended,
}

impl TenantStatus {
  pub const ALL: [TenantStatus; 4] = [
    TenantStatus::SetupPending,
    TenantStatus::Active,
    TenantStatus::Inactive,
    TenantStatus::Suspended,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      TenantStatus::SetupPending => "setup_pending",
      TenantStatus::Active => "active",
      TenantStatus::Inactive => "inactive",
      TenantStatus::Suspended => "suspended",
    }
  }
}

impl FromStr for TenantStatus {
  type Err = TenantError;

  /// Values are matched exactly; `ACTIVE` is not a status
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    TenantStatus::ALL
      .into_iter()
      .find(|status| status.as_str() == s)
      .ok_or_else(|| TenantError::InvalidStatus(s.to_string()))
  }
}

impl fmt::Display for TenantStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// URL-safe identifier derived from a tenant name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
  /// Derives a slug from a display name
  ///
  /// The name is transliterated to ASCII first, so `Café` becomes `cafe`.
  /// ASCII letters and digits are lowercased and kept, every run of anything
  /// else becomes a single `-`, and separators at either end are dropped. A
  /// name without letters or digits has no slug.
  pub fn from_name(name: &str) -> Result<Self, TenantError> {
    let ascii = deunicode::deunicode(name);

    let slug = ascii
      .split(|c: char| !c.is_ascii_alphanumeric())
      .filter(|part| !part.is_empty())
      .map(str::to_ascii_lowercase)
      .collect::<Vec<_>>()
      .join("-");

    if slug.is_empty() {
      return Err(TenantError::InvalidName);
    }

    Ok(Self(slug))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Slug {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
