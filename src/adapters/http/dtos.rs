use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::validation::{no_consecutive_spaces, required, tenant_status};
use crate::domain::auth::entities::AdminUser;
use crate::domain::pagination::PaginationMetadata;
use crate::domain::tenant::entities::Tenant;
use crate::domain::tenant::value_objects::TenantStatus;

// ============================================================================
// Requests
// ============================================================================

/// Request for superadmin login
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
  #[validate(custom(function = "required"), email)]
  pub email: String,

  #[validate(custom(function = "required"))]
  pub password: String,
}

impl LoginRequest {
  /// Trims the email; passwords are taken verbatim
  pub fn normalize(mut self) -> Self {
    self.email = self.email.trim().to_string();
    self
  }
}

/// Request for superadmin registration
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
  #[validate(custom(function = "required"), length(min = 2, max = 255))]
  pub name: String,

  #[validate(custom(function = "required"), email, length(max = 255))]
  pub email: String,

  #[validate(
    custom(function = "required"),
    length(min = 10, max = 128),
    custom(function = "no_consecutive_spaces")
  )]
  pub password: String,
}

impl RegisterRequest {
  pub fn normalize(mut self) -> Self {
    self.name = self.name.trim().to_string();
    self.email = self.email.trim().to_string();
    self
  }
}

/// Request for creating a tenant
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateTenantRequest {
  #[validate(
    custom(function = "required"),
    length(min = 3, max = 255),
    custom(function = "no_consecutive_spaces")
  )]
  pub name: String,

  #[validate(custom(function = "required"), email)]
  pub company_email: String,
}

impl CreateTenantRequest {
  pub fn normalize(mut self) -> Self {
    self.name = self.name.trim().to_string();
    self.company_email = self.company_email.trim().to_string();
    self
  }
}

/// Partial tenant update; absent and blank fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateTenantRequest {
  #[validate(
    length(min = 3, max = 255),
    custom(function = "no_consecutive_spaces")
  )]
  pub name: Option<String>,

  #[validate(email)]
  pub company_email: Option<String>,

  #[validate(custom(function = "tenant_status"))]
  pub status: Option<String>,
}

impl UpdateTenantRequest {
  pub fn normalize(self) -> Self {
    Self {
      name: trimmed(self.name),
      company_email: trimmed(self.company_email),
      status: trimmed(self.status),
    }
  }
}

fn trimmed(value: Option<String>) -> Option<String> {
  value
    .map(|v| v.trim().to_string())
    .filter(|v| !v.is_empty())
}

// ============================================================================
// Responses
// ============================================================================

/// Response after successful login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
  pub token: String,
}

/// Public view of a superadmin
#[derive(Debug, Clone, Serialize)]
pub struct AdminUserResponse {
  pub id: Uuid,
  pub name: String,
  pub email: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl From<AdminUser> for AdminUserResponse {
  fn from(user: AdminUser) -> Self {
    Self {
      id: user.id,
      name: user.name,
      email: user.email,
      created_at: user.created_at,
      updated_at: user.updated_at,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct TenantResponse {
  pub id: Uuid,
  pub name: String,
  pub slug: String,
  pub company_email: String,
  pub status: TenantStatus,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Tenant> for TenantResponse {
  fn from(tenant: Tenant) -> Self {
    Self {
      id: tenant.id,
      name: tenant.name,
      slug: tenant.slug,
      company_email: tenant.company_email,
      status: tenant.status,
      created_at: tenant.created_at,
      updated_at: tenant.updated_at,
      deleted_at: tenant.deleted_at,
    }
  }
}

/// Envelope shared by every API response
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T = serde_json::Value> {
  pub success: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data: Option<T>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pagination: Option<PaginationMetadata>,
}

impl<T: Serialize> ApiResponse<T> {
  pub fn ok(message: impl Into<String>, data: T) -> Self {
    Self {
      success: true,
      message: message.into(),
      data: Some(data),
      error: None,
      pagination: None,
    }
  }

  pub fn paginated(message: impl Into<String>, data: T, pagination: PaginationMetadata) -> Self {
    Self {
      pagination: Some(pagination),
      ..Self::ok(message, data)
    }
  }
}

impl ApiResponse {
  /// Success without a payload
  pub fn message(message: impl Into<String>) -> Self {
    Self {
      success: true,
      message: message.into(),
      data: None,
      error: None,
      pagination: None,
    }
  }

  pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
    Self {
      success: false,
      message: message.into(),
      data: None,
      error: Some(error.into()),
      pagination: None,
    }
  }
}
