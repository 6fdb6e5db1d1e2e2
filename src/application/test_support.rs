use std::sync::Arc;

use crate::domain::auth::services::AuthService;
use crate::domain::tenant::services::TenantService;
use crate::infrastructure::persistence::memory::{
  InMemoryAdminUserRepository, InMemoryTenantRepository,
};
use crate::infrastructure::security::{Argon2PasswordHasher, JwtTokenService};

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

/// Auth service over an in-memory store with cheap hashing parameters
pub fn auth_service() -> Arc<AuthService> {
  Arc::new(AuthService::new(
    Arc::new(InMemoryAdminUserRepository::new()),
    Arc::new(Argon2PasswordHasher::new(1024, 1, 1).unwrap()),
    Arc::new(JwtTokenService::new(TEST_JWT_SECRET, "hris", 24).unwrap()),
  ))
}

pub fn tenant_service() -> Arc<TenantService> {
  Arc::new(TenantService::new(Arc::new(InMemoryTenantRepository::new())))
}
