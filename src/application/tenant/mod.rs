//! Tenant management use cases

mod create_tenant;
mod delete_tenant;
mod get_tenant;
mod list_tenants;
mod update_tenant;

pub use create_tenant::{CreateTenantCommand, CreateTenantUseCase};
pub use delete_tenant::DeleteTenantUseCase;
pub use get_tenant::GetTenantUseCase;
pub use list_tenants::{ListTenantsResponse, ListTenantsUseCase};
pub use update_tenant::{UpdateTenantCommand, UpdateTenantUseCase};
