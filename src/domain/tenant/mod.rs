pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::Tenant;
pub use errors::TenantError;
pub use value_objects::{Slug, TenantStatus};
