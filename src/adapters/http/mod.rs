pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod validation;

// Re-export commonly used types
pub use dtos::ApiResponse;
pub use errors::{ApiError, AuthErrorKind};
pub use middleware::{AdminAuthMiddleware, AuthenticatedAdmin};
pub use routes::{
  SuperadminRouteDependencies, configure_extractors, configure_probe_routes,
  configure_superadmin_routes,
};
