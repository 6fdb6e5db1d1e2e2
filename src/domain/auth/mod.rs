pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::AdminUser;
pub use errors::{AuthError, HashError, RepositoryError, TokenError};
pub use value_objects::{Email, Password, PasswordHash, ValueObjectError};
