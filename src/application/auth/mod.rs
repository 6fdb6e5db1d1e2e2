//! Superadmin authentication use cases

mod authenticate_admin;
mod get_current_admin;
mod list_admins;
mod login_admin;
mod register_admin;

pub use authenticate_admin::AuthenticateAdminUseCase;
pub use get_current_admin::GetCurrentAdminUseCase;
pub use list_admins::{ListAdminsResponse, ListAdminsUseCase};
pub use login_admin::{LoginAdminCommand, LoginAdminResponse, LoginAdminUseCase};
pub use register_admin::{RegisterAdminCommand, RegisterAdminUseCase};
