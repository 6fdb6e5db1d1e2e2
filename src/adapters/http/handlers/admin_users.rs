use actix_web::{HttpResponse, web};
use std::collections::HashMap;
use std::sync::Arc;

use crate::adapters::http::{
  dtos::{AdminUserResponse, ApiResponse},
  errors::ApiError,
  middleware::AuthenticatedAdmin,
};
use crate::application::auth::{GetCurrentAdminUseCase, ListAdminsUseCase};
use crate::domain::pagination::PaginationQuery;

/// Handler for listing superadmins
///
/// GET /superadmin/users?page=&limit=&sort=field:dir&search=
pub async fn list_admins_handler(
  params: web::Query<HashMap<String, String>>,
  use_case: web::Data<Arc<ListAdminsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let query = PaginationQuery::from_params(&params);
  let response = use_case.execute(query).await?;

  let admins: Vec<AdminUserResponse> = response.admins.into_iter().map(Into::into).collect();

  Ok(HttpResponse::Ok().json(ApiResponse::paginated(
    "Superadmins retrieved",
    admins,
    response.pagination,
  )))
}

/// Handler returning the admin the bearer token was issued for
///
/// GET /superadmin/me
pub async fn current_admin_handler(
  admin: AuthenticatedAdmin,
  use_case: web::Data<Arc<GetCurrentAdminUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let current = use_case.execute(admin.0).await?;

  Ok(HttpResponse::Ok().json(ApiResponse::ok(
    "Current superadmin",
    AdminUserResponse::from(current),
  )))
}
