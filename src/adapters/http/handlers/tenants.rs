use actix_web::{HttpResponse, web};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::adapters::http::{
  dtos::{ApiResponse, CreateTenantRequest, TenantResponse, UpdateTenantRequest},
  errors::ApiError,
};
use crate::application::tenant::{
  CreateTenantCommand, CreateTenantUseCase, DeleteTenantUseCase, GetTenantUseCase,
  ListTenantsUseCase, UpdateTenantCommand, UpdateTenantUseCase,
};
use crate::domain::pagination::PaginationQuery;

/// Handler for creating a tenant
///
/// POST /superadmin/tenants
/// Response: the new tenant (status `setup_pending`) with status 201
pub async fn create_tenant_handler(
  request: web::Json<CreateTenantRequest>,
  use_case: web::Data<Arc<CreateTenantUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner().normalize();
  request.validate()?;

  let tenant = use_case
    .execute(CreateTenantCommand {
      name: request.name,
      company_email: request.company_email,
    })
    .await?;

  Ok(HttpResponse::Created().json(ApiResponse::ok(
    "Tenant created",
    TenantResponse::from(tenant),
  )))
}

/// Handler for listing tenants
///
/// GET /superadmin/tenants?page=&limit=&sort=&search=&status=
pub async fn list_tenants_handler(
  params: web::Query<HashMap<String, String>>,
  use_case: web::Data<Arc<ListTenantsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let query = PaginationQuery::from_params(&params);
  let response = use_case.execute(query).await?;

  let tenants: Vec<TenantResponse> = response.tenants.into_iter().map(Into::into).collect();

  Ok(HttpResponse::Ok().json(ApiResponse::paginated(
    "Tenants retrieved",
    tenants,
    response.pagination,
  )))
}

/// GET /superadmin/tenants/{id}
pub async fn get_tenant_handler(
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<GetTenantUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let tenant = use_case.execute(path.into_inner()).await?;

  Ok(HttpResponse::Ok().json(ApiResponse::ok(
    "Tenant retrieved",
    TenantResponse::from(tenant),
  )))
}

/// Handler for partial tenant updates, mounted on both PUT and PATCH
///
/// PUT|PATCH /superadmin/tenants/{id}
pub async fn update_tenant_handler(
  path: web::Path<Uuid>,
  request: web::Json<UpdateTenantRequest>,
  use_case: web::Data<Arc<UpdateTenantUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner().normalize();
  request.validate()?;

  let tenant = use_case
    .execute(UpdateTenantCommand {
      id: path.into_inner(),
      name: request.name,
      company_email: request.company_email,
      status: request.status,
    })
    .await?;

  Ok(HttpResponse::Ok().json(ApiResponse::ok(
    "Tenant updated",
    TenantResponse::from(tenant),
  )))
}

/// Soft deletes a tenant
///
/// DELETE /superadmin/tenants/{id}
pub async fn delete_tenant_handler(
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<DeleteTenantUseCase>>,
) -> Result<HttpResponse, ApiError> {
  use_case.execute(path.into_inner()).await?;

  Ok(HttpResponse::Ok().json(ApiResponse::message("Tenant deleted")))
}
