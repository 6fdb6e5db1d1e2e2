use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{AdminUserResponse, ApiResponse, LoginRequest, LoginResponse, RegisterRequest},
  errors::ApiError,
};
use crate::application::auth::{
  LoginAdminCommand, LoginAdminUseCase, RegisterAdminCommand, RegisterAdminUseCase,
};

/// Handler for superadmin registration
///
/// POST /superadmin/register
/// Body: RegisterRequest (JSON)
/// Response: the created admin (without password) with status 201
pub async fn register_handler(
  request: web::Json<RegisterRequest>,
  use_case: web::Data<Arc<RegisterAdminUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner().normalize();
  request.validate()?;

  let command = RegisterAdminCommand {
    name: request.name,
    email: request.email,
    password: request.password,
  };

  let admin = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(ApiResponse::ok(
    "Superadmin registered",
    AdminUserResponse::from(admin),
  )))
}

/// Handler for superadmin login
///
/// POST /superadmin/login
/// Body: LoginRequest (JSON)
/// Response: `{token}` with status 200
pub async fn login_handler(
  request: web::Json<LoginRequest>,
  use_case: web::Data<Arc<LoginAdminUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let request = request.into_inner().normalize();
  request.validate()?;

  let command = LoginAdminCommand {
    email: request.email,
    password: request.password,
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(ApiResponse::ok(
    "Login successful",
    LoginResponse {
      token: response.token,
    },
  )))
}
