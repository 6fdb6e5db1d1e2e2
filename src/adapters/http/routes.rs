use actix_web::web;
use std::sync::Arc;

use crate::application::auth::{
  AuthenticateAdminUseCase, GetCurrentAdminUseCase, ListAdminsUseCase, LoginAdminUseCase,
  RegisterAdminUseCase,
};
use crate::application::tenant::{
  CreateTenantUseCase, DeleteTenantUseCase, GetTenantUseCase, ListTenantsUseCase,
  UpdateTenantUseCase,
};

use super::errors::{json_error_handler, path_error_handler, query_error_handler};
use super::handlers::admin_users::{current_admin_handler, list_admins_handler};
use super::handlers::auth::{login_handler, register_handler};
use super::handlers::health::{health_handler, ready_handler};
use super::handlers::tenants::{
  create_tenant_handler, delete_tenant_handler, get_tenant_handler, list_tenants_handler,
  update_tenant_handler,
};
use super::middleware::AdminAuthMiddleware;

/// Use cases behind the `/superadmin` routes
#[derive(Clone)]
pub struct SuperadminRouteDependencies {
  pub authenticate: Arc<AuthenticateAdminUseCase>,
  pub login: Arc<LoginAdminUseCase>,
  pub register: Arc<RegisterAdminUseCase>,
  pub list_admins: Arc<ListAdminsUseCase>,
  pub current_admin: Arc<GetCurrentAdminUseCase>,
  pub create_tenant: Arc<CreateTenantUseCase>,
  pub list_tenants: Arc<ListTenantsUseCase>,
  pub get_tenant: Arc<GetTenantUseCase>,
  pub update_tenant: Arc<UpdateTenantUseCase>,
  pub delete_tenant: Arc<DeleteTenantUseCase>,
}

/// Extractor configuration routing JSON, path and query failures into the API envelope
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(
      web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler),
    )
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    .app_data(web::QueryConfig::default().error_handler(query_error_handler));
}

/// Configure superadmin routes
///
/// Mount under `/superadmin`.
///
/// # Routes
///
/// - POST /login - Exchange credentials for a bearer token
/// - POST /register - Create a superadmin
/// - GET /users - Paginated superadmin listing (bearer)
/// - GET /me - The authenticated superadmin (bearer)
/// - POST, GET /tenants - Create and list tenants (bearer)
/// - GET, PUT, PATCH, DELETE /tenants/{id} - Single tenant operations (bearer)
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// # use hris_admin::adapters::http::routes::{SuperadminRouteDependencies, configure_superadmin_routes};
///
/// # fn example(deps: SuperadminRouteDependencies) {
/// let app = App::new().service(
///   web::scope("/superadmin").configure(|cfg| configure_superadmin_routes(cfg, deps)),
/// );
/// # }
/// ```
pub fn configure_superadmin_routes(cfg: &mut web::ServiceConfig, deps: SuperadminRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.login))
    .app_data(web::Data::new(deps.register))
    .app_data(web::Data::new(deps.list_admins))
    .app_data(web::Data::new(deps.current_admin))
    .app_data(web::Data::new(deps.create_tenant))
    .app_data(web::Data::new(deps.list_tenants))
    .app_data(web::Data::new(deps.get_tenant))
    .app_data(web::Data::new(deps.update_tenant))
    .app_data(web::Data::new(deps.delete_tenant))
    // Public routes
    .route("/login", web::post().to(login_handler))
    .route("/register", web::post().to(register_handler))
    // Bearer-protected routes
    .service(
      web::resource("/users")
        .wrap(AdminAuthMiddleware::new(deps.authenticate.clone()))
        .route(web::get().to(list_admins_handler)),
    )
    .service(
      web::resource("/me")
        .wrap(AdminAuthMiddleware::new(deps.authenticate.clone()))
        .route(web::get().to(current_admin_handler)),
    )
    .service(
      web::scope("/tenants")
        .wrap(AdminAuthMiddleware::new(deps.authenticate))
        .service(
          web::resource("")
            .route(web::post().to(create_tenant_handler))
            .route(web::get().to(list_tenants_handler)),
        )
        .service(
          web::resource("/{id}")
            .route(web::get().to(get_tenant_handler))
            .route(web::put().to(update_tenant_handler))
            .route(web::patch().to(update_tenant_handler))
            .route(web::delete().to(delete_tenant_handler)),
        ),
    );
}

/// Liveness and readiness probes; `/ready` needs `web::Data<PgPool>` in app data
pub fn configure_probe_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_handler))
    .route("/ready", web::get().to(ready_handler));
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{App, http::StatusCode, test};
  use serde_json::{Value, json};

  use crate::application::test_support::{auth_service, tenant_service};

  fn dependencies() -> SuperadminRouteDependencies {
    let auth = auth_service();
    let tenants = tenant_service();

    SuperadminRouteDependencies {
      authenticate: Arc::new(AuthenticateAdminUseCase::new(auth.clone())),
      login: Arc::new(LoginAdminUseCase::new(auth.clone())),
      register: Arc::new(RegisterAdminUseCase::new(auth.clone())),
      list_admins: Arc::new(ListAdminsUseCase::new(auth.clone())),
      current_admin: Arc::new(GetCurrentAdminUseCase::new(auth)),
      create_tenant: Arc::new(CreateTenantUseCase::new(tenants.clone())),
      list_tenants: Arc::new(ListTenantsUseCase::new(tenants.clone())),
      get_tenant: Arc::new(GetTenantUseCase::new(tenants.clone())),
      update_tenant: Arc::new(UpdateTenantUseCase::new(tenants.clone())),
      delete_tenant: Arc::new(DeleteTenantUseCase::new(tenants)),
    }
  }

  #[actix_web::test]
  async fn test_full_superadmin_flow() {
    let deps = dependencies();
    let app = test::init_service(
      App::new()
        .configure(configure_extractors)
        .configure(configure_probe_routes)
        .service(
          web::scope("/superadmin").configure(|cfg| configure_superadmin_routes(cfg, deps)),
        ),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // Everything but login/register needs a token
    for uri in ["/superadmin/users", "/superadmin/me", "/superadmin/tenants"] {
      let req = test::TestRequest::get().uri(uri).to_request();
      assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED,
        "{}",
        uri
      );
    }

    let req = test::TestRequest::post()
      .uri("/superadmin/register")
      .set_json(json!({
        "name": "Root Admin",
        "email": "root@example.com",
        "password": "correct horse battery"
      }))
      .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
      .uri("/superadmin/login")
      .set_json(json!({"email": "root@example.com", "password": "correct horse battery"}))
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let bearer = format!("Bearer {}", body["data"]["token"].as_str().unwrap());

    let req = test::TestRequest::post()
      .uri("/superadmin/tenants")
      .insert_header(("Authorization", bearer.as_str()))
      .set_json(json!({"name": "Acme Corp", "company_email": "hr@acme.test"}))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;

    let req = test::TestRequest::get()
      .uri("/superadmin/tenants?limit=5")
      .insert_header(("Authorization", bearer.as_str()))
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"][0]["id"], created["data"]["id"]);
    assert_eq!(body["pagination"]["limit"], 5);

    let req = test::TestRequest::get()
      .uri("/superadmin/tenants/not-a-uuid")
      .insert_header(("Authorization", bearer.as_str()))
      .to_request();
    assert_eq!(
      test::call_service(&app, req).await.status(),
      StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::get()
      .uri("/superadmin/users")
      .insert_header(("Authorization", bearer.as_str()))
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["total_items"], 1);
  }
}
