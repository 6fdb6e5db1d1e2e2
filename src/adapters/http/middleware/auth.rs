use actix_web::{
  Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
  body::EitherBody,
  dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
  sync::Arc,
};
use uuid::Uuid;

use crate::{
  adapters::http::errors::{ApiError, AuthErrorKind},
  application::auth::AuthenticateAdminUseCase,
};

/// Verified admin id attached to the request by `AdminAuthMiddleware`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedAdmin(pub Uuid);

/// Bearer-token middleware guarding the superadmin routes
///
/// This middleware:
/// 1. Requires an `Authorization: Bearer <token>` header
/// 2. Verifies the token with AuthenticateAdminUseCase
/// 3. Attaches `AuthenticatedAdmin` to the request extensions
/// 4. Answers 401 and stops the request otherwise
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// use std::sync::Arc;
/// # use hris_admin::application::auth::AuthenticateAdminUseCase;
/// # use hris_admin::adapters::http::middleware::AdminAuthMiddleware;
///
/// # fn example(authenticate: Arc<AuthenticateAdminUseCase>) {
/// let app = App::new().service(
///   web::scope("/superadmin/users")
///     .wrap(AdminAuthMiddleware::new(authenticate))
///     .route("", web::get().to(|| async { "admins" })),
/// );
/// # }
/// ```
pub struct AdminAuthMiddleware {
  authenticate: Arc<AuthenticateAdminUseCase>,
}

impl AdminAuthMiddleware {
  pub fn new(authenticate: Arc<AuthenticateAdminUseCase>) -> Self {
    Self { authenticate }
  }
}

impl<S, B> Transform<S, ServiceRequest> for AdminAuthMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Transform = AdminAuthMiddlewareService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(AdminAuthMiddlewareService {
      service: Rc::new(service),
      authenticate: self.authenticate.clone(),
    }))
  }
}

pub struct AdminAuthMiddlewareService<S> {
  service: Rc<S>,
  authenticate: Arc<AuthenticateAdminUseCase>,
}

impl<S, B> Service<ServiceRequest> for AdminAuthMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);
    let authenticate = self.authenticate.clone();

    Box::pin(async move {
      let verified = extract_bearer_token(&req).and_then(|token| {
        authenticate.execute(token).map_err(|e| {
          tracing::warn!(path = %req.path(), error = %e, "Rejected bearer token");
          ApiError::from(e)
        })
      });

      let admin_id = match verified {
        Ok(admin_id) => admin_id,
        Err(e) => {
          let (request, _) = req.into_parts();
          let response = e.error_response().map_into_right_body();
          return Ok(ServiceResponse::new(request, response));
        }
      };

      req.extensions_mut().insert(AuthenticatedAdmin(admin_id));

      let res = service.call(req).await?;
      Ok(res.map_into_left_body())
    })
  }
}

/// Token from a header of exactly the form `Bearer <token>`
fn extract_bearer_token(req: &ServiceRequest) -> Result<&str, ApiError> {
  let header = req
    .headers()
    .get("Authorization")
    .ok_or(ApiError::Auth(AuthErrorKind::MissingToken))?;

  let malformed = || ApiError::Auth(AuthErrorKind::MalformedHeader);
  let value = header.to_str().map_err(|_| malformed())?;

  match value.split_once(' ') {
    Some(("Bearer", token)) if !token.is_empty() && !token.contains(char::is_whitespace) => {
      Ok(token)
    }
    _ => Err(malformed()),
  }
}

impl FromRequest for AuthenticatedAdmin {
  type Error = ApiError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let admin = req.extensions().get::<AuthenticatedAdmin>().copied();

    if admin.is_none() {
      tracing::warn!(
        "AuthenticatedAdmin missing from request extensions for path {}",
        req.path()
      );
    }

    ready(admin.ok_or(ApiError::Auth(AuthErrorKind::MissingToken)))
  }
}
