use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hris_admin::{
  adapters::http::{
    SuperadminRouteDependencies, configure_extractors, configure_probe_routes,
    configure_superadmin_routes,
  },
  application::auth::{
    AuthenticateAdminUseCase, GetCurrentAdminUseCase, ListAdminsUseCase, LoginAdminUseCase,
    RegisterAdminUseCase,
  },
  application::tenant::{
    CreateTenantUseCase, DeleteTenantUseCase, GetTenantUseCase, ListTenantsUseCase,
    UpdateTenantUseCase,
  },
  domain::auth::services::AuthService,
  domain::tenant::services::TenantService,
  infrastructure::{
    config::Config,
    persistence::postgres::{PostgresAdminUserRepository, PostgresTenantRepository},
    security::{Argon2PasswordHasher, JwtTokenService},
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hris_admin=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting HRIS admin backend");

  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;
  tracing::info!("Configuration loaded successfully");

  // An empty secret is fatal
  let token_service = JwtTokenService::new(
    &config.security.jwt_secret,
    &config.security.jwt_issuer,
    config.security.token_ttl_hours,
  )
  .map_err(|e| {
    tracing::error!("Invalid token configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;

  let password_hasher = Argon2PasswordHasher::new(
    config.security.argon2_memory_kib,
    config.security.argon2_iterations,
    config.security.argon2_parallelism,
  )
  .map_err(|e| {
    tracing::error!("Invalid password hashing configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;

  tracing::info!(
    max_connections = config.database.max_connections,
    min_connections = config.database.min_connections,
    "Connecting to database"
  );

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .min_connections(config.database.min_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .idle_timeout(Duration::from_secs(config.database.idle_timeout_seconds))
      .max_lifetime(Duration::from_secs(config.database.max_lifetime_seconds))
      .test_before_acquire(true)
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "Could not connect to database. Is PostgreSQL running?",
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to run database migrations: {}", e);
      std::io::Error::other(format!("Migration error: {}", e))
    })?;
  tracing::info!("Database migrations completed");

  // Repositories
  let query_timeout = config.database.query_timeout();
  let admin_user_repo = Arc::new(PostgresAdminUserRepository::new(
    db_pool.clone(),
    query_timeout,
  ));
  let tenant_repo = Arc::new(PostgresTenantRepository::new(
    db_pool.clone(),
    query_timeout,
  ));

  // Services
  let auth_service = Arc::new(AuthService::new(
    admin_user_repo,
    Arc::new(password_hasher),
    Arc::new(token_service),
  ));
  let tenant_service = Arc::new(TenantService::new(tenant_repo));

  // Use cases
  let deps = SuperadminRouteDependencies {
    authenticate: Arc::new(AuthenticateAdminUseCase::new(auth_service.clone())),
    login: Arc::new(LoginAdminUseCase::new(auth_service.clone())),
    register: Arc::new(RegisterAdminUseCase::new(auth_service.clone())),
    list_admins: Arc::new(ListAdminsUseCase::new(auth_service.clone())),
    current_admin: Arc::new(GetCurrentAdminUseCase::new(auth_service)),
    create_tenant: Arc::new(CreateTenantUseCase::new(tenant_service.clone())),
    list_tenants: Arc::new(ListTenantsUseCase::new(tenant_service.clone())),
    get_tenant: Arc::new(GetTenantUseCase::new(tenant_service.clone())),
    update_tenant: Arc::new(UpdateTenantUseCase::new(tenant_service.clone())),
    delete_tenant: Arc::new(DeleteTenantUseCase::new(tenant_service)),
  };

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  let pool_data = web::Data::new(db_pool.clone());

  HttpServer::new(move || {
    let deps = deps.clone();

    App::new()
      .wrap(Logger::default())
      .app_data(pool_data.clone())
      .configure(configure_extractors)
      .configure(configure_probe_routes)
      .service(web::scope("/superadmin").configure(|cfg| configure_superadmin_routes(cfg, deps)))
  })
  .shutdown_timeout(config.server.shutdown_timeout_seconds)
  .bind((server_host.as_str(), server_port))?
  .run()
  .await?;

  tracing::info!("HTTP server stopped, closing database pool");
  db_pool.close().await;

  Ok(())
}
