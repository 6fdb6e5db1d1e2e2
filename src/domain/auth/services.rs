use std::sync::Arc;
use tokio::sync::OnceCell;
use uuid::Uuid;

use super::entities::AdminUser;
use super::errors::{AuthError, RepositoryError};
use super::ports::{AdminUserRepository, PasswordHasher, TokenService};
use super::value_objects::{Email, Password, PasswordHash};
use crate::domain::pagination::{PaginationMetadata, PaginationQuery};

/// Plaintext behind the hash verified when a login email is unknown
const DUMMY_PASSWORD: &str = "hris-admin-unknown-account";

/// Superadmin authentication and account service
pub struct AuthService {
  user_repo: Arc<dyn AdminUserRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
  token_service: Arc<dyn TokenService>,
  dummy_hash: OnceCell<PasswordHash>,
}

impl AuthService {
  /// Creates a new instance of AuthService
  pub fn new(
    user_repo: Arc<dyn AdminUserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_service: Arc<dyn TokenService>,
  ) -> Self {
    Self {
      user_repo,
      password_hasher,
      token_service,
      dummy_hash: OnceCell::new(),
    }
  }

  /// Hash produced with the configured cost, built on first use
  async fn dummy_hash(&self) -> Result<&PasswordHash, AuthError> {
    self
      .dummy_hash
      .get_or_try_init(|| async {
        let password = Password::new(DUMMY_PASSWORD)?;
        self.password_hasher.hash(&password).await
      })
      .await
  }

  /// Spends one verify on an unknown email so its timing matches a wrong password
  async fn verify_against_dummy(&self, password: &Password) {
    let verified = match self.dummy_hash().await {
      Ok(hash) => self.password_hasher.verify(password, hash).await,
      Err(e) => Err(e),
    };

    if let Err(e) = verified {
      tracing::error!(error = %e, "Dummy password verification failed");
    }
  }

  /// Registers a new superadmin
  ///
  /// # Returns
  /// The stored admin with the password hash cleared
  ///
  /// # Errors
  /// Returns `AuthError::EmailAlreadyExists` if a non-deleted admin already
  /// uses the email, including when a concurrent insert wins the race.
  pub async fn register(
    &self,
    name: String,
    email: Email,
    password: Password,
  ) -> Result<AdminUser, AuthError> {
    match self.user_repo.find_by_email(&email).await {
      Ok(_) => return Err(AuthError::EmailAlreadyExists),
      Err(AuthError::UserNotFound) => {}
      Err(e) => return Err(e),
    }

    let password_hash = self.password_hasher.hash(&password).await?;
    let user = AdminUser::new(name, email.into_inner(), password_hash.into_inner());

    let created = match self.user_repo.create(user).await {
      Ok(user) => user,
      Err(AuthError::Repository(RepositoryError::DuplicateKey(_))) => {
        return Err(AuthError::EmailAlreadyExists);
      }
      Err(e) => return Err(e),
    };

    tracing::info!(admin_id = %created.id, "Superadmin registered");

    Ok(created.without_password())
  }

  /// Verifies credentials and issues a bearer token
  ///
  /// Unknown email, wrong password and an unreadable stored hash all yield
  /// `AuthError::InvalidCredentials`. An unknown email still pays for one
  /// password verification.
  pub async fn login(
    &self,
    email: Email,
    password: Password,
  ) -> Result<(AdminUser, String), AuthError> {
    let user = match self.user_repo.find_by_email(&email).await {
      Ok(user) => user,
      Err(AuthError::UserNotFound) => {
        self.verify_against_dummy(&password).await;
        tracing::warn!("Login rejected: unknown email");
        return Err(AuthError::InvalidCredentials);
      }
      Err(e) => {
        tracing::error!(error = %e, "Login lookup failed");
        return Err(AuthError::InvalidCredentials);
      }
    };

    let Ok(stored_hash) = PasswordHash::from_hash(&user.password_hash) else {
      tracing::error!(admin_id = %user.id, "Stored password hash is unreadable");
      return Err(AuthError::InvalidCredentials);
    };

    match self.password_hasher.verify(&password, &stored_hash).await {
      Ok(true) => {}
      Ok(false) => {
        tracing::warn!(admin_id = %user.id, "Login rejected: wrong password");
        return Err(AuthError::InvalidCredentials);
      }
      Err(e) => {
        tracing::error!(admin_id = %user.id, error = %e, "Password verification failed");
        return Err(AuthError::InvalidCredentials);
      }
    }

    let token = self.token_service.issue(user.id)?;

    tracing::info!(admin_id = %user.id, "Superadmin logged in");

    Ok((user.without_password(), token))
  }

  /// Lists admins one page at a time
  pub async fn list_admins(
    &self,
    query: &PaginationQuery,
  ) -> Result<(Vec<AdminUser>, PaginationMetadata), AuthError> {
    let users = self.user_repo.find(query).await?;
    let total = self.user_repo.count(query).await?;

    let users = users.into_iter().map(AdminUser::without_password).collect();

    Ok((users, query.metadata(total)))
  }

  /// Fetches a single admin by id
  pub async fn get_admin(&self, id: Uuid) -> Result<AdminUser, AuthError> {
    let user = self.user_repo.find_by_id(id).await?;
    Ok(user.without_password())
  }

  /// Verifies a bearer token and returns the admin id it was issued for
  pub fn authenticate(&self, token: &str) -> Result<Uuid, AuthError> {
    self.token_service.verify(token)
  }
}
