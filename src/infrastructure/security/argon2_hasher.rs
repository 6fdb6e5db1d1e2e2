use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{
    PasswordHash as Argon2PasswordHash, PasswordHasher as Argon2PasswordHasherTrait,
    PasswordVerifier,
  },
};
use async_trait::async_trait;

use crate::domain::auth::errors::{AuthError, HashError};
use crate::domain::auth::ports::PasswordHasher;
use crate::domain::auth::value_objects::{Password, PasswordHash};

/// Argon2id password hasher
///
/// Cost parameters come from `security.argon2_*` in the configuration. Hashing
/// runs on the blocking thread pool so it never stalls the request workers.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
  argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
  /// Creates a hasher with the given memory cost (KiB), iterations and lanes
  pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, AuthError> {
    let params = Params::new(memory_kib, iterations, parallelism, Some(32)).map_err(|e| {
      AuthError::Hash(HashError::HashingFailed(format!(
        "Failed to create Argon2 params: {}",
        e
      )))
    })?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    Ok(Self { argon2 })
  }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AuthError> {
    let argon2 = self.argon2.clone();
    let password = password.clone();

    let hash = tokio::task::spawn_blocking(move || {
      let salt = SaltString::generate(&mut rand::rngs::OsRng);
      argon2
        .hash_password(password.as_str().as_bytes(), &salt)
        .map(|hash| hash.to_string())
    })
    .await
    .map_err(|e| AuthError::Hash(HashError::HashingFailed(e.to_string())))?
    .map_err(|e| {
      AuthError::Hash(HashError::HashingFailed(format!(
        "Failed to hash password: {}",
        e
      )))
    })?;

    PasswordHash::from_hash(hash).map_err(|_| AuthError::Hash(HashError::InvalidFormat))
  }

  /// Verifies in constant time; a mismatch is `Ok(false)`
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AuthError> {
    let argon2 = self.argon2.clone();
    let password = password.clone();
    let stored = hashed_password.as_str().to_string();

    tokio::task::spawn_blocking(move || {
      let parsed_hash =
        Argon2PasswordHash::new(&stored).map_err(|_| AuthError::Hash(HashError::InvalidFormat))?;

      match argon2.verify_password(password.as_str().as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Hash(HashError::VerificationFailed(format!(
          "Password verification failed: {}",
          e
        )))),
      }
    })
    .await
    .map_err(|e| AuthError::Hash(HashError::VerificationFailed(e.to_string())))?
  }
}
