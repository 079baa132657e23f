//! Back-office authentication.
//!
//! The back-office uses one shared store password, provisioned as an
//! argon2 hash on the store config row via the CLI. There are no
//! per-operator accounts.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;
use thiserror::Error;

use crate::db::{RepositoryError, SettingsRepository};

/// Minimum admin password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Errors that can occur during back-office authentication.
#[derive(Debug, Error)]
pub enum AdminAuthError {
    /// Wrong password.
    #[error("invalid password")]
    InvalidPassword,

    /// No password has been provisioned yet.
    #[error("no admin password set")]
    NoPasswordSet,

    /// New password too weak.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}

/// Back-office authentication service.
pub struct AdminAuthService<'a> {
    settings: SettingsRepository<'a>,
}

impl<'a> AdminAuthService<'a> {
    /// Create a new back-office authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            settings: SettingsRepository::new(pool),
        }
    }

    /// Verify the store password.
    ///
    /// # Errors
    ///
    /// Returns `AdminAuthError::NoPasswordSet` if no credential has been
    /// provisioned and `AdminAuthError::InvalidPassword` on mismatch.
    pub async fn login(&self, password: &str) -> Result<(), AdminAuthError> {
        let hash = self
            .settings
            .admin_password_hash()
            .await?
            .ok_or(AdminAuthError::NoPasswordSet)?;

        verify_password(password, &hash)
    }

    /// Change the store password; requires the current one.
    ///
    /// # Errors
    ///
    /// Returns `AdminAuthError::InvalidPassword` if the current password
    /// is wrong, `AdminAuthError::WeakPassword` if the new one is too
    /// short.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AdminAuthError> {
        self.login(current_password).await?;

        if new_password.len() < MIN_PASSWORD_LENGTH {
            return Err(AdminAuthError::WeakPassword(format!(
                "password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        let hash = hash_password(new_password)?;
        self.settings.set_admin_password_hash(&hash).await?;

        Ok(())
    }
}

/// Hash a password using Argon2id.
pub fn hash_password(password: &str) -> Result<String, AdminAuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AdminAuthError::PasswordHash)
}

/// Verify a password against a hash.
pub fn verify_password(password: &str, hash: &str) -> Result<(), AdminAuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AdminAuthError::InvalidPassword)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AdminAuthError::InvalidPassword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_passwords_verify() {
        let hash = hash_password("store-password").unwrap();
        assert!(verify_password("store-password", &hash).is_ok());
        assert!(matches!(
            verify_password("wrong", &hash),
            Err(AdminAuthError::InvalidPassword)
        ));
    }
}
