//! Customer authentication service.
//!
//! Password-based login plus an email-and-phone recovery flow for a
//! customer base that rarely has access to transactional email.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;

use sushiya_core::Address;

use crate::db::RepositoryError;
use crate::db::customers::CustomerRepository;
use crate::models::Customer;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Authentication service.
///
/// Handles customer registration, login, and password recovery.
pub struct AuthService<'a> {
    customers: CustomerRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            customers: CustomerRepository::new(pool),
        }
    }

    /// Register a new customer account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidInput` if required fields are blank,
    /// `AuthError::WeakPassword` if the password is too short, and
    /// `AuthError::AlreadyRegistered` if the email or phone is taken.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        password: &str,
        address: Address,
    ) -> Result<Customer, AuthError> {
        let name = name.trim();
        let email = email.trim().to_lowercase();
        let phone = phone.trim();

        if name.is_empty() {
            return Err(AuthError::InvalidInput("name is required".to_string()));
        }
        if email.is_empty() || !email.contains('@') {
            return Err(AuthError::InvalidInput(
                "a valid email is required".to_string(),
            ));
        }
        if phone.is_empty() {
            return Err(AuthError::InvalidInput("phone is required".to_string()));
        }
        validate_password(password)?;

        let password_hash = hash_password(password)?;

        let customer = self
            .customers
            .create(name, Some(&email), phone, Some(&password_hash), address)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(msg) => {
                    let field = if msg.starts_with("phone") { "phone" } else { "email" };
                    AuthError::AlreadyRegistered(field.to_string())
                }
                other => AuthError::Repository(other),
            })?;

        Ok(customer)
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is
    /// wrong. Unknown accounts and wrong passwords are indistinguishable.
    pub async fn login(&self, email: &str, password: &str) -> Result<Customer, AuthError> {
        let email = email.trim().to_lowercase();

        let (customer, password_hash) = self
            .customers
            .get_auth_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        Ok(customer)
    }

    /// Verify recovery details: the email and phone must belong to the
    /// same account. Phones are compared digits-only, so formatting
    /// differences ("(51) 99988-7766" vs "51999887766") do not matter.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AccountNotFound` when no account matches.
    pub async fn verify_recovery(&self, email: &str, phone: &str) -> Result<Customer, AuthError> {
        let email = email.trim().to_lowercase();
        let phone_digits = digits_only(phone);

        let customer = self
            .customers
            .get_by_email(&email)
            .await?
            .filter(|c| digits_only(&c.phone) == phone_digits)
            .ok_or(AuthError::AccountNotFound)?;

        Ok(customer)
    }

    /// Complete recovery by setting a new password, after the same
    /// email-and-phone check as [`Self::verify_recovery`].
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AccountNotFound` when no account matches, or
    /// `AuthError::WeakPassword` if the new password is too short.
    pub async fn reset_password(
        &self,
        email: &str,
        phone: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        validate_password(new_password)?;

        let customer = self.verify_recovery(email, phone).await?;
        let password_hash = hash_password(new_password)?;

        self.customers
            .set_password_hash(&customer.code, &password_hash)
            .await?;

        Ok(())
    }
}

fn digits_only(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
pub fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_passwords_verify() {
        let hash = hash_password("salmon-skin-roll").unwrap();
        assert!(verify_password("salmon-skin-roll", &hash).is_ok());
        assert!(verify_password("tuna-skin-roll", &hash).is_err());
    }

    #[test]
    fn short_passwords_rejected() {
        assert!(matches!(
            validate_password("abc"),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(validate_password("abcdef").is_ok());
    }
}
