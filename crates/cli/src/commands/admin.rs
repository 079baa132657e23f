//! Back-office credential management.
//!
//! # Usage
//!
//! ```bash
//! # Provision or rotate the store password
//! sushiya-cli admin set-password
//! sushiya-cli admin set-password --password <password>
//! ```
//!
//! The password is stored as an argon2 hash on the store config row; the
//! back-office refuses logins until one has been provisioned.

use std::io::{BufRead, Write as _};

use sushiya_admin::services::auth::hash_password;

use super::CommandError;

/// Set the store password, prompting on stdin when none is given.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable or hashing fails.
pub async fn set_password(password: Option<String>) -> Result<(), CommandError> {
    let password = match password {
        Some(p) => p,
        None => prompt_password()?,
    };

    if password.trim().is_empty() {
        return Err(CommandError::InvalidInput("password must not be empty"));
    }

    let hash = hash_password(password.trim()).map_err(|_| CommandError::PasswordHash)?;

    let pool = super::connect().await?;
    let result = sqlx::query("UPDATE store_config SET admin_password_hash = $1, updated_at = NOW()")
        .bind(&hash)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CommandError::NotSeeded);
    }

    tracing::info!("Store password updated");
    Ok(())
}

fn prompt_password() -> Result<String, CommandError> {
    let mut stderr = std::io::stderr();
    write!(stderr, "New store password: ")?;
    stderr.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}
