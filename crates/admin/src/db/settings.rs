//! Store settings repository, including the admin credential.

use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::types::Json;

use sushiya_core::fees::FeeTable;

use super::RepositoryError;
use crate::models::{StoreConfig, StoreSettingsInput};

#[derive(sqlx::FromRow)]
struct StoreConfigRow {
    store_name: String,
    whatsapp_number: String,
    default_delivery_fee: Decimal,
    pix_key: Option<String>,
    neighborhood_fees: Json<FeeTable>,
}

impl From<StoreConfigRow> for StoreConfig {
    fn from(row: StoreConfigRow) -> Self {
        Self {
            store_name: row.store_name,
            whatsapp_number: row.whatsapp_number,
            default_delivery_fee: row.default_delivery_fee,
            pix_key: row.pix_key,
            neighborhood_fees: row.neighborhood_fees.0,
        }
    }
}

const SELECT_COLUMNS: &str =
    "store_name, whatsapp_number, default_delivery_fee, pix_key, neighborhood_fees";

/// Repository for the store configuration row.
///
/// The row is seeded by the storefront on first read or by the CLI seed
/// command; the back-office treats a missing row as not-found rather
/// than seeding its own defaults.
pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    /// Create a new settings repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Read the store configuration.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the row hasn't been seeded.
    pub async fn get(&self) -> Result<StoreConfig, RepositoryError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM store_config LIMIT 1");
        let row: Option<StoreConfigRow> = sqlx::query_as(&sql).fetch_optional(self.pool).await?;

        row.map(StoreConfig::from).ok_or(RepositoryError::NotFound)
    }

    /// Replace the editable settings fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the row hasn't been seeded.
    pub async fn update(&self, input: &StoreSettingsInput) -> Result<StoreConfig, RepositoryError> {
        let sql = format!(
            "UPDATE store_config SET store_name = $1, whatsapp_number = $2, \
             default_delivery_fee = $3, pix_key = $4, neighborhood_fees = $5, \
             updated_at = NOW() \
             RETURNING {SELECT_COLUMNS}"
        );
        let row: Option<StoreConfigRow> = sqlx::query_as(&sql)
            .bind(&input.store_name)
            .bind(&input.whatsapp_number)
            .bind(input.default_delivery_fee)
            .bind(input.pix_key.as_deref())
            .bind(Json(&input.neighborhood_fees))
            .fetch_optional(self.pool)
            .await?;

        row.map(StoreConfig::from).ok_or(RepositoryError::NotFound)
    }

    /// Read the admin password hash, if one has been provisioned.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn admin_password_hash(&self) -> Result<Option<String>, RepositoryError> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as("SELECT admin_password_hash FROM store_config LIMIT 1")
                .fetch_optional(self.pool)
                .await?;

        Ok(row.and_then(|(hash,)| hash))
    }

    /// Replace the admin password hash.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the row hasn't been seeded.
    pub async fn set_admin_password_hash(&self, hash: &str) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("UPDATE store_config SET admin_password_hash = $1, updated_at = NOW()")
                .bind(hash)
                .execute(self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
