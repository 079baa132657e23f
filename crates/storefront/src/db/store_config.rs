//! Store configuration repository.
//!
//! A single-row table read on every menu render and checkout. First read
//! seeds the defaults, so a fresh database works without manual setup.

use sqlx::PgPool;
use sqlx::types::Json;

use sushiya_core::fees::FeeTable;

use super::RepositoryError;
use crate::models::StoreConfig;

#[derive(sqlx::FromRow)]
struct StoreConfigRow {
    store_name: String,
    whatsapp_number: String,
    default_delivery_fee: rust_decimal::Decimal,
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
pub struct StoreConfigRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StoreConfigRepository<'a> {
    /// Create a new store config repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Read the configuration, seeding the default row if none exists yet.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get_or_seed(&self) -> Result<StoreConfig, RepositoryError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM store_config LIMIT 1");
        let row: Option<StoreConfigRow> = sqlx::query_as(&sql).fetch_optional(self.pool).await?;

        if let Some(row) = row {
            return Ok(StoreConfig::from(row));
        }

        let defaults = StoreConfig::default();
        // ON CONFLICT covers the race where two first reads both seed;
        // whichever insert loses just re-reads the winner's row.
        let insert = format!(
            "INSERT INTO store_config \
             (singleton, store_name, whatsapp_number, default_delivery_fee, pix_key, neighborhood_fees) \
             VALUES (TRUE, $1, $2, $3, $4, $5) \
             ON CONFLICT (singleton) DO NOTHING \
             RETURNING {SELECT_COLUMNS}"
        );
        let seeded: Option<StoreConfigRow> = sqlx::query_as(&insert)
            .bind(&defaults.store_name)
            .bind(&defaults.whatsapp_number)
            .bind(defaults.default_delivery_fee)
            .bind(defaults.pix_key.as_deref())
            .bind(Json(&defaults.neighborhood_fees))
            .fetch_optional(self.pool)
            .await?;

        match seeded {
            Some(row) => Ok(StoreConfig::from(row)),
            None => {
                let row: StoreConfigRow =
                    sqlx::query_as(&format!("SELECT {SELECT_COLUMNS} FROM store_config LIMIT 1"))
                        .fetch_one(self.pool)
                        .await?;
                Ok(StoreConfig::from(row))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn null_pix_key_maps_to_none() {
        let row = StoreConfigRow {
            store_name: "Sushiya".to_string(),
            whatsapp_number: "5551999999999".to_string(),
            default_delivery_fee: Decimal::from(10),
            pix_key: None,
            neighborhood_fees: Json(FeeTable::default_fees()),
        };
        let config = StoreConfig::from(row);
        assert_eq!(config.pix_key, None);

        // The unconfigured default binds NULL back, not an empty string.
        assert_eq!(StoreConfig::default().pix_key.as_deref(), None);
    }
}
