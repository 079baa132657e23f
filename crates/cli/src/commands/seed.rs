//! Development seed data.
//!
//! # Usage
//!
//! ```bash
//! sushiya-cli seed
//! ```
//!
//! Seeds the default store configuration (skipped when a row already
//! exists) and a small sample menu for local development. Safe to run
//! repeatedly.

use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::types::Json;

use sushiya_core::fees::FeeTable;
use sushiya_core::{ProductCategory, ProductCode};

use super::CommandError;

struct SeedProduct {
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    category: ProductCategory,
    is_promotion: bool,
    promotional_price_cents: Option<i64>,
}

const SAMPLE_PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "Combo Sushi",
        description: "20 peças variadas do dia",
        price_cents: 4_590,
        category: ProductCategory::Combo,
        is_promotion: false,
        promotional_price_cents: None,
    },
    SeedProduct {
        name: "Hot Roll",
        description: "8 peças de hot roll de salmão",
        price_cents: 3_250,
        category: ProductCategory::Roll,
        is_promotion: true,
        promotional_price_cents: Some(2_890),
    },
    SeedProduct {
        name: "Temaki Salmão",
        description: "Temaki de salmão com cream cheese",
        price_cents: 2_990,
        category: ProductCategory::Temaki,
        is_promotion: false,
        promotional_price_cents: None,
    },
    SeedProduct {
        name: "Sashimi de Salmão",
        description: "10 fatias",
        price_cents: 3_890,
        category: ProductCategory::Sashimi,
        is_promotion: false,
        promotional_price_cents: None,
    },
    SeedProduct {
        name: "Coca-Cola Lata",
        description: "350ml",
        price_cents: 700,
        category: ProductCategory::Bebida,
        is_promotion: false,
        promotional_price_cents: None,
    },
];

const DEFAULT_STORE_NAME: &str = "Sushiya";
const DEFAULT_WHATSAPP_NUMBER: &str = "5551999999999";

/// Seed the store configuration and sample menu.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable.
pub async fn run() -> Result<(), CommandError> {
    let pool = super::connect().await?;

    seed_store_config(&pool).await?;
    seed_products(&pool).await?;

    tracing::info!("Seed complete");
    Ok(())
}

async fn seed_store_config(pool: &PgPool) -> Result<(), CommandError> {
    let result = sqlx::query(
        "INSERT INTO store_config \
         (singleton, store_name, whatsapp_number, default_delivery_fee, neighborhood_fees) \
         VALUES (TRUE, $1, $2, $3, $4) \
         ON CONFLICT (singleton) DO NOTHING",
    )
    .bind(DEFAULT_STORE_NAME)
    .bind(DEFAULT_WHATSAPP_NUMBER)
    .bind(Decimal::from(10))
    .bind(Json(FeeTable::default_fees()))
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        tracing::info!("Store config already present, leaving it untouched");
    } else {
        tracing::info!("Store config seeded");
    }

    Ok(())
}

async fn seed_products(pool: &PgPool) -> Result<(), CommandError> {
    for product in SAMPLE_PRODUCTS {
        let result = sqlx::query(
            "INSERT INTO product \
             (code, name, description, price, category, available, image, is_promotion, promotional_price) \
             SELECT $1, $2, $3, $4, $5, TRUE, '/placeholder-sushi.jpg', $6, $7 \
             WHERE NOT EXISTS (SELECT 1 FROM product WHERE name = $2)",
        )
        .bind(ProductCode::generate())
        .bind(product.name)
        .bind(product.description)
        .bind(Decimal::new(product.price_cents, 2))
        .bind(product.category.to_string())
        .bind(product.is_promotion)
        .bind(product.promotional_price_cents.map(|c| Decimal::new(c, 2)))
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            tracing::info!(name = product.name, "Seeded product");
        }
    }

    Ok(())
}
