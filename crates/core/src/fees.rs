//! Neighborhood delivery fee table and resolution.
//!
//! Delivery charges a flat fee per neighborhood with no distance or weight
//! component. Matching is exact, case-sensitive string equality against the
//! configured table keys - no trimming, no fuzzy matching. The neighborhood
//! list is curated and presented to customers as a dropdown, so the strict
//! match is intentional; `"hipica"` does not resolve to `"Hipica"`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single `{neighborhood, fee}` entry in the fee table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborhoodFee {
    pub name: String,
    pub fee: Decimal,
}

/// Outcome of resolving a neighborhood against the fee table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeResolution {
    /// The neighborhood is in the table with this flat fee.
    ///
    /// A configured fee of zero is still `Flat(0)` - free delivery,
    /// not a fee to be negotiated.
    Flat(Decimal),
    /// The neighborhood is not in the table; the fee is to be agreed with
    /// the customer. Contributes zero to the order total, and the order
    /// summary renders "A Combinar" instead of a currency value.
    ToNegotiate,
}

impl FeeResolution {
    /// The amount this resolution contributes to the order total.
    #[must_use]
    pub fn effective_fee(&self) -> Decimal {
        match self {
            Self::Flat(fee) => *fee,
            Self::ToNegotiate => Decimal::ZERO,
        }
    }

    /// Whether the fee is still to be agreed with the customer.
    #[must_use]
    pub const fn is_negotiated(&self) -> bool {
        matches!(self, Self::ToNegotiate)
    }
}

/// An ordered table of per-neighborhood flat delivery fees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct FeeTable(Vec<NeighborhoodFee>);

impl FeeTable {
    /// Build a table from configured entries.
    #[must_use]
    pub const fn new(entries: Vec<NeighborhoodFee>) -> Self {
        Self(entries)
    }

    /// The fee table the store is seeded with.
    #[must_use]
    pub fn default_fees() -> Self {
        const SEED: &[(&str, i64)] = &[
            ("Belem Velho", 18),
            ("Belem Novo", 5),
            ("Campo Novo", 12),
            ("Chapeu do Sol", 8),
            ("Ponta Grossa", 8),
            ("Pitinga", 18),
            ("Lami", 20),
            ("Hipica", 0),
            ("Juca Batista", 5),
        ];
        Self(
            SEED.iter()
                .map(|(name, fee)| NeighborhoodFee {
                    name: (*name).to_string(),
                    fee: Decimal::from(*fee),
                })
                .collect(),
        )
    }

    /// Resolve a neighborhood name to its flat fee.
    ///
    /// Exact, case-sensitive match; unmapped names resolve to
    /// [`FeeResolution::ToNegotiate`].
    #[must_use]
    pub fn resolve(&self, neighborhood: &str) -> FeeResolution {
        self.0
            .iter()
            .find(|entry| entry.name == neighborhood)
            .map_or(FeeResolution::ToNegotiate, |entry| {
                FeeResolution::Flat(entry.fee)
            })
    }

    /// All configured entries, in table order.
    #[must_use]
    pub fn entries(&self) -> &[NeighborhoodFee] {
        &self.0
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
