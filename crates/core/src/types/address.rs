//! Customer delivery addresses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a saved address.
///
/// Addresses are removed and selected by id rather than by list position,
/// so concurrent edits that reorder the list cannot target the wrong entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressId(Uuid);

impl AddressId {
    /// Generate a fresh address id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying uuid.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for AddressId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for AddressId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// A delivery address as saved on a customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub neighborhood: String,
    pub street: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
}

impl Address {
    /// Build an address with a freshly generated id.
    #[must_use]
    pub fn new(
        neighborhood: String,
        street: String,
        number: String,
        complement: Option<String>,
    ) -> Self {
        Self {
            id: AddressId::generate(),
            neighborhood,
            street,
            number,
            complement: complement.filter(|c| !c.trim().is_empty()),
        }
    }

    /// Single-line rendering used on order records and the WhatsApp summary:
    /// `street, number`.
    #[must_use]
    pub fn street_line(&self) -> String {
        format!("{}, {}", self.street, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_line_joins_street_and_number() {
        let address = Address {
            id: AddressId::generate(),
            neighborhood: "Belem Novo".to_string(),
            street: "Av. Beira Rio".to_string(),
            number: "1024".to_string(),
            complement: None,
        };
        assert_eq!(address.street_line(), "Av. Beira Rio, 1024");
    }

    #[test]
    fn missing_complement_is_omitted_from_json() {
        let address = Address {
            id: AddressId::generate(),
            neighborhood: "Lami".to_string(),
            street: "Rua A".to_string(),
            number: "1".to_string(),
            complement: None,
        };
        let json = serde_json::to_value(&address).unwrap();
        assert!(json.get("complement").is_none());
    }
}
