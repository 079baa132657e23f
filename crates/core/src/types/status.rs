//! Status and category enums.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// The happy path is `Pending → Preparing → Ready → Delivery → Completed`.
/// Any active order can be cancelled, and any order can be archived to hide
/// it from the current listing without deleting the record. Archival is
/// terminal; hard deletion is a separate repository operation outside the
/// state machine, intended for erroneous manual entries only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Delivery,
    Completed,
    Cancelled,
    Archived,
}

impl OrderStatus {
    /// Whether the order is still in the active kitchen flow.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(
            self,
            Self::Pending | Self::Preparing | Self::Ready | Self::Delivery
        )
    }

    /// Whether this status admits no further transitions at all.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Archived)
    }

    /// Whether a transition from `self` to `next` is allowed.
    ///
    /// Transitions are admin-driven and deliberately loose between active
    /// states (the kitchen may skip steps), but orders cannot leave a
    /// settled state except to be archived:
    ///
    /// - active → active / `Completed` / `Cancelled` / `Archived`
    /// - `Completed` / `Cancelled` → `Archived` only
    /// - `Archived` → nothing
    /// - no self-transitions
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        if matches!(self, Self::Archived) {
            return false;
        }
        match next {
            Self::Archived => true,
            _ if !self.is_active() => false,
            Self::Pending | Self::Preparing | Self::Ready | Self::Delivery => {
                // Movement between active states, but not to itself.
                !matches!(
                    (self, next),
                    (Self::Pending, Self::Pending)
                        | (Self::Preparing, Self::Preparing)
                        | (Self::Ready, Self::Ready)
                        | (Self::Delivery, Self::Delivery)
                )
            }
            Self::Completed | Self::Cancelled => true,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::Preparing => "PREPARING",
            Self::Ready => "READY",
            Self::Delivery => "DELIVERY",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Archived => "ARCHIVED",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "PREPARING" => Ok(Self::Preparing),
            "READY" => Ok(Self::Ready),
            "DELIVERY" => Ok(Self::Delivery),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            "ARCHIVED" => Ok(Self::Archived),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Accepted payment methods.
///
/// Wire values keep the Portuguese names used by the storefront clients.
/// The change-for amount on an order is only meaningful for `Cash`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Pix,
    #[serde(rename = "credito")]
    Credit,
    #[serde(rename = "debito")]
    Debit,
    #[serde(rename = "dinheiro")]
    Cash,
}

impl PaymentMethod {
    /// Uppercased label used in the WhatsApp order summary.
    #[must_use]
    pub const fn summary_label(self) -> &'static str {
        match self {
            Self::Pix => "PIX",
            Self::Credit => "CREDITO",
            Self::Debit => "DEBITO",
            Self::Cash => "DINHEIRO",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pix => "pix",
            Self::Credit => "credito",
            Self::Debit => "debito",
            Self::Cash => "dinheiro",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pix" => Ok(Self::Pix),
            "credito" => Ok(Self::Credit),
            "debito" => Ok(Self::Debit),
            "dinheiro" => Ok(Self::Cash),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

/// Product menu category (closed enumeration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Temaki,
    Combo,
    Sashimi,
    Roll,
    Bebida,
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Temaki => "temaki",
            Self::Combo => "combo",
            Self::Sashimi => "sashimi",
            Self::Roll => "roll",
            Self::Bebida => "bebida",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "temaki" => Ok(Self::Temaki),
            "combo" => Ok(Self::Combo),
            "sashimi" => Ok(Self::Sashimi),
            "roll" => Ok(Self::Roll),
            "bebida" => Ok(Self::Bebida),
            _ => Err(format!("invalid product category: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_transitions_are_allowed() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Preparing));
        assert!(OrderStatus::Preparing.can_transition_to(OrderStatus::Ready));
        assert!(OrderStatus::Ready.can_transition_to(OrderStatus::Delivery));
        assert!(OrderStatus::Delivery.can_transition_to(OrderStatus::Completed));
    }

    #[test]
    fn active_orders_can_skip_steps_and_cancel() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Delivery));
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Completed));
        assert!(OrderStatus::Ready.can_transition_to(OrderStatus::Preparing));
        for status in [
            OrderStatus::Pending,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Delivery,
        ] {
            assert!(status.can_transition_to(OrderStatus::Cancelled));
        }
    }

    #[test]
    fn anything_except_archived_can_be_archived() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Delivery,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            assert!(status.can_transition_to(OrderStatus::Archived));
        }
        assert!(!OrderStatus::Archived.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Archived.can_transition_to(OrderStatus::Archived));
    }

    #[test]
    fn settled_orders_cannot_reopen() {
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Delivery));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Pending));
    }

    #[test]
    fn status_round_trips_through_wire_format() {
        let json = serde_json::to_string(&OrderStatus::Preparing).unwrap();
        assert_eq!(json, "\"PREPARING\"");
        let back: OrderStatus = serde_json::from_str("\"ARCHIVED\"").unwrap();
        assert_eq!(back, OrderStatus::Archived);
    }

    #[test]
    fn payment_method_wire_values_are_portuguese() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Cash).unwrap(),
            "\"dinheiro\""
        );
        assert_eq!(PaymentMethod::Credit.summary_label(), "CREDITO");
        assert_eq!("pix".parse::<PaymentMethod>().unwrap(), PaymentMethod::Pix);
    }
}
