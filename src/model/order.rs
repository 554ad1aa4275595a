//! Customer order: item snapshot, status state machine, and audit trail.
//!
//! An order carries a *snapshot* of what was bought – product IDs, quantities
//! and prices as they were at checkout. Inventory adjustments on cancel,
//! delete, or reactivate replay this snapshot, never the live catalog, so
//! later price or stock edits cannot corrupt the accounting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display status of an order.
///
/// For inventory purposes only two classes exist: `Cancelled` and everything
/// else. The non-cancelled states are administrative labels with no stock
/// effect; see [`InventoryEffect::for_transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn is_cancelled(self) -> bool {
        matches!(self, OrderStatus::Cancelled)
    }

    /// While in this status, is the order holding reserved stock?
    pub fn holds_stock(self) -> bool {
        !self.is_cancelled()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Stock consequence of a status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryEffect {
    /// No stock movement.
    None,
    /// Give the reserved units back (order leaves the active class).
    Restore,
    /// Take the units again (cancelled order re-enters the active class).
    Reserve,
}

impl InventoryEffect {
    /// Only crossing the cancelled/not-cancelled boundary moves stock.
    pub fn for_transition(from: OrderStatus, to: OrderStatus) -> Self {
        match (from.is_cancelled(), to.is_cancelled()) {
            (false, true) => InventoryEffect::Restore,
            (true, false) => InventoryEffect::Reserve,
            _ => InventoryEffect::None,
        }
    }
}

fn default_quantity() -> u32 {
    1
}

/// One entry in an order's item list, frozen at checkout time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub unit_price: f64,
    pub total: f64,
}

/// Customer details captured on the order, used for notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Audit record of one status transition. Entries are append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusEntry {
    pub status: OrderStatus,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Human-facing identifier, unique across orders.
    pub order_number: String,
    pub user_id: String,
    pub customer: CustomerInfo,
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub delivery_charges: f64,
    pub discount: f64,
    pub total: f64,
    pub payment_method: String,
    pub payment_status: String,
    pub invoice_number: Option<String>,
    pub status: OrderStatus,
    /// Every status the order has been in, in order, including the first.
    pub status_history: Vec<StatusEntry>,
    pub estimated_delivery: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_payment_status() -> String {
    "pending".to_string()
}

/// Payload for placing an order. The item list, customer snapshot, and
/// monetary fields are validated by the boundary before reaching the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub order_number: String,
    pub user_id: String,
    pub customer: CustomerInfo,
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub delivery_charges: f64,
    #[serde(default)]
    pub discount: f64,
    pub total: f64,
    pub payment_method: String,
    #[serde(default = "default_payment_status")]
    pub payment_status: String,
    pub invoice_number: Option<String>,
    /// Initial status; `pending` when unspecified.
    pub status: Option<OrderStatus>,
    pub estimated_delivery: Option<String>,
}

/// Sparse partial update for administrative edits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub status: Option<OrderStatus>,
    pub payment_status: Option<String>,
    pub total: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_cancelled_boundary_moves_stock() {
        use OrderStatus::*;

        // Relabels within the active class are inert.
        for (from, to) in [
            (Pending, Confirmed),
            (Confirmed, Processing),
            (Processing, Shipped),
            (Shipped, Delivered),
            (Delivered, Pending),
        ] {
            assert_eq!(
                InventoryEffect::for_transition(from, to),
                InventoryEffect::None,
                "{from} -> {to}"
            );
        }

        // Entering cancelled restores, leaving it re-reserves.
        assert_eq!(
            InventoryEffect::for_transition(Shipped, Cancelled),
            InventoryEffect::Restore
        );
        assert_eq!(
            InventoryEffect::for_transition(Cancelled, Confirmed),
            InventoryEffect::Reserve
        );

        // Cancelled to cancelled is inert (double-cancel guard).
        assert_eq!(
            InventoryEffect::for_transition(Cancelled, Cancelled),
            InventoryEffect::None
        );
    }

    #[test]
    fn statuses_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
        let parsed: OrderStatus = serde_json::from_str("\"shipped\"").unwrap();
        assert_eq!(parsed, OrderStatus::Shipped);
        assert_eq!(OrderStatus::Processing.to_string(), "processing");
    }

    #[test]
    fn line_item_quantity_defaults_to_one() {
        let item: LineItem = serde_json::from_str(
            r#"{"product_id": "product_3", "unit_price": 120.0, "total": 120.0}"#,
        )
        .unwrap();
        assert_eq!(item.quantity, 1);
    }
}
