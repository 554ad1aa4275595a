//! Order-specific resource logic: lifecycle, history, and inventory effects.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::framework::{sequential_ids, ResourceActor};
use crate::inventory::InventoryAdjuster;
use crate::model::Order;
use crate::notify::NotificationDispatcher;
use std::sync::Arc;

/// Dependencies injected into the Order actor at start.
pub struct OrderContext {
    /// Path to the product store for stock reservation and restoration.
    pub inventory: InventoryAdjuster,
    /// Post-creation confirmation sender; always fire-and-forget.
    pub notifier: Arc<dyn NotificationDispatcher>,
}

/// Creates a new Order actor and its client.
pub fn new() -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(32, sequential_ids("order"));
    let client = OrderClient::new(generic_client);
    (actor, client)
}
