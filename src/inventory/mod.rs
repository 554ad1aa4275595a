//! Inventory adjustment over an order's item snapshot.
//!
//! The adjuster is the only path from the order subsystem into product
//! stock. It is deliberately forgiving: an order mutation must go through
//! even when parts of the catalog are missing or the store hiccups, so
//! per-item failures are logged and skipped, never propagated.

use crate::clients::ProductClient;
use crate::model::LineItem;
use crate::product_actor::{ProductError, StockDirection};
use tracing::{debug, warn};

/// Applies stock deltas to the product store, one item at a time.
#[derive(Clone)]
pub struct InventoryAdjuster {
    products: ProductClient,
}

impl InventoryAdjuster {
    pub fn new(products: ProductClient) -> Self {
        Self { products }
    }

    /// Adjusts stock for every item in the snapshot, sequentially.
    ///
    /// Each item is an independent read-modify-write against the product
    /// actor, persisted before the next item is attempted. A product that no
    /// longer exists means there is nothing to adjust for that line; any
    /// other failure is logged and the remaining items still processed.
    /// The batch itself never fails.
    pub async fn adjust(&self, items: &[LineItem], direction: StockDirection) {
        for item in items {
            match self
                .products
                .adjust_stock(item.product_id.clone(), direction, item.quantity)
                .await
            {
                Ok(stock) => {
                    debug!(
                        product_id = %item.product_id,
                        ?direction,
                        quantity = item.quantity,
                        stock,
                        "stock adjusted"
                    );
                }
                Err(ProductError::NotFound(_)) => {
                    debug!(product_id = %item.product_id, "product missing, nothing to adjust");
                }
                Err(e) => {
                    warn!(
                        product_id = %item.product_id,
                        error = %e,
                        "stock adjustment failed, continuing with remaining items"
                    );
                }
            }
        }
    }
}
