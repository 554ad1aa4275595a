//! Custom actions for the Product actor.
//!
//! Stock mutation is expressed as an action rather than a plain update so
//! that the read-modify-write happens inside the actor's event loop. Two
//! requests racing on the same product are therefore applied one after the
//! other; the counter can never lose an update.

use serde::{Deserialize, Serialize};

/// Which way a stock adjustment moves the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockDirection {
    /// Units leave the shelf (order placed or reactivated).
    Decrease,
    /// Units come back (order cancelled or deleted).
    Increase,
}

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Read the current stock level without modifying it.
    CheckStock,
    /// Move the stock counter. Decreases saturate at zero.
    AdjustStock {
        direction: StockDirection,
        quantity: u32,
    },
}

/// Results from ProductActions - variants match 1:1 with ProductAction.
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    /// Current stock level.
    CheckStock(u32),
    /// Stock level after the adjustment.
    AdjustStock(u32),
}
