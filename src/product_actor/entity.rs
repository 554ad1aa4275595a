//! Entity trait implementation for the Product domain type.

use super::actions::{ProductAction, ProductActionResult, StockDirection};
use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Product {
    type Id = String;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, ProductError> {
        Ok(Self::new(id, params.name, params.price, params.stock))
    }

    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::AdjustStock {
                direction,
                quantity,
            } => {
                self.stock = match direction {
                    // Floor at zero: selling past the counter is a no-op there.
                    StockDirection::Decrease => self.stock.saturating_sub(quantity),
                    StockDirection::Increase => self.stock.saturating_add(quantity),
                };
                Ok(ProductActionResult::AdjustStock(self.stock))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: u32) -> Product {
        Product::new("product_1", "Gulab Jamun Box", 250.0, stock)
    }

    async fn adjust(product: &mut Product, direction: StockDirection, quantity: u32) -> u32 {
        match product
            .handle_action(
                ProductAction::AdjustStock {
                    direction,
                    quantity,
                },
                &(),
            )
            .await
            .unwrap()
        {
            ProductActionResult::AdjustStock(level) => level,
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn decrease_is_clamped_at_zero() {
        let mut p = product(2);
        assert_eq!(adjust(&mut p, StockDirection::Decrease, 5).await, 0);
        // Further decreases at the floor stay at zero.
        assert_eq!(adjust(&mut p, StockDirection::Decrease, 1).await, 0);
    }

    #[tokio::test]
    async fn increase_is_unbounded() {
        let mut p = product(0);
        assert_eq!(adjust(&mut p, StockDirection::Increase, 3).await, 3);
        assert_eq!(adjust(&mut p, StockDirection::Increase, 100).await, 103);
    }

    #[tokio::test]
    async fn check_stock_reads_without_mutating() {
        let mut p = product(7);
        let result = p.handle_action(ProductAction::CheckStock, &()).await.unwrap();
        assert!(matches!(result, ProductActionResult::CheckStock(7)));
        assert_eq!(p.stock, 7);
    }
}
