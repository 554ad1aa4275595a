//! Entity trait implementation for the Order domain type.
//!
//! The lifecycle hooks carry the inventory rules:
//!
//! - creation reserves stock for the item snapshot and schedules the
//!   confirmation notification;
//! - a status change into `cancelled` restores stock, a change out of
//!   `cancelled` reserves it again, and any other change only appends to the
//!   audit trail;
//! - deletion restores stock unless the order was already cancelled.
//!
//! Persisting the order is the operation of record. Stock adjustment and
//! notification are secondary effects whose failures are logged downstream
//! and never returned from these hooks.

use super::error::OrderError;
use super::OrderContext;
use crate::framework::ActorEntity;
use crate::model::{InventoryEffect, Order, OrderCreate, OrderStatus, OrderUpdate, StatusEntry};
use crate::notify::{self, OrderReceipt};
use crate::product_actor::StockDirection;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Order {
    type Id = String;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, OrderError> {
        if params.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        let now = Utc::now();
        let status = params.status.unwrap_or(OrderStatus::Pending);
        Ok(Self {
            id,
            order_number: params.order_number,
            user_id: params.user_id,
            customer: params.customer,
            items: params.items,
            subtotal: params.subtotal,
            tax: params.tax,
            delivery_charges: params.delivery_charges,
            discount: params.discount,
            total: params.total,
            payment_method: params.payment_method,
            payment_status: params.payment_status,
            invoice_number: params.invoice_number,
            status,
            // The initial status is part of the audit trail too.
            status_history: vec![StatusEntry {
                status,
                timestamp: now,
            }],
            estimated_delivery: params.estimated_delivery,
            created_at: now,
            updated_at: now,
        })
    }

    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        ctx.inventory
            .adjust(&self.items, StockDirection::Decrease)
            .await;
        notify::dispatch_order_created(ctx.notifier.clone(), OrderReceipt::for_order(self));
        Ok(())
    }

    async fn on_update(&mut self, update: OrderUpdate, ctx: &OrderContext) -> Result<(), OrderError> {
        if let Some(next) = update.status {
            // A repeat of the current status is a no-op: no history entry,
            // no stock movement.
            if next != self.status {
                self.status_history.push(StatusEntry {
                    status: next,
                    timestamp: Utc::now(),
                });
                match InventoryEffect::for_transition(self.status, next) {
                    InventoryEffect::Restore => {
                        ctx.inventory
                            .adjust(&self.items, StockDirection::Increase)
                            .await;
                    }
                    InventoryEffect::Reserve => {
                        ctx.inventory
                            .adjust(&self.items, StockDirection::Decrease)
                            .await;
                    }
                    InventoryEffect::None => {}
                }
                self.status = next;
            }
        }
        if let Some(payment_status) = update.payment_status {
            self.payment_status = payment_status;
        }
        if let Some(total) = update.total {
            self.total = total;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn on_delete(&self, ctx: &OrderContext) -> Result<(), OrderError> {
        // A cancelled order already gave its stock back.
        if self.status.holds_stock() {
            ctx.inventory
                .adjust(&self.items, StockDirection::Increase)
                .await;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &OrderContext) -> Result<(), OrderError> {
        Ok(())
    }
}
