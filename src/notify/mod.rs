//! Customer notifications for order events.
//!
//! Transport is an external concern: the shop talks to it through the
//! [`NotificationDispatcher`] trait, and the default [`LogNotifier`] only
//! logs what it would have sent. Dispatch runs detached from the request
//! that triggered it – a notification failure can never fail or roll back
//! an order.

use crate::model::Order;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification transport error: {0}")]
    Transport(String),
}

/// Outbound message sender (email + WhatsApp).
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), NotifyError>;
    async fn send_whatsapp(&self, to: &str, message: &str) -> Result<(), NotifyError>;
}

/// Dispatcher that logs instead of sending, standing in for real transport
/// credentials in development and tests.
pub struct LogNotifier;

#[async_trait]
impl NotificationDispatcher for LogNotifier {
    async fn send_email(&self, to: &str, subject: &str, _body: &str) -> Result<(), NotifyError> {
        info!(to, subject, "email notification (simulated)");
        Ok(())
    }

    async fn send_whatsapp(&self, to: &str, message: &str) -> Result<(), NotifyError> {
        info!(to, message, "whatsapp notification (simulated)");
        Ok(())
    }
}

/// The slice of an order a confirmation message needs.
#[derive(Debug, Clone)]
pub struct OrderReceipt {
    pub order_number: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub total: f64,
}

impl OrderReceipt {
    pub fn for_order(order: &Order) -> Self {
        Self {
            order_number: order.order_number.clone(),
            email: order.customer.email.clone(),
            phone: order.customer.phone.clone(),
            total: order.total,
        }
    }
}

/// Sends the order-confirmation messages on a detached task.
///
/// Fire-and-forget: the caller gets no handle and no result. Send failures
/// are logged here and go no further.
pub fn dispatch_order_created(dispatcher: Arc<dyn NotificationDispatcher>, receipt: OrderReceipt) {
    tokio::spawn(async move {
        if let Some(email) = receipt.email.as_deref() {
            let subject = format!("Order Confirmation #{}", receipt.order_number);
            let body = format!(
                "Thank you for your order! Your order id is {}.",
                receipt.order_number
            );
            if let Err(e) = dispatcher.send_email(email, &subject, &body).await {
                warn!(order_number = %receipt.order_number, error = %e, "order email failed");
            }
        }
        if let Some(phone) = receipt.phone.as_deref() {
            let message = format!(
                "Order #{} confirmed! Total: {:.2}",
                receipt.order_number, receipt.total
            );
            if let Err(e) = dispatcher.send_whatsapp(phone, &message).await {
                warn!(order_number = %receipt.order_number, error = %e, "order whatsapp failed");
            }
        }
    });
}
