//! Order lifecycle scenarios against a fully wired system.
//!
//! Every test runs its own `OrderSystem` (real actors, no mocks) and drives
//! orders through the client surface, asserting on the observable outcomes:
//! product stock levels, status history, and dispatched notifications.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use storefront::lifecycle::OrderSystem;
use storefront::model::{
    CustomerInfo, LineItem, OrderCreate, OrderStatus, OrderUpdate, ProductCreate,
};
use storefront::notify::{NotificationDispatcher, NotifyError};
use storefront::order_actor::OrderError;
use tokio::sync::mpsc;

// --- Test notifiers ---

#[derive(Debug, PartialEq)]
enum Sent {
    Email { to: String, subject: String },
    WhatsApp { to: String, message: String },
}

struct RecordingNotifier {
    sent: mpsc::UnboundedSender<Sent>,
}

#[async_trait]
impl NotificationDispatcher for RecordingNotifier {
    async fn send_email(&self, to: &str, subject: &str, _body: &str) -> Result<(), NotifyError> {
        let _ = self.sent.send(Sent::Email {
            to: to.to_string(),
            subject: subject.to_string(),
        });
        Ok(())
    }

    async fn send_whatsapp(&self, to: &str, message: &str) -> Result<(), NotifyError> {
        let _ = self.sent.send(Sent::WhatsApp {
            to: to.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}

struct FailingNotifier;

#[async_trait]
impl NotificationDispatcher for FailingNotifier {
    async fn send_email(&self, _to: &str, _subject: &str, _body: &str) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("smtp unreachable".to_string()))
    }

    async fn send_whatsapp(&self, _to: &str, _message: &str) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("gateway unreachable".to_string()))
    }
}

// --- Helpers ---

fn customer() -> CustomerInfo {
    CustomerInfo {
        name: "Asha Patel".to_string(),
        email: Some("asha@example.com".to_string()),
        phone: Some("+919876543210".to_string()),
    }
}

fn item(product_id: &str, quantity: u32) -> LineItem {
    LineItem {
        product_id: product_id.to_string(),
        quantity,
        unit_price: 100.0,
        total: 100.0 * quantity as f64,
    }
}

fn order_params(order_number: &str, user_id: &str, items: Vec<LineItem>) -> OrderCreate {
    let subtotal: f64 = items.iter().map(|i| i.total).sum();
    OrderCreate {
        order_number: order_number.to_string(),
        user_id: user_id.to_string(),
        customer: customer(),
        items,
        subtotal,
        tax: 0.0,
        delivery_charges: 0.0,
        discount: 0.0,
        total: subtotal,
        payment_method: "upi".to_string(),
        payment_status: "pending".to_string(),
        invoice_number: None,
        status: None,
        estimated_delivery: None,
    }
}

async fn seed_product(system: &OrderSystem, stock: u32) -> String {
    system
        .product_client
        .create_product(ProductCreate {
            name: "Rasgulla Tin".to_string(),
            price: 100.0,
            stock,
        })
        .await
        .unwrap()
}

async fn stock(system: &OrderSystem, product_id: &str) -> u32 {
    system
        .product_client
        .check_stock(product_id.to_string())
        .await
        .unwrap()
}

async fn set_status(system: &OrderSystem, order_id: &str, status: OrderStatus) {
    system
        .order_client
        .update_order(
            order_id.to_string(),
            OrderUpdate {
                status: Some(status),
                ..Default::default()
            },
        )
        .await
        .unwrap();
}

// --- Scenarios ---

#[tokio::test]
async fn placing_an_order_reserves_stock() {
    let system = OrderSystem::new();
    let product_id = seed_product(&system, 10).await;

    let order_id = system
        .order_client
        .create_order(order_params("ORD-1", "user_1", vec![item(&product_id, 3)]))
        .await
        .unwrap();

    assert_eq!(stock(&system, &product_id).await, 7);

    let order = system.order_client.get_order(order_id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.status_history.len(), 1);
    assert_eq!(order.status_history[0].status, OrderStatus::Pending);
}

#[tokio::test]
async fn cancelling_restores_stock() {
    let system = OrderSystem::new();
    let product_id = seed_product(&system, 10).await;
    let order_id = system
        .order_client
        .create_order(order_params("ORD-1", "user_1", vec![item(&product_id, 3)]))
        .await
        .unwrap();

    set_status(&system, &order_id, OrderStatus::Cancelled).await;

    assert_eq!(stock(&system, &product_id).await, 10);
    let order = system.order_client.get_order(order_id).await.unwrap();
    assert_eq!(order.status_history.len(), 2);
    assert_eq!(order.status_history[1].status, OrderStatus::Cancelled);
    assert!(order.status_history[0].timestamp <= order.status_history[1].timestamp);
}

#[tokio::test]
async fn reactivating_re_reserves_stock() {
    let system = OrderSystem::new();
    let product_id = seed_product(&system, 10).await;
    let order_id = system
        .order_client
        .create_order(order_params("ORD-1", "user_1", vec![item(&product_id, 3)]))
        .await
        .unwrap();

    set_status(&system, &order_id, OrderStatus::Cancelled).await;
    set_status(&system, &order_id, OrderStatus::Confirmed).await;

    assert_eq!(stock(&system, &product_id).await, 7);
    let order = system.order_client.get_order(order_id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Confirmed);
    assert_eq!(order.status_history.len(), 3);
}

#[tokio::test]
async fn cancel_reactivate_cancel_is_symmetric() {
    let system = OrderSystem::new();
    let product_id = seed_product(&system, 10).await;
    let order_id = system
        .order_client
        .create_order(order_params("ORD-1", "user_1", vec![item(&product_id, 3)]))
        .await
        .unwrap();

    set_status(&system, &order_id, OrderStatus::Cancelled).await;
    let after_first_cancel = stock(&system, &product_id).await;
    set_status(&system, &order_id, OrderStatus::Confirmed).await;
    set_status(&system, &order_id, OrderStatus::Cancelled).await;

    // Net effect after the second cancel equals the first.
    assert_eq!(stock(&system, &product_id).await, after_first_cancel);
    assert_eq!(after_first_cancel, 10);
}

#[tokio::test]
async fn deleting_an_active_order_restores_stock() {
    let system = OrderSystem::new();
    let product_id = seed_product(&system, 10).await;
    let order_id = system
        .order_client
        .create_order(order_params("ORD-1", "user_1", vec![item(&product_id, 3)]))
        .await
        .unwrap();
    set_status(&system, &order_id, OrderStatus::Confirmed).await;

    system
        .order_client
        .delete_order(order_id.clone())
        .await
        .unwrap();

    assert_eq!(stock(&system, &product_id).await, 10);
    let err = system.order_client.get_order(order_id).await.unwrap_err();
    assert!(matches!(err, OrderError::NotFound(_)));
}

#[tokio::test]
async fn deleting_a_cancelled_order_restores_nothing() {
    let system = OrderSystem::new();
    let product_id = seed_product(&system, 10).await;
    let order_id = system
        .order_client
        .create_order(order_params("ORD-1", "user_1", vec![item(&product_id, 3)]))
        .await
        .unwrap();

    // Cancellation already gave the 3 units back.
    set_status(&system, &order_id, OrderStatus::Cancelled).await;
    system.order_client.delete_order(order_id).await.unwrap();

    assert_eq!(stock(&system, &product_id).await, 10);
}

#[tokio::test]
async fn unknown_products_do_not_block_the_order() {
    let system = OrderSystem::new();
    let product_id = seed_product(&system, 5).await;

    let order_id = system
        .order_client
        .create_order(order_params(
            "ORD-1",
            "user_1",
            vec![item(&product_id, 2), item("product_404", 4)],
        ))
        .await
        .unwrap();

    // The live product moved; the vanished one was skipped; the snapshot
    // still records both lines as sold.
    assert_eq!(stock(&system, &product_id).await, 3);
    let order = system.order_client.get_order(order_id).await.unwrap();
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[1].product_id, "product_404");
    assert_eq!(order.items[1].quantity, 4);
}

#[tokio::test]
async fn double_cancel_is_idempotent() {
    let system = OrderSystem::new();
    let product_id = seed_product(&system, 10).await;
    let order_id = system
        .order_client
        .create_order(order_params("ORD-1", "user_1", vec![item(&product_id, 3)]))
        .await
        .unwrap();

    set_status(&system, &order_id, OrderStatus::Cancelled).await;
    set_status(&system, &order_id, OrderStatus::Cancelled).await;

    // No second restoration, no extra history entry.
    assert_eq!(stock(&system, &product_id).await, 10);
    let order = system.order_client.get_order(order_id).await.unwrap();
    assert_eq!(order.status_history.len(), 2);
}

#[tokio::test]
async fn relabels_within_the_active_class_do_not_touch_stock() {
    let system = OrderSystem::new();
    let product_id = seed_product(&system, 10).await;
    let order_id = system
        .order_client
        .create_order(order_params("ORD-1", "user_1", vec![item(&product_id, 3)]))
        .await
        .unwrap();

    for status in [
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ] {
        set_status(&system, &order_id, status).await;
        assert_eq!(stock(&system, &product_id).await, 7);
    }

    let order = system.order_client.get_order(order_id).await.unwrap();
    assert_eq!(order.status_history.len(), 5);
    let statuses: Vec<OrderStatus> = order.status_history.iter().map(|e| e.status).collect();
    assert_eq!(
        statuses,
        vec![
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
        ]
    );
}

#[tokio::test]
async fn stock_never_goes_below_zero() {
    let system = OrderSystem::new();
    let product_id = seed_product(&system, 2).await;

    system
        .order_client
        .create_order(order_params("ORD-1", "user_1", vec![item(&product_id, 5)]))
        .await
        .unwrap();

    assert_eq!(stock(&system, &product_id).await, 0);
}

#[tokio::test]
async fn concurrent_orders_on_one_product_serialize() {
    let system = OrderSystem::new();
    let product_id = seed_product(&system, 8).await;

    let first = system.order_client.clone();
    let second = system.order_client.clone();
    let p1 = product_id.clone();
    let p2 = product_id.clone();
    let (a, b) = tokio::join!(
        tokio::spawn(
            async move { first.create_order(order_params("ORD-1", "user_1", vec![item(&p1, 5)])).await }
        ),
        tokio::spawn(
            async move { second.create_order(order_params("ORD-2", "user_2", vec![item(&p2, 5)])).await }
        ),
    );
    a.unwrap().unwrap();
    b.unwrap().unwrap();

    // 8 -> 3 -> 0 (second decrement clamped at the floor). Both orders exist.
    assert_eq!(stock(&system, &product_id).await, 0);
    assert_eq!(
        system.order_client.list_orders(None, 0, 10).await.unwrap().len(),
        2
    );
}

#[tokio::test]
async fn duplicate_order_numbers_conflict() {
    let system = OrderSystem::new();
    let product_id = seed_product(&system, 10).await;

    system
        .order_client
        .create_order(order_params("ORD-1", "user_1", vec![item(&product_id, 1)]))
        .await
        .unwrap();
    let err = system
        .order_client
        .create_order(order_params("ORD-1", "user_2", vec![item(&product_id, 1)]))
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::DuplicateOrderNumber("ORD-1".to_string()));
    // The rejected order must not have touched stock.
    assert_eq!(stock(&system, &product_id).await, 9);
}

#[tokio::test]
async fn empty_orders_are_rejected() {
    let system = OrderSystem::new();

    let err = system
        .order_client
        .create_order(order_params("ORD-1", "user_1", vec![]))
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::EmptyOrder);
    assert!(system
        .order_client
        .list_orders(None, 0, 10)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn payment_updates_do_not_append_history() {
    let system = OrderSystem::new();
    let product_id = seed_product(&system, 10).await;
    let order_id = system
        .order_client
        .create_order(order_params("ORD-1", "user_1", vec![item(&product_id, 3)]))
        .await
        .unwrap();

    let updated = system
        .order_client
        .update_order(
            order_id,
            OrderUpdate {
                payment_status: Some("paid".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.payment_status, "paid");
    assert_eq!(updated.status_history.len(), 1);
    assert_eq!(stock(&system, &product_id).await, 7);
}

#[tokio::test]
async fn listing_orders_filters_and_paginates_newest_first() {
    let system = OrderSystem::new();
    let product_id = seed_product(&system, 50).await;

    let mut ids = Vec::new();
    for (number, user) in [("ORD-1", "user_a"), ("ORD-2", "user_b"), ("ORD-3", "user_a")] {
        ids.push(
            system
                .order_client
                .create_order(order_params(number, user, vec![item(&product_id, 1)]))
                .await
                .unwrap(),
        );
        // Keep created_at strictly increasing.
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let for_a = system
        .order_client
        .list_orders(Some("user_a"), 0, 10)
        .await
        .unwrap();
    assert_eq!(
        for_a.iter().map(|o| o.id.as_str()).collect::<Vec<_>>(),
        vec![ids[2].as_str(), ids[0].as_str()]
    );

    let page = system.order_client.list_orders(None, 1, 1).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, ids[1]);

    let found = system
        .order_client
        .find_by_order_number("ORD-2")
        .await
        .unwrap();
    assert_eq!(found.unwrap().id, ids[1]);
}

#[tokio::test]
async fn notifications_follow_order_creation() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let system = OrderSystem::with_notifier(Arc::new(RecordingNotifier { sent: tx }));
    let product_id = seed_product(&system, 10).await;

    system
        .order_client
        .create_order(order_params("ORD-77", "user_1", vec![item(&product_id, 2)]))
        .await
        .unwrap();

    let email = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("email notification not dispatched")
        .unwrap();
    match email {
        Sent::Email { to, subject } => {
            assert_eq!(to, "asha@example.com");
            assert!(subject.contains("ORD-77"));
        }
        other => panic!("expected email first, got {:?}", other),
    }

    let whatsapp = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("whatsapp notification not dispatched")
        .unwrap();
    match whatsapp {
        Sent::WhatsApp { to, message } => {
            assert_eq!(to, "+919876543210");
            assert!(message.contains("ORD-77"));
        }
        other => panic!("expected whatsapp second, got {:?}", other),
    }
}

#[tokio::test]
async fn notification_failure_never_fails_the_order() {
    let system = OrderSystem::with_notifier(Arc::new(FailingNotifier));
    let product_id = seed_product(&system, 10).await;

    let order_id = system
        .order_client
        .create_order(order_params("ORD-1", "user_1", vec![item(&product_id, 3)]))
        .await
        .unwrap();

    // The order exists and stock moved even though every send failed.
    assert_eq!(stock(&system, &product_id).await, 7);
    assert!(system.order_client.get_order(order_id).await.is_ok());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn updating_a_missing_order_is_not_found() {
    let system = OrderSystem::new();

    let err = system
        .order_client
        .update_order(
            "order_404".to_string(),
            OrderUpdate {
                status: Some(OrderStatus::Cancelled),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::NotFound("order_404".to_string()));

    let err = system
        .order_client
        .delete_order("order_404".to_string())
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::NotFound("order_404".to_string()));
}
