//! Demo driver for the storefront backend.
//!
//! Walks one order through its whole lifecycle – placement, cancellation,
//! reactivation, deletion – and logs the product stock level after each
//! step so the inventory bookkeeping is visible.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use storefront::lifecycle::{setup_tracing, OrderSystem};
use storefront::model::{
    CustomerInfo, LineItem, OrderCreate, OrderStatus, OrderUpdate, ProductCreate, UserCreate,
};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting storefront order system");
    let system = OrderSystem::new();

    // Seed a customer and two products.
    let user_id = system
        .user_client
        .create_user(UserCreate {
            name: "Asha Patel".to_string(),
            email: "asha@example.com".to_string(),
            phone: Some("+919876543210".to_string()),
            role: "customer".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(user_id = %user_id, "User registered");

    let barfi_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Kaju Barfi 500g".to_string(),
            price: 450.0,
            stock: 10,
        })
        .await
        .map_err(|e| e.to_string())?;
    let peda_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Kesar Peda Box".to_string(),
            price: 300.0,
            stock: 25,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(barfi_id = %barfi_id, peda_id = %peda_id, "Products created");

    // Place an order and walk it through the lifecycle.
    let order_params = OrderCreate {
        order_number: "ORD-1001".to_string(),
        user_id: user_id.clone(),
        customer: CustomerInfo {
            name: "Asha Patel".to_string(),
            email: Some("asha@example.com".to_string()),
            phone: Some("+919876543210".to_string()),
        },
        items: vec![
            LineItem {
                product_id: barfi_id.clone(),
                quantity: 2,
                unit_price: 450.0,
                total: 900.0,
            },
            LineItem {
                product_id: peda_id.clone(),
                quantity: 3,
                unit_price: 300.0,
                total: 900.0,
            },
        ],
        subtotal: 1800.0,
        tax: 90.0,
        delivery_charges: 50.0,
        discount: 0.0,
        total: 1940.0,
        payment_method: "upi".to_string(),
        payment_status: "pending".to_string(),
        invoice_number: None,
        status: None,
        estimated_delivery: Some("2 days".to_string()),
    };

    let span = tracing::info_span!("order_lifecycle");
    async {
        let order_id = system
            .order_client
            .create_order(order_params)
            .await
            .map_err(|e| e.to_string())?;
        log_stock(&system, &barfi_id, &peda_id, "after placement").await;

        system
            .order_client
            .update_order(
                order_id.clone(),
                OrderUpdate {
                    status: Some(OrderStatus::Cancelled),
                    ..Default::default()
                },
            )
            .await
            .map_err(|e| e.to_string())?;
        log_stock(&system, &barfi_id, &peda_id, "after cancellation").await;

        system
            .order_client
            .update_order(
                order_id.clone(),
                OrderUpdate {
                    status: Some(OrderStatus::Confirmed),
                    ..Default::default()
                },
            )
            .await
            .map_err(|e| e.to_string())?;
        log_stock(&system, &barfi_id, &peda_id, "after reactivation").await;

        let order = system
            .order_client
            .get_order(order_id.clone())
            .await
            .map_err(|e| e.to_string())?;
        info!(
            order_id = %order.id,
            status = %order.status,
            history_len = order.status_history.len(),
            "Order state before deletion"
        );

        system
            .order_client
            .delete_order(order_id)
            .await
            .map_err(|e| e.to_string())?;
        log_stock(&system, &barfi_id, &peda_id, "after deletion").await;

        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;
    info!("Demo completed");
    Ok(())
}

async fn log_stock(system: &OrderSystem, barfi_id: &str, peda_id: &str, moment: &str) {
    let barfi = system.product_client.check_stock(barfi_id.to_string()).await;
    let peda = system.product_client.check_stock(peda_id.to_string()).await;
    info!(?barfi, ?peda, moment, "Stock levels");
}
