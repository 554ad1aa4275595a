use crate::clients::{OrderClient, ProductClient, UserClient};
use crate::inventory::InventoryAdjuster;
use crate::notify::{LogNotifier, NotificationDispatcher};
use crate::order_actor::OrderContext;
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the shop's actors.
///
/// `OrderSystem` creates the User, Product, and Order actors, wires the
/// Order actor's dependencies (inventory path into the product store, the
/// notification dispatcher), spawns each actor in its own task, and
/// coordinates graceful shutdown.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
/// let product_id = system.product_client.create_product(product_data).await?;
/// let order_id = system.order_client.create_order(order_data).await?;
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Order actor.
    pub order_client: OrderClient,

    /// Client for interacting with the Product actor.
    pub product_client: ProductClient,

    /// Client for interacting with the User actor.
    pub user_client: UserClient,

    /// Task handles for all running actors, awaited on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts the system with the logging notification dispatcher.
    pub fn new() -> Self {
        Self::with_notifier(Arc::new(LogNotifier))
    }

    /// Starts the system with a custom notification dispatcher (tests swap
    /// in recording or failing dispatchers here).
    pub fn with_notifier(notifier: Arc<dyn NotificationDispatcher>) -> Self {
        // 1. Create actors (no dependencies yet).
        let (user_actor, user_client) = crate::user_actor::new();
        let (product_actor, product_client) = crate::product_actor::new();
        let (order_actor, order_client) = crate::order_actor::new();

        // 2. Start actors with injected context. User and Product stand
        // alone; the Order actor gets its path into the product store and
        // the notifier.
        let user_handle = tokio::spawn(user_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        let context = OrderContext {
            inventory: InventoryAdjuster::new(product_client.clone()),
            notifier,
        };
        let order_handle = tokio::spawn(order_actor.run(context));

        Self {
            order_client,
            product_client,
            user_client,
            handles: vec![user_handle, product_handle, order_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes their channels; each actor drains its
    /// mailbox and exits. The Order actor's context holds a clone of the
    /// product client, so the product actor finishes only after the order
    /// actor has released it – the dependency graph is acyclic, so this
    /// resolves without deadlock.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.user_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
