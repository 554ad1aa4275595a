//! # Order Client
//!
//! The surface an HTTP layer would call for order operations. Lifecycle
//! logic (history, stock effects, notifications) lives in the Order actor's
//! hooks; this wrapper adds order-number uniqueness and listing semantics.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Place an order. Fails with [`OrderError::DuplicateOrderNumber`] when
    /// the human-facing number is already taken.
    #[instrument(skip(self, params))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<String, OrderError> {
        debug!(order_number = %params.order_number, "create_order called");
        if self
            .find_by_order_number(&params.order_number)
            .await?
            .is_some()
        {
            return Err(OrderError::DuplicateOrderNumber(params.order_number));
        }
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetch an order, failing with [`OrderError::NotFound`] when absent.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: String) -> Result<Order, OrderError> {
        self.get(id.clone()).await?.ok_or(OrderError::NotFound(id))
    }

    /// Apply an administrative partial update and return the new state.
    #[instrument(skip(self))]
    pub async fn update_order(&self, id: String, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Remove an order. Stock restoration for non-cancelled orders happens
    /// in the actor's delete hook before the record disappears.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: String) -> Result<(), OrderError> {
        self.delete(id).await
    }

    /// List orders, newest first, optionally restricted to one user.
    #[instrument(skip(self))]
    pub async fn list_orders(
        &self,
        user_id: Option<&str>,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list().await?;
        if let Some(user_id) = user_id {
            orders.retain(|o| o.user_id == user_id);
        }
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders.into_iter().skip(skip).take(limit).collect())
    }

    /// Look up an order by its human-facing number.
    #[instrument(skip(self))]
    pub async fn find_by_order_number(
        &self,
        order_number: &str,
    ) -> Result<Option<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(orders.into_iter().find(|o| o.order_number == order_number))
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> OrderError {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            // Entity hooks return typed OrderErrors; unwrap them from the
            // framework envelope so callers can match on the variant.
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(domain) => *domain,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::framework::ActorEntity;
    use crate::model::{CustomerInfo, LineItem, OrderStatus};

    fn params(order_number: &str, user_id: &str) -> OrderCreate {
        OrderCreate {
            order_number: order_number.into(),
            user_id: user_id.into(),
            customer: CustomerInfo {
                name: "Asha".into(),
                email: None,
                phone: None,
            },
            items: vec![LineItem {
                product_id: "product_1".into(),
                quantity: 1,
                unit_price: 50.0,
                total: 50.0,
            }],
            subtotal: 50.0,
            tax: 2.5,
            delivery_charges: 0.0,
            discount: 0.0,
            total: 52.5,
            payment_method: "upi".into(),
            payment_status: "pending".into(),
            invoice_number: None,
            status: None,
            estimated_delivery: None,
        }
    }

    fn order(id: &str, order_number: &str, user_id: &str) -> Order {
        Order::from_create_params(id.to_string(), params(order_number, user_id)).unwrap()
    }

    #[tokio::test]
    async fn create_checks_order_number_uniqueness() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_list()
            .return_ok(vec![order("order_1", "ORD-1001", "user_1")]);

        let client = OrderClient::new(mock.client());
        let err = client
            .create_order(params("ORD-1001", "user_2"))
            .await
            .unwrap_err();
        assert_eq!(err, OrderError::DuplicateOrderNumber("ORD-1001".into()));
        mock.verify();
    }

    #[tokio::test]
    async fn create_passes_through_when_number_is_free() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_list().return_ok(vec![]);
        mock.expect_create().return_ok("order_1".to_string());

        let client = OrderClient::new(mock.client());
        let id = client.create_order(params("ORD-1001", "user_1")).await.unwrap();
        assert_eq!(id, "order_1");
        mock.verify();
    }

    #[tokio::test]
    async fn entity_errors_come_back_typed() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_list().return_ok(vec![]);
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(OrderError::EmptyOrder)));

        let client = OrderClient::new(mock.client());
        let err = client
            .create_order(params("ORD-1001", "user_1"))
            .await
            .unwrap_err();
        assert_eq!(err, OrderError::EmptyOrder);
        mock.verify();
    }

    #[tokio::test]
    async fn get_order_maps_absent_to_not_found() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get().return_ok(None);

        let client = OrderClient::new(mock.client());
        let err = client.get_order("order_9".to_string()).await.unwrap_err();
        assert_eq!(err, OrderError::NotFound("order_9".into()));
        mock.verify();
    }

    #[tokio::test]
    async fn list_orders_filters_sorts_and_paginates() {
        let mut oldest = order("order_1", "ORD-1", "user_a");
        let mut middle = order("order_2", "ORD-2", "user_a");
        let mut newest = order("order_3", "ORD-3", "user_b");
        let base = chrono::Utc::now();
        oldest.created_at = base - chrono::Duration::seconds(20);
        middle.created_at = base - chrono::Duration::seconds(10);
        newest.created_at = base;

        let mut mock = MockClient::<Order>::new();
        mock.expect_list()
            .return_ok(vec![oldest.clone(), newest.clone(), middle.clone()]);

        let client = OrderClient::new(mock.client());
        let all = client.list_orders(None, 0, 10).await.unwrap();
        assert_eq!(
            all.iter().map(|o| o.id.as_str()).collect::<Vec<_>>(),
            vec!["order_3", "order_2", "order_1"]
        );

        mock.expect_list()
            .return_ok(vec![oldest.clone(), newest.clone(), middle.clone()]);
        let for_user_a = client.list_orders(Some("user_a"), 0, 10).await.unwrap();
        assert_eq!(
            for_user_a.iter().map(|o| o.id.as_str()).collect::<Vec<_>>(),
            vec!["order_2", "order_1"]
        );

        mock.expect_list()
            .return_ok(vec![oldest, newest, middle]);
        let page = client.list_orders(None, 1, 1).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, "order_2");
        mock.verify();
    }

    #[tokio::test]
    async fn update_returns_the_new_state() {
        let mut updated = order("order_1", "ORD-1", "user_a");
        updated.status = OrderStatus::Confirmed;

        let mut mock = MockClient::<Order>::new();
        mock.expect_update().return_ok(updated);

        let client = OrderClient::new(mock.client());
        let result = client
            .update_order(
                "order_1".to_string(),
                OrderUpdate {
                    status: Some(OrderStatus::Confirmed),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(result.status, OrderStatus::Confirmed);
        mock.verify();
    }
}
