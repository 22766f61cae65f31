use std::sync::Arc;

use chrono::Utc;

use crate::models::{NewOrder, Order};
use crate::store::Store;

use super::commands::PlaceOrder;
use super::errors::OrderError;
use super::value_objects::VerificationCode;

// ============================================================================
// Order Service
// ============================================================================
//
// Orchestrates: PlaceOrder → validation → code generation → Store
//
// Item references are not checked against the menu and stock is never
// decremented; an order only records what was asked for.
//
// ============================================================================

#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn Store>,
}

impl OrderService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Validate the command, issue a fresh code and persist the order.
    pub async fn place_order(&self, command: PlaceOrder) -> Result<Order, OrderError> {
        let user_id = command.user_id.ok_or(OrderError::MissingField("user_id"))?;
        if user_id.trim().is_empty() {
            return Err(OrderError::EmptyField("user_id"));
        }

        let items = command.items.ok_or(OrderError::MissingField("items"))?;
        if items.is_empty() {
            return Err(OrderError::EmptyItems);
        }

        let new_order = NewOrder {
            user_id,
            items,
            code: VerificationCode::generate(),
            created_at: Utc::now(),
        };

        let order = self.store.insert_order(new_order).await?;

        tracing::info!(
            order_id = order.order_id,
            user_id = %order.user_id,
            item_count = order.items.len(),
            "Order placed"
        );

        Ok(order)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{test_store, SqliteStore, UnavailableStore};
    use std::collections::HashSet;

    fn place(user_id: &str, items: Vec<i64>) -> PlaceOrder {
        PlaceOrder {
            user_id: Some(user_id.to_string()),
            items: Some(items),
        }
    }

    #[tokio::test]
    async fn test_place_order_returns_four_digit_code() {
        let service = OrderService::new(test_store().await);

        let order = service.place_order(place("u1", vec![1, 2])).await.unwrap();

        assert_eq!(order.user_id, "u1");
        assert_eq!(order.items, vec![1, 2]);
        assert_eq!(order.code.as_str().len(), 4);
        assert!(order.code.as_str().bytes().all(|b| b.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_order_ids_are_unique() {
        let service = OrderService::new(test_store().await);

        let mut ids = HashSet::new();
        for i in 0..25 {
            let order = service.place_order(place("u1", vec![i])).await.unwrap();
            assert!(ids.insert(order.order_id), "duplicate order id {}", order.order_id);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_orders_on_pooled_store() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("orders.db").display());
        let store: Arc<dyn Store> = Arc::new(SqliteStore::connect(&url, 5).await.unwrap());
        let service = OrderService::new(store.clone());

        let handles: Vec<_> = (0..200)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    service.place_order(place(&format!("u{}", i % 7), vec![i, i])).await
                })
            })
            .collect();

        let mut orders = Vec::new();
        for handle in handles {
            orders.push(handle.await.unwrap().unwrap());
        }

        let ids: HashSet<_> = orders.iter().map(|o| o.order_id).collect();
        assert_eq!(ids.len(), orders.len());

        for order in &orders {
            let found = store
                .find_order_by_code(order.order_id, order.code.as_str())
                .await
                .unwrap()
                .expect("every placed order is readable with its code");
            assert_eq!(&found, order);
        }
    }

    #[tokio::test]
    async fn test_place_order_with_empty_items_fails() {
        let service = OrderService::new(test_store().await);

        let result = service.place_order(place("u1", vec![])).await;
        assert!(matches!(result, Err(OrderError::EmptyItems)));
    }

    #[tokio::test]
    async fn test_place_order_with_missing_fields_fails() {
        let service = OrderService::new(test_store().await);

        let no_user = PlaceOrder {
            user_id: None,
            items: Some(vec![1]),
        };
        assert!(matches!(
            service.place_order(no_user).await,
            Err(OrderError::MissingField("user_id"))
        ));

        let no_items = PlaceOrder {
            user_id: Some("u1".to_string()),
            items: None,
        };
        assert!(matches!(
            service.place_order(no_items).await,
            Err(OrderError::MissingField("items"))
        ));

        let blank_user = place("   ", vec![1]);
        let err = service.place_order(blank_user).await.unwrap_err();
        assert!(matches!(err, OrderError::EmptyField("user_id")));
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_unknown_item_references_are_accepted() {
        let service = OrderService::new(test_store().await);

        let order = service.place_order(place("u1", vec![999, 999])).await.unwrap();
        assert_eq!(order.items, vec![999, 999]);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let service = OrderService::new(Arc::new(UnavailableStore));

        let err = service.place_order(place("u1", vec![1])).await.unwrap_err();
        assert!(matches!(err, OrderError::Store(_)));
        assert!(!err.is_validation());
    }
}
