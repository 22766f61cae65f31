// ============================================================================
// Durable Store
// ============================================================================
//
// Storage capability injected into every service. Services only see the
// `Store` trait; the SQLite implementation is wired up in `main`.
//
// ============================================================================

mod sqlite;

use async_trait::async_trait;

use crate::models::{MenuItem, NewMenuItem, NewOrder, NewUser, Order, User};

pub use sqlite::SqliteStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to encode or decode stored value: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Stored record is corrupt: {0}")]
    Corrupt(String),
}

#[async_trait]
pub trait Store: Send + Sync {
    /// All menu items in store iteration order.
    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, StoreError>;

    async fn insert_menu_item(&self, item: NewMenuItem) -> Result<MenuItem, StoreError>;

    async fn count_menu_items(&self) -> Result<i64, StoreError>;

    /// Insert an order and its code in a single transaction.
    async fn insert_order(&self, order: NewOrder) -> Result<Order, StoreError>;

    /// Equality lookup on both `order_id` and `code`.
    async fn find_order_by_code(
        &self,
        order_id: i64,
        code: &str,
    ) -> Result<Option<Order>, StoreError>;

    /// Fails with `UniqueViolation` when the email is already registered.
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

#[cfg(test)]
pub(crate) async fn test_store() -> std::sync::Arc<dyn Store> {
    std::sync::Arc::new(SqliteStore::in_memory().await.expect("in-memory store"))
}

/// Store whose every call fails, for exercising the failure path.
#[cfg(test)]
pub(crate) struct UnavailableStore;

#[cfg(test)]
#[async_trait]
impl Store for UnavailableStore {
    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, StoreError> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn insert_menu_item(&self, _item: NewMenuItem) -> Result<MenuItem, StoreError> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn count_menu_items(&self) -> Result<i64, StoreError> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn insert_order(&self, _order: NewOrder) -> Result<Order, StoreError> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn find_order_by_code(
        &self,
        _order_id: i64,
        _code: &str,
    ) -> Result<Option<Order>, StoreError> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn insert_user(&self, _user: NewUser) -> Result<User, StoreError> {
        Err(sqlx::Error::PoolClosed.into())
    }

    async fn find_user_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Err(sqlx::Error::PoolClosed.into())
    }
}
