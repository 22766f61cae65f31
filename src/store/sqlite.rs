use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::domain::order::VerificationCode;
use crate::models::{MenuItem, NewMenuItem, NewOrder, NewUser, Order, User};

use super::{Store, StoreError};

// ============================================================================
// SQLite Store
// ============================================================================
//
// Embedded single-file store. Schema creation is idempotent and runs on every
// connect; it never drops or rewrites existing data.
//
// Order items are stored as a JSON array so ordering and duplicates survive
// the round trip exactly.
//
// ============================================================================

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS menu_items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        quantity INTEGER NOT NULL CHECK (quantity >= 0)
    )",
    "CREATE TABLE IF NOT EXISTS orders (
        order_id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id TEXT NOT NULL,
        items TEXT NOT NULL,
        code TEXT NOT NULL CHECK (length(code) = 4),
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    )",
];

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    order_id: i64,
    user_id: String,
    items: String,
    code: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = StoreError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let items: Vec<i64> = serde_json::from_str(&row.items)?;
        let code = VerificationCode::parse(&row.code)
            .map_err(|e| StoreError::Corrupt(format!("order {}: {}", row.order_id, e)))?;

        Ok(Order {
            order_id: row.order_id,
            user_id: row.user_id,
            items,
            code,
            created_at: row.created_at,
        })
    }
}

impl SqliteStore {
    /// Open (creating if missing) the database at `database_url` and ensure
    /// the schema exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;

        tracing::info!(database_url = %database_url, max_connections, "Connected to SQLite store");
        Ok(store)
    }

    /// Private in-memory database. A single pinned connection keeps the
    /// database alive for the lifetime of the pool.
    #[cfg(test)]
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        tracing::debug!(tables = SCHEMA.len(), "Schema ensured");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, StoreError> {
        let items = sqlx::query_as::<_, MenuItem>(
            "SELECT id, name, quantity, description FROM menu_items ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn insert_menu_item(&self, item: NewMenuItem) -> Result<MenuItem, StoreError> {
        let created = sqlx::query_as::<_, MenuItem>(
            "INSERT INTO menu_items (name, description, quantity) VALUES (?, ?, ?) \
             RETURNING id, name, quantity, description",
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.quantity)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn count_menu_items(&self) -> Result<i64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM menu_items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn insert_order(&self, order: NewOrder) -> Result<Order, StoreError> {
        let items = serde_json::to_string(&order.items)?;

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, OrderRow>(
            "INSERT INTO orders (user_id, items, code, created_at) VALUES (?, ?, ?, ?) \
             RETURNING order_id, user_id, items, code, created_at",
        )
        .bind(&order.user_id)
        .bind(&items)
        .bind(order.code.as_str())
        .bind(order.created_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Order::try_from(row)
    }

    async fn find_order_by_code(
        &self,
        order_id: i64,
        code: &str,
    ) -> Result<Option<Order>, StoreError> {
        let row = sqlx::query_as::<_, OrderRow>(
            "SELECT order_id, user_id, items, code, created_at FROM orders \
             WHERE order_id = ? AND code = ?",
        )
        .bind(order_id)
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Order::try_from).transpose()
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash) VALUES (?, ?) \
             RETURNING id, email, password_hash",
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                StoreError::UniqueViolation(format!("users.email = {}", user.email))
            }
            other => StoreError::Database(other),
        })
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
