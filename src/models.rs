use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::order::VerificationCode;

// ============================================================================
// Persisted Records
// ============================================================================
//
// Rows owned by the durable store. Services never cache these between calls;
// every operation goes back through the store.
//
// ============================================================================

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub order_id: i64,
    pub user_id: String,
    pub items: Vec<i64>,
    pub code: VerificationCode,
    pub created_at: DateTime<Utc>,
}

/// Credential-based user. The hash is an argon2id PHC string and is never
/// serialized.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

// ============================================================================
// Insert payloads (no store-assigned fields yet)
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub quantity: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewOrder {
    pub user_id: String,
    pub items: Vec<i64>,
    pub code: VerificationCode,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_serializes_with_wire_field_names() {
        let item = MenuItem {
            id: 1,
            name: "Pizza".to_string(),
            quantity: 5,
            description: "Cheese Pizza".to_string(),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Pizza");
        assert_eq!(json["quantity"], 5);
        assert_eq!(json["description"], "Cheese Pizza");
    }

    #[test]
    fn test_user_never_serializes_password_hash() {
        let user = User {
            id: 7,
            email: "a@b.com".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("a@b.com"));
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("secret"));
    }
}
