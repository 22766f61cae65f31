use std::sync::Arc;

use crate::models::{MenuItem, NewMenuItem};
use crate::store::Store;

use super::commands::AddMenuItem;
use super::errors::MenuError;

/// Demo entries inserted into an empty menu on first startup.
pub const DEMO_MENU: &[(&str, &str, i64)] = &[
    ("Pizza", "Cheese Pizza", 5),
    ("Pasta", "Spaghetti Bolognese", 10),
];

#[derive(Clone)]
pub struct MenuService {
    store: Arc<dyn Store>,
}

impl MenuService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Every item in store order. No pagination.
    pub async fn list_items(&self) -> Result<Vec<MenuItem>, MenuError> {
        Ok(self.store.list_menu_items().await?)
    }

    pub async fn add_item(&self, command: AddMenuItem) -> Result<MenuItem, MenuError> {
        let name = required_text(command.name, "name")?;
        let description = required_text(command.description, "description")?;
        let quantity = command.quantity.ok_or(MenuError::MissingField("quantity"))?;
        if quantity < 0 {
            return Err(MenuError::InvalidQuantity(quantity));
        }

        let item = self
            .store
            .insert_menu_item(NewMenuItem {
                name,
                description,
                quantity,
            })
            .await?;

        tracing::info!(menu_item_id = item.id, name = %item.name, quantity = item.quantity, "Menu item added");

        Ok(item)
    }

    /// Insert `entries` only when the menu is empty. Returns how many items
    /// were added.
    pub async fn seed_if_empty(&self, entries: &[(&str, &str, i64)]) -> Result<usize, MenuError> {
        if self.store.count_menu_items().await? > 0 {
            tracing::debug!("Menu already populated, skipping seed");
            return Ok(0);
        }

        for (name, description, quantity) in entries {
            self.store
                .insert_menu_item(NewMenuItem {
                    name: name.to_string(),
                    description: description.to_string(),
                    quantity: *quantity,
                })
                .await?;
        }

        tracing::info!(count = entries.len(), "Seeded empty menu");
        Ok(entries.len())
    }
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, MenuError> {
    let value = value.ok_or(MenuError::MissingField(field))?;
    if value.trim().is_empty() {
        return Err(MenuError::EmptyField(field));
    }
    Ok(value)
}

// ============================================================================
// Unit Tests
// ============================================================================
