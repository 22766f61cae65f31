use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddMenuItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
}
