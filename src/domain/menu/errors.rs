use crate::store::StoreError;

// ============================================================================
// Menu Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("Invalid item quantity: {0}")]
    InvalidQuantity(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl MenuError {
    pub fn is_validation(&self) -> bool {
        !matches!(self, MenuError::Store(_))
    }
}
