use crate::store::StoreError;

// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("Order items cannot be empty")]
    EmptyItems,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl OrderError {
    /// Whether the caller sent an incomplete request (as opposed to the
    /// store failing underneath us).
    pub fn is_validation(&self) -> bool {
        !matches!(self, OrderError::Store(_))
    }
}
