use std::sync::Arc;

use crate::store::Store;

use super::commands::VerifyCode;
use super::errors::OrderError;
use super::value_objects::VerificationOutcome;

// ============================================================================
// Verification Service
// ============================================================================
//
// Match only when an order exists with exactly this (order_id, code) pair.
// Codes do not expire and stay valid after a successful check. There is no
// attempt limit; this is a pickup convenience, not a security control.
//
// ============================================================================

#[derive(Clone)]
pub struct VerificationService {
    store: Arc<dyn Store>,
}

impl VerificationService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn verify_code(&self, command: VerifyCode) -> Result<VerificationOutcome, OrderError> {
        let order_id = command.order_id.ok_or(OrderError::MissingField("order_id"))?;
        let code = command.code.ok_or(OrderError::MissingField("code"))?;
        if code.is_empty() {
            return Err(OrderError::EmptyField("code"));
        }

        let outcome = match self.store.find_order_by_code(order_id, &code).await? {
            Some(_) => VerificationOutcome::Match,
            None => VerificationOutcome::NoMatch,
        };

        tracing::info!(order_id, outcome = outcome.as_label(), "Verification code checked");

        Ok(outcome)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
