// ============================================================================
// Order Domain
// ============================================================================
//
// - Value objects (VerificationCode, VerificationOutcome)
// - Commands (PlaceOrder, VerifyCode)
// - Errors (OrderError)
// - OrderService: places orders and issues codes
// - VerificationService: checks (order id, code) pairs
//
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod errors;
pub mod service;
pub mod verification;

pub use value_objects::*;
pub use commands::*;
pub use errors::*;
pub use service::*;
pub use verification::*;
