// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// One subdirectory per service, each with:
// - Commands (request payloads, fields optional until validated)
// - Errors
// - Service implementation over an injected `Store`
//
// Transport concerns (JSON, status codes) live in `api`, not here.
//
// ============================================================================

pub mod menu;
pub mod order;
pub mod auth;
