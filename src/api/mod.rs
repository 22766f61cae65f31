// ============================================================================
// API Gateway
// ============================================================================
//
// Stateless JSON-over-HTTP mapping onto the domain services. Handlers parse
// the body into a command, call one service, and map the result to a status
// code. No sessions, no cookies.
//
// ============================================================================

mod auth;
mod error;
mod menu;
mod order;

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::domain::auth::{AuthService, CredentialHasher};
use crate::domain::menu::MenuService;
use crate::domain::order::{OrderService, VerificationService};
use crate::metrics::Metrics;
use crate::store::Store;

use error::ApiError;

pub struct AppState {
    pub menu: MenuService,
    pub orders: OrderService,
    pub verification: VerificationService,
    pub auth: AuthService,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, hasher: CredentialHasher, metrics: Arc<Metrics>) -> Self {
        Self {
            menu: MenuService::new(store.clone()),
            orders: OrderService::new(store.clone()),
            verification: VerificationService::new(store.clone()),
            auth: AuthService::new(store, hasher),
            metrics,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
}

/// Route templates served by `configure`, listed by GET /routes.
pub const ROUTES: &[RouteInfo] = &[
    RouteInfo { method: "GET", path: "/menu" },
    RouteInfo { method: "POST", path: "/menu" },
    RouteInfo { method: "POST", path: "/order" },
    RouteInfo { method: "POST", path: "/verify-code" },
    RouteInfo { method: "POST", path: "/login" },
    RouteInfo { method: "POST", path: "/register" },
    RouteInfo { method: "GET", path: "/routes" },
];

/// Malformed or mistyped JSON becomes a structured 400 instead of actix's
/// plain-text default.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| ApiError::MalformedPayload(err.to_string()).into())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::resource("/menu")
                .route(web::get().to(menu::list_items))
                .route(web::post().to(menu::add_item)),
        )
        .route("/order", web::post().to(order::place_order))
        .route("/verify-code", web::post().to(order::verify_code))
        .route("/login", web::post().to(auth::login))
        .route("/register", web::post().to(auth::register))
        .route("/routes", web::get().to(list_routes));
}

async fn list_routes() -> HttpResponse {
    HttpResponse::Ok().json(ROUTES)
}

// ============================================================================
// Unit Tests
// ============================================================================
